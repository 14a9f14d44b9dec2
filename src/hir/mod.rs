//! High-level IR: the semantic model of a documentation corpus.
//!
//! ## Passes (dependency order)
//!
//! ```text
//! input        → typed front matter with documented defaults
//!   ↓
//! registry     → methods and their version trees
//!   ↓
//! decl         → declared collections (method refs validated) and interfaces
//!   ↓
//! resolve      → pass 1: per-collection implementation maps with provenance
//!   ↓
//! cross_index  → pass 2: per-method collection lists with speed notes
//! ```

mod cross_index;
mod decl;
pub mod input;
mod registry;
mod resolve;

pub use cross_index::{
    CollectionSupport, CollectionsByMethod, ResolvedMethod, ResolvedMethods, Support,
    collections_by_method, method_collections, resolve_methods,
};
pub use decl::{Collection, Collections, Interface, Interfaces, build_collections, build_interfaces};
pub use registry::{Method, MethodRegistry, PerformanceHints, VersionedMethod};
pub use resolve::{
    CollectionResolver, Implementation, ImplementationMap, MethodIndexEntry, MethodUse,
    ResolvedCollection, ResolvedCollections, resolve_collections,
};
