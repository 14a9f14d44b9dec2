//! Search index: a flat list of collection and method records.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: resolved collections and methods in, records out
//! 2. **Order-stable**: collections first, then methods, each group in
//!    declaration order
//! 3. **Deduplicated**: a method alias shared by many collections yields one
//!    record

mod index;

pub use index::{CollectionEntry, MethodEntry, SearchEntry, assemble, collection_entries, method_entries};
