//! # colldoc
//!
//! Relationship resolution and search indexing for the documentation of a
//! collections library.
//!
//! A corpus describes collections (list, map, set, ...), the methods they
//! may implement, and interfaces grouping methods. This crate computes, for
//! every collection, the methods it implements with their provenance, and
//! for every method, how each collection supports it. It then derives a
//! deduplicated search index over both.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! catalog  → End-to-end build, the finished outputs
//!   ↓
//! search   → Search index assembly
//!   ↓
//! hir      → Registry, collection resolution, cross-index
//!   ↓
//! project  → Document sources, loading, Markdown rendering
//!   ↓
//! base     → Primitives (Ref, DocKind, MixinRef, text normalization)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use colldoc::{Catalog, FsSource, MarkdownRenderer, SourceConfig};
//!
//! let source = FsSource::new(SourceConfig::new("docs"));
//! let catalog = Catalog::build(&source, &MarkdownRenderer::new())?;
//! println!("{}", serde_json::to_string(&catalog.search)?);
//! ```

/// Foundation types: Ref, DocKind, MixinRef, text helpers
pub mod base;

/// Errors aborting a build
pub mod error;

/// Corpus loading and rendering
pub mod project;

/// Semantic model: registry, resolution, cross-index
pub mod hir;

/// Search index assembly
pub mod search;

/// End-to-end catalog build
pub mod catalog;

pub use base::{DocKind, MixinRef, Ref};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use project::{DocumentSource, FsSource, MarkdownRenderer, MemorySource, Render, SourceConfig};
