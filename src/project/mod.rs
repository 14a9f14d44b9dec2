//! Corpus loading: manifests, raw documents and Markdown rendering.
//!
//! Everything here sits in front of the resolver. It turns a corpus
//! (on disk or in memory) into [`LoadedCorpus`] and supplies the
//! [`Render`] function used to materialize summaries and details.

mod config;
mod document;
mod loader;
mod render;
mod source;

pub use config::SourceConfig;
pub use document::{RawDocument, parse_manifest};
pub use loader::{LoadedCorpus, RawDocuments, load_corpus};
pub use render::{MarkdownRenderer, Render};
pub use source::{DocumentSource, FsSource, MemorySource};
