//! Document sources: where manifests and documents come from.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::config::SourceConfig;
use super::document::{RawDocument, parse_manifest};
use crate::base::{DocKind, Ref};
use crate::error::{Error, Result};

/// Supplies manifests and raw documents to the loader.
///
/// Implementations must be `Sync`: documents of one kind are loaded in
/// parallel.
pub trait DocumentSource: Sync {
    /// The refs of `kind`, in manifest order.
    fn list_refs(&self, kind: DocKind) -> Result<Vec<Ref>>;

    /// Load and parse the document for `doc` of `kind`.
    fn load(&self, kind: DocKind, doc: &Ref) -> Result<RawDocument>;
}

// ============================================================================
// FILESYSTEM SOURCE
// ============================================================================

/// Reads a corpus laid out on disk as described by a [`SourceConfig`].
#[derive(Clone, Debug, Default)]
pub struct FsSource {
    config: SourceConfig,
}

impl FsSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl DocumentSource for FsSource {
    fn list_refs(&self, kind: DocKind) -> Result<Vec<Ref>> {
        let path = self.config.manifest_path(kind);
        let text = std::fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        parse_manifest(&text).map_err(|source| Error::Manifest { kind, path, source })
    }

    fn load(&self, kind: DocKind, doc: &Ref) -> Result<RawDocument> {
        let path = self.config.document_path(kind, doc);
        debug!("Loading {} '{}' from {}", kind, doc, path.display());
        let text = std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })?;
        RawDocument::parse(kind, doc, &text)
    }
}

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// A corpus held in memory.
///
/// Documents are added with [`MemorySource::with_document`], which also lists
/// the ref in the manifest of its kind. Useful for tests and for embedding
/// the resolver behind another storage layer.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    manifests: FxHashMap<DocKind, Vec<Ref>>,
    documents: FxHashMap<(DocKind, Ref), String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and list its ref (once) in the manifest.
    pub fn with_document(mut self, kind: DocKind, doc: &str, text: impl Into<String>) -> Self {
        self.insert(kind, doc, text);
        self
    }

    /// List a ref in the manifest without providing its document.
    pub fn with_listed(mut self, kind: DocKind, doc: &str) -> Self {
        self.list(kind, Ref::new(doc));
        self
    }

    /// Add a document and list its ref (once) in the manifest.
    pub fn insert(&mut self, kind: DocKind, doc: &str, text: impl Into<String>) {
        let doc = Ref::new(doc);
        self.list(kind, doc.clone());
        self.documents.insert((kind, doc), text.into());
    }

    fn list(&mut self, kind: DocKind, doc: Ref) {
        let refs = self.manifests.entry(kind).or_default();
        if !refs.contains(&doc) {
            refs.push(doc);
        }
    }
}

impl DocumentSource for MemorySource {
    fn list_refs(&self, kind: DocKind) -> Result<Vec<Ref>> {
        Ok(self.manifests.get(&kind).cloned().unwrap_or_default())
    }

    fn load(&self, kind: DocKind, doc: &Ref) -> Result<RawDocument> {
        let text = self
            .documents
            .get(&(kind, doc.clone()))
            .ok_or_else(|| Error::MissingDocument {
                kind,
                doc: doc.clone(),
            })?;
        RawDocument::parse(kind, doc, text)
    }
}
