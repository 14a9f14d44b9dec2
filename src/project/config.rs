//! On-disk corpus layout.

use std::path::{Path, PathBuf};

use crate::base::DocKind;

/// Where the manifests and documents of a corpus live.
///
/// Defaults follow the conventional layout:
///
/// ```text
/// <root>/interfaces.yaml   <root>/interface/<ref>.md
/// <root>/collections.yaml  <root>/collection/<ref>.md
/// <root>/methods.yaml      <root>/method/<ref>.md
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    root: PathBuf,
    interfaces_manifest: PathBuf,
    collections_manifest: PathBuf,
    methods_manifest: PathBuf,
    interface_dir: PathBuf,
    collection_dir: PathBuf,
    method_dir: PathBuf,
    extension: String,
}

impl SourceConfig {
    /// Create a config rooted at `root` with the default layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            interfaces_manifest: DocKind::Interface.manifest_name().into(),
            collections_manifest: DocKind::Collection.manifest_name().into(),
            methods_manifest: DocKind::Method.manifest_name().into(),
            interface_dir: DocKind::Interface.as_str().into(),
            collection_dir: DocKind::Collection.as_str().into(),
            method_dir: DocKind::Method.as_str().into(),
            extension: "md".to_string(),
        }
    }

    /// Override the manifest path (relative to the root) for a kind.
    pub fn with_manifest(mut self, kind: DocKind, path: impl Into<PathBuf>) -> Self {
        *self.manifest_slot(kind) = path.into();
        self
    }

    /// Override the document directory (relative to the root) for a kind.
    pub fn with_dir(mut self, kind: DocKind, dir: impl Into<PathBuf>) -> Self {
        *self.dir_slot(kind) = dir.into();
        self
    }

    /// Override the document file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the manifest listing refs of `kind`.
    pub fn manifest_path(&self, kind: DocKind) -> PathBuf {
        let manifest = match kind {
            DocKind::Interface => &self.interfaces_manifest,
            DocKind::Collection => &self.collections_manifest,
            DocKind::Method => &self.methods_manifest,
        };
        self.root.join(manifest)
    }

    /// Full path of the document for `doc` of `kind`.
    pub fn document_path(&self, kind: DocKind, doc: &str) -> PathBuf {
        let dir = match kind {
            DocKind::Interface => &self.interface_dir,
            DocKind::Collection => &self.collection_dir,
            DocKind::Method => &self.method_dir,
        };
        self.root
            .join(dir)
            .join(format!("{}.{}", doc, self.extension))
    }

    fn manifest_slot(&mut self, kind: DocKind) -> &mut PathBuf {
        match kind {
            DocKind::Interface => &mut self.interfaces_manifest,
            DocKind::Collection => &mut self.collections_manifest,
            DocKind::Method => &mut self.methods_manifest,
        }
    }

    fn dir_slot(&mut self, kind: DocKind) -> &mut PathBuf {
        match kind {
            DocKind::Interface => &mut self.interface_dir,
            DocKind::Collection => &mut self.collection_dir,
            DocKind::Method => &mut self.method_dir,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
