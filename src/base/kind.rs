//! Document kinds.

use std::fmt;

/// The kind of a document in the corpus.
///
/// Each kind has its own manifest listing refs and its own directory of
/// per-ref documents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocKind {
    Interface,
    Collection,
    Method,
}

impl DocKind {
    /// All kinds, in loading order.
    pub const ALL: [DocKind; 3] = [DocKind::Interface, DocKind::Collection, DocKind::Method];

    /// The singular name, also used as the default document directory.
    pub const fn as_str(self) -> &'static str {
        match self {
            DocKind::Interface => "interface",
            DocKind::Collection => "collection",
            DocKind::Method => "method",
        }
    }

    /// The default manifest file name listing refs of this kind.
    pub const fn manifest_name(self) -> &'static str {
        match self {
            DocKind::Interface => "interfaces.yaml",
            DocKind::Collection => "collections.yaml",
            DocKind::Method => "methods.yaml",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
