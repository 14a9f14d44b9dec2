//! Errors that abort a catalog build.
//!
//! Every variant is fatal: a build either produces a complete catalog or
//! fails with one of these. Messages always name the document kind and ref
//! so the faulty source file can be located.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::{DocKind, Ref};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("can't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't parse {kind} manifest {}: {source}", path.display())]
    Manifest {
        kind: DocKind,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("can't parse {kind} '{doc}': {source}")]
    Parse {
        kind: DocKind,
        doc: Ref,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{kind} '{doc}' has no document (not listed by the source)")]
    MissingDocument { kind: DocKind, doc: Ref },

    #[error("{kind} '{doc}': body part {index} is not text")]
    BodyPart { kind: DocKind, doc: Ref, index: usize },

    #[error("collection '{collection}': malformed mixin '{entry}' (expected parent/method)")]
    MalformedMixin { collection: Ref, entry: String },

    #[error("collection '{collection}' refers to unknown method '{method}'")]
    UnknownMethod { collection: Ref, method: Ref },

    #[error("{kind} '{referrer}' refers to unknown collection '{collection}'")]
    UnknownCollection {
        kind: DocKind,
        referrer: Ref,
        collection: Ref,
    },

    #[error("inheritance cycle: {}", join_path(path))]
    InheritanceCycle { path: Vec<Ref> },
}

fn join_path(path: &[Ref]) -> String {
    path.iter().map(Ref::as_str).collect::<Vec<_>>().join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_names_path() {
        let err = Error::InheritanceCycle {
            path: vec![Ref::new("a"), Ref::new("b"), Ref::new("a")],
        };
        assert_eq!(err.to_string(), "inheritance cycle: a -> b -> a");
    }

    #[test]
    fn test_unknown_collection_message() {
        let err = Error::UnknownCollection {
            kind: DocKind::Method,
            referrer: Ref::new("push"),
            collection: Ref::new("heap"),
        };
        assert_eq!(
            err.to_string(),
            "method 'push' refers to unknown collection 'heap'"
        );
    }
}
