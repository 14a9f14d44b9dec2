//! Eager corpus loading, one kind at a time.

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{info, warn};

use super::document::RawDocument;
use super::source::DocumentSource;
use crate::base::{DocKind, Ref};
use crate::error::Result;

/// Raw documents of one kind, in manifest order.
pub type RawDocuments = IndexMap<Ref, RawDocument>;

/// Every raw document of a corpus, loaded eagerly.
#[derive(Clone, Debug, Default)]
pub struct LoadedCorpus {
    pub interfaces: RawDocuments,
    pub collections: RawDocuments,
    pub methods: RawDocuments,
}

impl LoadedCorpus {
    pub fn documents(&self, kind: DocKind) -> &RawDocuments {
        match kind {
            DocKind::Interface => &self.interfaces,
            DocKind::Collection => &self.collections,
            DocKind::Method => &self.methods,
        }
    }
}

/// Loads every document listed by the source's manifests.
///
/// Documents of one kind are parsed in parallel; the first failure aborts
/// the whole load.
pub fn load_corpus(source: &dyn DocumentSource) -> Result<LoadedCorpus> {
    Ok(LoadedCorpus {
        interfaces: load_kind(source, DocKind::Interface)?,
        collections: load_kind(source, DocKind::Collection)?,
        methods: load_kind(source, DocKind::Method)?,
    })
}

fn load_kind(source: &dyn DocumentSource, kind: DocKind) -> Result<RawDocuments> {
    let refs = source.list_refs(kind)?;

    // Parse in parallel; collect preserves manifest order
    let documents = refs
        .par_iter()
        .map(|doc| source.load(kind, doc).map(|raw| (doc.clone(), raw)))
        .collect::<Result<Vec<_>>>()?;

    let mut loaded = RawDocuments::with_capacity(documents.len());
    for (doc, raw) in documents {
        if loaded.insert(doc.clone(), raw).is_some() {
            warn!("{} '{}' is listed more than once; keeping the last", kind, doc);
        }
    }

    info!("Loaded {} {} document(s)", loaded.len(), kind);
    Ok(loaded)
}
