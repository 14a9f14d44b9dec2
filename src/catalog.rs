//! The finished catalog: every pass run end to end.

use serde::Serialize;
use tracing::info;

use crate::base::DocKind;
use crate::error::Result;
use crate::hir::{
    Interfaces, MethodRegistry, ResolvedCollections, ResolvedMethods, build_collections,
    build_interfaces, resolve_collections, resolve_methods,
};
use crate::project::{DocumentSource, LoadedCorpus, Render, load_corpus};
use crate::search::{SearchEntry, assemble};

/// Interfaces, resolved collections, resolved methods and the search index
/// of one corpus.
///
/// A catalog is only ever produced whole: any load, reference or cycle
/// error aborts the build.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    pub interfaces: Interfaces,
    pub collections: ResolvedCollections,
    pub methods: ResolvedMethods,
    pub search: Vec<SearchEntry>,
}

impl Catalog {
    /// Load every document from `source` and build the catalog.
    pub fn build(source: &dyn DocumentSource, renderer: &dyn Render) -> Result<Self> {
        let corpus = load_corpus(source)?;
        Self::from_corpus(&corpus, renderer)
    }

    /// Build the catalog from already loaded documents.
    pub fn from_corpus(corpus: &LoadedCorpus, renderer: &dyn Render) -> Result<Self> {
        let registry = MethodRegistry::build(corpus.documents(DocKind::Method), renderer)?;
        let declared = build_collections(corpus.documents(DocKind::Collection), &registry, renderer)?;
        let interfaces = build_interfaces(corpus.documents(DocKind::Interface), &declared, renderer)?;

        let collections = resolve_collections(&declared, &registry)?;
        let methods = resolve_methods(&registry, &collections)?;
        let search = assemble(&collections, &methods);

        info!(
            "Built catalog: {} interface(s), {} collection(s), {} method(s), {} search record(s)",
            interfaces.len(),
            collections.len(),
            methods.len(),
            search.len()
        );

        Ok(Self {
            interfaces,
            collections,
            methods,
            search,
        })
    }
}
