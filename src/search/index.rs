//! Search record shapes and their assembly from resolved collections and
//! methods.

use indexmap::IndexSet;
use serde::Serialize;
use tracing::info;

use crate::base::{Ref, text};
use crate::hir::{ResolvedCollection, ResolvedCollections, ResolvedMethods};

/// A search record for a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    /// Lowercase collection name.
    pub search: String,
    pub name: String,
    #[serde(rename = "ref")]
    pub id: Ref,
    /// Inline summary HTML (outer paragraph stripped).
    pub summary: String,
    /// Space-joined bare names of every method the collection implements.
    pub methods: String,
}

/// A search record for one alias of a method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodEntry {
    /// Normalized search key of `name`.
    pub search: String,
    pub name: String,
    #[serde(rename = "ref")]
    pub id: Ref,
    /// Inline summary HTML (outer paragraph stripped).
    pub summary: String,
    /// Space-joined display names of every collection in the method's
    /// collection list, including those noted `not-implemented`.
    pub collections: String,
}

/// A record of the search index, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchEntry {
    Collection(CollectionEntry),
    Method(MethodEntry),
}

impl SearchEntry {
    /// The normalized search key.
    pub fn search(&self) -> &str {
        match self {
            SearchEntry::Collection(entry) => &entry.search,
            SearchEntry::Method(entry) => &entry.search,
        }
    }

    pub fn id(&self) -> &Ref {
        match self {
            SearchEntry::Collection(entry) => &entry.id,
            SearchEntry::Method(entry) => &entry.id,
        }
    }
}

/// Build the full search index: collection records, then method records.
pub fn assemble(collections: &ResolvedCollections, methods: &ResolvedMethods) -> Vec<SearchEntry> {
    let mut search: Vec<SearchEntry> = collection_entries(collections)
        .into_iter()
        .map(SearchEntry::Collection)
        .collect();
    let collection_count = search.len();
    search.extend(method_entries(collections, methods).into_iter().map(SearchEntry::Method));

    info!(
        "Assembled search index: {} collection record(s), {} method record(s)",
        collection_count,
        search.len() - collection_count
    );
    search
}

/// One record per collection.
pub fn collection_entries(collections: &ResolvedCollections) -> Vec<CollectionEntry> {
    collections.values().map(collection_entry).collect()
}

fn collection_entry(collection: &ResolvedCollection) -> CollectionEntry {
    let bare: IndexSet<&str> = collection
        .method_index
        .iter()
        .map(|entry| text::bare_name(&entry.name))
        .collect();

    CollectionEntry {
        search: collection.name.to_lowercase(),
        name: collection.name.clone(),
        id: collection.id.clone(),
        summary: text::strip_paragraph(&collection.summary).to_string(),
        methods: bare.into_iter().collect::<Vec<_>>().join(" "),
    }
}

/// One record per distinct (search key, name, method ref) across every
/// collection's method index.
pub fn method_entries(collections: &ResolvedCollections, methods: &ResolvedMethods) -> Vec<MethodEntry> {
    let distinct: IndexSet<(&str, &str, &Ref)> = collections
        .values()
        .flat_map(|collection| &collection.method_index)
        .map(|entry| (entry.search.as_str(), entry.name.as_str(), &entry.id))
        .collect();

    distinct
        .into_iter()
        .filter_map(|(search, name, id)| {
            let method = methods.get(id)?;
            let collections = method
                .collections
                .iter()
                .map(|support| support.name.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            Some(MethodEntry {
                search: search.to_string(),
                name: name.to_string(),
                id: id.clone(),
                summary: text::strip_paragraph(&method.summary).to_string(),
                collections,
            })
        })
        .collect()
}
