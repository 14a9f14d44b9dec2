//! Collection resolution: which methods a collection implements, and where
//! each implementation comes from.
//!
//! # Precedence
//!
//! Resolution of one collection writes into a single implementation map,
//! later writes overwriting earlier ones for the same method ref:
//!
//! 1. **Inherited**: each `inherits` entry in listed order, resolved
//!    recursively. The last listed ancestor wins a tie.
//! 2. **Mixins**: each `parent/method` entry, with `parent` as prototype.
//! 3. **Direct**: the collection's own `methods`, with itself as prototype.
//!
//! Unknown `inherits` refs are skipped. Inheritance cycles are reported as
//! [`Error::InheritanceCycle`].
//!
//! The resolved method list of a collection follows registry order, with
//! one entry per version of each implemented method.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{info, warn};

use super::decl::{Collection, Collections};
use super::registry::MethodRegistry;
use crate::base::{Ref, text};
use crate::error::{Error, Result};

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Which collection supplies the implementation of a method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implementation {
    pub method: Ref,
    /// The collection (or mixin source) that defines the method.
    pub prototype: Ref,
}

/// Method ref → implementation, for one collection.
pub type ImplementationMap = IndexMap<Ref, Implementation>;

/// Resolves implementation maps over the inheritance graph of a corpus.
///
/// Fully resolved collections are memoized, so each collection is walked
/// once per resolver no matter how many descendants it has.
#[derive(Debug)]
pub struct CollectionResolver<'a> {
    collections: &'a Collections,
    resolved: FxHashMap<Ref, ImplementationMap>,
}

impl<'a> CollectionResolver<'a> {
    pub fn new(collections: &'a Collections) -> Self {
        Self {
            collections,
            resolved: FxHashMap::default(),
        }
    }

    /// The complete implementation map of collection `id`.
    ///
    /// An unknown `id` resolves to an empty map.
    pub fn resolve(&mut self, id: &Ref) -> Result<ImplementationMap> {
        let mut path = Vec::new();
        self.resolve_on_path(id, &mut path)
    }

    fn resolve_on_path(&mut self, id: &Ref, path: &mut Vec<Ref>) -> Result<ImplementationMap> {
        if let Some(done) = self.resolved.get(id) {
            return Ok(done.clone());
        }
        if let Some(start) = path.iter().position(|on_path| on_path == id) {
            let mut cycle = path[start..].to_vec();
            cycle.push(id.clone());
            return Err(Error::InheritanceCycle { path: cycle });
        }
        let collections = self.collections;
        let Some(collection) = collections.get(id) else {
            return Ok(ImplementationMap::new());
        };

        path.push(id.clone());
        let mut implemented = ImplementationMap::new();

        for parent in &collection.inherits {
            if !collections.contains_key(parent) {
                warn!("Collection '{}' inherits unknown '{}'; skipping", id, parent);
                continue;
            }
            let inherited = self.resolve_on_path(parent, path)?;
            implemented.extend(inherited);
        }

        for mixin in &collection.mixin {
            implemented.insert(
                mixin.method.clone(),
                Implementation {
                    method: mixin.method.clone(),
                    prototype: mixin.parent.clone(),
                },
            );
        }

        for method in &collection.methods {
            implemented.insert(
                method.clone(),
                Implementation {
                    method: method.clone(),
                    prototype: id.clone(),
                },
            );
        }

        path.pop();
        self.resolved.insert(id.clone(), implemented.clone());
        Ok(implemented)
    }
}

// ============================================================================
// RESOLVED COLLECTIONS
// ============================================================================

/// One version of one method implemented by a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodUse {
    #[serde(rename = "ref")]
    pub id: Ref,
    /// The versioned display name.
    pub name: String,
    pub prototype: Ref,
    pub version: String,
}

/// One searchable alias of one version of a method, within a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodIndexEntry {
    /// Normalized search key of `name`.
    pub search: String,
    pub name: String,
    pub summary: String,
    #[serde(rename = "ref")]
    pub id: Ref,
    pub version: String,
}

/// A collection with its complete method set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCollection {
    #[serde(rename = "ref")]
    pub id: Ref,
    pub name: String,
    pub names: Vec<String>,
    pub summary: String,
    pub detail: String,
    pub samples: Vec<String>,
    pub methods: Vec<MethodUse>,
    pub method_index: Vec<MethodIndexEntry>,
    /// Implemented methods in registry order, one per method.
    #[serde(skip)]
    pub implementations: Vec<Implementation>,
}

impl ResolvedCollection {
    /// Expand an implementation map against the registry.
    pub fn new(collection: &Collection, implemented: &ImplementationMap, registry: &MethodRegistry) -> Self {
        let kept: Vec<_> = registry
            .iter()
            .filter_map(|method| implemented.get(&method.id).map(|imp| (method, imp)))
            .collect();

        let methods = kept
            .iter()
            .flat_map(|(method, imp)| {
                method.versions.iter().map(move |(label, version)| MethodUse {
                    id: method.id.clone(),
                    name: version.name.clone(),
                    prototype: imp.prototype.clone(),
                    version: label.clone(),
                })
            })
            .collect();

        let method_index = kept
            .iter()
            .flat_map(|(method, _)| method.versions.values())
            .flat_map(|version| {
                version.names.iter().map(move |name| MethodIndexEntry {
                    search: text::search_key(name),
                    name: name.clone(),
                    summary: version.summary.clone(),
                    id: version.id.clone(),
                    version: version.version.clone(),
                })
            })
            .collect();

        Self {
            id: collection.id.clone(),
            name: collection.name.clone(),
            names: collection.names.clone(),
            summary: collection.summary.clone(),
            detail: collection.detail.clone(),
            samples: collection.samples.clone(),
            methods,
            method_index,
            implementations: kept.into_iter().map(|(_, imp)| imp.clone()).collect(),
        }
    }

    /// The implementation of `method`, if this collection has one.
    pub fn implementation(&self, method: &str) -> Option<&Implementation> {
        self.implementations.iter().find(|imp| imp.method.as_str() == method)
    }
}

/// Resolved collections in manifest order.
pub type ResolvedCollections = IndexMap<Ref, ResolvedCollection>;

/// Resolve every collection (pass 1).
pub fn resolve_collections(collections: &Collections, registry: &MethodRegistry) -> Result<ResolvedCollections> {
    let mut resolver = CollectionResolver::new(collections);
    let mut resolved = ResolvedCollections::with_capacity(collections.len());
    for (id, collection) in collections {
        let implemented = resolver.resolve(id)?;
        resolved.insert(id.clone(), ResolvedCollection::new(collection, &implemented, registry));
    }
    info!(
        "Resolved {} collection(s), {} method use(s)",
        resolved.len(),
        resolved.values().map(|c| c.methods.len()).sum::<usize>()
    );
    Ok(resolved)
}
