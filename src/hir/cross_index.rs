//! Cross-index: for every method, every collection and how (or whether) it
//! implements the method.
//!
//! Built in two explicit passes over completed collection resolution:
//!
//! 1. [`collections_by_method`] inverts resolved collections into
//!    method ref → implementing collections.
//! 2. [`method_collections`] merges that with the method's speed hints and
//!    the full collection list.
//!
//! The merge is first-seen-wins, tier by tier: `very-fast`, `fast`, `slow`,
//! implemented (no note), then `not-implemented` for everything left.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::info;

use super::registry::{Method, MethodRegistry, VersionedMethod};
use super::resolve::ResolvedCollections;
use crate::base::{DocKind, Ref};
use crate::error::{Error, Result};

/// How a collection supports a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Support {
    VeryFast,
    Fast,
    Slow,
    NotImplemented,
}

impl Support {
    pub const fn as_str(self) -> &'static str {
        match self {
            Support::VeryFast => "very-fast",
            Support::Fast => "fast",
            Support::Slow => "slow",
            Support::NotImplemented => "not-implemented",
        }
    }
}

/// One collection's entry in a method's collection list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionSupport {
    #[serde(rename = "ref")]
    pub id: Ref,
    pub name: String,
    /// `None` means implemented without a declared speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Support>,
}

impl CollectionSupport {
    /// Whether the note claims an implementation (anything but
    /// `not-implemented`).
    pub fn is_implemented(&self) -> bool {
        self.note != Some(Support::NotImplemented)
    }
}

/// A method with its full collection list attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedMethod {
    #[serde(rename = "ref")]
    pub id: Ref,
    pub name: String,
    pub names: Vec<String>,
    pub deprecated: bool,
    pub summary: String,
    pub detail: String,
    pub samples: Vec<String>,
    /// Every known collection exactly once.
    pub collections: Vec<CollectionSupport>,
    pub versions: IndexMap<String, VersionedMethod>,
}

/// Method ref → collections implementing it, in collection manifest order.
pub type CollectionsByMethod = IndexMap<Ref, IndexSet<Ref>>;

/// Invert resolved collections into method ref → implementing collections.
pub fn collections_by_method(collections: &ResolvedCollections) -> CollectionsByMethod {
    let mut by_method = CollectionsByMethod::new();
    for collection in collections.values() {
        for imp in &collection.implementations {
            by_method
                .entry(imp.method.clone())
                .or_default()
                .insert(collection.id.clone());
        }
    }
    by_method
}

/// The collection list of one method.
///
/// Speed hints naming an unknown collection are an error.
pub fn method_collections(
    method: &Method,
    implementors: Option<&IndexSet<Ref>>,
    collections: &ResolvedCollections,
) -> Result<Vec<CollectionSupport>> {
    let mut merged: IndexMap<Ref, CollectionSupport> = IndexMap::with_capacity(collections.len());

    let tiers = [
        (method.hints.very_fast.as_slice(), Some(Support::VeryFast)),
        (method.hints.fast.as_slice(), Some(Support::Fast)),
        (method.hints.slow.as_slice(), Some(Support::Slow)),
    ];
    for (refs, note) in tiers {
        for id in refs {
            let collection = collections.get(id).ok_or_else(|| Error::UnknownCollection {
                kind: DocKind::Method,
                referrer: method.id.clone(),
                collection: id.clone(),
            })?;
            merged.entry(id.clone()).or_insert_with(|| CollectionSupport {
                id: id.clone(),
                name: collection.name.clone(),
                note,
            });
        }
    }

    let implemented = implementors.into_iter().flatten().map(|id| (id, None));
    let remainder = collections.keys().map(|id| (id, Some(Support::NotImplemented)));
    for (id, note) in implemented.chain(remainder) {
        if merged.contains_key(id) {
            continue;
        }
        if let Some(collection) = collections.get(id) {
            merged.insert(
                id.clone(),
                CollectionSupport {
                    id: id.clone(),
                    name: collection.name.clone(),
                    note,
                },
            );
        }
    }

    Ok(merged.into_values().collect())
}

/// Resolved methods in registry order.
pub type ResolvedMethods = IndexMap<Ref, ResolvedMethod>;

/// Attach collection lists to every method (pass 2).
pub fn resolve_methods(registry: &MethodRegistry, collections: &ResolvedCollections) -> Result<ResolvedMethods> {
    let by_method = collections_by_method(collections);
    let mut resolved = ResolvedMethods::with_capacity(registry.len());
    for method in registry.iter() {
        let supports = method_collections(method, by_method.get(&method.id), collections)?;
        resolved.insert(
            method.id.clone(),
            ResolvedMethod {
                id: method.id.clone(),
                name: method.name.clone(),
                names: method.names.clone(),
                deprecated: method.deprecated,
                summary: method.summary.clone(),
                detail: method.detail.clone(),
                samples: method.samples.clone(),
                collections: supports,
                versions: method.versions.clone(),
            },
        );
    }
    info!(
        "Cross-indexed {} method(s) against {} collection(s)",
        resolved.len(),
        collections.len()
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::registry::PerformanceHints;
    use crate::hir::resolve::{Implementation, ResolvedCollection};

    fn resolved(id: &str, implements: &[&str]) -> ResolvedCollection {
        ResolvedCollection {
            id: Ref::new(id),
            name: format!("{id}-name"),
            names: Vec::new(),
            summary: String::new(),
            detail: String::new(),
            samples: Vec::new(),
            methods: Vec::new(),
            method_index: Vec::new(),
            implementations: implements
                .iter()
                .map(|m| Implementation {
                    method: Ref::new(m),
                    prototype: Ref::new(id),
                })
                .collect(),
        }
    }

    fn method(id: &str, hints: PerformanceHints) -> Method {
        Method {
            id: Ref::new(id),
            name: id.to_string(),
            names: vec![id.to_string()],
            deprecated: false,
            summary: String::new(),
            detail: String::new(),
            samples: Vec::new(),
            hints,
            versions: IndexMap::new(),
        }
    }

    fn refs(ids: &[&str]) -> Vec<Ref> {
        ids.iter().map(|r| Ref::new(r)).collect()
    }

    fn corpus() -> ResolvedCollections {
        [
            resolved("list", &["push", "get"]),
            resolved("map", &["get"]),
            resolved("set", &[]),
            resolved("deque", &["push", "get"]),
        ]
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect()
    }

    fn notes(supports: &[CollectionSupport]) -> Vec<(&str, Option<&'static str>)> {
        supports
            .iter()
            .map(|s| (s.id.as_str(), s.note.map(Support::as_str)))
            .collect()
    }

    #[test]
    fn test_collections_by_method_in_collection_order() {
        let by_method = collections_by_method(&corpus());
        let get: Vec<&str> = by_method["get"].iter().map(Ref::as_str).collect();
        assert_eq!(get, ["list", "map", "deque"]);
        assert!(!by_method.contains_key("pop"));
    }

    #[test]
    fn test_merge_order_and_priority() {
        let collections = corpus();
        let by_method = collections_by_method(&collections);
        let get = method(
            "get",
            PerformanceHints {
                very_fast: refs(&["map"]),
                fast: refs(&["list", "map"]),
                slow: Vec::new(),
            },
        );

        let supports = method_collections(&get, by_method.get("get"), &collections).unwrap();
        assert_eq!(
            notes(&supports),
            vec![
                ("map", Some("very-fast")),
                ("list", Some("fast")),
                ("deque", None),
                ("set", Some("not-implemented")),
            ]
        );
    }

    #[test]
    fn test_unimplemented_method_lists_every_collection() {
        let collections = corpus();
        let pop = method("pop", PerformanceHints::default());
        let supports = method_collections(&pop, None, &collections).unwrap();

        assert_eq!(supports.len(), collections.len());
        assert!(supports.iter().all(|s| !s.is_implemented()));
        assert_eq!(supports[0].name, "list-name");
    }

    #[test]
    fn test_hint_without_implementation_still_wins() {
        let collections = corpus();
        let pop = method(
            "pop",
            PerformanceHints {
                slow: refs(&["set"]),
                ..PerformanceHints::default()
            },
        );
        let supports = method_collections(&pop, None, &collections).unwrap();
        assert_eq!(notes(&supports)[0], ("set", Some("slow")));
        assert!(supports[0].is_implemented());
    }

    #[test]
    fn test_unknown_hint_collection_is_fatal() {
        let collections = corpus();
        let push = method(
            "push",
            PerformanceHints {
                fast: refs(&["heap"]),
                ..PerformanceHints::default()
            },
        );
        let err = method_collections(&push, None, &collections).unwrap_err();
        assert!(matches!(err, Error::UnknownCollection { kind: DocKind::Method, ref collection, .. } if collection == "heap"));
    }

    #[test]
    fn test_note_serialization() {
        let support = CollectionSupport {
            id: Ref::new("list"),
            name: "List".to_string(),
            note: Some(Support::VeryFast),
        };
        assert_eq!(
            serde_json::to_string(&support).unwrap(),
            r#"{"ref":"list","name":"List","note":"very-fast"}"#
        );

        let implemented = CollectionSupport { note: None, ..support };
        assert_eq!(
            serde_json::to_string(&implemented).unwrap(),
            r#"{"ref":"list","name":"List"}"#
        );
    }
}
