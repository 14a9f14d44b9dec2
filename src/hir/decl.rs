//! Declared interfaces and collections, as authored.
//!
//! Building these validates every method ref a collection names against the
//! registry. `inherits` refs are deliberately not validated: unknown bases
//! are skipped during resolution.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use super::input::{CollectionFront, InterfaceFront, parse_front, render_text};
use super::registry::MethodRegistry;
use crate::base::{DocKind, MixinRef, Ref};
use crate::error::{Error, Result};
use crate::project::{RawDocuments, Render};

/// A capability grouping of methods. Reference data only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Interface {
    #[serde(rename = "ref")]
    pub id: Ref,
    pub name: Option<String>,
    pub collections: Vec<Ref>,
    pub summary: String,
    pub detail: String,
}

/// A collection as authored: its own methods plus what it inherits and
/// mixes in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub id: Ref,
    pub name: String,
    pub names: Vec<String>,
    pub inherits: Vec<Ref>,
    pub mixin: Vec<MixinRef>,
    /// Methods defined directly by this collection.
    pub methods: Vec<Ref>,
    pub summary: String,
    pub detail: String,
    pub samples: Vec<String>,
}

impl Collection {
    /// Build a collection from its typed front matter, checking that every
    /// method it names or mixes in is registered.
    pub fn from_front(
        id: Ref,
        front: CollectionFront,
        summary: String,
        detail: String,
        registry: &MethodRegistry,
    ) -> Result<Self> {
        let mixin = front
            .mixin
            .iter()
            .map(|entry| {
                MixinRef::parse(entry).ok_or_else(|| Error::MalformedMixin {
                    collection: id.clone(),
                    entry: entry.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let named = mixin.iter().map(|m| &m.method).chain(&front.methods);
        for method in named {
            if !registry.contains(method) {
                return Err(Error::UnknownMethod {
                    collection: id.clone(),
                    method: method.clone(),
                });
            }
        }

        Ok(Self {
            names: front.names.unwrap_or_else(|| vec![front.name.clone()]),
            name: front.name,
            inherits: front.inherits,
            mixin,
            methods: front.methods,
            summary,
            detail,
            samples: front.samples,
            id,
        })
    }
}

/// Collections in manifest order.
pub type Collections = IndexMap<Ref, Collection>;

/// Interfaces in manifest order.
pub type Interfaces = IndexMap<Ref, Interface>;

/// Build every declared collection.
pub fn build_collections(
    documents: &RawDocuments,
    registry: &MethodRegistry,
    renderer: &dyn Render,
) -> Result<Collections> {
    let mut collections = Collections::with_capacity(documents.len());
    for (id, raw) in documents {
        let front: CollectionFront = parse_front(DocKind::Collection, id, raw)?;
        let summary = render_text(front.summary.as_deref(), raw, 0, renderer);
        let detail = render_text(front.detail.as_deref(), raw, 1, renderer);
        let collection = Collection::from_front(id.clone(), front, summary, detail, registry)?;
        collections.insert(id.clone(), collection);
    }
    info!("Declared {} collection(s)", collections.len());
    Ok(collections)
}

/// Build every interface, checking that the collections it lists exist.
pub fn build_interfaces(
    documents: &RawDocuments,
    collections: &Collections,
    renderer: &dyn Render,
) -> Result<Interfaces> {
    let mut interfaces = Interfaces::with_capacity(documents.len());
    for (id, raw) in documents {
        let front: InterfaceFront = parse_front(DocKind::Interface, id, raw)?;
        if let Some(unknown) = front.collections.iter().find(|c| !collections.contains_key(*c)) {
            return Err(Error::UnknownCollection {
                kind: DocKind::Interface,
                referrer: id.clone(),
                collection: unknown.clone(),
            });
        }
        let interface = Interface {
            id: id.clone(),
            summary: render_text(front.summary.as_deref(), raw, 0, renderer),
            detail: render_text(front.detail.as_deref(), raw, 1, renderer),
            name: front.name,
            collections: front.collections,
        };
        interfaces.insert(id.clone(), interface);
    }
    Ok(interfaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::RawDocument;

    fn identity(text: &str) -> String {
        text.to_string()
    }

    fn docs(kind: DocKind, docs: &[(&str, &str)]) -> RawDocuments {
        docs.iter()
            .map(|(id, text)| {
                let id = Ref::new(id);
                let doc = RawDocument::parse(kind, &id, text).unwrap();
                (id, doc)
            })
            .collect()
    }

    fn registry() -> MethodRegistry {
        let methods = docs(DocKind::Method, &[("push", "name: push()"), ("pop", "name: pop()")]);
        MethodRegistry::build(&methods, &identity).unwrap()
    }

    #[test]
    fn test_collection_defaults() {
        let raw = docs(DocKind::Collection, &[("list", "name: List\nmethods: [push]\nmixin: [deque/pop]")]);
        let collections = build_collections(&raw, &registry(), &identity).unwrap();
        let list = &collections["list"];

        assert_eq!(list.names, vec!["List".to_string()]);
        assert!(list.inherits.is_empty());
        assert_eq!(list.mixin, vec![MixinRef::parse("deque/pop").unwrap()]);
        assert_eq!(list.methods, vec![Ref::new("push")]);
    }

    #[test]
    fn test_unknown_method_is_fatal() {
        let raw = docs(DocKind::Collection, &[("list", "name: List\nmethods: [push, shove]")]);
        let err = build_collections(&raw, &registry(), &identity).unwrap_err();
        assert!(matches!(err, Error::UnknownMethod { ref method, .. } if method == "shove"));
    }

    #[test]
    fn test_unknown_mixin_method_is_fatal() {
        let raw = docs(DocKind::Collection, &[("list", "name: List\nmixin: [deque/shove]")]);
        let err = build_collections(&raw, &registry(), &identity).unwrap_err();
        assert!(matches!(err, Error::UnknownMethod { ref method, .. } if method == "shove"));
    }

    #[test]
    fn test_malformed_mixin_is_fatal() {
        let raw = docs(DocKind::Collection, &[("list", "name: List\nmixin: [pop]")]);
        let err = build_collections(&raw, &registry(), &identity).unwrap_err();
        assert!(matches!(err, Error::MalformedMixin { ref entry, .. } if entry == "pop"));
    }

    #[test]
    fn test_unknown_inherits_is_not_validated() {
        let raw = docs(DocKind::Collection, &[("stack", "name: Stack\ninherits: [nonexistent]")]);
        assert!(build_collections(&raw, &registry(), &identity).is_ok());
    }

    #[test]
    fn test_interfaces_validate_collections() {
        let collections = build_collections(
            &docs(DocKind::Collection, &[("list", "name: List")]),
            &registry(),
            &identity,
        )
        .unwrap();

        let ok = docs(DocKind::Interface, &[("ordered", "name: Ordered\ncollections: [list]")]);
        let interfaces = build_interfaces(&ok, &collections, &identity).unwrap();
        assert_eq!(interfaces["ordered"].collections, vec![Ref::new("list")]);

        let bad = docs(DocKind::Interface, &[("ordered", "collections: [list, heap]")]);
        let err = build_interfaces(&bad, &collections, &identity).unwrap_err();
        assert!(matches!(err, Error::UnknownCollection { kind: DocKind::Interface, .. }));
    }
}
