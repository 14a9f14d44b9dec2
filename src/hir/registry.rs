//! Method registry: one normalized [`Method`] per ref, with its version tree.
//!
//! The registry keeps manifest order. Every later pass (collection method
//! lists, method indices, search) iterates methods in this order.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use super::input::{MethodFront, VersionOverride, is_truthy, parse_front, render_text, truthy_label};
use crate::base::{DocKind, Ref};
use crate::error::Result;
use crate::project::{RawDocuments, Render};

/// Declared speed of a method on particular collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformanceHints {
    pub very_fast: Vec<Ref>,
    pub fast: Vec<Ref>,
    pub slow: Vec<Ref>,
}

/// One version of a method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionedMethod {
    #[serde(rename = "ref")]
    pub id: Ref,
    pub version: String,
    pub name: String,
    pub names: Vec<String>,
    pub deprecated: bool,
    pub summary: String,
}

/// A method as authored, before cross-indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub id: Ref,
    pub name: String,
    pub names: Vec<String>,
    pub deprecated: bool,
    pub summary: String,
    pub detail: String,
    pub samples: Vec<String>,
    pub hints: PerformanceHints,
    /// Version label → version, in declaration order. Never empty unless
    /// the document declares an empty `versions` mapping.
    pub versions: IndexMap<String, VersionedMethod>,
}

impl Method {
    /// Build a method from its typed front matter.
    pub fn from_front(
        id: Ref,
        front: MethodFront,
        summary: String,
        detail: String,
        renderer: &dyn Render,
    ) -> Self {
        let deprecated = front.deprecated.as_ref().is_some_and(is_truthy);
        let names = front.names.clone().unwrap_or_else(|| vec![front.name.clone()]);

        let declared: Vec<(String, VersionOverride)> = match front.version.as_ref().and_then(truthy_label) {
            Some(label) => vec![(label, VersionOverride::default())],
            None => match front.versions {
                Some(versions) => versions
                    .into_iter()
                    .map(|(label, over)| (label.0, over.unwrap_or_default()))
                    .collect(),
                None => vec![(String::new(), VersionOverride::default())],
            },
        };

        let versions = declared
            .into_iter()
            .map(|(label, over)| {
                let name = over.name.unwrap_or_else(|| front.name.clone());
                let names = over
                    .names
                    .or_else(|| front.names.clone())
                    .unwrap_or_else(|| vec![name.clone()]);
                let summary = match over.summary.as_deref().filter(|text| !text.is_empty()) {
                    Some(text) => renderer.render(text),
                    None => summary.clone(),
                };
                let version = VersionedMethod {
                    id: id.clone(),
                    version: label.clone(),
                    name,
                    names,
                    deprecated,
                    summary,
                };
                (label, version)
            })
            .collect();

        Self {
            id,
            name: front.name,
            names,
            deprecated,
            summary,
            detail,
            samples: front.samples,
            hints: PerformanceHints {
                very_fast: front.very_fast,
                fast: front.fast,
                slow: front.slow,
            },
            versions,
        }
    }
}

/// All methods of a corpus, in manifest order.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    methods: IndexMap<Ref, Method>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from raw method documents.
    ///
    /// Any malformed document fails the whole build.
    pub fn build(documents: &RawDocuments, renderer: &dyn Render) -> Result<Self> {
        let mut registry = Self::new();
        for (id, raw) in documents {
            let front: MethodFront = parse_front(DocKind::Method, id, raw)?;
            let summary = render_text(front.summary.as_deref(), raw, 0, renderer);
            let detail = render_text(front.detail.as_deref(), raw, 1, renderer);
            registry.insert(Method::from_front(id.clone(), front, summary, detail, renderer));
        }
        info!(
            "Registered {} method(s) with {} version(s)",
            registry.len(),
            registry.iter().map(|m| m.versions.len()).sum::<usize>()
        );
        Ok(registry)
    }

    /// Add a method, replacing any method with the same ref.
    pub fn insert(&mut self, method: Method) {
        self.methods.insert(method.id.clone(), method);
    }

    pub fn get(&self, id: &str) -> Option<&Method> {
        self.methods.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.methods.contains_key(id)
    }

    /// Iterate methods in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Method> + '_ {
        self.methods.values()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
