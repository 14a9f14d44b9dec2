//! Typed front matter.
//!
//! Front matter fields that may be absent are explicit `Option`s or
//! `#[serde(default)]` collections here, so the defaults live in one place
//! instead of being re-checked during resolution:
//!
//! | field                      | default                |
//! |----------------------------|------------------------|
//! | `names`                    | `[name]`               |
//! | `inherits/mixin/methods`   | `[]`                   |
//! | `deprecated`               | `false`                |
//! | `version` / `versions`     | `{"": {}}`             |
//! | `very-fast/fast/slow`      | `[]`                   |
//! | `summary` / `detail`       | body part 0 / 1, or "" |

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use tracing::debug;

use crate::base::{DocKind, Ref};
use crate::error::{Error, Result};
use crate::project::{RawDocument, Render};

/// Front matter of an interface document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InterfaceFront {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub collections: Vec<Ref>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Front matter of a collection document.
#[derive(Clone, Debug, Deserialize)]
pub struct CollectionFront {
    pub name: String,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub inherits: Vec<Ref>,
    #[serde(default)]
    pub mixin: Vec<String>,
    #[serde(default)]
    pub methods: Vec<Ref>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub samples: Vec<String>,
}

/// Front matter of a method document.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MethodFront {
    pub name: String,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    /// Coerced to a boolean by truthiness.
    #[serde(default)]
    pub deprecated: Option<Value>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub samples: Vec<String>,
    /// Single version shorthand; any truthy scalar.
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub versions: Option<IndexMap<VersionLabel, Option<VersionOverride>>>,
    #[serde(default)]
    pub very_fast: Vec<Ref>,
    #[serde(default)]
    pub fast: Vec<Ref>,
    #[serde(default)]
    pub slow: Vec<Ref>,
}

/// Per-version overrides of a method's defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VersionOverride {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A version key. Any YAML scalar is accepted and kept in string form, so
/// `1.5`, `"1.5"` and `v2` are all labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionLabel(pub String);

impl<'de> Deserialize<'de> for VersionLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        scalar_string(&value)
            .map(VersionLabel)
            .ok_or_else(|| D::Error::custom("version labels must be scalars"))
    }
}

/// String form of a scalar, or `None` for mappings and sequences.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Number(n) => Some(match n.as_f64() {
            // Integral floats print in full without a fraction below 1e21:
            // `2.0` labels as "2", `1.0e20` as "100000000000000000000"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        }),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Falsy values are `0`, `""`, `false`, `null` and NaN; everything else,
/// including empty sequences and mappings, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

/// The label of a single-version shorthand, or `None` if the value is
/// falsy and the shorthand does not apply.
pub fn truthy_label(value: &Value) -> Option<String> {
    if is_truthy(value) { scalar_string(value) } else { None }
}

/// Deserialize the front matter of `doc`.
pub fn parse_front<T: DeserializeOwned>(kind: DocKind, doc: &Ref, raw: &RawDocument) -> Result<T> {
    serde_yaml::from_value(raw.front.clone()).map_err(|source| Error::Parse {
        kind,
        doc: doc.clone(),
        source,
    })
}

/// Render a text field: the front matter value when non-empty, else the
/// body part at `part`, else the empty string.
pub fn render_text(
    front: Option<&str>,
    raw: &RawDocument,
    part: usize,
    renderer: &dyn Render,
) -> String {
    let markdown = match front.filter(|text| !text.is_empty()) {
        Some(text) => {
            if raw.body(part).is_some_and(|body| !body.is_empty()) {
                debug!("Front matter overrides body part {}", part);
            }
            text
        }
        None => raw.body(part).unwrap_or(""),
    };
    renderer.render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> RawDocument {
        RawDocument::parse(DocKind::Method, &Ref::new("m"), text).unwrap()
    }

    #[test]
    fn test_method_front_defaults() {
        let front: MethodFront = parse_front(DocKind::Method, &Ref::new("m"), &raw("name: pop()")).unwrap();
        assert_eq!(front.name, "pop()");
        assert!(front.names.is_none());
        assert!(front.deprecated.is_none());
        assert!(front.version.is_none());
        assert!(front.versions.is_none());
        assert!(front.very_fast.is_empty() && front.fast.is_empty() && front.slow.is_empty());
    }

    #[test]
    fn test_method_front_kebab_hints() {
        let front: MethodFront = parse_front(
            DocKind::Method,
            &Ref::new("m"),
            &raw("name: get\nvery-fast: [map]\nslow: [list]\n"),
        )
        .unwrap();
        assert_eq!(front.very_fast, vec![Ref::new("map")]);
        assert_eq!(front.slow, vec![Ref::new("list")]);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let err = parse_front::<CollectionFront>(DocKind::Collection, &Ref::new("c"), &raw("methods: [push]"))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{err}");
    }

    #[test]
    fn test_version_labels_stringify_scalars() {
        let front: MethodFront = parse_front(
            DocKind::Method,
            &Ref::new("m"),
            &raw("name: x\nversions:\n  1: {}\n  \"2.5\": {name: y}\n  3.0: ~\n"),
        )
        .unwrap();
        let versions = front.versions.unwrap();
        let labels: Vec<&str> = versions.keys().map(|label| label.0.as_str()).collect();
        assert_eq!(labels, ["1", "2.5", "3"]);
        assert_eq!(versions[1].as_ref().unwrap().name.as_deref(), Some("y"));
        assert!(versions[2].is_none());
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_truthy_label() {
        assert_eq!(truthy_label(&yaml("2")), Some("2".to_string()));
        assert_eq!(truthy_label(&yaml("1.5")), Some("1.5".to_string()));
        assert_eq!(truthy_label(&yaml("v1")), Some("v1".to_string()));
        assert_eq!(truthy_label(&yaml("2.0")), Some("2".to_string()));
        assert_eq!(
            truthy_label(&yaml("1.0e20")),
            Some("100000000000000000000".to_string())
        );
        assert_eq!(truthy_label(&yaml("0")), None);
        assert_eq!(truthy_label(&yaml("''")), None);
        assert_eq!(truthy_label(&yaml("false")), None);
        assert_eq!(truthy_label(&yaml("~")), None);
    }

    #[test]
    fn test_deprecated_truthiness() {
        assert!(is_truthy(&yaml("true")));
        assert!(is_truthy(&yaml("since 2.0")));
        assert!(!is_truthy(&yaml("false")));
        assert!(!is_truthy(&yaml("0")));
    }

    #[test]
    fn test_render_text_prefers_front() {
        let identity = |text: &str| text.to_string();
        let doc = raw("name: x\n--- |\n  body summary\n");
        assert_eq!(render_text(Some("front summary"), &doc, 0, &identity), "front summary");
        assert_eq!(render_text(Some(""), &doc, 0, &identity), "body summary\n");
        assert_eq!(render_text(None, &doc, 0, &identity), "body summary\n");
        assert_eq!(render_text(None, &doc, 1, &identity), "");
    }
}
