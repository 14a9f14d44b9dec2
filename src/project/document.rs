//! Raw documents: front matter plus body parts.
//!
//! A document is a multi-document YAML stream. The first document is the
//! front matter mapping; the following documents are Markdown text blocks
//! (summary, then detail).

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::base::{DocKind, Ref};
use crate::error::{Error, Result};

/// A document as read from the source, before any interpretation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDocument {
    /// Front matter. Always a mapping; an empty or null front is `{}`.
    pub front: Value,
    /// Text blocks following the front matter, in order.
    pub body_parts: Vec<String>,
}

impl RawDocument {
    /// Parse document text for `doc` of `kind`.
    pub fn parse(kind: DocKind, doc: &Ref, text: &str) -> Result<Self> {
        let mut parts = Vec::new();
        for part in serde_yaml::Deserializer::from_str(text) {
            let value = Value::deserialize(part).map_err(|source| Error::Parse {
                kind,
                doc: doc.clone(),
                source,
            })?;
            parts.push(value);
        }

        let mut parts = parts.into_iter();
        let front = match parts.next() {
            None | Some(Value::Null) => Value::Mapping(Mapping::new()),
            Some(front) => front,
        };

        let body_parts = parts
            .enumerate()
            .map(|(index, part)| match part {
                Value::String(text) => Ok(text),
                Value::Null => Ok(String::new()),
                _ => Err(Error::BodyPart {
                    kind,
                    doc: doc.clone(),
                    index,
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { front, body_parts })
    }

    /// The body part at `index`, if present.
    pub fn body(&self, index: usize) -> Option<&str> {
        self.body_parts.get(index).map(String::as_str)
    }
}

/// Parse manifest text: a YAML sequence of refs. An empty manifest lists
/// nothing.
pub fn parse_manifest(text: &str) -> std::result::Result<Vec<Ref>, serde_yaml::Error> {
    let first = serde_yaml::Deserializer::from_str(text).next();
    match first {
        None => Ok(Vec::new()),
        Some(document) => Option::<Vec<Ref>>::deserialize(document).map(Option::unwrap_or_default),
    }
}
