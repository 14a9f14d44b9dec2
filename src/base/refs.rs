//! Document references.

use std::fmt;

use smol_str::SmolStr;

/// A reference to a document: the key a manifest lists and the file stem
/// of the document itself (e.g. `list`, `push`, `ordered`).
///
/// Refs are short, so `SmolStr` keeps them inline and cheap to clone.
pub type Ref = SmolStr;

/// A mixin declaration `parent/method`.
///
/// Grants a collection the implementation of `method` supplied by `parent`
/// without inheriting anything else from it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MixinRef {
    /// The collection supplying the implementation.
    pub parent: Ref,
    /// The method being borrowed.
    pub method: Ref,
}

impl MixinRef {
    /// Parse a `parent/method` entry from its first two `/`-separated
    /// segments. Further segments are ignored and segments are not trimmed.
    ///
    /// Returns `None` if there is no slash or either segment is empty.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut segments = entry.split('/');
        let parent = segments.next()?;
        let method = segments.next()?;
        if parent.is_empty() || method.is_empty() {
            return None;
        }
        Some(Self {
            parent: Ref::new(parent),
            method: Ref::new(method),
        })
    }
}

impl fmt::Debug for MixinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MixinRef({}/{})", self.parent, self.method)
    }
}

impl fmt::Display for MixinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixin_parse() {
        let mixin = MixinRef::parse("generic-collection/add-each").unwrap();
        assert_eq!(mixin.parent, "generic-collection");
        assert_eq!(mixin.method, "add-each");
    }

    #[test]
    fn test_mixin_parse_ignores_extra_segments() {
        let mixin = MixinRef::parse("a/b/c").unwrap();
        assert_eq!(mixin.parent, "a");
        assert_eq!(mixin.method, "b");
    }

    #[test]
    fn test_mixin_parse_keeps_whitespace() {
        let mixin = MixinRef::parse("list / push").unwrap();
        assert_eq!(mixin.parent, "list ");
        assert_eq!(mixin.method, " push");
    }

    #[test]
    fn test_mixin_parse_rejects_malformed() {
        assert!(MixinRef::parse("no-slash").is_none());
        assert!(MixinRef::parse("/method").is_none());
        assert!(MixinRef::parse("parent/").is_none());
        assert!(MixinRef::parse("parent//method").is_none());
    }

    #[test]
    fn test_mixin_display_roundtrip() {
        let mixin = MixinRef::parse("list/push").unwrap();
        assert_eq!(mixin.to_string(), "list/push");
    }
}
