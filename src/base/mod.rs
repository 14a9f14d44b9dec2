//! Foundation types for the colldoc toolchain.
//!
//! This module provides fundamental types used throughout the resolver:
//! - [`Ref`] - Document references (collection, method and interface keys)
//! - [`DocKind`] - The three kinds of documents in a corpus
//! - [`MixinRef`] - A parsed `parent/method` mixin declaration
//! - [`text`] - Search key normalization helpers
//!
//! This module has NO dependencies on other colldoc modules.

mod kind;
mod refs;
pub mod text;

pub use kind::DocKind;
pub use refs::{MixinRef, Ref};
