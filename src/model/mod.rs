//! In-memory document tree.
//!
//! The parser materializes `word/document.xml` into these structures and the
//! renderer walks them. The tree is read-only once built.

mod element;

pub use element::*;
