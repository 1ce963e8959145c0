//! DOCX (Word) document parser.
//!
//! This module reads the body part of an Office Open XML (.docx) package
//! into a [`crate::model::Element`] tree.

mod parser;

pub use parser::{parse_xml, DocxParser, DOCUMENT_PART};
