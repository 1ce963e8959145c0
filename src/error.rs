//! Error types for the docx2wiki library.

use std::io;
use thiserror::Error;

/// Result type alias for docx2wiki operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a document or rendering markup.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognizable Office package.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The input is an Office package, but not a Word document.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// A list paragraph carries an indentation level that is not an integer
    /// in `0..=8`.
    #[error("Invalid list level: {value:?}")]
    InvalidListLevel {
        /// The raw `w:val` of the offending `w:ilvl` element.
        value: String,
    },

    /// The document has no `w:body` element.
    #[error("Document has no body")]
    MissingBody,
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}
