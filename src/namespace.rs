//! XML namespaces used by WordprocessingML packages.
//!
//! Word writes the same prefixes in every `document.xml`, but matching is done
//! on the namespace URI, never on the prefix a particular file happens to use.
//! This table maps the conventional prefixes to their URIs so that qualified
//! names can be written the way they appear in Word output (`w:p`, `pic:cNvPr`).

use crate::model::QualifiedName;

/// WordprocessingML main namespace (`w`).
pub const WORDPROCESSING: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// DrawingML picture namespace (`pic`).
pub const PICTURE: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Prefix to namespace URI table for everything Word emits in
/// `document.xml` and the package property parts.
pub const NAMESPACES: &[(&str, &str)] = &[
    // Text content
    ("mv", "urn:schemas-microsoft-com:mac:vml"),
    ("mo", "http://schemas.microsoft.com/office/mac/office/2008/main"),
    ("ve", "http://schemas.openxmlformats.org/markup-compatibility/2006"),
    ("o", "urn:schemas-microsoft-com:office:office"),
    ("r", "http://schemas.openxmlformats.org/officeDocument/2006/relationships"),
    ("m", "http://schemas.openxmlformats.org/officeDocument/2006/math"),
    ("v", "urn:schemas-microsoft-com:vml"),
    ("w", WORDPROCESSING),
    ("w10", "urn:schemas-microsoft-com:office:word"),
    ("wne", "http://schemas.microsoft.com/office/word/2006/wordml"),
    // Drawing
    ("wp", "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing"),
    ("a", "http://schemas.openxmlformats.org/drawingml/2006/main"),
    ("pic", PICTURE),
    // Core and extended properties
    ("cp", "http://schemas.openxmlformats.org/package/2006/metadata/core-properties"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("dcmitype", "http://purl.org/dc/dcmitype/"),
    ("xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("ep", "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"),
    // Package content types and relationships
    ("ct", "http://schemas.openxmlformats.org/package/2006/content-types"),
    ("pr", "http://schemas.openxmlformats.org/package/2006/relationships"),
];

/// Look up the namespace URI for a conventional prefix.
pub fn resolve(prefix: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Build a qualified name from a conventional prefix and a local name.
///
/// Returns `None` for prefixes outside [`NAMESPACES`].
///
/// # Example
///
/// ```
/// use docx2wiki::namespace::{qualify, WORDPROCESSING};
///
/// let name = qualify("w", "p").unwrap();
/// assert!(name.is(WORDPROCESSING, "p"));
/// ```
pub fn qualify(prefix: &str, local: &str) -> Option<QualifiedName> {
    resolve(prefix).map(|uri| QualifiedName::new(Some(uri), local))
}

/// Qualified name in the WordprocessingML namespace.
pub fn w(local: &str) -> QualifiedName {
    QualifiedName::new(Some(WORDPROCESSING), local)
}

/// Qualified name in the DrawingML picture namespace.
pub fn pic(local: &str) -> QualifiedName {
    QualifiedName::new(Some(PICTURE), local)
}
