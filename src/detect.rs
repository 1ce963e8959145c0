//! Package format detection.
//!
//! Only Word documents can be converted; spreadsheets and presentations share
//! the same container format and have to be told apart before parsing.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Detected Office package format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Word document (.docx)
    Docx,
    /// Excel workbook (.xlsx)
    Xlsx,
    /// PowerPoint presentation (.pptx)
    Pptx,
}

impl FormatType {
    /// Human-readable name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Docx => "Word Document",
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Pptx => "PowerPoint Presentation",
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.starts_with(&ZIP_MAGIC)
}

/// Classify an opened package.
///
/// `[Content_Types].xml` decides when it names a main part; otherwise the
/// top-level folder layout does.
pub fn detect_format(container: &OoxmlContainer) -> Result<FormatType> {
    let content_types = container.read_xml("[Content_Types].xml")?;

    if content_types.contains(DOCX_CONTENT_TYPE) {
        return Ok(FormatType::Docx);
    }
    if content_types.contains(XLSX_CONTENT_TYPE) {
        return Ok(FormatType::Xlsx);
    }
    if content_types.contains(PPTX_CONTENT_TYPE) {
        return Ok(FormatType::Pptx);
    }

    let names = container.list_files();
    let has = |prefix: &str| names.iter().any(|n| n.starts_with(prefix));

    match (has("word/"), has("xl/"), has("ppt/")) {
        (true, false, false) => Ok(FormatType::Docx),
        (false, true, false) => Ok(FormatType::Xlsx),
        (false, false, true) => Ok(FormatType::Pptx),
        _ => Err(Error::UnknownFormat),
    }
}

/// Fail unless the package is a Word document.
pub fn ensure_word_document(container: &OoxmlContainer) -> Result<()> {
    match detect_format(container)? {
        FormatType::Docx => Ok(()),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}
