//! # docx2wiki
//!
//! Convert the body of a Word (.docx) document to lightweight wiki markup.
//!
//! The package is opened, `word/document.xml` is parsed into a
//! namespace-aware element tree, and the tree is rendered in a single pass:
//!
//! - heading styles 1-6 become `h1. text` .. `h6. text`
//! - list items at level N get N+1 `*` bullets
//! - table rows become `|cell|cell|` lines
//! - named pictures become `!name!`
//!
//! ## Quick Start
//!
//! ```no_run
//! // Convert a file
//! let markup = docx2wiki::to_wiki("document.docx")?;
//! std::fs::write("document.wiki", markup)?;
//!
//! // Work with the tree directly
//! let tree = docx2wiki::parse_file("document.docx")?;
//! println!("Top-level elements: {}", tree.children.len());
//! # Ok::<(), docx2wiki::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod model;
pub mod namespace;
pub mod render;

// Re-exports
pub use container::OoxmlContainer;
pub use detect::{detect_format, FormatType};
pub use error::{Error, Result};
pub use model::{Attribute, Element, QualifiedName};
pub use render::RenderOptions;

use std::path::Path;

/// Parse a .docx file into its document tree, rooted at `w:document`.
///
/// # Example
///
/// ```no_run
/// use docx2wiki::parse_file;
///
/// let tree = parse_file("document.docx")?;
/// println!("Root: {}", tree.name);
/// # Ok::<(), docx2wiki::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Element> {
    docx::DocxParser::open(path)?.parse()
}

/// Parse a .docx package held in memory.
///
/// # Example
///
/// ```no_run
/// use docx2wiki::parse_bytes;
///
/// let data = std::fs::read("document.docx")?;
/// let tree = parse_bytes(&data)?;
/// # Ok::<(), docx2wiki::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Element> {
    if !detect::is_zip_file(data) {
        return Err(Error::UnknownFormat);
    }
    docx::DocxParser::from_bytes(data.to_vec())?.parse()
}

/// Convert a .docx file to wiki markup.
///
/// # Example
///
/// ```no_run
/// let markup = docx2wiki::to_wiki("document.docx")?;
/// std::fs::write("document.wiki", markup)?;
/// # Ok::<(), docx2wiki::Error>(())
/// ```
pub fn to_wiki(path: impl AsRef<Path>) -> Result<String> {
    to_wiki_with_options(path, &RenderOptions::default())
}

/// Convert a .docx file to wiki markup with options.
///
/// # Example
///
/// ```no_run
/// use docx2wiki::{to_wiki_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_pictures(false).with_max_heading(3);
/// let markup = to_wiki_with_options("document.docx", &options)?;
/// # Ok::<(), docx2wiki::Error>(())
/// ```
pub fn to_wiki_with_options(path: impl AsRef<Path>, options: &RenderOptions) -> Result<String> {
    let tree = parse_file(path)?;
    render_document(&tree, options)
}

/// Convert a .docx package held in memory to wiki markup.
pub fn bytes_to_wiki(data: &[u8], options: &RenderOptions) -> Result<String> {
    let tree = parse_bytes(data)?;
    render_document(&tree, options)
}

fn render_document(tree: &Element, options: &RenderOptions) -> Result<String> {
    render::to_wiki(tree, options)?.ok_or(Error::MissingBody)
}
