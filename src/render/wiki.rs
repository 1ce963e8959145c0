//! Wiki markup renderer.
//!
//! Walks the document body once, top-down and left to right. Each node is
//! routed by its tag to one structural handler; everything without a handler
//! is flattened to its text. Every handler returns its own string, which the
//! caller appends to its result.

use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::model::{Element, QualifiedName};
use crate::namespace::{self, WORDPROCESSING};

use super::extract::extract_text;
use super::options::RenderOptions;

type Handler = fn(&Element, &RenderOptions) -> Result<String>;

/// Deepest list level Word writes (levels run 0..=8).
pub const MAX_LIST_LEVEL: u32 = 8;

/// Structural node kinds with a dedicated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `w:p`
    Paragraph,
    /// `w:tbl`
    Table,
    /// `w:tr`
    Row,
    /// `w:tc`
    Cell,
    /// `w:t`
    Text,
}

static STRUCTURAL: LazyLock<[(QualifiedName, NodeKind); 5]> = LazyLock::new(|| {
    [
        (namespace::w("p"), NodeKind::Paragraph),
        (namespace::w("tbl"), NodeKind::Table),
        (namespace::w("tr"), NodeKind::Row),
        (namespace::w("tc"), NodeKind::Cell),
        (namespace::w("t"), NodeKind::Text),
    ]
});

impl NodeKind {
    /// Classify a tag; `None` for tags rendered as plain text.
    pub fn of(name: &QualifiedName) -> Option<Self> {
        STRUCTURAL
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, kind)| *kind)
    }

    fn handler(self) -> Handler {
        match self {
            NodeKind::Paragraph => render_paragraph,
            NodeKind::Table => render_table,
            NodeKind::Row => render_row,
            NodeKind::Cell => render_cell,
            NodeKind::Text => render_text_run,
        }
    }
}

/// Convert a document tree to wiki markup.
///
/// `root` is either the `w:body` element or the element directly containing
/// it (normally `w:document`). Returns `Ok(None)` when there is no body, so
/// callers can tell a missing body from an empty one.
///
/// # Example
///
/// ```
/// use docx2wiki::model::Element;
/// use docx2wiki::namespace::w;
/// use docx2wiki::render::{to_wiki, RenderOptions};
///
/// let body = Element::new(w("body")).with_child(
///     Element::new(w("p")).with_child(Element::new(w("t")).with_text("Hello")),
/// );
/// let markup = to_wiki(&body, &RenderOptions::default())?;
/// assert_eq!(markup.as_deref(), Some("Hello\n"));
/// # Ok::<(), docx2wiki::Error>(())
/// ```
pub fn to_wiki(root: &Element, options: &RenderOptions) -> Result<Option<String>> {
    let body = if root.is(WORDPROCESSING, "body") {
        Some(root)
    } else {
        root.children().find(|child| child.is(WORDPROCESSING, "body"))
    };

    let Some(body) = body else {
        tracing::debug!(root = %root.name, "No document body");
        return Ok(None);
    };

    tracing::debug!(blocks = body.children.len(), "Rendering document body");
    render_children(body, options).map(Some)
}

/// Render a single node with the handler for its tag, falling back to
/// [`extract_text`].
pub fn dispatch(node: &Element, options: &RenderOptions) -> Result<String> {
    match NodeKind::of(&node.name) {
        Some(kind) => (kind.handler())(node, options),
        None => {
            tracing::trace!(tag = %node.name, "No structural handler, extracting text");
            Ok(extract_text(node, options))
        }
    }
}

fn render_children(node: &Element, options: &RenderOptions) -> Result<String> {
    node.children().map(|child| dispatch(child, options)).collect()
}

/// Render a paragraph as one line: heading or list prefix, then its text.
///
/// The paragraph is scanned in document order. The first heading style
/// (`w:pStyle` with value `1`..`6`) emits `hN. ` and ends the scan; each list
/// level (`w:ilvl`) seen before that emits `level + 1` stars and a space.
///
/// # Errors
///
/// [`Error::InvalidListLevel`] when a list level is not an integer in
/// `0..=MAX_LIST_LEVEL`.
pub fn render_paragraph(p: &Element, options: &RenderOptions) -> Result<String> {
    let mut content = String::new();

    for element in p.descendants() {
        if element.is(WORDPROCESSING, "pStyle") {
            let level = element
                .attribute_ns(WORDPROCESSING, "val")
                .and_then(|style| heading_level(style, options.max_heading_level));
            if let Some(level) = level {
                content.push_str(&format!("h{level}. "));
                break;
            }
        } else if element.is(WORDPROCESSING, "ilvl") {
            let value = element.attribute_ns(WORDPROCESSING, "val").unwrap_or_default();
            let level = value
                .parse::<u32>()
                .ok()
                .filter(|level| *level <= MAX_LIST_LEVEL)
                .ok_or_else(|| Error::InvalidListLevel {
                    value: value.to_string(),
                })?;
            content.push_str(&"*".repeat(level as usize + 1));
            content.push(' ');
        }
    }

    content.push_str(&extract_text(p, options));
    content.push('\n');
    Ok(content)
}

/// Heading level named by a paragraph style: a single digit up to `max`.
fn heading_level(style: &str, max: u8) -> Option<u8> {
    match style.as_bytes() {
        [digit @ b'1'..=b'6'] => Some(digit - b'0').filter(|level| *level <= max),
        _ => None,
    }
}

/// Render a table as the concatenation of its rows.
pub fn render_table(tbl: &Element, options: &RenderOptions) -> Result<String> {
    render_children(tbl, options)
}

/// Render a row as `|cell|cell|...|` plus a newline. Each cell supplies its
/// own closing `|`.
pub fn render_row(tr: &Element, options: &RenderOptions) -> Result<String> {
    let cells = render_children(tr, options)?;
    Ok(format!("|{cells}\n"))
}

/// Render a cell's content followed by `|`.
///
/// Paragraphs are joined by line breaks escaped as `\\` so the row stays on
/// one markup line. An empty cell renders as a single space, keeping the
/// column count of the row intact.
pub fn render_cell(tc: &Element, options: &RenderOptions) -> Result<String> {
    let paragraphs: Vec<String> = tc
        .descendants()
        .filter(|node| node.is(WORDPROCESSING, "p"))
        .map(|p| extract_text(p, options))
        .collect();

    let mut content = if paragraphs.is_empty() {
        String::new()
    } else {
        paragraphs.join("\n").replace('\n', "\\\\\n")
    };

    if content.is_empty() {
        content.push(' ');
    }
    content.push('|');
    Ok(content)
}

/// Render a bare text run as its text.
pub fn render_text_run(t: &Element, _options: &RenderOptions) -> Result<String> {
    Ok(t.text().to_string())
}
