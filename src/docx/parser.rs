//! DOCX parser: reads `word/document.xml` into an element tree.

use crate::container::OoxmlContainer;
use crate::detect;
use crate::error::{Error, Result};
use crate::model::{Attribute, Element, QualifiedName};

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// Package part holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Parser for DOCX (Word) documents.
#[derive(Debug)]
pub struct DocxParser {
    container: OoxmlContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from an opened container.
    ///
    /// Fails with [`Error::UnsupportedFormat`] for spreadsheets and
    /// presentations.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        detect::ensure_word_document(&container)?;
        Ok(Self { container })
    }

    /// Parse the main document part into its element tree, rooted at
    /// `w:document`.
    pub fn parse(&self) -> Result<Element> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        parse_xml(&xml)
    }
}

/// Build an element tree from XML text.
///
/// Names are resolved against the namespace declarations in scope, so
/// `<w:p>` and `<x:p xmlns:x="...wordprocessingml...">` produce the same
/// tag. Character data is unescaped and kept verbatim, whitespace included.
pub fn parse_xml(xml: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut count = 0usize;

    loop {
        buf.clear();
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let namespace = namespace_uri(ns);

        match event {
            Event::Start(e) => {
                count += 1;
                stack.push(start_element(&reader, namespace, &e)?);
            }
            Event::Empty(e) => {
                count += 1;
                let element = start_element(&reader, namespace, &e)?;
                close(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    close(element, &mut stack, &mut root);
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    append_text(current, &String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::XmlParse(format!("unclosed element {}", open.name)));
    }

    let root = root.ok_or_else(|| Error::XmlParse("no root element".to_string()))?;
    tracing::debug!(root = %root.name, elements = count, "Built document tree");
    Ok(root)
}

fn namespace_uri(ns: ResolveResult) -> Option<String> {
    match ns {
        ResolveResult::Bound(uri) => Some(String::from_utf8_lossy(uri.as_ref()).into_owned()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            tracing::trace!(
                prefix = %String::from_utf8_lossy(&prefix),
                "Undeclared namespace prefix"
            );
            None
        }
    }
}

/// Fails on attributes that are not well-formed, including duplicates.
fn start_element<R>(
    reader: &NsReader<R>,
    namespace: Option<String>,
    e: &BytesStart,
) -> Result<Element> {
    let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut element = Element::new(QualifiedName { namespace, local });

    for attr in e.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }

        let (attr_ns, attr_local) = reader.resolve_attribute(attr.key);
        let name = QualifiedName {
            namespace: namespace_uri(attr_ns),
            local: String::from_utf8_lossy(attr_local.as_ref()).into_owned(),
        };
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );

        element.attributes.push(Attribute { name, value });
    }

    Ok(element)
}

/// Attach a finished element to its parent, or make it the root.
fn close(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            root.get_or_insert(element);
        }
    }
}

fn append_text(element: &mut Element, text: &str) {
    element.text.get_or_insert_with(String::new).push_str(text);
}
