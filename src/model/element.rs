//! Namespace-aware XML element tree.

use serde::Serialize;
use std::fmt;

/// An XML name resolved against its namespace: the pair that identifies a
/// node's kind regardless of the prefix used in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    /// Namespace URI, `None` for names outside any namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Local part of the name
    pub local: String,
}

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(namespace: Option<&str>, local: &str) -> Self {
        Self {
            namespace: namespace.map(String::from),
            local: local.to_string(),
        }
    }

    /// Create a name that belongs to no namespace (e.g. the `name` attribute
    /// of `pic:cNvPr`).
    pub fn unqualified(local: &str) -> Self {
        Self::new(None, local)
    }

    /// Check whether this name is `local` within `namespace`.
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }
}

/// Clark notation: `{namespace}local`, or just `local` without a namespace.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name
    pub name: QualifiedName,
    /// Unescaped attribute value
    pub value: String,
}

/// A node of the document tree.
///
/// The tree owns its children exclusively, so traversal order is the order of
/// the `children` vectors, which is document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    /// Qualified tag
    pub name: QualifiedName,

    /// Attributes in document order (namespace declarations excluded)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    /// Character data directly inside this element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child elements
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: QualifiedName, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name,
            value: value.into(),
        });
        self
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Check whether this element's tag is `local` within `namespace`.
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.name.is(namespace, local)
    }

    /// Value of an attribute that belongs to no namespace.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local == local)
            .map(|a| a.value.as_str())
    }

    /// Value of a namespaced attribute, e.g. `w:val`.
    pub fn attribute_ns(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local))
            .map(|a| a.value.as_str())
    }

    /// Text content, empty when the element has none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Iterate over direct children in document order.
    pub fn children(&self) -> std::slice::Iter<'_, Element> {
        self.children.iter()
    }

    /// Depth-first, pre-order iteration over this element and every
    /// descendant, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Element::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
