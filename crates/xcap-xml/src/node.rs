//! Owned XML element.

/// An element in the parsed tree.
///
/// A node owns its tag, attributes, text and children outright; nothing
/// borrows from the buffer it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Local name of the element (namespace prefix stripped).
    pub tag: String,
    /// Character data directly inside this element, trimmed. Runs split by
    /// child elements are concatenated with no separator: `a<x/>b` gives `"ab"`.
    pub content: String,
    /// Attributes as key-value pairs, in document order. Keys keep their prefix.
    pub attributes: Vec<(String, String)>,
    /// Child elements, in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create a new node with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the text content of this node.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Add an attribute to this node.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child node.
    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether this element's local name is `tag`.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Value of the attribute `name`.
    ///
    /// A key equal to `name` wins; otherwise the first prefixed key whose
    /// local part is `name` is used. `xmlns:` declarations never match by
    /// local part.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|(key, _)| !key.starts_with("xmlns:") && local_part(key) == name)
            })
            .map(|(_, value)| value.as_str())
    }

    /// Text content of this element.
    pub fn text(&self) -> &str {
        &self.content
    }
}

fn local_part(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
