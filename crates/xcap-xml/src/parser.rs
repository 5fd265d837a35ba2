//! Parse XML text into an owned [`XmlNode`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Error, Result, XmlNode};

/// Deepest element nesting accepted by [`XmlDocument::parse`]. The root is at depth 1.
pub const MAX_DEPTH: usize = 256;

/// A parsed XML document.
///
/// Owns the whole element tree. Dropping the document frees it; everything
/// handed out by the navigator borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlNode,
}

impl XmlDocument {
    /// Parse an XML buffer.
    ///
    /// The buffer must be UTF-8, hold exactly one root element and be
    /// well-formed. An empty buffer is rejected with [`Error::EmptyInput`].
    ///
    /// # Example
    ///
    /// ```
    /// use xcap_xml::XmlDocument;
    ///
    /// let doc = XmlDocument::parse(br#"<?xml version="1.0"?><packages><package>presence</package></packages>"#)?;
    /// assert_eq!(doc.root().tag, "packages");
    /// # Ok::<(), xcap_xml::Error>(())
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.is_empty() {
            return Err(Error::EmptyInput);
        }
        let xml = std::str::from_utf8(buffer)?;
        let root = parse_xml_to_node(xml.strip_prefix('\u{feff}').unwrap_or(xml))?;
        tracing::trace!(root = %root.tag, "parsed XML document");
        Ok(Self { root })
    }

    /// Parse XML text.
    pub fn parse_str(xml: &str) -> Result<Self> {
        Self::parse(xml.as_bytes())
    }

    /// Wrap an already built tree.
    pub fn from_root(root: XmlNode) -> Self {
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Consume the document, returning its root element.
    pub fn into_root(self) -> XmlNode {
        self.root
    }
}

/// Parse XML text into an XmlNode tree.
fn parse_xml_to_node(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                check_depth(&stack)?;
                let node = start_node(&e)?;
                if stack.is_empty() {
                    check_single_root(&root, &node)?;
                }
                stack.push(node);
            }
            Ok(Event::Empty(e)) => {
                // Self-closing element
                check_depth(&stack)?;
                let node = start_node(&e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut root, node)?;
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                append_text(&mut stack, &text)?;
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut stack, &text)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // Declarations, comments, processing instructions, doctype
            Err(e) => {
                return Err(Error::Xml(format!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(Error::UnclosedElement { tag: open.tag });
    }

    root.ok_or(Error::NoRoot)
}

/// Build a childless node from a start or empty tag.
fn start_node(e: &BytesStart<'_>) -> Result<XmlNode> {
    let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut node = XmlNode::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?
            .into_owned();
        node.attributes.push((key, value));
    }

    Ok(node)
}

/// Hang a finished node on its parent, or make it the root.
fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            check_single_root(root, &node)?;
            *root = Some(node);
        }
    }
    Ok(())
}

fn check_single_root(root: &Option<XmlNode>, node: &XmlNode) -> Result<()> {
    if root.is_some() {
        return Err(Error::MultipleRoots {
            tag: node.tag.clone(),
        });
    }
    Ok(())
}

/// Reject an element that would open below [`MAX_DEPTH`].
fn check_depth(stack: &[XmlNode]) -> Result<()> {
    let depth = stack.len() + 1;
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep { depth });
    }
    Ok(())
}

/// Text runs separated by child elements are joined without a separator.
fn append_text(stack: &mut [XmlNode], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(node) => {
            node.content.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(Error::StrayText {
            text: text.to_string(),
        }),
    }
}
