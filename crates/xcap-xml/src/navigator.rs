//! Read-only navigation over an [`XmlNode`] tree.
//!
//! None of these operations mutate the tree or take ownership of any part
//! of it; every result borrows from the node it was asked on.

use std::iter::FusedIterator;
use std::slice;

use crate::XmlNode;

/// Lazy iterator over the elements of a sibling run that carry a given tag.
///
/// Created by [`XmlNode::children_named`] or [`Siblings::new`]. The iterator
/// is finite and borrows the run; to start over, create a new one from the
/// parent.
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    nodes: slice::Iter<'a, XmlNode>,
    tag: &'a str,
}

impl<'a> Siblings<'a> {
    /// Iterate the nodes of `run` whose tag equals `tag`, in document order.
    pub fn new(run: &'a [XmlNode], tag: &'a str) -> Self {
        Self {
            nodes: run.iter(),
            tag,
        }
    }
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.tag;
        self.nodes.find(|node| node.is(tag))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.nodes.size_hint().1)
    }
}

impl FusedIterator for Siblings<'_> {}

impl XmlNode {
    /// Find the first element named `tag`, depth-first in document order.
    ///
    /// The search starts with `self`, so a node always finds itself.
    pub fn find(&self, tag: &str) -> Option<&XmlNode> {
        if self.is(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// The first direct child named `tag`.
    pub fn first_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.is(tag))
    }

    /// Iterate the direct children named `tag`, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> Siblings<'a> {
        Siblings::new(&self.children, tag)
    }

    /// Resolve a chain of nested tag names.
    ///
    /// The first name is located with [`find`](Self::find); each following
    /// name must be a direct child of the previous match. Returns `None` as
    /// soon as a step is absent. An empty path selects `self`.
    ///
    /// ```
    /// use xcap_xml::XmlDocument;
    ///
    /// let doc = XmlDocument::parse_str(
    ///     "<service><packages><package>presence</package></packages></service>",
    /// )?;
    /// let package = doc.root().select(&["service", "packages", "package"]);
    /// assert_eq!(package.map(|p| p.text()), Some("presence"));
    /// # Ok::<(), xcap_xml::Error>(())
    /// ```
    pub fn select(&self, path: &[&str]) -> Option<&XmlNode> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        rest.iter()
            .try_fold(self.find(first)?, |node, tag| node.first_child(tag))
    }

    /// Resolve `path` and project the value of attribute `name` on the final element.
    pub fn select_attribute(&self, path: &[&str], name: &str) -> Option<&str> {
        self.select(path)?.attribute(name)
    }

    /// Resolve `path` and project the text content of the final element.
    pub fn select_text(&self, path: &[&str]) -> Option<&str> {
        self.select(path).map(XmlNode::text)
    }
}
