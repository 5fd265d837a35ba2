//! XCAP document selectors.
//!
//! A document selector locates one document on an XDMS:
//! `/<auid>/users/<xui>/<document>` for per-user documents and
//! `/<auid>/global/<document>` for global ones. A node selector may follow
//! after the `~~` separator.

use std::fmt;

use crate::{AUID, DEFAULT_DOCUMENT};

/// AUID of resource-lists documents, the usual target of `<resource-list>` references.
pub const RESOURCE_LISTS_AUID: &str = "resource-lists";

/// Which tree of the application a document lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// The per-user tree of the given XCAP User Identifier.
    Users(String),
    /// The global tree.
    Global,
}

/// Path of one XCAP document.
///
/// ```
/// use xcap_rls::DocumentSelector;
///
/// let selector = DocumentSelector::rls_services("sip:alice@example.com");
/// assert_eq!(selector.path(), "/rls-services/users/sip:alice@example.com/index");
/// assert_eq!(
///     selector.to_url("https://xcap.example.com/xcap-root/"),
///     "https://xcap.example.com/xcap-root/rls-services/users/sip:alice@example.com/index"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSelector {
    auid: String,
    tree: Tree,
    document: String,
}

impl DocumentSelector {
    /// Selector for a document of any application.
    pub fn new(auid: impl Into<String>, tree: Tree) -> Self {
        Self {
            auid: auid.into(),
            tree,
            document: DEFAULT_DOCUMENT.to_string(),
        }
    }

    /// The rls-services document of user `xui`.
    pub fn rls_services(xui: impl Into<String>) -> Self {
        Self::new(AUID, Tree::Users(xui.into()))
    }

    /// The resource-lists document of user `xui`.
    pub fn resource_lists(xui: impl Into<String>) -> Self {
        Self::new(RESOURCE_LISTS_AUID, Tree::Users(xui.into()))
    }

    /// The global rls-services document.
    pub fn global() -> Self {
        Self::new(AUID, Tree::Global)
    }

    /// Use `document` instead of the default document name.
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    /// Application unique ID.
    pub fn auid(&self) -> &str {
        &self.auid
    }

    /// Tree the document lives in.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Document name.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Absolute path relative to the XCAP root, starting with `/`.
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Path of a node inside this document.
    pub fn node(&self, node_selector: &str) -> String {
        format!("{}/~~/{}", self, node_selector.trim_start_matches('/'))
    }

    /// Reference to the `<list name="...">` element of a resource-lists document,
    /// in the form used by `<resource-list>` elements.
    ///
    /// ```
    /// use xcap_rls::DocumentSelector;
    ///
    /// let reference = DocumentSelector::resource_lists("sip:user@example.com").list_reference("friends");
    /// assert_eq!(
    ///     reference,
    ///     "/resource-lists/users/sip:user@example.com/index/~~/resource-lists/list%5B@name=%22friends%22%5D"
    /// );
    /// ```
    pub fn list_reference(&self, list_name: &str) -> String {
        self.node(&format!(
            "resource-lists/list%5B@name=%22{}%22%5D",
            list_name
        ))
    }

    /// Full URL below `xcap_root`.
    pub fn to_url(&self, xcap_root: &str) -> String {
        format!("{}{}", xcap_root.trim_end_matches('/'), self)
    }
}

impl fmt::Display for DocumentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tree {
            Tree::Users(xui) => write!(f, "/{}/users/{}/{}", self.auid, xui, self.document),
            Tree::Global => write!(f, "/{}/global/{}", self.auid, self.document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_path() {
        let selector = DocumentSelector::rls_services("sip:bob@example.com");
        assert_eq!(selector.path(), "/rls-services/users/sip:bob@example.com/index");
        assert_eq!(selector.auid(), "rls-services");
        assert_eq!(selector.document(), "index");
    }

    #[test]
    fn test_global_path() {
        assert_eq!(DocumentSelector::global().path(), "/rls-services/global/index");
    }

    #[test]
    fn test_custom_document() {
        let selector = DocumentSelector::rls_services("sip:bob@example.com").with_document("work");
        assert_eq!(selector.path(), "/rls-services/users/sip:bob@example.com/work");
    }

    #[test]
    fn test_to_url_without_trailing_slash() {
        let selector = DocumentSelector::global();
        assert_eq!(
            selector.to_url("http://xdms.example.com/services"),
            "http://xdms.example.com/services/rls-services/global/index"
        );
    }

    #[test]
    fn test_node_selector() {
        let selector = DocumentSelector::rls_services("sip:bob@example.com");
        assert_eq!(
            selector.node("/rls-services/service"),
            "/rls-services/users/sip:bob@example.com/index/~~/rls-services/service"
        );
    }
}
