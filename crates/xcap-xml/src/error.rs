//! Error types for XML tree construction.

use thiserror::Error;

/// Errors that can occur when parsing a buffer into an [`XmlDocument`](crate::XmlDocument).
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer was empty.
    #[error("empty input buffer")]
    EmptyInput,

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Syntax error reported by the XML reader.
    #[error("XML error: {0}")]
    Xml(String),

    /// The buffer contained no element at all.
    #[error("no root element found in XML")]
    NoRoot,

    /// A second top-level element followed the root.
    #[error("unexpected top-level element <{tag}> after the root element")]
    MultipleRoots { tag: String },

    /// Character data outside of the root element.
    #[error("unexpected text outside the root element: {text:?}")]
    StrayText { text: String },

    /// Elements nested deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("element nesting depth {depth} exceeds the limit of {}", crate::MAX_DEPTH)]
    TooDeep { depth: usize },

    /// The buffer ended before an element was closed.
    #[error("element <{tag}> is not closed")]
    UnclosedElement { tag: String },
}

/// Result type for XML tree operations.
pub type Result<T> = std::result::Result<T, Error>;
