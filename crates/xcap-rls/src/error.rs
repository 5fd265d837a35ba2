//! Error types for rls-services decoding and encoding.

use thiserror::Error;

/// Errors that can occur when reading or writing an rls-services document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer was empty.
    #[error("empty rls-services buffer")]
    EmptyInput,

    /// The buffer is not a well-formed XML document.
    #[error("malformed rls-services document: {0}")]
    Parse(#[from] xcap_xml::Error),

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Encoded output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for rls-services operations.
pub type Result<T> = std::result::Result<T, Error>;
