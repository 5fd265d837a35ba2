//! Owned XML element tree for XCAP documents.
//!
//! XCAP application documents (rls-services, resource-lists, pres-rules, ...)
//! are small and are read whole. This crate parses such a buffer into an
//! owned tree of [`XmlNode`]s and provides read-only navigation over it:
//! depth-first lookup by tag name, lazy iteration over same-named siblings,
//! and path selection with attribute or text projection.
//!
//! Documents nested deeper than [`MAX_DEPTH`] elements are rejected, which
//! keeps the recursive tree operations within a bounded stack.
//!
//! Element and attribute names are matched on their local part, so
//! `<rls:service>` and `<service>` are the same element to the navigator.
//!
//! # Example
//!
//! ```
//! use xcap_xml::XmlDocument;
//!
//! let xml = br#"<rls-services xmlns="urn:ietf:params:xml:ns:rls-services">
//!     <service uri="sip:a@example.com"/>
//!     <service uri="sip:b@example.com"/>
//! </rls-services>"#;
//!
//! let doc = XmlDocument::parse(xml)?;
//! let uris: Vec<_> = doc
//!     .root()
//!     .children_named("service")
//!     .filter_map(|s| s.attribute("uri"))
//!     .collect();
//! assert_eq!(uris, ["sip:a@example.com", "sip:b@example.com"]);
//! # Ok::<(), xcap_xml::Error>(())
//! ```

mod error;
mod navigator;
mod node;
mod parser;

pub use error::{Error, Result};
pub use navigator::Siblings;
pub use node::XmlNode;
pub use parser::{XmlDocument, MAX_DEPTH};
