//! RFC 4826 rls-services documents.
//!
//! An rls-services document tells a Resource List Server which list URIs it
//! serves, which resource list each one expands to and which event packages
//! may be subscribed to. This crate decodes such a document, as stored on an
//! XDMS, into an ordered [`RlsServices`] collection and encodes a collection
//! back into the canonical form for upload.
//!
//! # Application usage
//!
//! | | |
//! |---|---|
//! | AUID | `rls-services` |
//! | Namespace | `urn:ietf:params:xml:ns:rls-services` |
//! | MIME type | `application/rls-services+xml` |
//! | Default document | `index` |
//!
//! # Example
//!
//! ```
//! use xcap_rls::{RlsDocument, Service};
//!
//! let buffer = br#"<?xml version="1.0" encoding="UTF-8"?>
//! <rls-services xmlns="urn:ietf:params:xml:ns:rls-services">
//!   <service uri="sip:friends@example.com">
//!     <resource-list>/resource-lists/users/sip:bob@example.com/index/~~/resource-lists/list%5B@name=%22friends%22%5D</resource-list>
//!     <packages><package>presence</package></packages>
//!   </service>
//! </rls-services>"#;
//!
//! let document = RlsDocument::parse(buffer)?;
//! let mut services = document.services();
//! document.release();
//!
//! services.push(Service::new("sip:work@example.com", "/lists/work").with_package("presence"));
//! let xml = services.to_xml()?;
//! assert!(xml.contains(r#"<service uri="sip:work@example.com">"#));
//! # Ok::<(), xcap_rls::Error>(())
//! ```

mod document;
mod encode;
mod error;
mod selector;
mod service;
mod services;

pub use document::RlsDocument;
pub use encode::{encode_service, encode_services, write_services, EncodeOptions, Escaping};
pub use error::{Error, Result};
pub use selector::{DocumentSelector, Tree, RESOURCE_LISTS_AUID};
pub use service::Service;
pub use services::RlsServices;

/// Application Unique ID of rls-services documents.
pub const AUID: &str = "rls-services";

/// Default document namespace.
pub const NAMESPACE: &str = "urn:ietf:params:xml:ns:rls-services";

/// MIME type of rls-services documents.
pub const MIME_TYPE: &str = "application/rls-services+xml";

/// Default document name.
pub const DEFAULT_DOCUMENT: &str = "index";

/// Parse `buffer` and decode all of its services in one step.
pub fn decode(buffer: &[u8]) -> Result<RlsServices> {
    let document = RlsDocument::parse(buffer)?;
    let services = document.services();
    document.release();
    Ok(services)
}
