//! XCAP - XML Configuration Access Protocol document handling.
//!
//! This crate provides a unified interface to the XCAP library crates.
//!
//! # Crates
//!
//! - [`xcap_xml`] - Owned XML element tree and navigation
//! - [`xcap_rls`] - RFC 4826 rls-services documents
//!
//! # Example
//!
//! ```no_run
//! use xcap::prelude::*;
//!
//! let buffer = std::fs::read("index.xml")?;
//! let document = RlsDocument::parse(&buffer)?;
//!
//! for service in &document.services() {
//!     println!("{}: {:?}", service.uri().unwrap_or("-"), service.packages());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use xcap_rls as rls;
pub use xcap_xml as xml;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use xcap_rls::{
        DocumentSelector, EncodeOptions, Escaping, RlsDocument, RlsServices, Service,
    };
    pub use xcap_xml::{XmlDocument, XmlNode};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
