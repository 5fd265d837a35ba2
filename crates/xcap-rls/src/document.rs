//! Parsed rls-services document.

use xcap_xml::XmlDocument;

use crate::{Error, Result, RlsServices, Service};

/// A parsed rls-services document.
///
/// Holds the XML tree for as long as the caller needs it. Decoding copies
/// every string out, so collections obtained from [`services`](Self::services)
/// stay valid after the document is released.
#[derive(Debug, Clone)]
pub struct RlsDocument {
    xml: XmlDocument,
}

impl RlsDocument {
    /// Parse an rls-services buffer received from an XDMS.
    ///
    /// Fails with [`Error::EmptyInput`] for an empty buffer and with
    /// [`Error::Parse`] when the buffer is not well-formed XML.
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.is_empty() {
            return Err(Error::EmptyInput);
        }
        let xml = XmlDocument::parse(buffer)?;
        tracing::debug!(bytes = buffer.len(), "parsed rls-services document");
        Ok(Self { xml })
    }

    /// The underlying XML tree.
    pub fn xml(&self) -> &XmlDocument {
        &self.xml
    }

    /// Decode every `<service>` under the `<rls-services>` element.
    ///
    /// A document without an `<rls-services>` element yields an empty
    /// collection. Each call returns a fresh collection.
    pub fn services(&self) -> RlsServices {
        let Some(root) = self.xml.root().find("rls-services") else {
            tracing::warn!(
                root = %self.xml.root().tag,
                "document has no <rls-services> element"
            );
            return RlsServices::new();
        };

        let mut services = RlsServices::new();
        for (index, node) in root.children_named("service").enumerate() {
            match Service::from_node(node) {
                Some(service) => services.push(service),
                None => tracing::debug!(index, "skipping undecodable <service> entry"),
            }
        }

        tracing::debug!(count = services.len(), "decoded rls services");
        services
    }

    /// Release the document and its tree.
    pub fn release(self) {
        tracing::trace!("released rls-services document");
    }
}

impl TryFrom<&[u8]> for RlsDocument {
    type Error = Error;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        Self::parse(buffer)
    }
}

impl std::str::FromStr for RlsDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRIENDS: &str = r#"<rls-services xmlns="urn:ietf:params:xml:ns:rls-services"><service uri="sip:friends@example.com"><resource-list>/resource-lists/users/sip:user@example.com/index/~~/resource-lists/list%5B@name=%22friends%22%5D</resource-list><packages><package>presence</package></packages></service></rls-services>"#;

    #[test]
    fn test_decode_single_service() {
        let doc: RlsDocument = FRIENDS.parse().unwrap();
        let services = doc.services();

        assert_eq!(services.len(), 1);
        let service = &services.as_slice()[0];
        assert_eq!(service.uri(), Some("sip:friends@example.com"));
        assert_eq!(
            service.resource_list(),
            Some("/resource-lists/users/sip:user@example.com/index/~~/resource-lists/list%5B@name=%22friends%22%5D")
        );
        assert_eq!(service.packages(), ["presence"]);
    }

    #[test]
    fn test_decode_keeps_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rls-services xmlns="urn:ietf:params:xml:ns:rls-services">
  <service uri="sip:a@example.com"><resource-list>/a</resource-list></service>
  <service uri="sip:b@example.com"><resource-list>/b</resource-list></service>
  <service uri="sip:c@example.com"><resource-list>/c</resource-list></service>
</rls-services>"#;
        let services = RlsDocument::parse(xml.as_bytes()).unwrap().services();
        let uris: Vec<_> = services.iter().filter_map(Service::uri).collect();
        assert_eq!(uris, ["sip:a@example.com", "sip:b@example.com", "sip:c@example.com"]);
    }

    #[test]
    fn test_decode_missing_uri_does_not_abort() {
        let xml = r#"<rls-services>
  <service><resource-list>/a</resource-list></service>
  <service uri="sip:b@example.com"/>
</rls-services>"#;
        let services = RlsDocument::parse(xml.as_bytes()).unwrap().services();
        assert_eq!(services.len(), 2);
        assert_eq!(services.as_slice()[0].uri(), None);
        assert_eq!(services.as_slice()[0].resource_list(), Some("/a"));
        assert_eq!(services.as_slice()[1].uri(), Some("sip:b@example.com"));
    }

    #[test]
    fn test_decode_skips_non_service_siblings() {
        let xml = r#"<rls-services><service uri="sip:a"/><foo/><service uri="sip:b"/></rls-services>"#;
        let services = RlsDocument::parse(xml.as_bytes()).unwrap().services();
        assert_eq!(services.len(), 2);
    }

    #[test]
    fn test_decode_empty_document() {
        let xml = r#"<rls-services xmlns="urn:ietf:params:xml:ns:rls-services">  </rls-services>"#;
        let services = RlsDocument::parse(xml.as_bytes()).unwrap().services();
        assert!(services.is_empty());
    }

    #[test]
    fn test_decode_without_rls_services_root() {
        let doc = RlsDocument::parse(b"<resource-lists/>").unwrap();
        assert!(doc.services().is_empty());
    }

    #[test]
    fn test_decode_is_fresh_each_time() {
        let doc = RlsDocument::parse(FRIENDS.as_bytes()).unwrap();
        let mut first = doc.services();
        first.push(Service::new("sip:other@example.com", "/o"));
        first.iter_mut().for_each(|s| s.packages.clear());

        let second = doc.services();
        assert_eq!(second.len(), 1);
        assert_eq!(second.as_slice()[0].packages(), ["presence"]);
    }

    #[test]
    fn test_services_outlive_document() {
        let doc = RlsDocument::parse(FRIENDS.as_bytes()).unwrap();
        let services = doc.services();
        doc.release();
        assert_eq!(services.as_slice()[0].uri(), Some("sip:friends@example.com"));
    }

    #[test]
    fn test_parse_deeply_nested_document_fails() {
        let depth = 200_000;
        let xml = format!(
            "<rls-services>{}{}</rls-services>",
            "<a>".repeat(depth),
            "</a>".repeat(depth)
        );
        let doc = RlsDocument::parse(xml.as_bytes());
        assert!(matches!(
            doc,
            Err(Error::Parse(xcap_xml::Error::TooDeep { .. }))
        ));
    }

    #[test]
    fn test_parse_empty_buffer() {
        assert!(matches!(RlsDocument::parse(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_parse_not_xml() {
        let doc = RlsDocument::parse(b"not xml");
        assert!(matches!(doc, Err(Error::Parse(_))));

        let services = doc.ok().map(|d| d.services()).unwrap_or_default();
        assert!(services.is_empty());
    }

    #[test]
    fn test_try_from_bytes() {
        let doc = RlsDocument::try_from(FRIENDS.as_bytes()).unwrap();
        assert_eq!(doc.xml().root().tag, "rls-services");
    }
}
