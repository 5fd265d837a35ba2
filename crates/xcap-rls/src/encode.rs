//! Canonical XML output for services.
//!
//! The element shape is fixed: every `<service>` carries a `uri` attribute,
//! a `<resource-list>` and a `<packages>` element, with absent fields
//! written as empty strings. No whitespace is inserted between elements.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::{Error, Result, RlsServices, Service, NAMESPACE};

/// How field values are substituted into the markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Escape XML special characters in attribute values and text.
    #[default]
    Xml,
    /// Write values verbatim, byte-compatible with legacy XCAP clients.
    ///
    /// Values containing `&`, `<`, `>` or `"` produce a document that is
    /// not well-formed.
    Legacy,
}

/// Options for [`encode_service`] and [`encode_services`].
///
/// ```
/// use xcap_rls::{EncodeOptions, Escaping};
///
/// let options = EncodeOptions::default().escaping(Escaping::Legacy);
/// assert_eq!(options, EncodeOptions::legacy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Value substitution mode.
    pub escaping: Escaping,
    /// Emit the `<?xml ...?>` declaration before the root element.
    pub declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            escaping: Escaping::Xml,
            declaration: true,
        }
    }
}

impl EncodeOptions {
    /// Options reproducing the legacy encoder's byte output.
    pub fn legacy() -> Self {
        Self {
            escaping: Escaping::Legacy,
            ..Self::default()
        }
    }

    /// Set the escaping mode.
    pub fn escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Set whether the XML declaration is written.
    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

/// Render one service as a `<service>` element.
pub fn encode_service(service: &Service, options: &EncodeOptions) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_service(&mut writer, service, options.escaping)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render a complete rls-services document.
pub fn encode_services(services: &RlsServices, options: &EncodeOptions) -> Result<String> {
    let mut output = Vec::new();
    write_services(&mut output, services, options)?;
    Ok(String::from_utf8(output)?)
}

/// Write a complete rls-services document to a writer.
pub fn write_services<W: Write>(
    writer: W,
    services: &RlsServices,
    options: &EncodeOptions,
) -> Result<()> {
    let mut writer = Writer::new(writer);

    if options.declaration {
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
    }

    let root = BytesStart::new("rls-services").with_attributes([("xmlns", NAMESPACE)]);
    write_event(&mut writer, Event::Start(root))?;

    for service in services {
        write_service(&mut writer, service, options.escaping)?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("rls-services")))?;

    tracing::trace!(count = services.len(), "encoded rls services");
    Ok(())
}

fn write_service<W: Write>(
    writer: &mut Writer<W>,
    service: &Service,
    escaping: Escaping,
) -> Result<()> {
    let uri = service.uri().unwrap_or_default();
    let mut elem = BytesStart::new("service");
    match escaping {
        Escaping::Xml => elem.push_attribute(("uri", uri)),
        Escaping::Legacy => elem.push_attribute(Attribute {
            key: QName(b"uri"),
            value: Cow::Borrowed(uri.as_bytes()),
        }),
    }
    write_event(writer, Event::Start(elem))?;

    write_text_element(
        writer,
        "resource-list",
        service.resource_list().unwrap_or_default(),
        escaping,
    )?;

    write_event(writer, Event::Start(BytesStart::new("packages")))?;
    for package in service.packages() {
        write_text_element(writer, "package", package, escaping)?;
    }
    write_event(writer, Event::End(BytesEnd::new("packages")))?;

    write_event(writer, Event::End(BytesEnd::new("service")))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &str,
    escaping: Escaping,
) -> Result<()> {
    let text = match escaping {
        Escaping::Xml => BytesText::new(value),
        Escaping::Legacy => BytesText::from_escaped(value),
    };

    write_event(writer, Event::Start(BytesStart::new(tag)))?;
    write_event(writer, Event::Text(text))?;
    write_event(writer, Event::End(BytesEnd::new(tag)))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

impl Service {
    /// Render this service with default options.
    pub fn to_xml(&self) -> Result<String> {
        encode_service(self, &EncodeOptions::default())
    }
}

impl RlsServices {
    /// Render this collection as a complete document with default options.
    pub fn to_xml(&self) -> Result<String> {
        encode_services(self, &EncodeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RlsDocument;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?><rls-services xmlns="urn:ietf:params:xml:ns:rls-services">"#;

    #[test]
    fn test_encode_service() {
        let service = Service::new("sip:friends@example.com", "/lists/friends")
            .with_package("presence")
            .with_package("dialog");

        assert_eq!(
            service.to_xml().unwrap(),
            "<service uri=\"sip:friends@example.com\"><resource-list>/lists/friends</resource-list><packages><package>presence</package><package>dialog</package></packages></service>"
        );
    }

    #[test]
    fn test_encode_service_absent_fields() {
        assert_eq!(
            Service::default().to_xml().unwrap(),
            "<service uri=\"\"><resource-list></resource-list><packages></packages></service>"
        );
    }

    #[test]
    fn test_encode_empty_collection() {
        assert_eq!(
            RlsServices::new().to_xml().unwrap(),
            format!("{HEADER}</rls-services>")
        );
    }

    #[test]
    fn test_encode_collection() {
        let services: RlsServices = [
            Service::new("sip:a@example.com", "/a"),
            Service::new("sip:b@example.com", "/b").with_package("presence"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            services.to_xml().unwrap(),
            format!(
                "{HEADER}\
                 <service uri=\"sip:a@example.com\"><resource-list>/a</resource-list><packages></packages></service>\
                 <service uri=\"sip:b@example.com\"><resource-list>/b</resource-list><packages><package>presence</package></packages></service>\
                 </rls-services>"
            )
        );
    }

    #[test]
    fn test_encode_without_declaration() {
        let options = EncodeOptions::default().declaration(false);
        let xml = encode_services(&RlsServices::new(), &options).unwrap();
        assert_eq!(
            xml,
            r#"<rls-services xmlns="urn:ietf:params:xml:ns:rls-services"></rls-services>"#
        );
    }

    #[test]
    fn test_encode_escapes_by_default() {
        let service = Service::new("sip:a@example.com;x=1&y=2", "/lists/a<b");
        let xml = service.to_xml().unwrap();
        assert!(xml.contains("uri=\"sip:a@example.com;x=1&amp;y=2\""));
        assert!(xml.contains("<resource-list>/lists/a&lt;b</resource-list>"));
    }

    #[test]
    fn test_encode_legacy_writes_raw() {
        let service = Service::new("sip:a@example.com;x=1&y=2", "/lists/a&b");
        let xml = encode_service(&service, &EncodeOptions::legacy()).unwrap();
        assert_eq!(
            xml,
            "<service uri=\"sip:a@example.com;x=1&y=2\"><resource-list>/lists/a&b</resource-list><packages></packages></service>"
        );
    }

    #[test]
    fn test_escaped_values_survive_decode() {
        let services: RlsServices =
            std::iter::once(Service::new("sip:a&b@example.com", "/x<y>").with_package("p&q"))
                .collect();
        let xml = services.to_xml().unwrap();
        let decoded = RlsDocument::parse(xml.as_bytes()).unwrap().services();
        assert_eq!(decoded, services);
    }

    #[test]
    fn test_reencode_is_stable() {
        let input = r#"<rls-services xmlns="urn:ietf:params:xml:ns:rls-services"><service uri="sip:friends@example.com"><resource-list>/resource-lists/users/sip:user@example.com/index/~~/resource-lists/list%5B@name=%22friends%22%5D</resource-list><packages><package>presence</package></packages></service></rls-services>"#;
        let xml = RlsDocument::parse(input.as_bytes())
            .unwrap()
            .services()
            .to_xml()
            .unwrap();
        assert_eq!(xml, format!("{HEADER}{}", &input[input.find("<service").unwrap()..]));
    }

    #[test]
    fn test_write_services_to_writer() {
        let mut out = Vec::new();
        write_services(&mut out, &RlsServices::new(), &EncodeOptions::legacy()).unwrap();
        assert!(out.starts_with(b"<?xml"));
    }
}
