//! A single `<service>` entry.

use xcap_xml::XmlNode;

/// One `<service>` element of an rls-services document.
///
/// A service ties a list URI that watchers subscribe to with the resource
/// list it expands into and the event packages it accepts. Every field may
/// be missing in a document received from a server; missing fields stay
/// `None` (or empty) rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Service {
    /// The `uri` attribute: the address subscribers use.
    pub uri: Option<String>,
    /// Text of the `<resource-list>` child, an XCAP reference to a `<list>`.
    pub resource_list: Option<String>,
    /// Text of each `<package>` under `<packages>`, in document order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub packages: Vec<String>,
}

impl Service {
    /// Create a service with the given URI and resource-list reference and no packages.
    pub fn new(uri: impl Into<String>, resource_list: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            resource_list: Some(resource_list.into()),
            packages: Vec::new(),
        }
    }

    /// Replace both the URI and the resource-list reference.
    pub fn set(&mut self, uri: impl Into<String>, resource_list: impl Into<String>) {
        self.uri = Some(uri.into());
        self.resource_list = Some(resource_list.into());
    }

    /// Append an event package. Duplicates are kept.
    pub fn add_package(&mut self, package: impl Into<String>) {
        self.packages.push(package.into());
    }

    /// Builder form of [`add_package`](Self::add_package).
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.add_package(package);
        self
    }

    /// The `uri` attribute, if present.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The resource-list reference, if present.
    pub fn resource_list(&self) -> Option<&str> {
        self.resource_list.as_deref()
    }

    /// The event packages in document order.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Whether `package` is among this service's packages.
    pub fn has_package(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// Decode a service from a node that is, or contains, a `<service>` element.
    ///
    /// Returns `None` only when no `<service>` element is reachable from
    /// `node`. All strings are copied out of the tree.
    pub fn from_node(node: &XmlNode) -> Option<Self> {
        let service = node.find("service")?;

        let uri = service.attribute("uri").map(str::to_owned);
        let resource_list = service
            .first_child("resource-list")
            .map(|n| n.text().to_owned());
        let packages = service
            .first_child("packages")
            .map(|packages| {
                packages
                    .children_named("package")
                    .map(|p| p.text().to_owned())
                    .collect()
            })
            .unwrap_or_default();

        if uri.is_none() {
            tracing::debug!("<service> without a uri attribute");
        }

        Some(Self {
            uri,
            resource_list,
            packages,
        })
    }
}
