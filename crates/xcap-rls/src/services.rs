//! Ordered collection of services.

use crate::Service;

/// The services of one rls-services document, in document order.
///
/// Neither URIs nor packages are required to be unique. The collection owns
/// its services and is independent of the document it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RlsServices {
    services: Vec<Service>,
}

impl RlsServices {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a service at the end.
    pub fn push(&mut self, service: Service) {
        self.services.push(service);
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the collection holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate services in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.services.iter()
    }

    /// Iterate services mutably in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Service> {
        self.services.iter_mut()
    }

    /// The services as a slice.
    pub fn as_slice(&self) -> &[Service] {
        &self.services
    }

    /// First service whose URI equals `uri`.
    pub fn find_by_uri(&self, uri: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.uri() == Some(uri))
    }

    /// Mutable access to the first service whose URI equals `uri`.
    pub fn find_by_uri_mut(&mut self, uri: &str) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.uri() == Some(uri))
    }

    /// Remove every service whose URI equals `uri`, returning how many were removed.
    pub fn remove_by_uri(&mut self, uri: &str) -> usize {
        let before = self.services.len();
        self.services.retain(|s| s.uri() != Some(uri));
        before - self.services.len()
    }

    /// Consume the collection, returning the services.
    pub fn into_vec(self) -> Vec<Service> {
        self.services
    }
}

impl From<Vec<Service>> for RlsServices {
    fn from(services: Vec<Service>) -> Self {
        Self { services }
    }
}

impl FromIterator<Service> for RlsServices {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        Self {
            services: iter.into_iter().collect(),
        }
    }
}

impl Extend<Service> for RlsServices {
    fn extend<I: IntoIterator<Item = Service>>(&mut self, iter: I) {
        self.services.extend(iter);
    }
}

impl IntoIterator for RlsServices {
    type Item = Service;
    type IntoIter = std::vec::IntoIter<Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.into_iter()
    }
}

impl<'a> IntoIterator for &'a RlsServices {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
