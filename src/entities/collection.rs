use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ServiceDescription;
use crate::render::Renderer;
use crate::types::Result;

/// Root of a description tree: the services to document, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCollection {
    pub services: Vec<ServiceDescription>,
}

impl ServiceCollection {
    pub fn new(services: Vec<ServiceDescription>) -> Self {
        Self { services }
    }

    pub fn with_service(mut self, service: ServiceDescription) -> Self {
        self.services.push(service);
        self
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescription> {
        self.services.iter()
    }

    /// Render every service into a page and register it, in list order.
    ///
    /// Stops at the first renderer failure; pages registered before it stay
    /// registered.
    pub fn render<R: Renderer>(&self, r: &mut R) -> Result<()> {
        debug!(services = self.services.len(), "rendering service collection");

        for service in &self.services {
            let page = service.render_page(r)?;
            r.add_page(page)?;
        }

        debug!(pages = self.services.len(), "service collection rendered");
        Ok(())
    }
}

impl FromIterator<ServiceDescription> for ServiceCollection {
    fn from_iter<I: IntoIterator<Item = ServiceDescription>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ServiceCollection {
    type Item = ServiceDescription;
    type IntoIter = std::vec::IntoIter<ServiceDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.into_iter()
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescription;
    type IntoIter = std::slice::Iter<'a, ServiceDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
