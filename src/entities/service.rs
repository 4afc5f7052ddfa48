use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SectionNode;
use crate::constants::render::{FIRST_SECTION_LEVEL, PAGE_TITLE_LEVEL, PATH_SEPARATOR};
use crate::render::Renderer;
use crate::types::Result;

/// One service, rendered into one page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Page title and key; unique within a collection
    pub name: String,
    /// Locator of the module implementing the service
    pub module_path: String,
    /// Service class within `module_path`
    pub class_name: String,
    #[serde(default)]
    pub sections: Vec<SectionNode>,
}

impl ServiceDescription {
    pub fn new(
        name: impl Into<String>,
        module_path: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            class_name: class_name.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionNode>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_section(mut self, section: impl Into<SectionNode>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Fully qualified path of `method_name` on this service's class
    pub fn method_path(&self, method_name: &str) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.module_path,
            self.class_name,
            method_name,
            sep = PATH_SEPARATOR
        )
    }

    /// Render the service into one page.
    ///
    /// Parts come out in a fixed order: a code-styled level-1 title with the
    /// service name, the module documentation, then each section starting at
    /// level 2 in declaration order.
    pub fn render_page<R: Renderer>(&self, r: &mut R) -> Result<R::Page> {
        debug!(service = %self.name, sections = self.sections.len(), "rendering page");

        let mut parts = Vec::with_capacity(self.sections.len() + 2);
        parts.push(r.title(&self.name, PAGE_TITLE_LEVEL, true)?);
        parts.push(r.include_module(&self.module_path)?);
        for section in &self.sections {
            parts.push(section.render_section(r, self, FIRST_SECTION_LEVEL)?);
        }

        r.page(&self.name, parts)
    }
}
