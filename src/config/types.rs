//! Configuration Types
//!
//! A manifest describes the services to document as a declarative tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::config::VERSION;
use crate::entities::{SectionNode, ServiceCollection, ServiceDescription};
use crate::types::{Result, ValidationError, ValidationErrorKind};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest version
    pub version: String,

    /// Project-level settings
    pub project: ProjectConfig,

    /// Services to document, in page order
    pub services: Vec<ServiceDescription>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: VERSION.to_string(),
            project: ProjectConfig::default(),
            services: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (informational, shown by hosts)
    pub name: Option<String>,
}

impl Config {
    /// Check the caller contracts the render pass assumes but never checks:
    /// required strings are non-empty and service names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (i, service) in self.services.iter().enumerate() {
            let at = format!("services[{}]", i);
            require(&service.name, || format!("{}.name", at))?;
            require(&service.module_path, || format!("{}.module_path", at))?;
            require(&service.class_name, || format!("{}.class_name", at))?;

            if !seen.insert(service.name.as_str()) {
                return Err(ValidationError::new(
                    ValidationErrorKind::Duplicate,
                    format!("service name '{}' is used more than once", service.name),
                )
                .with_field(format!("{}.name", at))
                .into());
            }

            for (j, section) in service.sections.iter().enumerate() {
                validate_section(section, &format!("{}.sections[{}]", at, j))?;
            }
        }

        Ok(())
    }

    /// The collection to hand to a renderer
    pub fn collection(&self) -> ServiceCollection {
        ServiceCollection::new(self.services.clone())
    }

    pub fn into_collection(self) -> ServiceCollection {
        ServiceCollection::new(self.services)
    }
}

fn require(value: &str, field: impl FnOnce() -> String) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field()).into());
    }
    Ok(())
}

fn validate_section(node: &SectionNode, at: &str) -> Result<()> {
    match node {
        SectionNode::Section(section) => {
            require(&section.title, || format!("{}.title", at))?;
            for (i, child) in section.contents.iter().enumerate() {
                validate_section(child, &format!("{}.contents[{}]", at, i))?;
            }
        }
        SectionNode::References(section) => {
            for (i, reference) in section.references.iter().enumerate() {
                require(&reference.title, || format!("{}.references[{}].title", at, i))?;
                require(&reference.reference_path, || {
                    format!("{}.references[{}].reference_path", at, i)
                })?;
            }
        }
        SectionNode::Method(method) => {
            require(&method.method_name, || format!("{}.method_name", at))?;
            for (i, extra) in method.extras.iter().enumerate() {
                require(&extra.title, || format!("{}.extras[{}].title", at, i))?;
            }
        }
    }
    Ok(())
}
