use serde::{Deserialize, Serialize};

use crate::render::Renderer;
use crate::types::Result;

/// "See also" pointer to another documented entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassReference {
    /// Label the reference is listed under
    pub title: String,
    /// Target locator, resolved by the renderer
    pub reference_path: String,
}

impl ClassReference {
    pub fn new(title: impl Into<String>, reference_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            reference_path: reference_path.into(),
        }
    }

    /// Render as one definition-list entry: the title as term, the resolved
    /// reference as description
    pub fn render_reference<R: Renderer>(&self, r: &mut R) -> Result<R::Definition> {
        let description = r.class_reference(&self.reference_path)?;
        r.definition(&self.title, description)
    }
}
