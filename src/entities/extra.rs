use serde::{Deserialize, Serialize};

use crate::render::Renderer;
use crate::types::Result;

/// Named instruction attached to a method inclusion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtraInstruction {
    pub title: String,
    /// Free-form body, passed to the renderer verbatim
    pub content: String,
}

impl ExtraInstruction {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn render_extra<R: Renderer>(&self, r: &mut R) -> Result<R::Block> {
        r.instruction(&self.title, &self.content)
    }
}
