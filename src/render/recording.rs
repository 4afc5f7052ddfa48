//! Recording Renderer
//!
//! In-memory [`Renderer`] that keeps every produced block as a plain value
//! tree and logs the operations it served, in call order. Useful for asserting
//! on the shape a description tree renders into without a markup backend.

use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use super::Renderer;
use crate::types::{DocError, Result};

/// A block as recorded by [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
        level: usize,
        as_code: bool,
    },
    ModuleInclude {
        path: String,
    },
    SeeAlso {
        contents: Vec<Block>,
    },
    DefinitionList {
        entries: Vec<Definition>,
    },
    ClassReference {
        path: String,
    },
    Section {
        contents: Vec<Block>,
    },
    MethodInclude {
        path: String,
        no_index: bool,
        extras: Vec<Block>,
    },
    Instruction {
        name: String,
        content: String,
    },
}

impl Block {
    /// Every title in this block and below, depth-first, as `(text, level)`
    pub fn titles(&self) -> Vec<(String, usize)> {
        let mut out = Vec::new();
        self.collect_titles(&mut out);
        out
    }

    fn collect_titles(&self, out: &mut Vec<(String, usize)>) {
        match self {
            Block::Title { text, level, .. } => out.push((text.clone(), *level)),
            Block::SeeAlso { contents } | Block::Section { contents } => {
                for block in contents {
                    block.collect_titles(out);
                }
            }
            Block::DefinitionList { entries } => {
                for entry in entries {
                    entry.description.collect_titles(out);
                }
            }
            Block::MethodInclude { extras, .. } => {
                for block in extras {
                    block.collect_titles(out);
                }
            }
            Block::ModuleInclude { .. }
            | Block::ClassReference { .. }
            | Block::Instruction { .. } => {}
        }
    }
}

/// One definition-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub term: String,
    pub description: Block,
}

/// One page, as assembled by [`Renderer::page`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: String,
    pub parts: Vec<Block>,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pages: Vec<Page>,
    calls: Vec<&'static str>,
    rejected_references: HashSet<String>,
    failing_operations: HashSet<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `class_reference` fail for `path` with [`DocError::UnresolvedReference`]
    pub fn reject_reference(mut self, path: impl Into<String>) -> Self {
        self.rejected_references.insert(path.into());
        self
    }

    /// Make every call to `operation` fail with [`DocError::Render`]
    pub fn fail_on(mut self, operation: impl Into<String>) -> Self {
        self.failing_operations.insert(operation.into());
        self
    }

    /// Pages registered through `add_page`, in registration order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    /// Names of the operations served so far, in call order
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    /// How many times `operation` was called
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls.iter().filter(|c| **c == operation).count()
    }

    fn record(&mut self, operation: &'static str) -> Result<()> {
        trace!(operation, "recorded");
        self.calls.push(operation);
        if self.failing_operations.contains(operation) {
            return Err(DocError::render(operation, "configured to fail"));
        }
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    type Block = Block;
    type Definition = Definition;
    type Page = Page;

    fn page(&mut self, name: &str, parts: Vec<Block>) -> Result<Page> {
        self.record("page")?;
        Ok(Page {
            name: name.to_string(),
            parts,
        })
    }

    fn add_page(&mut self, page: Page) -> Result<()> {
        self.record("add_page")?;
        self.pages.push(page);
        Ok(())
    }

    fn title(&mut self, text: &str, level: usize, as_code: bool) -> Result<Block> {
        self.record("title")?;
        Ok(Block::Title {
            text: text.to_string(),
            level,
            as_code,
        })
    }

    fn include_module(&mut self, path: &str) -> Result<Block> {
        self.record("include_module")?;
        Ok(Block::ModuleInclude {
            path: path.to_string(),
        })
    }

    fn see_also_section(&mut self, contents: Vec<Block>) -> Result<Block> {
        self.record("see_also_section")?;
        Ok(Block::SeeAlso { contents })
    }

    fn definition_list(&mut self, contents: Vec<Definition>) -> Result<Block> {
        self.record("definition_list")?;
        Ok(Block::DefinitionList { entries: contents })
    }

    fn definition(&mut self, term: &str, description: Block) -> Result<Definition> {
        self.record("definition")?;
        Ok(Definition {
            term: term.to_string(),
            description,
        })
    }

    fn class_reference(&mut self, path: &str) -> Result<Block> {
        self.record("class_reference")?;
        if self.rejected_references.contains(path) {
            return Err(DocError::unresolved(path));
        }
        Ok(Block::ClassReference {
            path: path.to_string(),
        })
    }

    fn section(&mut self, contents: Vec<Block>) -> Result<Block> {
        self.record("section")?;
        Ok(Block::Section { contents })
    }

    fn include_method(&mut self, path: &str, no_index: bool, extras: Vec<Block>) -> Result<Block> {
        self.record("include_method")?;
        Ok(Block::MethodInclude {
            path: path.to_string(),
            no_index,
            extras,
        })
    }

    fn instruction(&mut self, name: &str, content: &str) -> Result<Block> {
        self.record("instruction")?;
        Ok(Block::Instruction {
            name: name.to_string(),
            content: content.to_string(),
        })
    }
}
