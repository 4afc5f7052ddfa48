//! Renderer Capability
//!
//! Description nodes never emit markup themselves. They call back into a
//! [`Renderer`] passed down the whole recursion, and compose whatever the
//! renderer hands back into their own output.
//!
//! ## Operations
//!
//! | Operation          | Produces                                   |
//! |--------------------|--------------------------------------------|
//! | `page`             | one page from ordered parts                |
//! | `add_page`         | registers a page with the output          |
//! | `title`            | a heading block                            |
//! | `include_module`   | a block embedding module documentation     |
//! | `see_also_section` | an aside/callout block                     |
//! | `definition_list`  | a definition-list block                    |
//! | `definition`       | one definition entry                       |
//! | `class_reference`  | a resolved cross-reference block           |
//! | `section`          | a container block                          |
//! | `include_method`   | a block embedding method documentation     |
//! | `instruction`      | an instruction/admonition block            |

pub mod recording;

pub use recording::{Block, Definition, Page, RecordingRenderer};

use crate::types::Result;

/// Backend that turns description nodes into concrete documentation output.
///
/// Every operation is fallible. A failure propagates unchanged through every
/// node up to [`ServiceCollection::render`](crate::ServiceCollection::render);
/// the first failing node aborts the whole pass.
///
/// Operations take `&mut self`, so one renderer serves one render pass at a
/// time. Independent trees can render concurrently with separate renderers.
pub trait Renderer {
    /// Any rendered block (headings, asides, inclusions, instructions)
    type Block;
    /// One entry of a definition list
    type Definition;
    /// One top-level page, one per service
    type Page;

    fn page(&mut self, name: &str, parts: Vec<Self::Block>) -> Result<Self::Page>;

    /// Register a finished page with the output
    fn add_page(&mut self, page: Self::Page) -> Result<()>;

    fn title(&mut self, text: &str, level: usize, as_code: bool) -> Result<Self::Block>;

    /// Embed the module-level documentation found at `path`
    fn include_module(&mut self, path: &str) -> Result<Self::Block>;

    fn see_also_section(&mut self, contents: Vec<Self::Block>) -> Result<Self::Block>;

    fn definition_list(&mut self, contents: Vec<Self::Definition>) -> Result<Self::Block>;

    fn definition(&mut self, term: &str, description: Self::Block) -> Result<Self::Definition>;

    /// Resolve `path` into a cross-reference. Unresolvable targets are reported here.
    fn class_reference(&mut self, path: &str) -> Result<Self::Block>;

    fn section(&mut self, contents: Vec<Self::Block>) -> Result<Self::Block>;

    /// Embed the documentation of the method at `path`.
    ///
    /// `no_index` asks the backend not to index the method separately because
    /// it already lives under its service page.
    fn include_method(
        &mut self,
        path: &str,
        no_index: bool,
        extras: Vec<Self::Block>,
    ) -> Result<Self::Block>;

    fn instruction(&mut self, name: &str, content: &str) -> Result<Self::Block>;
}
