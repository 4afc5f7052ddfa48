//! Service Description Tree
//!
//! Immutable value nodes describing what a service's documentation contains.
//! Rendering is one synchronous depth-first pass:
//!
//! ```text
//! ServiceCollection → ServiceDescription → SectionNode tree → leaves
//!                                                   ↓
//!                                          ClassReference / ExtraInstruction
//! ```
//!
//! Each node calls back into the [`Renderer`](crate::render::Renderer) it is
//! handed and composes its children's output into its own block.

mod collection;
mod extra;
mod reference;
mod section;
mod service;

pub use collection::ServiceCollection;
pub use extra::ExtraInstruction;
pub use reference::ClassReference;
pub use section::{ReferenceSection, Section, SectionNode, SingleMethod};
pub use service::ServiceDescription;
