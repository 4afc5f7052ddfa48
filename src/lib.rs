//! ServiceDoc - Service Documentation Model
//!
//! Describes a set of services as a small tree of immutable nodes and renders
//! it, page by page, through a pluggable [`Renderer`] backend.
//!
//! ## Core Features
//!
//! - **Description Tree**: services, nested sections, method inclusions, references
//! - **Renderer Capability**: one trait, eleven operations, any backend
//! - **Fail-Fast Rendering**: the first renderer error aborts the pass unchanged
//! - **Manifests**: description trees loaded from TOML + environment via Figment
//!
//! ## Quick Start
//!
//! ```
//! use servicedoc::{
//!     ClassReference, RecordingRenderer, ReferenceSection, ServiceCollection,
//!     ServiceDescription, SingleMethod,
//! };
//!
//! let services = ServiceCollection::new(vec![
//!     ServiceDescription::new("Orders", "app.orders", "OrdersService")
//!         .with_section(SingleMethod::new("list_orders"))
//!         .with_section(ReferenceSection::new(vec![ClassReference::new(
//!             "Model",
//!             "app.orders.Order",
//!         )])),
//! ]);
//!
//! let mut renderer = RecordingRenderer::new();
//! services.render(&mut renderer)?;
//! assert_eq!(renderer.pages().len(), 1);
//! # Ok::<(), servicedoc::DocError>(())
//! ```
//!
//! ## Modules
//!
//! - [`entities`]: the description node hierarchy and its render pass
//! - [`render`]: the renderer capability and an in-memory recording renderer
//! - [`config`]: manifest loading and validation
//! - [`types`]: error taxonomy

pub mod config;
pub mod constants;
pub mod entities;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Description tree
pub use entities::{
    ClassReference, ExtraInstruction, ReferenceSection, Section, SectionNode, ServiceCollection,
    ServiceDescription, SingleMethod,
};

// Rendering
pub use render::{RecordingRenderer, Renderer};

// Configuration
pub use config::{Config, ConfigLoader, ProjectConfig};

// Error Types
pub use types::{DocError, Result, ValidationError, ValidationErrorKind};
