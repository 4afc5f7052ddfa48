//! Configuration Management
//!
//! Service manifests with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Project manifest (servicedoc.toml)
//! 3. Environment variables (SERVICEDOC_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
