//! Global Constants
//!
//! Fixed levels, separators and manifest locations shared across modules.

/// Render pass constants
pub mod render {
    /// Heading level of a service page title
    pub const PAGE_TITLE_LEVEL: usize = 1;

    /// Level the top-level sections of a page start at
    pub const FIRST_SECTION_LEVEL: usize = 2;

    /// Separator between module path, class name and method name
    pub const PATH_SEPARATOR: char = '.';

    /// Method inclusions always live under their service page
    pub const METHOD_NO_INDEX: bool = true;
}

/// Manifest loading constants
pub mod config {
    /// Current manifest version
    pub const VERSION: &str = "1.0";

    /// Project manifest file, relative to the working directory
    pub const MANIFEST_FILE: &str = "servicedoc.toml";

    /// Environment variable prefix (e.g. SERVICEDOC_PROJECT_NAME -> project.name)
    pub const ENV_PREFIX: &str = "SERVICEDOC_";
}
