//! Unified Error Type System
//!
//! The render pass defines no failure modes of its own. Every error either
//! comes from a renderer (and travels up the recursion untouched) or from the
//! manifest layer that builds description trees for callers.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field or component that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Validation failed for '{}': {}", field, self.message)
        } else {
            write!(f, "Validation failed: {}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Required field is empty
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::MissingField, "value must not be empty").with_field(field)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field missing or empty
    MissingField,
    /// Value must be unique but appears more than once
    Duplicate,
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // Renderer Errors
    // -------------------------------------------------------------------------
    /// A renderer operation could not produce its block
    #[error("Render error in {operation}: {message}")]
    Render { operation: String, message: String },

    /// A reference path the renderer could not resolve
    #[error("Unresolved reference: {path}")]
    UnresolvedReference { path: String },

    /// Opaque failure raised by a renderer implementation
    #[error(transparent)]
    Renderer(#[from] anyhow::Error),

    // -------------------------------------------------------------------------
    // Manifest Errors
    // -------------------------------------------------------------------------
    /// Filesystem access while locating or reading a manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(ValidationError),
}

impl From<ValidationError> for DocError {
    fn from(err: ValidationError) -> Self {
        DocError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, DocError>;

impl DocError {
    /// Create a renderer operation error
    pub fn render(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved(path: impl Into<String>) -> Self {
        Self::UnresolvedReference { path: path.into() }
    }

    /// Whether the error was raised by a renderer rather than by manifest loading
    pub fn is_render_failure(&self) -> bool {
        matches!(
            self,
            Self::Render { .. } | Self::UnresolvedReference { .. } | Self::Renderer(_)
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
