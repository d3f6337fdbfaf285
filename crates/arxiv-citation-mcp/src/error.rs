//! Error types for the arXiv citation MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use crate::models::CitationStyle;

/// Errors from a paper metadata provider.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// No paper matches the requested identifier.
    #[error("Paper {paper_id} not found")]
    NotFound {
        /// Identifier that was looked up
        paper_id: String,
    },

    /// Catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog contents could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Record is present but unusable (empty title, bad date, ...).
    #[error("Invalid paper record {paper_id}: {message}")]
    InvalidRecord {
        /// Identifier of the offending record
        paper_id: String,
        /// What is wrong with it
        message: String,
    },

    /// Provider cannot serve requests right now.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(paper_id: impl Into<String>) -> Self {
        Self::NotFound {
            paper_id: paper_id.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(paper_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            paper_id: paper_id.into(),
            message: message.into(),
        }
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Returns true if the provider had no paper for the identifier.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A style name outside the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unsupported citation style: {requested}. Supported styles: {supported}",
    supported = CitationStyle::supported_names()
)]
pub struct UnknownStyleError {
    /// Normalized name that was requested.
    pub requested: String,
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the metadata provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Convert to the message placed in an error envelope.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Provider(err @ ProviderError::NotFound { .. }) => err.to_string(),
            Self::Provider(err) => format!("Error: {err}"),
            Self::Validation { message, .. } => message.clone(),
            Self::Serialization(err) => format!("Invalid arguments: {err}"),
        }
    }
}

impl From<UnknownStyleError> for ToolError {
    fn from(err: UnknownStyleError) -> Self {
        Self::validation("style", err.to_string())
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
