//! Input and output models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::CitationStyle;

/// Input for citation formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatCitationInput {
    /// Identifier of the paper to cite (e.g., "1611.03530").
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    /// Style name; validated case-insensitively by the tool.
    #[serde(default, alias = "format")]
    pub style: Option<String>,
}

/// Outcome of a citation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Envelope returned by the `format_citation` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationResponse {
    pub status: ResponseStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CitationStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CitationResponse {
    /// Successful citation.
    #[must_use]
    pub fn success(
        paper_id: impl Into<String>,
        style: CitationStyle,
        citation: impl Into<String>,
    ) -> Self {
        Self {
            status: ResponseStatus::Success,
            paper_id: Some(paper_id.into()),
            style: Some(style),
            citation: Some(citation.into()),
            message: None,
        }
    }

    /// Failed request carrying only a message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            paper_id: None,
            style: None,
            citation: None,
            message: Some(message.into()),
        }
    }
}
