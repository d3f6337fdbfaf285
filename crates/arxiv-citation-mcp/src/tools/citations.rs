//! Citation tools: format_citation.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::citation;
use crate::error::{ToolError, ToolResult};
use crate::models::{CitationResponse, CitationStyle, FormatCitationInput};

/// Citation formatting tool.
pub struct FormatCitationTool;

#[async_trait::async_trait]
impl McpTool for FormatCitationTool {
    fn name(&self) -> &'static str {
        "format_citation"
    }

    fn description(&self) -> &'static str {
        "Format a citation for an arXiv paper in various academic styles"
    }

    fn input_schema(&self) -> serde_json::Value {
        let styles: Vec<&str> = CitationStyle::ALL.iter().map(|s| s.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "The arXiv ID of the paper to cite"
                },
                "style": {
                    "type": "string",
                    "description": "Citation style to use",
                    "enum": styles,
                    "default": CitationStyle::default().as_str()
                }
            },
            "required": ["paperId"]
        })
    }

    /// Always answers with an envelope; failures become `status: "error"`.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let response = match format_citation(ctx, input).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    ToolError::Validation { .. } | ToolError::Serialization(_) => {
                        tracing::debug!(error = %err, "Rejected citation request");
                    }
                    _ => tracing::error!(error = %err, "Citation error"),
                }
                CitationResponse::error(err.to_user_message())
            }
        };

        Ok(serde_json::to_string(&response)?)
    }
}

/// Validate the request, resolve the paper and render it.
///
/// The style is validated before the provider is consulted, so an
/// unsupported style never costs a lookup.
pub async fn format_citation(
    ctx: &ToolContext,
    input: serde_json::Value,
) -> ToolResult<CitationResponse> {
    let params: FormatCitationInput = serde_json::from_value(input)?;

    let style = match params.style.as_deref() {
        Some(name) => name.parse::<CitationStyle>()?,
        None => ctx.default_style,
    };

    let paper = ctx.provider.fetch(&params.paper_id).await?;
    let citation = citation::render(&paper, style, ctx.clock.as_ref());

    Ok(CitationResponse::success(params.paper_id, style, citation))
}
