//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Resolves metadata through the paper provider
//! 3. Returns its result as JSON text

mod citations;

pub use citations::*;

use std::sync::Arc;

use crate::citation::{Clock, SystemClock};
use crate::error::ToolResult;
use crate::models::CitationStyle;
use crate::provider::PaperProvider;

/// Tool execution context.
#[derive(Clone)]
pub struct ToolContext {
    /// Metadata provider.
    pub provider: Arc<dyn PaperProvider>,

    /// Time source for access dates.
    pub clock: Arc<dyn Clock>,

    /// Style used when a request omits one.
    pub default_style: CitationStyle,
}

impl ToolContext {
    /// Create a context that reads the system clock.
    #[must_use]
    pub fn new(provider: Arc<dyn PaperProvider>) -> Self {
        Self {
            provider,
            clock: Arc::new(SystemClock),
            default_style: CitationStyle::default(),
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the default style.
    #[must_use]
    pub const fn with_default_style(mut self, style: CitationStyle) -> Self {
        self.default_style = style;
        self
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("default_style", &self.default_style)
            .finish()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "format_citation").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(citations::FormatCitationTool)]
}
