//! MCP server implementation.
//!
//! Speaks newline-delimited JSON-RPC 2.0 over stdio.

pub mod protocol;
pub mod stdio;

use std::sync::Arc;

use crate::provider::PaperProvider;
use crate::tools::{self, McpTool, ToolContext};

/// MCP server for citation formatting.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a server around a metadata provider, using the system clock.
    #[must_use]
    pub fn new(provider: Arc<dyn PaperProvider>) -> Self {
        Self::with_context(ToolContext::new(provider))
    }

    /// Create a server with a fully configured context.
    #[must_use]
    pub fn with_context(ctx: ToolContext) -> Self {
        Self {
            ctx,
            tools: tools::register_all_tools(),
        }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.tools.len());

        stdio::run_stdio(self.tools, self.ctx).await
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.tools
            .iter()
            .map(|t| (t.name(), t.description()))
            .collect()
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("tools", &self.tools.len())
            .finish()
    }
}
