//! arXiv Citation MCP Server - Entry Point
//!
//! Serves the `format_citation` tool over stdio.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_citation_mcp::config::{self, Config};
use arxiv_citation_mcp::models::CitationStyle;
use arxiv_citation_mcp::server::McpServer;
use arxiv_citation_mcp::tools::ToolContext;
use arxiv_citation_mcp::{CatalogProvider, PaperProvider};

#[derive(Parser, Debug)]
#[command(name = "arxiv-citation-mcp")]
#[command(about = "MCP server for formatting arXiv paper citations")]
#[command(version)]
struct Cli {
    /// JSON catalog of paper records to cite from
    #[arg(long, env = config::env::CATALOG)]
    catalog: Option<PathBuf>,

    /// Style used when a request does not name one
    #[arg(long, env = config::env::DEFAULT_STYLE)]
    default_style: Option<CitationStyle>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(self.catalog.clone(), self.default_style.unwrap_or_default())
    }
}

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting arXiv citation MCP server"
    );

    let config = cli.config();

    let provider: Arc<dyn PaperProvider> = match &config.catalog_path {
        Some(path) => Arc::new(CatalogProvider::load(path).await?),
        None => {
            tracing::warn!("No catalog configured, every lookup will report not found");
            Arc::new(CatalogProvider::default())
        }
    };

    let ctx = ToolContext::new(provider).with_default_style(config.default_style);
    McpServer::with_context(ctx).run_stdio().await
}
