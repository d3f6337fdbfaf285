//! Configuration for the arXiv citation MCP server.

use std::path::PathBuf;

use crate::models::CitationStyle;

/// Environment variable names.
pub mod env {
    /// Path to the JSON paper catalog.
    pub const CATALOG: &str = "ARXIV_CITATION_CATALOG";

    /// Style used when a request does not name one.
    pub const DEFAULT_STYLE: &str = "ARXIV_CITATION_DEFAULT_STYLE";
}

/// Server configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON catalog of paper records (optional; without it every lookup misses).
    pub catalog_path: Option<PathBuf>,

    /// Style used when a request omits `style`.
    pub default_style: CitationStyle,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(catalog_path: Option<PathBuf>, default_style: CitationStyle) -> Self {
        Self {
            catalog_path,
            default_style,
        }
    }
}
