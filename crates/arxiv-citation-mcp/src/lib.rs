//! arXiv Citation MCP Server
//!
//! A Model Context Protocol (MCP) server that turns arXiv paper metadata into
//! citations.
//!
//! # Features
//!
//! - **Six styles**: APA, MLA, Chicago, Harvard, IEEE and BibTeX
//! - **Deterministic**: the only clock read (Harvard access dates) goes through
//!   an injectable [`citation::Clock`]
//! - **Never-throwing boundary**: every failure comes back as a JSON error envelope
//!
//! # Example
//!
//! ```
//! use arxiv_citation_mcp::citation::{self, SystemClock};
//! use arxiv_citation_mcp::models::{CitationStyle, PaperMetadata};
//!
//! let paper = PaperMetadata::new(
//!     "Understanding Deep Learning Requires Rethinking Generalization",
//!     vec!["Zhang, Chiyuan".into(), "Bengio, Samy".into(), "Hardt, Moritz".into()],
//!     2017,
//!     "February",
//!     "1611.03530",
//!     "http://arxiv.org/abs/1611.03530v2",
//! )?;
//!
//! let apa = citation::render(&paper, CitationStyle::Apa, &SystemClock);
//! assert!(apa.starts_with("Zhang, Chiyuan et al. (2017)"));
//! # Ok::<(), arxiv_citation_mcp::error::ProviderError>(())
//! ```

pub mod citation;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod server;
pub mod tools;

pub use config::Config;
pub use error::{ProviderError, ToolError};
pub use provider::{CatalogProvider, PaperProvider};
