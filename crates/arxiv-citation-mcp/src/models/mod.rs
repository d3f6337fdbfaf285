//! Data models for papers, citation styles and tool I/O.
//!
//! Tool inputs use `#[serde(rename_all = "camelCase")]` to match MCP naming.

mod enums;
mod inputs;
mod paper;

pub use enums::CitationStyle;
pub use inputs::{CitationResponse, FormatCitationInput, ResponseStatus};
pub use paper::{CatalogRecord, PaperMetadata, month_name, short_id_from};
