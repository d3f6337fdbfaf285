//! Paper metadata providers.
//!
//! The formatting tool only needs already-resolved [`PaperMetadata`]; where it
//! comes from is behind [`PaperProvider`]. Retry policy, if any, belongs to the
//! implementation.

mod catalog;

pub use catalog::CatalogProvider;

use crate::error::ProviderResult;
use crate::models::PaperMetadata;

/// Resolves a paper identifier into citation metadata.
#[async_trait::async_trait]
pub trait PaperProvider: Send + Sync {
    /// Look up one paper.
    ///
    /// Returns [`ProviderError::NotFound`](crate::error::ProviderError::NotFound)
    /// when nothing matches.
    async fn fetch(&self, paper_id: &str) -> ProviderResult<PaperMetadata>;
}
