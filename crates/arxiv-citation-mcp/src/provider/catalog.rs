//! Local catalog of paper records loaded from a JSON file.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ProviderError, ProviderResult};
use crate::models::{CatalogRecord, PaperMetadata, short_id_from};

use super::PaperProvider;

/// In-memory catalog keyed by record id and short id.
///
/// The file is a JSON array of [`CatalogRecord`]s. Lookups accept the
/// identifier as stored, or any form that reduces to the same short id
/// (`arXiv:` prefix, version suffix, abstract URL).
#[derive(Debug, Clone, Default)]
pub struct CatalogProvider {
    records: Vec<CatalogRecord>,
    index: HashMap<String, usize>,
}

impl CatalogProvider {
    /// Build a catalog from records. Later records win on duplicate ids.
    #[must_use]
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len() * 2);
        for (i, record) in records.iter().enumerate() {
            index.insert(record.id.clone(), i);
            index.insert(record.short_id(), i);
        }
        Self { records, index }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> ProviderResult<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), papers = catalog.len(), "Loaded paper catalog");
        Ok(catalog)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, paper_id: &str) -> Option<&CatalogRecord> {
        let paper_id = paper_id.trim();
        self.index
            .get(paper_id)
            .or_else(|| self.index.get(&short_id_from(paper_id)))
            .map(|&i| &self.records[i])
    }
}

#[async_trait::async_trait]
impl PaperProvider for CatalogProvider {
    async fn fetch(&self, paper_id: &str) -> ProviderResult<PaperMetadata> {
        let record = self
            .lookup(paper_id)
            .ok_or_else(|| ProviderError::not_found(paper_id))?;
        record.to_metadata()
    }
}
