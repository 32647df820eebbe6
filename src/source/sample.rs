use log::trace;
use serde::Deserialize;

use super::{CategoryData, CategoryId, DataSource};
use crate::error::{GameError, Result};

const CATALOG_JSON: &str = include_str!("sample_catalog.json");

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: CategoryId,
    #[serde(flatten)]
    data: CategoryData,
}

/// In-memory `DataSource` backed by a small canned catalog. Used by the demo
/// binary and handy as a fixture; it never goes unavailable but does fail
/// `NotFound` for ids it does not carry.
#[derive(Debug, Clone)]
pub struct SampleDataSource {
    catalog: Vec<CatalogEntry>,
}

impl SampleDataSource {
    pub fn new() -> Self {
        let catalog: Vec<CatalogEntry> =
            serde_json::from_str(CATALOG_JSON).expect("sample catalog is valid JSON");
        Self { catalog }
    }
}

impl Default for SampleDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for SampleDataSource {
    async fn list_category_ids(&self, pool_size: usize) -> Result<Vec<CategoryId>> {
        let ids: Vec<CategoryId> = self
            .catalog
            .iter()
            .take(pool_size)
            .map(|entry| entry.id)
            .collect();
        trace!(target: "sample_source", "listing {} of {} category ids", ids.len(), self.catalog.len());
        Ok(ids)
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryData> {
        self.catalog
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.data.clone())
            .ok_or(GameError::NotFound(id))
    }
}
