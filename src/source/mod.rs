mod sample;

pub use sample::SampleDataSource;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub type CategoryId = u64;

/// Raw clue as the source serves it, before selection and before any
/// reveal state is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluePayload {
    pub question: String,
    pub answer: String,
}

/// One category as the source serves it. The clue pool may be larger than
/// the board needs and carries no ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub title: String,
    pub clues: Vec<CluePayload>,
}

/// Abstract upstream of category and clue data. Implementations fail with
/// `SourceUnavailable` when the upstream cannot be reached and `NotFound`
/// for an unknown category id.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Returns up to `pool_size` available category identifiers.
    async fn list_category_ids(&self, pool_size: usize) -> Result<Vec<CategoryId>>;

    /// Returns title and clue pool for one category.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryData>;
}
