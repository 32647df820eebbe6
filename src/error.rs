use thiserror::Error;

use crate::source::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("data source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("no category with id {0}")]
    NotFound(CategoryId),
    #[error("insufficient data: needed {needed}, source offered {available}")]
    InsufficientData { needed: usize, available: usize },
    #[error("invalid cell address {0:?}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
