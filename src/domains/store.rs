use crate::error::ApiError;
use crate::resources::types::DomainCount;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no domain table named {0}")]
    MissingTable(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingTable(_) => ApiError::NotFound(err.to_string()),
            StoreError::Database(_) => ApiError::Backend(err.to_string()),
        }
    }
}

/// Read access to the per-corpus domain rankings.
#[async_trait]
pub trait DomainStore: Send + Sync {
    /// Domains of `table` starting with `prefix`, most tokens first, at most `limit` rows.
    async fn prefix_search(
        &self,
        table: &str,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<DomainCount>, StoreError>;

    /// Domains of `table` ranked `1..=count`, in rank order.
    async fn top_domains(&self, table: &str, count: i64) -> Result<Vec<DomainCount>, StoreError>;
}
