use crate::error::ApiError;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum PhraseCountError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search index {index} answered {status}: {body}")]
    Status {
        index: String,
        status: u16,
        body: String,
    },

    #[error("retry attempts exhausted")]
    RetriesExhausted,
}

impl From<PhraseCountError> for ApiError {
    fn from(err: PhraseCountError) -> Self {
        ApiError::Backend(err.to_string())
    }
}

/// Counts documents containing a phrase.
#[async_trait]
pub trait PhraseCounter: Send + Sync {
    /// Number of documents of `index` that contain `text` as a phrase.
    async fn count(&self, index: &str, text: &str) -> Result<u64, PhraseCountError>;
}
