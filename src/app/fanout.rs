use super::response::PerDataset;
use crate::error::ApiError;

use futures::future::try_join_all;
use std::future::Future;
use std::time::Duration;

/// Runs `query` for every dataset concurrently and collects the answers keyed
/// by dataset name, in request order.
///
/// The first failure aborts the whole request, as does exceeding `deadline`.
pub async fn fan_out<T, F, Fut>(
    names: &[String],
    deadline: Duration,
    query: F,
) -> Result<PerDataset<T>, ApiError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let pending = names.iter().map(|name| query(name.clone()));

    let results = tokio::time::timeout(deadline, try_join_all(pending))
        .await
        .map_err(|_| ApiError::Timeout(deadline.as_secs()))??;

    Ok(names.iter().cloned().zip(results).collect())
}
