use super::counter::PhraseCounter;
use crate::app::fanout::fan_out;
use crate::app::response::PerDataset;
use crate::cache::QueryCache;
use crate::catalog::registry::Catalog;
use crate::catalog::types::Cluster;
use crate::error::ApiError;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub struct PhraseService {
    counters: HashMap<Cluster, Arc<dyn PhraseCounter>>,
    /// Keyed by `(text, dataset)`.
    cache: QueryCache<(String, String), u64>,
    timeout: Duration,
}

impl PhraseService {
    pub fn new(cache_capacity: usize, timeout: Duration) -> Self {
        Self {
            counters: HashMap::new(),
            cache: QueryCache::new(cache_capacity),
            timeout,
        }
    }

    pub fn with_counter(mut self, cluster: Cluster, counter: Arc<dyn PhraseCounter>) -> Self {
        self.counters.insert(cluster, counter);
        self
    }

    /// Documents containing `text`, per dataset. Every dataset must be indexed.
    pub async fn text_counts(
        &self,
        catalog: &Catalog,
        datasets: &[String],
        text: &str,
    ) -> Result<PerDataset<u64>, ApiError> {
        for name in datasets {
            let (_, target) = catalog.searchable(name)?;
            if !self.counters.contains_key(&target.cluster) {
                return Err(ApiError::Backend(format!(
                    "no search cluster configured for {}",
                    name
                )));
            }
        }

        fan_out(datasets, self.timeout, move |name| async move {
            self.cached_count(catalog, &name, text).await
        })
        .await
    }

    async fn cached_count(
        &self,
        catalog: &Catalog,
        name: &str,
        text: &str,
    ) -> Result<u64, ApiError> {
        let (_, target) = catalog.searchable(name)?;
        let counter = self.counters.get(&target.cluster).ok_or_else(|| {
            ApiError::Backend(format!("no search cluster configured for {}", name))
        })?;

        let key = (text.to_string(), name.to_string());
        if let Some(count) = self.cache.get(&key) {
            tracing::debug!("phrase cache hit: {:?} in {}", text, name);
            return Ok(count);
        }

        self.cache
            .get_or_try_insert_with(key, || async {
                counter
                    .count(&target.index, text)
                    .await
                    .map_err(ApiError::from)
            })
            .await
    }
}
