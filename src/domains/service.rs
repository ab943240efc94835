use super::store::DomainStore;
use super::types::PREFIX_LIMIT;
use crate::app::fanout::fan_out;
use crate::app::response::PerDataset;
use crate::cache::QueryCache;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;
use crate::resources::types::DomainCount;

use std::sync::Arc;
use std::time::Duration;

/// Answers domain queries for several corpora at once.
pub struct DomainService {
    store: Arc<dyn DomainStore>,
    /// Keyed by `(table, prefix)`.
    prefix_cache: QueryCache<(String, String), Vec<DomainCount>>,
    timeout: Duration,
}

impl DomainService {
    pub fn new(store: Arc<dyn DomainStore>, cache_capacity: usize, timeout: Duration) -> Self {
        Self {
            store,
            prefix_cache: QueryCache::new(cache_capacity),
            timeout,
        }
    }

    /// Domains starting with `prefix`, per corpus. All corpora are validated
    /// before any query is sent.
    pub async fn prefix_counts(
        &self,
        catalog: &Catalog,
        corpora: &[String],
        prefix: &str,
    ) -> Result<PerDataset<Vec<DomainCount>>, ApiError> {
        for name in corpora {
            catalog.with_table(name)?;
        }

        fan_out(corpora, self.timeout, move |name| async move {
            let table = catalog.with_table(&name)?;
            self.cached_prefix_search(table, prefix).await
        })
        .await
    }

    /// The `count` highest ranked domains, per corpus.
    pub async fn top_domains(
        &self,
        catalog: &Catalog,
        corpora: &[String],
        count: i64,
    ) -> Result<PerDataset<Vec<DomainCount>>, ApiError> {
        for name in corpora {
            catalog.with_table(name)?;
        }

        fan_out(corpora, self.timeout, move |name| async move {
            let table = catalog.with_table(&name)?;
            let rows = self.store.top_domains(table, count).await?;
            tracing::debug!("{} top domains for {}", rows.len(), name);
            Ok::<_, ApiError>(rows)
        })
        .await
    }

    async fn cached_prefix_search(
        &self,
        table: &str,
        prefix: &str,
    ) -> Result<Vec<DomainCount>, ApiError> {
        let key = (table.to_string(), prefix.to_string());
        if let Some(rows) = self.prefix_cache.get(&key) {
            tracing::debug!("prefix cache hit: {} {:?}", table, prefix);
            return Ok(rows);
        }

        self.prefix_cache
            .get_or_try_insert_with(key, || async {
                self.store
                    .prefix_search(table, prefix, PREFIX_LIMIT)
                    .await
                    .map_err(ApiError::from)
            })
            .await
    }
}
