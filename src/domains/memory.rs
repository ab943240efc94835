use super::store::{DomainStore, StoreError};
use crate::catalog::registry::Catalog;
use crate::resources::loader::read_domains;
use crate::resources::tables::DOMAINS_DIR;
use crate::resources::types::DomainCount;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Domain rankings held in memory, keyed by table name. Rows are in rank order.
#[derive(Debug, Default)]
pub struct MemoryDomainStore {
    tables: HashMap<String, Vec<DomainCount>>,
}

impl MemoryDomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `domains_per_token/{stem}.jsonl` for every corpus with a domain table.
    /// Corpora whose file is absent are skipped with a warning.
    pub fn load(data_dir: &Path, catalog: &Catalog) -> Result<Self> {
        let mut store = Self::new();

        for dataset in catalog.datasets() {
            let Some(table) = &dataset.table else {
                continue;
            };
            let path = data_dir
                .join(DOMAINS_DIR)
                .join(format!("{}.jsonl", dataset.file_stem));
            if !path.exists() {
                tracing::warn!(
                    "No domain counts for {} at {}, skipping",
                    dataset.name,
                    path.display()
                );
                continue;
            }
            let rows = read_domains(&path)?;
            tracing::info!("Loaded {} domains for {}", rows.len(), dataset.name);
            store.insert_table(table, rows);
        }

        Ok(store)
    }

    /// `rows` must already be in rank order.
    pub fn insert_table(&mut self, table: &str, rows: Vec<DomainCount>) {
        self.tables.insert(table.to_string(), rows);
    }

    fn table(&self, table: &str) -> Result<&[DomainCount], StoreError> {
        self.tables
            .get(table)
            .map(|rows| rows.as_slice())
            .ok_or_else(|| StoreError::MissingTable(table.to_string()))
    }
}

#[async_trait]
impl DomainStore for MemoryDomainStore {
    async fn prefix_search(
        &self,
        table: &str,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<DomainCount>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .table(table)?
            .iter()
            .filter(|row| row.domain.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn top_domains(&self, table: &str, count: i64) -> Result<Vec<DomainCount>, StoreError> {
        Ok(self
            .table(table)?
            .iter()
            .take_while(|row| row.rank <= count)
            .cloned()
            .collect())
    }
}
