use super::store::{DomainStore, StoreError};
use crate::resources::types::DomainCount;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Debug, sqlx::FromRow)]
struct DomainRow {
    domain: String,
    count: i64,
    percentage: f64,
    rank: i64,
}

impl From<DomainRow> for DomainCount {
    fn from(row: DomainRow) -> Self {
        DomainCount {
            domain: row.domain,
            tokens: row.count,
            percentage: row.percentage,
            rank: row.rank,
        }
    }
}

#[derive(Clone)]
pub struct PostgresDomainStore {
    pool: PgPool,
}

impl PostgresDomainStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the pool without opening a connection; connections are
    /// established on first use.
    pub fn connect_lazy(url: &str, min: u32, max: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(min)
            .max_connections(max)
            .connect_lazy(url)?;
        Ok(Self::new(pool))
    }
}

/// Quotes a table name for interpolation into SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escapes `LIKE` wildcards so that `prefix` only matches literally.
pub fn escape_like(prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn prefix_query(table: &str) -> String {
    format!(
        r#"SELECT "domain", "count", "percentage", "rank" FROM {} WHERE "domain" LIKE $1 ORDER BY "count" DESC LIMIT $2"#,
        quote_ident(table)
    )
}

pub fn top_query(table: &str) -> String {
    format!(
        r#"SELECT "domain", "count", "percentage", "rank" FROM {} WHERE "rank" <= $1 ORDER BY "rank""#,
        quote_ident(table)
    )
}

#[async_trait]
impl DomainStore for PostgresDomainStore {
    async fn prefix_search(
        &self,
        table: &str,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<DomainCount>, StoreError> {
        let sql = prefix_query(table);
        let pattern = format!("{}%", escape_like(prefix));
        let rows: Vec<DomainRow> = sqlx::query_as(&sql)
            .bind(pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DomainCount::from).collect())
    }

    async fn top_domains(&self, table: &str, count: i64) -> Result<Vec<DomainCount>, StoreError> {
        let sql = top_query(table);
        let rows: Vec<DomainRow> = sqlx::query_as(&sql)
            .bind(count)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DomainCount::from).collect())
    }
}
