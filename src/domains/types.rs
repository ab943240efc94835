use serde::Deserialize;

/// Maximum number of rows returned by a prefix search.
pub const PREFIX_LIMIT: i64 = 1000;
pub const DEFAULT_TOP_DOMAINS: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct DomainsCountRequest {
    pub domain_text: Option<String>,
    #[serde(default)]
    pub corpora: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopDomainsRequest {
    #[serde(default)]
    pub corpora: Vec<String>,
    pub count: Option<i64>,
}
