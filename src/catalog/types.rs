use serde::{Deserialize, Serialize};

/// What a corpus supports. Rendered as lowercase tags by `/api/datasets`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Top-k n-grams and length distribution.
    Basic,
    /// Documents are searchable in Elasticsearch.
    Indexed,
    /// Per-domain token counts live in Postgres.
    Url,
    /// Participates in the cross-corpus overlap table.
    Overlap,
}

/// The Elasticsearch deployment an index lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Default,
    Dolma,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub cluster: Cluster,
    /// Index name or pattern (`re_laion2b-en-*`).
    pub index: String,
}

/// A single corpus entry.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Display name used by clients.
    pub name: String,
    /// Position in the UI listing, starting at 1.
    pub order: u32,
    pub capabilities: Vec<Capability>,
    /// Prefix used by the precomputed files (`top-{k}_{stem}.jsonl`).
    pub file_stem: String,
    pub search: Option<SearchTarget>,
    /// Postgres table with domain counts.
    pub table: Option<String>,
}

/// Entry of the `/api/datasets` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetMeta {
    pub meta: Vec<Capability>,
    pub order: u32,
}

impl Dataset {
    pub fn meta(&self) -> DatasetMeta {
        DatasetMeta {
            meta: self.capabilities.clone(),
            order: self.order,
        }
    }
}
