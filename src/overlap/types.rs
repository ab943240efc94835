use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct OverlapRequest {
    #[serde(default)]
    pub corpora: Vec<String>,
}

/// Documents shared by all corpora of `subset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsetCount {
    pub subset: Vec<String>,
    pub count: u64,
}
