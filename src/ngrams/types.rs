use serde::Deserialize;

pub const DEFAULT_TOPK_COUNT: usize = 20;

/// Body of `/api/topk` and `/api/topk_with_counts`.
///
/// `k` is kept as raw JSON so that non-integer values produce the
/// "valid k value" message instead of a decoding error.
#[derive(Debug, Deserialize)]
pub struct TopkRequest {
    pub k: Option<serde_json::Value>,
    #[serde(default)]
    pub datasets: Vec<String>,
    pub count: Option<usize>,
}
