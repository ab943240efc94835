use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextCountRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub datasets: Vec<String>,
}

/// Body of an Elasticsearch `_count` response; other fields are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
