use super::counter::{PhraseCountError, PhraseCounter};
use super::types::CountResponse;
use crate::config::EsClusterConfig;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

/// Field holding the document body in every corpus index.
pub const TEXT_FIELD: &str = "text";

const INITIAL_BACKOFF_MS: u64 = 150;
const MAX_BACKOFF_MS: u64 = 1200;

/// Client for one Elasticsearch deployment.
pub struct ElasticCounter {
    http_client: reqwest::Client,
    config: EsClusterConfig,
}

impl ElasticCounter {
    pub fn new(config: EsClusterConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn count_url(&self, index: &str) -> String {
        format!("{}/{}/_count", self.config.url.trim_end_matches('/'), index)
    }

    fn request(&self, index: &str, text: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http_client
            .post(self.count_url(index))
            .json(&phrase_query(text))
            .timeout(self.config.timeout());

        if let Some(key) = &self.config.api_key {
            builder.header(reqwest::header::AUTHORIZATION, format!("ApiKey {}", key))
        } else if let Some(user) = &self.config.username {
            builder.basic_auth(user, self.config.password.as_ref())
        } else {
            builder
        }
    }

    async fn send_with_retry(
        &self,
        index: &str,
        text: &str,
    ) -> Result<reqwest::Response, PhraseCountError> {
        let attempts = self.config.retries.max(1);
        let mut delay_ms = INITIAL_BACKOFF_MS;

        for attempt in 0..attempts {
            let last = attempt + 1 == attempts;
            match self.request(index, text).send().await {
                Ok(resp) if is_transient(resp.status()) && !last => {
                    tracing::warn!(
                        "Search index {} answered {}, retrying ({}/{})",
                        index,
                        resp.status(),
                        attempt + 1,
                        attempts
                    );
                }
                Ok(resp) => return Ok(resp),
                Err(e) if last => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(
                        "Search request to {} failed: {}, retrying ({}/{})",
                        index,
                        e,
                        attempt + 1,
                        attempts
                    );
                }
            }

            let jitter = rand::random::<u64>() % 50;
            tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
            delay_ms = (delay_ms * 2).min(MAX_BACKOFF_MS);
        }

        Err(PhraseCountError::RetriesExhausted)
    }
}

/// Query matching documents whose text contains `text` as a phrase.
pub fn phrase_query(text: &str) -> serde_json::Value {
    let mut match_phrase = serde_json::Map::new();
    match_phrase.insert(TEXT_FIELD.to_string(), json!(text));

    json!({ "query": { "match_phrase": match_phrase } })
}

fn is_transient(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::BAD_GATEWAY
        || status == StatusCode::SERVICE_UNAVAILABLE
        || status == StatusCode::GATEWAY_TIMEOUT
}

#[async_trait]
impl PhraseCounter for ElasticCounter {
    async fn count(&self, index: &str, text: &str) -> Result<u64, PhraseCountError> {
        let resp = self.send_with_retry(index, text).await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PhraseCountError::Status {
                index: index.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CountResponse = resp.json().await?;
        Ok(parsed.count)
    }
}
