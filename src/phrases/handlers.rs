use super::service::PhraseService;
use super::types::TextCountRequest;
use crate::app::request::{parse_body, require_text};
use crate::app::response::PerDataset;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;

use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_text_count(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(service): Extension<Arc<PhraseService>>,
    body: Bytes,
) -> Result<Json<PerDataset<u64>>, ApiError> {
    let req: TextCountRequest = parse_body(&body)?;
    let text = require_text(req.text.as_deref())?;

    tracing::debug!("text count over datasets: {:?}", req.datasets);

    let counts = service.text_counts(&catalog, &req.datasets, text).await?;

    tracing::info!(event = "n-gram counts", ngram = %text, "user-ngram");

    Ok(Json(counts))
}
