use super::service::DomainService;
use super::types::{DEFAULT_TOP_DOMAINS, DomainsCountRequest, TopDomainsRequest};
use crate::app::request::{parse_body, require_text};
use crate::app::response::PerDataset;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;
use crate::resources::types::DomainCount;

use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_domains_count(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(service): Extension<Arc<DomainService>>,
    body: Bytes,
) -> Result<Json<PerDataset<Vec<DomainCount>>>, ApiError> {
    let req: DomainsCountRequest = parse_body(&body)?;
    let prefix = require_text(req.domain_text.as_deref())?;

    tracing::info!(event = "domain-prefix", prefix = %prefix, "user-domain-prefix");

    let counts = service
        .prefix_counts(&catalog, &req.corpora, prefix)
        .await?;
    Ok(Json(counts))
}

pub async fn handle_top_domains(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(service): Extension<Arc<DomainService>>,
    body: Bytes,
) -> Result<Json<PerDataset<Vec<DomainCount>>>, ApiError> {
    let req: TopDomainsRequest = parse_body(&body)?;
    let count = req.count.unwrap_or(DEFAULT_TOP_DOMAINS);
    if count < 0 {
        return Err(ApiError::BadRequest(
            "count must be a non-negative integer".to_string(),
        ));
    }

    let domains = service.top_domains(&catalog, &req.corpora, count).await?;
    tracing::info!("top domains served for {} corpora", domains.len());
    Ok(Json(domains))
}
