use crate::catalog::registry::Catalog;
use crate::catalog::types::DatasetMeta;
use crate::distributions::handlers::handle_len_dist;
use crate::domains::handlers::{handle_domains_count, handle_top_domains};
use crate::domains::service::DomainService;
use crate::ngrams::handlers::{handle_ks, handle_topk, handle_topk_with_counts};
use crate::overlap::handlers::handle_get_overlaps;
use crate::phrases::handlers::handle_text_count;
use crate::phrases::service::PhraseService;
use crate::resources::tables::CorpusTables;

use super::response::PerDataset;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use std::sync::Arc;

/// Shared state handed to every handler through `Extension` layers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tables: Arc<CorpusTables>,
    pub domains: Arc<DomainService>,
    pub phrases: Arc<PhraseService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/datasets", get(handle_datasets))
        .route("/api/ks", get(handle_ks))
        .route("/api/topk", post(handle_topk))
        .route("/api/topk_with_counts", post(handle_topk_with_counts))
        .route("/api/get_overlaps", post(handle_get_overlaps))
        .route("/api/len_dist", post(handle_len_dist))
        .route("/api/text_count", post(handle_text_count))
        .route("/api/domains_count", post(handle_domains_count))
        .route("/api/top_domains", post(handle_top_domains))
        .layer(Extension(state.catalog))
        .layer(Extension(state.tables))
        .layer(Extension(state.domains))
        .layer(Extension(state.phrases))
}

/// Liveness probe.
async fn handle_index() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn handle_datasets(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<PerDataset<DatasetMeta>> {
    Json(
        catalog
            .datasets()
            .iter()
            .map(|d| (d.name.clone(), d.meta()))
            .collect(),
    )
}
