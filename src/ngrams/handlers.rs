use super::types::{DEFAULT_TOPK_COUNT, TopkRequest};
use crate::app::request::parse_body;
use crate::app::response::PerDataset;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;
use crate::resources::tables::CorpusTables;
use crate::resources::types::NgramCount;

use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_ks(Extension(catalog): Extension<Arc<Catalog>>) -> Json<Vec<u32>> {
    Json(catalog.ks().to_vec())
}

pub async fn handle_topk(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(tables): Extension<Arc<CorpusTables>>,
    body: Bytes,
) -> Result<Json<PerDataset<Vec<String>>>, ApiError> {
    let req: TopkRequest = parse_body(&body)?;
    let top = select_topk(&catalog, &tables, &req)?;

    Ok(Json(
        top.into_iter()
            .map(|(name, ngrams)| {
                let strings: Vec<String> = ngrams.iter().map(|n| n.ngram.clone()).collect();
                (name, strings)
            })
            .collect(),
    ))
}

pub async fn handle_topk_with_counts(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(tables): Extension<Arc<CorpusTables>>,
    body: Bytes,
) -> Result<Json<PerDataset<Vec<NgramCount>>>, ApiError> {
    let req: TopkRequest = parse_body(&body)?;
    let top = select_topk(&catalog, &tables, &req)?;

    Ok(Json(
        top.into_iter()
            .map(|(name, ngrams)| (name, ngrams.to_vec()))
            .collect(),
    ))
}

/// Validates the request and returns, per requested corpus, its first `count` n-grams.
pub fn select_topk<'a>(
    catalog: &Catalog,
    tables: &'a CorpusTables,
    req: &TopkRequest,
) -> Result<Vec<(String, &'a [NgramCount])>, ApiError> {
    let k = req
        .k
        .as_ref()
        .and_then(|v| v.as_u64())
        .and_then(|k| u32::try_from(k).ok())
        .filter(|k| catalog.valid_k(*k))
        .ok_or_else(|| ApiError::BadRequest(catalog.invalid_k_message()))?;

    for name in &req.datasets {
        catalog.require(name)?;
    }

    let count = req.count.unwrap_or(DEFAULT_TOPK_COUNT);

    req.datasets
        .iter()
        .map(|name| -> Result<(String, &'a [NgramCount]), ApiError> {
            let ngrams = tables.topk(name, k).ok_or_else(|| {
                ApiError::NotFound(format!("No top-{} table for {}", k, name))
            })?;
            Ok((name.clone(), &ngrams[..count.min(ngrams.len())]))
        })
        .collect()
}
