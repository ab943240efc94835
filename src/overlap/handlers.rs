use super::subsets::non_empty_subsets;
use super::types::{OverlapRequest, SubsetCount};
use crate::app::request::parse_body;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;
use crate::resources::tables::{CorpusTables, overlap_key};

use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_overlaps(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(tables): Extension<Arc<CorpusTables>>,
    body: Bytes,
) -> Result<Json<Vec<SubsetCount>>, ApiError> {
    let req: OverlapRequest = parse_body(&body)?;
    Ok(Json(subset_counts(&catalog, &tables, &req.corpora)?))
}

/// Looks up the overlap count of every non-empty subset of `corpora`.
/// A request names at most as many corpora as the catalog holds.
pub fn subset_counts(
    catalog: &Catalog,
    tables: &CorpusTables,
    corpora: &[String],
) -> Result<Vec<SubsetCount>, ApiError> {
    let max = catalog.datasets().len();
    if corpora.len() > max {
        return Err(ApiError::BadRequest(format!(
            "Please select at most {} corpora.",
            max
        )));
    }
    for name in corpora {
        catalog.require(name)?;
    }

    tracing::info!(event = "overlap", corpora = %corpora.join(","), "user-overlap");

    non_empty_subsets(corpora)
        .into_iter()
        .map(|subset| -> Result<SubsetCount, ApiError> {
            tracing::debug!("overlap subset: {}", subset.join(","));

            let mut stems = Vec::with_capacity(subset.len());
            for name in &subset {
                stems.push(catalog.require(name)?.file_stem.as_str());
            }
            let key = overlap_key(stems);

            let count = tables.overlap(&key).ok_or_else(|| {
                ApiError::NotFound(format!("No overlap count for {}", subset.join(", ")))
            })?;
            Ok(SubsetCount { subset, count })
        })
        .collect()
}
