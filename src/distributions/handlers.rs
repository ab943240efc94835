use crate::app::request::parse_body;
use crate::app::response::PerDataset;
use crate::catalog::registry::Catalog;
use crate::error::ApiError;
use crate::resources::tables::CorpusTables;
use crate::resources::types::LengthPoint;

use axum::body::Bytes;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LengthRequest {
    #[serde(default)]
    pub corpora: Vec<String>,
}

pub async fn handle_len_dist(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(tables): Extension<Arc<CorpusTables>>,
    body: Bytes,
) -> Result<Json<PerDataset<Vec<LengthPoint>>>, ApiError> {
    let req: LengthRequest = parse_body(&body)?;
    Ok(Json(length_distributions(&catalog, &tables, &req.corpora)?))
}

pub fn length_distributions(
    catalog: &Catalog,
    tables: &CorpusTables,
    corpora: &[String],
) -> Result<PerDataset<Vec<LengthPoint>>, ApiError> {
    let mut out = PerDataset::new();
    for name in corpora {
        catalog.require(name)?;
        let points = tables
            .lengths(name)
            .ok_or_else(|| ApiError::NotFound(format!("No length distribution for {}", name)))?;
        out.insert(name.clone(), points.to_vec());
    }
    Ok(out)
}
