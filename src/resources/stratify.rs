//! Down-sampling of length distributions for plotting. The first 100 points
//! are kept whole, the 8K-10K band every third point, everything else every
//! 25th point.

use super::types::LengthPoint;
use std::collections::BTreeMap;

const HEAD: usize = 100;
const SPARSE_STEP: usize = 25;
const DENSE_START: usize = 8005;
const DENSE_END: usize = 10_000;
const DENSE_STEP: usize = 3;
/// Points at or below this fraction are not plotted.
pub const MIN_FRACTION: f64 = 1e-7;

/// Whether the point at zero-based `position` survives down-sampling.
pub fn keep_position(position: usize) -> bool {
    match position {
        p if p < HEAD => true,
        p if p < DENSE_START => (p - HEAD) % SPARSE_STEP == 0,
        p if p < DENSE_END => (p - DENSE_START) % DENSE_STEP == 0,
        p => (p - DENSE_END) % SPARSE_STEP == 0,
    }
}

/// Down-samples `values` (ordered by length). The x coordinate is the 1-based position.
pub fn stratify(values: &[f64]) -> Vec<LengthPoint> {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| keep_position(*i))
        .filter(|(_, y)| **y > MIN_FRACTION)
        .map(|(i, y)| (i + 1, *y))
        .collect()
}

pub fn stratify_distribution(dist: &BTreeMap<usize, f64>) -> Vec<LengthPoint> {
    let values: Vec<f64> = dist.values().copied().collect();
    stratify(&values)
}
