use super::loader::{read_lengths, read_overlaps, read_topk};
use super::stratify::stratify_distribution;
use super::types::*;
use crate::catalog::registry::Catalog;

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

pub const TOPK_DIR: &str = "topk";
pub const LENGTHS_DIR: &str = "lengths_char_summary";
pub const OVERLAPS_FILE: &str = "overlaps.txt";
pub const DOMAINS_DIR: &str = "domains_per_token";

/// Everything served straight from memory, keyed by dataset display name.
#[derive(Debug, Default)]
pub struct CorpusTables {
    topk: HashMap<(String, u32), Vec<NgramCount>>,
    lengths: HashMap<String, Vec<LengthPoint>>,
    overlaps: HashMap<OverlapKey, u64>,
}

impl CorpusTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every file the catalog refers to. Any missing or malformed file is fatal.
    pub fn load(data_dir: &Path, catalog: &Catalog) -> Result<Self> {
        let mut tables = Self::new();

        for dataset in catalog.datasets() {
            for &k in catalog.ks() {
                let path = data_dir
                    .join(TOPK_DIR)
                    .join(format!("top-{}_{}.jsonl", k, dataset.file_stem));
                tables.insert_topk(&dataset.name, k, read_topk(&path)?);
            }
        }
        tracing::info!("top-k loaded");

        for dataset in catalog.datasets() {
            let path = data_dir
                .join(LENGTHS_DIR)
                .join(format!("chars_{}.json", dataset.file_stem));
            let dist = read_lengths(&path)?;
            tables.insert_lengths(&dataset.name, stratify_distribution(&dist));
        }
        tracing::info!("stratified lengths loaded");

        tables.overlaps = read_overlaps(&data_dir.join(OVERLAPS_FILE))?;
        tracing::info!("overlaps loaded ({} combinations)", tables.overlaps.len());

        Ok(tables)
    }

    pub fn insert_topk(&mut self, dataset: &str, k: u32, ngrams: Vec<NgramCount>) {
        self.topk.insert((dataset.to_string(), k), ngrams);
    }

    pub fn insert_lengths(&mut self, dataset: &str, points: Vec<LengthPoint>) {
        self.lengths.insert(dataset.to_string(), points);
    }

    /// `stems` need not be sorted.
    pub fn insert_overlap(&mut self, stems: &[&str], count: u64) {
        self.overlaps.insert(overlap_key(stems.iter().copied()), count);
    }

    /// N-grams of size `k`, most frequent first.
    pub fn topk(&self, dataset: &str, k: u32) -> Option<&[NgramCount]> {
        self.topk
            .get(&(dataset.to_string(), k))
            .map(|v| v.as_slice())
    }

    pub fn lengths(&self, dataset: &str) -> Option<&[LengthPoint]> {
        self.lengths.get(dataset).map(|v| v.as_slice())
    }

    pub fn overlap(&self, key: &OverlapKey) -> Option<u64> {
        self.overlaps.get(key).copied()
    }
}

/// Normalises file stems into an overlap table key.
pub fn overlap_key<'a>(stems: impl IntoIterator<Item = &'a str>) -> OverlapKey {
    let mut key: Vec<String> = stems.into_iter().map(str::to_string).collect();
    key.sort();
    key.dedup();
    key
}
