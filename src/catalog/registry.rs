use super::types::*;
use crate::error::ApiError;

/// N-gram sizes with a precomputed top-k table.
pub const NGRAM_SIZES: [u32; 7] = [1, 2, 3, 4, 5, 10, 100];

pub const INVALID_DATASET: &str = "Please enter a valid dataset name.";

/// Ordered collection of the corpora the service exposes.
#[derive(Debug, Clone)]
pub struct Catalog {
    datasets: Vec<Dataset>,
    ks: Vec<u32>,
}

impl Catalog {
    pub fn new(mut datasets: Vec<Dataset>, ks: Vec<u32>) -> Self {
        datasets.sort_by_key(|d| d.order);
        Self { datasets, ks }
    }

    /// The corpora published by the service.
    pub fn builtin() -> Self {
        use Capability::*;

        let entries: [(&str, &str, Option<(Cluster, &str)>, Option<&str>, &[Capability]); 11] = [
            (
                "OpenWebText",
                "openwebtext",
                Some((Cluster::Default, "openwebtext")),
                None,
                &[Basic, Indexed, Overlap],
            ),
            (
                "C4",
                "c4_en",
                Some((Cluster::Default, "c4")),
                Some("c4"),
                &[Basic, Indexed, Url, Overlap],
            ),
            ("mC4-en", "mc4", None, Some("mc4"), &[Basic, Url, Overlap]),
            (
                "OSCAR",
                "oscar",
                Some((Cluster::Default, "re_oscar")),
                Some("oscar"),
                &[Basic, Indexed, Url, Overlap],
            ),
            (
                "The Pile",
                "pile_train",
                Some((Cluster::Default, "re_pile")),
                None,
                &[Basic, Indexed, Overlap],
            ),
            (
                "RedPajama",
                "redpajama",
                None,
                Some("redpajama"),
                &[Basic, Url, Overlap],
            ),
            ("S2ORC", "s2orc_v0", None, None, &[Basic, Overlap]),
            ("peS2o", "s2orc_v3", None, None, &[Basic, Overlap]),
            (
                "LAION-2B-en",
                "laion2B-en",
                Some((Cluster::Default, "re_laion2b-en-*")),
                Some("laion"),
                &[Basic, Indexed, Url, Overlap],
            ),
            ("The Stack", "stack", None, None, &[Basic, Overlap]),
            (
                "Dolma",
                "dolma-v1_5",
                Some((Cluster::Dolma, "docs_v1.5_2023-11-02")),
                Some("dolma"),
                &[Basic, Indexed, Url, Overlap],
            ),
        ];

        let datasets = entries
            .iter()
            .enumerate()
            .map(|(i, (name, stem, search, table, caps))| Dataset {
                name: name.to_string(),
                order: i as u32 + 1,
                capabilities: caps.to_vec(),
                file_stem: stem.to_string(),
                search: search.map(|(cluster, index)| SearchTarget {
                    cluster,
                    index: index.to_string(),
                }),
                table: table.map(str::to_string),
            })
            .collect();

        Self::new(datasets, NGRAM_SIZES.to_vec())
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(|d| d.name.as_str())
    }

    pub fn ks(&self) -> &[u32] {
        &self.ks
    }

    pub fn valid_k(&self, k: u32) -> bool {
        self.ks.contains(&k)
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    /// Looks up a corpus a client asked for.
    pub fn require(&self, name: &str) -> Result<&Dataset, ApiError> {
        self.get(name)
            .ok_or_else(|| ApiError::BadRequest(INVALID_DATASET.to_string()))
    }

    /// Looks up a corpus that must be searchable in Elasticsearch.
    pub fn searchable(&self, name: &str) -> Result<(&Dataset, &SearchTarget), ApiError> {
        let dataset = self.require(name)?;
        match &dataset.search {
            Some(target) => Ok((dataset, target)),
            None => Err(ApiError::BadRequest(INVALID_DATASET.to_string())),
        }
    }

    /// Looks up a corpus that must have a domain table; returns the table name.
    pub fn with_table(&self, name: &str) -> Result<&str, ApiError> {
        let dataset = self.require(name)?;
        dataset
            .table
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest(INVALID_DATASET.to_string()))
    }

    /// Message returned when `k` is missing or unsupported.
    pub fn invalid_k_message(&self) -> String {
        let ks: Vec<String> = self.ks.iter().map(|k| k.to_string()).collect();
        format!("Please enter a valid k value: [{}].", ks.join(", "))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
