//! Records read from the precomputed statistics files.

use serde::{Deserialize, Serialize};

/// One line of a `top-{k}_{stem}.jsonl` file.
#[derive(Debug, Clone, Deserialize)]
pub struct NgramLine {
    pub string: String,
    pub count: u64,
}

/// An n-gram with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramCount {
    #[serde(rename = "ng")]
    pub ngram: String,
    #[serde(rename = "c")]
    pub count: u64,
}

/// One line of a `domains_per_token/{stem}.jsonl` file.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainLine {
    pub url: String,
    pub count: u64,
}

/// Token count of a domain together with its position in the corpus ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub tokens: i64,
    /// Share of all tokens in the corpus, in `[0, 1]`.
    pub percentage: f64,
    /// 1 for the domain with most tokens.
    pub rank: i64,
}

/// `(x, y)` point of a length distribution: characters and fraction of documents.
pub type LengthPoint = (usize, f64);

/// Key of the overlap table: sorted, de-duplicated file stems.
pub type OverlapKey = Vec<String>;
