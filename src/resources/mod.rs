//! Resource Loading Module
//!
//! Reads the precomputed corpus statistics from disk once, at startup, and keeps
//! them in memory for the lifetime of the process.
//!
//! ## Files
//! All paths are relative to the configured data directory:
//! - `topk/top-{k}_{stem}.jsonl`: most frequent n-grams, one `{"string", "count"}` per line.
//! - `lengths_char_summary/chars_{stem}.json`: document length (in characters) distribution.
//! - `overlaps.txt`: number of documents shared by each combination of corpora.
//! - `domains_per_token/{stem}.jsonl`: tokens per domain, only read when Postgres is not configured.
//!
//! ## Submodules
//! - **`loader`**: Parsers for each file format.
//! - **`stratify`**: Down-sampling of length distributions for plotting.
//! - **`tables`**: The assembled in-memory `CorpusTables`.
//! - **`types`**: Records produced by the parsers.

pub mod loader;
pub mod stratify;
pub mod tables;
pub mod types;
