//! Corpus Statistics API Library
//!
//! This library crate holds everything behind the `wimbd-api` binary (`main.rs`):
//! a read-only HTTP API over precomputed statistics of large text corpora.
//!
//! ## Architecture Modules
//! - **`catalog`**: The registry of corpora and the backend identifiers of each one.
//! - **`resources`**: One-time loading of the flat statistics files into memory.
//! - **`ngrams`**: Top-k n-gram tables.
//! - **`overlap`**: Document overlap between combinations of corpora.
//! - **`distributions`**: Document length distributions.
//! - **`domains`**: Per-domain token rankings, backed by Postgres.
//! - **`phrases`**: Phrase document counts, backed by Elasticsearch.
//! - **`app`**: Router, request decoding, response shaping and query fan-out.
//! - **`cache`**: Memoisation of backend answers.
//! - **`config`**: Command line, file and environment configuration.
//! - **`error`**: Request-time errors and their HTTP rendering.

pub mod app;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod distributions;
pub mod domains;
pub mod error;
pub mod ngrams;
pub mod overlap;
pub mod phrases;
pub mod resources;

#[cfg(test)]
mod testing;
