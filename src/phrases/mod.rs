//! Phrase Count Module
//!
//! Counts the documents of each corpus that contain a given phrase, by asking
//! the Elasticsearch index of that corpus.
//!
//! ## Overview
//! Most corpora share one Elasticsearch deployment; Dolma lives on its own.
//! `PhraseService` routes each request to the right cluster, runs the per-corpus
//! queries concurrently and memoises the answers.
//!
//! ## Endpoint
//! - `POST /api/text_count`: `{corpus: documents_containing_text}`.
//!
//! ## Submodules
//! - **`counter`**: The `PhraseCounter` abstraction.
//! - **`elastic`**: HTTP client for the Elasticsearch `_count` API.
//! - **`service`**: Cluster routing, caching and fan-out.
//! - **`handlers`**: Axum request handler.

pub mod counter;
pub mod elastic;
pub mod handlers;
pub mod service;
pub mod types;
