//! N-gram Statistics Module
//!
//! Serves the most frequent n-grams of each corpus from the top-k tables loaded at startup.
//!
//! ## Endpoints
//! - `GET /api/ks`: supported n-gram sizes.
//! - `POST /api/topk`: top n-grams per corpus, strings only.
//! - `POST /api/topk_with_counts`: top n-grams per corpus with their counts.

pub mod handlers;
pub mod types;
