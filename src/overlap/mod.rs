//! Cross-corpus Overlap Module
//!
//! Answers how many documents each combination of corpora has in common,
//! using the precomputed overlap table.
//!
//! ## Endpoint
//! - `POST /api/get_overlaps`: counts for every non-empty subset of the requested corpora.

pub mod handlers;
pub mod subsets;
pub mod types;
