//! Document Length Distributions
//!
//! Serves the down-sampled character-length distribution of each corpus.
//!
//! ## Endpoint
//! - `POST /api/len_dist`: `{corpus: [[length, fraction], ...]}`.

pub mod handlers;
