//! Corpus Catalog Module
//!
//! The fixed registry of corpora served by the API.
//!
//! ## Overview
//! Every request names corpora by their display name ("C4", "The Pile", ...).
//! The catalog translates those names into the identifiers each backend uses:
//! - **File stem**: prefix of the flat files loaded at startup (`c4_en`, `pile_train`).
//! - **Search target**: Elasticsearch cluster and index holding the documents.
//! - **Table**: Postgres table holding the per-domain token counts.
//!
//! It also carries the capability tags shown by the UI and the list of
//! supported n-gram sizes.

pub mod registry;
pub mod types;
