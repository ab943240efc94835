//! Domain Statistics Module
//!
//! Per-corpus rankings of web domains by number of tokens.
//!
//! ## Overview
//! The rankings are large (millions of domains per corpus) and live in Postgres,
//! one table per corpus with `domain`, `count`, `percentage` and `rank` columns.
//! Deployments without a database can serve the same data from memory.
//!
//! ## Endpoints
//! - `POST /api/domains_count`: domains starting with a prefix, per corpus.
//! - `POST /api/top_domains`: the highest ranked domains, per corpus.
//!
//! ## Submodules
//! - **`store`**: The `DomainStore` abstraction over the ranking tables.
//! - **`postgres`**: `sqlx` implementation.
//! - **`memory`**: In-process implementation built from the raw JSONL counts.
//! - **`service`**: Caching and parallel fan-out across corpora.
//! - **`handlers`**: Axum request handlers.

pub mod handlers;
pub mod memory;
pub mod postgres;
pub mod service;
pub mod store;
pub mod types;
