//! Shared fixtures for unit tests: sample tables and in-process stand-ins
//! for Postgres and Elasticsearch.

use crate::domains::memory::MemoryDomainStore;
use crate::domains::store::{DomainStore, StoreError};
use crate::phrases::counter::{PhraseCountError, PhraseCounter};
use crate::resources::loader::rank_domains;
use crate::resources::tables::CorpusTables;
use crate::resources::types::{DomainCount, DomainLine, NgramCount};

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn ngrams(pairs: &[(&str, u64)]) -> Vec<NgramCount> {
    pairs
        .iter()
        .map(|(ngram, count)| NgramCount {
            ngram: ngram.to_string(),
            count: *count,
        })
        .collect()
}

/// Tables for C4, OSCAR and LAION-2B-en.
pub fn sample_tables() -> CorpusTables {
    let mut tables = CorpusTables::new();

    let unigrams: Vec<NgramCount> = (0..30u64)
        .map(|i| NgramCount {
            ngram: format!("w{}", i),
            count: 1000 - i,
        })
        .collect();
    tables.insert_topk("C4", 1, unigrams);
    tables.insert_topk(
        "C4",
        2,
        ngrams(&[("of the", 100), ("in the", 80), ("to the", 60)]),
    );
    tables.insert_topk("OSCAR", 2, ngrams(&[("de la", 50)]));
    tables.insert_topk("LAION-2B-en", 2, ngrams(&[("stock photo", 70), ("of the", 20)]));

    tables.insert_lengths("C4", vec![(1, 0.5), (2, 0.25), (126, 0.001)]);
    tables.insert_lengths("LAION-2B-en", vec![(5, 0.9)]);

    tables.insert_overlap(&["c4_en"], 364868892);
    tables.insert_overlap(&["laion2B-en"], 1407171770);
    tables.insert_overlap(&["laion2B-en", "c4_en"], 30602);

    tables
}

fn domain_lines(pairs: &[(&str, u64)]) -> Vec<DomainLine> {
    pairs
        .iter()
        .map(|(url, count)| DomainLine {
            url: url.to_string(),
            count: *count,
        })
        .collect()
}

/// Domain rankings for the `laion` and `c4` tables.
pub fn sample_domain_store() -> MemoryDomainStore {
    let mut store = MemoryDomainStore::new();
    store.insert_table(
        "laion",
        rank_domains(domain_lines(&[
            ("i.pinimg.com", 16870768),
            ("cdn.shopify.com", 11994142),
            ("images.slideplayer.com", 5016298),
            ("www.google.com", 453),
            ("cdn.example.org", 12),
        ])),
    );
    store.insert_table(
        "c4",
        rank_domains(domain_lines(&[
            ("www.nytimes.com", 900),
            ("en.wikipedia.org", 800),
            ("www.bbc.co.uk", 700),
        ])),
    );
    store
}

/// Wraps a store and counts the prefix queries reaching it.
pub struct CountingStore {
    inner: MemoryDomainStore,
    prefix_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: MemoryDomainStore) -> Self {
        Self {
            inner,
            prefix_calls: AtomicUsize::new(0),
        }
    }

    pub fn prefix_calls(&self) -> usize {
        self.prefix_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainStore for CountingStore {
    async fn prefix_search(
        &self,
        table: &str,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<DomainCount>, StoreError> {
        self.prefix_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.prefix_search(table, prefix, limit).await
    }

    async fn top_domains(&self, table: &str, count: i64) -> Result<Vec<DomainCount>, StoreError> {
        self.inner.top_domains(table, count).await
    }
}

/// A store that never answers within any reasonable deadline.
pub struct SlowStore {
    delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl DomainStore for SlowStore {
    async fn prefix_search(
        &self,
        _table: &str,
        _prefix: &str,
        _limit: i64,
    ) -> Result<Vec<DomainCount>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn top_domains(&self, _table: &str, _count: i64) -> Result<Vec<DomainCount>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

/// Phrase counter answering from a fixed `(index, text) -> count` table and
/// recording every call.
#[derive(Default)]
pub struct FakeCounter {
    answers: HashMap<(String, String), u64>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, index: &str, text: &str, count: u64) -> Self {
        self.answers
            .insert((index.to_string(), text.to_string()), count);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhraseCounter for FakeCounter {
    async fn count(&self, index: &str, text: &str) -> Result<u64, PhraseCountError> {
        self.calls
            .lock()
            .unwrap()
            .push((index.to_string(), text.to_string()));

        self.answers
            .get(&(index.to_string(), text.to_string()))
            .copied()
            .ok_or_else(|| PhraseCountError::Status {
                index: index.to_string(),
                status: 404,
                body: "index_not_found_exception".to_string(),
            })
    }
}
