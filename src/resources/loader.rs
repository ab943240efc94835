use super::types::*;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses a JSON-lines file, skipping blank lines.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON record", path.display(), line_no + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Collapses repeated keys: a key keeps the position of its first occurrence
/// and the count of its last one.
fn dedupe_counts(pairs: impl IntoIterator<Item = (String, u64)>) -> Vec<(String, u64)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<(String, u64)> = Vec::new();

    for (key, count) in pairs {
        match positions.get(&key) {
            Some(&i) => out[i].1 = count,
            None => {
                positions.insert(key.clone(), out.len());
                out.push((key, count));
            }
        }
    }
    out
}

/// Orders pairs by descending count. Ties keep their input order.
fn sort_by_count_desc(pairs: &mut [(String, u64)]) {
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Reads a top-k n-gram file, most frequent first.
pub fn read_topk(path: &Path) -> Result<Vec<NgramCount>> {
    let lines: Vec<NgramLine> = read_jsonl(path)?;
    let mut pairs = dedupe_counts(lines.into_iter().map(|l| (l.string, l.count)));
    sort_by_count_desc(&mut pairs);

    Ok(pairs
        .into_iter()
        .map(|(ngram, count)| NgramCount { ngram, count })
        .collect())
}

/// Reads a length distribution: `{"<chars>": <fraction>}`.
///
/// Fractions may be stored either as JSON numbers or as numeric strings.
pub fn read_lengths(path: &Path) -> Result<BTreeMap<usize, f64>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let raw: HashMap<String, serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{}: expected a JSON object", path.display()))?;

    let mut dist = BTreeMap::new();
    for (size, value) in raw {
        let size: usize = size
            .trim()
            .parse()
            .with_context(|| format!("{}: invalid length key {:?}", path.display(), size))?;
        let fraction = match &value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .ok_or_else(|| anyhow!("{}: invalid fraction for length {}", path.display(), size))?;
        dist.insert(size, fraction);
    }
    Ok(dist)
}

/// Parses one line of `overlaps.txt`, e.g. `(['c4_en', 'oscar'], 30602)`.
pub fn parse_overlap_line(line: &str, quoted: &Regex) -> Result<(OverlapKey, u64)> {
    let body = line.trim();
    let body = body.strip_prefix('(').unwrap_or(body);
    let body = body.strip_suffix(')').unwrap_or(body);

    let (names_part, count_part) = body
        .rsplit_once(',')
        .ok_or_else(|| anyhow!("missing count in overlap line {:?}", line))?;

    let count: u64 = count_part
        .trim()
        .parse()
        .with_context(|| format!("invalid count in overlap line {:?}", line))?;

    let mut names: Vec<String> = quoted
        .captures_iter(names_part)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();
    if names.is_empty() {
        return Err(anyhow!("no corpora in overlap line {:?}", line));
    }
    names.sort();
    names.dedup();

    Ok((names, count))
}

/// Reads the cross-corpus overlap table.
pub fn read_overlaps(path: &Path) -> Result<HashMap<OverlapKey, u64>> {
    let quoted = Regex::new(r#"'([^']*)'|"([^"]*)""#)?;
    let text =
        std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;

    let mut overlaps = HashMap::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, count) = parse_overlap_line(line, &quoted)
            .with_context(|| format!("{}:{}", path.display(), line_no + 1))?;
        overlaps.insert(key, count);
    }
    Ok(overlaps)
}

/// Turns raw per-domain token counts into a ranking with token shares.
pub fn rank_domains(lines: Vec<DomainLine>) -> Vec<DomainCount> {
    let mut pairs = dedupe_counts(lines.into_iter().map(|l| (l.url, l.count)));
    sort_by_count_desc(&mut pairs);

    let total: u64 = pairs.iter().map(|(_, c)| *c).sum();

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (domain, count))| DomainCount {
            domain,
            tokens: count as i64,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
            rank: i as i64 + 1,
        })
        .collect()
}

/// Reads and ranks a `domains_per_token` file.
pub fn read_domains(path: &Path) -> Result<Vec<DomainCount>> {
    let lines: Vec<DomainLine> = read_jsonl(path)?;
    Ok(rank_domains(lines))
}
