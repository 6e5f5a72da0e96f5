//! Line-oriented parser for the service's tab-delimited response body.
//!
//! # Design
//! The body is consumed lazily, one line per `next()` call, so callers can
//! early-exit (the term-existence check reads at most one record) without
//! materializing the whole response. Empty lines and `#` comment lines are
//! skipped. A line starting with `Problem` is the service's in-band
//! authentication failure: it yields a single `Err(ApiError::Authentication)`
//! and exhausts the iterator — everything after it in the same response is
//! suppressed.
//!
//! Per-line field mapping never fails. The service's column count varies by
//! record type, so a missing or unparseable column leaves its record field at
//! `None`/empty and the remaining columns are still parsed.

use crate::error::ApiError;
use crate::types::QueryRecord;

/// Start a lazy, single-pass parse of a raw response body.
///
/// The returned iterator owns the body; re-parsing requires calling this
/// again with the (cheaply cloned) text.
pub fn parse_response(body: String) -> Records {
    Records {
        body,
        pos: 0,
        done: false,
    }
}

/// Lazy iterator over the records of one response body.
///
/// Yields `Ok(QueryRecord)` per data line, in body order, or a single
/// `Err(ApiError::Authentication)` if the service embedded its auth-failure
/// marker. Finite and fused: once exhausted or failed it stays empty.
#[derive(Debug)]
pub struct Records {
    body: String,
    pos: usize,
    done: bool,
}

impl Iterator for Records {
    type Item = Result<QueryRecord, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while self.pos < self.body.len() {
            let rest = &self.body[self.pos..];
            let (line, advance) = match rest.find('\n') {
                Some(i) => (&rest[..i], i + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;

            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with("Problem") {
                self.done = true;
                return Some(Err(ApiError::Authentication));
            }
            return Some(Ok(parse_record(line)));
        }
        None
    }
}

impl std::iter::FusedIterator for Records {}

/// Map one data line onto a `QueryRecord`.
///
/// Positional fields after a tab split: 0 → p-value, 2 → `source:id`,
/// 3 → description, 4 → comma-separated gene symbols. Field 1 is a score
/// column the service emits but this tool has never consumed.
pub fn parse_record(line: &str) -> QueryRecord {
    let fields: Vec<&str> = line.trim_end().split('\t').collect();

    let p_value = fields.first().and_then(|f| f.parse::<f64>().ok());

    let (disease_source, disease_id) = match fields.get(2) {
        Some(f) => {
            let mut parts = f.splitn(2, ':');
            let source = parts
                .next()
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let id = parts.next().and_then(|s| s.parse::<u32>().ok());
            (source, id)
        }
        None => (None, None),
    };

    let description = fields.get(3).map(|f| f.to_string());

    let gene_symbols = fields
        .get(4)
        .map(|f| {
            f.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    QueryRecord {
        p_value,
        disease_source,
        disease_id,
        description,
        gene_symbols,
        raw_line: line.to_string(),
    }
}
