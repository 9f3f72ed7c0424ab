// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked retrieval over the inverted index.
//!
//! Ranking is bucketed, not scored: a title match beats a content match no
//! matter how many times the content term occurs. Within a bucket,
//! documents covering more distinct query terms come first, then summed
//! term weights break ties, then corpus order settles everything -
//! retrieval output is fully deterministic for a given index.
//!
//! Terms match exactly or by prefix ("chari" finds "charity" at half
//! weight), which is as far as matching goes: no fuzzy, no stemming.

use crate::inverted::index_terms;
use crate::types::{FieldKind, InvertedIndex, PostingList};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Weight for a term hit in a document title.
pub const TITLE_WEIGHT: f64 = 100.0;

/// Weight for a term hit in document content.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Multiplier applied when a query term only prefix-matches an indexed
/// term.
pub const PREFIX_FACTOR: f64 = 0.5;

/// Per-document accumulation while query terms are looked up.
#[derive(Debug, Default)]
struct Candidate {
    title_hit: bool,
    matched_terms: HashSet<usize>,
    score: f64,
}

impl Candidate {
    fn add(&mut self, term_index: usize, field: FieldKind, weight: f64) {
        if field == FieldKind::Title {
            self.title_hit = true;
        }
        self.matched_terms.insert(term_index);
        self.score += weight;
    }
}

fn field_weight(field: FieldKind) -> f64 {
    match field {
        FieldKind::Title => TITLE_WEIGHT,
        FieldKind::Content => CONTENT_WEIGHT,
    }
}

/// Retrieve up to `limit` document ids for a raw query string, best first.
///
/// An empty or whitespace-only query retrieves nothing. Documents matching
/// no query term are excluded entirely.
pub fn retrieve(index: &InvertedIndex, query: &str, limit: usize) -> Vec<usize> {
    let terms = index_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut candidates: HashMap<usize, Candidate> = HashMap::new();
    let mut accumulate = |list: &PostingList, term_index: usize, factor: f64| {
        for posting in &list.postings {
            candidates
                .entry(posting.doc_id)
                .or_default()
                .add(term_index, posting.field, field_weight(posting.field) * factor);
        }
    };

    for (term_index, term) in terms.iter().enumerate() {
        if let Some(list) = index.terms.get(term) {
            accumulate(list, term_index, 1.0);
        }
        for (vocab_term, list) in &index.terms {
            if vocab_term.len() > term.len() && vocab_term.starts_with(term.as_str()) {
                accumulate(list, term_index, PREFIX_FACTOR);
            }
        }
    }

    let mut ranked: Vec<(usize, Candidate)> = candidates.into_iter().collect();
    ranked.sort_by(|a, b| compare_candidates(&a.1, &b.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(doc_id, _)| doc_id).collect()
}

/// Bucket (title hit), then distinct-term coverage, then summed weight.
/// Corpus order is applied by the caller as the final tiebreak.
fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.title_hit
        .cmp(&a.title_hit)
        .then(b.matched_terms.len().cmp(&a.matched_terms.len()))
        .then(
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal),
        )
}
