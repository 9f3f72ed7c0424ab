// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tiered title matcher behind the lightweight search path.
//!
//! No index here: the lightweight artifact is small enough that every query
//! walks all candidate titles and drops each one into the first tier it
//! satisfies (or none). Final order is tier by tier, candidate order within
//! a tier, truncated to the limit. Match quality inside a tier never
//! reorders anything.
//!
//! ## The short-circuit rule
//!
//! Classification checks, per (title word, query word) pair, the conditions
//! in priority order and returns on the *first* pair that satisfies any of
//! them. A pair iterated earlier can therefore claim a weaker tier before a
//! later pair would have claimed a stronger one. That demotion is inherited
//! behavior and is load-bearing for output compatibility - see
//! `demotion_quirk_is_preserved` in `tests/lightweight.rs` before "fixing"
//! it.

use crate::tokenize::words;
use crate::types::{LightweightEntry, MatchTier, SearchResult, TIER_COUNT};

/// Which tiers participate in classification.
///
/// The site shipped two near-identical matchers over the years; the only
/// real difference was whether the whole-string prefix check ran before the
/// per-word checks. Both behaviors survive behind this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierMode {
    /// Check `FullStart` (whole title starts with the whole query) first,
    /// then the three word-based tiers.
    #[default]
    WithFullPrefix,
    /// Word-based tiers only: `FullWord`, `StartMatch`, `StartWord`.
    WordTiersOnly,
}

/// Classify one candidate title against a query.
///
/// Both sides are trimmed and lowercased; no other cleaning applies. An
/// empty or whitespace-only query matches nothing.
pub fn classify_title(title: &str, query: &str, mode: TierMode) -> Option<MatchTier> {
    let query_lc = query.trim().to_lowercase();
    let query_words: Vec<&str> = words(&query_lc)
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect();
    classify_lowered(title, &query_lc, &query_words, mode)
}

/// Classification core, with the query already lowercased and split so the
/// per-candidate loop in [`search_titles`] does it once.
fn classify_lowered(
    title: &str,
    query_lc: &str,
    query_words: &[&str],
    mode: TierMode,
) -> Option<MatchTier> {
    if query_words.is_empty() {
        return None;
    }

    let title_lc = title.trim().to_lowercase();
    if mode == TierMode::WithFullPrefix && title_lc.starts_with(query_lc) {
        return Some(MatchTier::FullStart);
    }

    // First satisfying pair wins; see module docs for why this is not a
    // best-tier search.
    for title_word in words(&title_lc) {
        if title_word.is_empty() {
            continue;
        }
        for query_word in query_words {
            if title_word == *query_word {
                return Some(MatchTier::FullWord);
            }
            if title_lc.starts_with(query_word) {
                return Some(MatchTier::StartMatch);
            }
            if title_word.starts_with(query_word) {
                return Some(MatchTier::StartWord);
            }
        }
    }
    None
}

/// Lightweight search: classify every candidate, concatenate the tier
/// buckets in priority order, truncate to `limit`.
///
/// Candidates that satisfy no tier are excluded. Results carry title, url
/// and language only - no snippet on this path.
pub fn search_titles(
    entries: &[LightweightEntry],
    query: &str,
    mode: TierMode,
    limit: usize,
) -> Vec<SearchResult> {
    let query_lc = query.trim().to_lowercase();
    let query_words: Vec<&str> = words(&query_lc)
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect();
    if query_words.is_empty() {
        return Vec::new();
    }

    let mut buckets: [Vec<&LightweightEntry>; TIER_COUNT] = Default::default();
    for entry in entries {
        if let Some(tier) = classify_lowered(&entry.title, &query_lc, &query_words, mode) {
            buckets[tier as usize].push(entry);
        }
    }

    let mut results = Vec::new();
    'tiers: for bucket in &buckets {
        for entry in bucket {
            if results.len() == limit {
                break 'tiers;
            }
            results.push(SearchResult {
                title: entry.title.clone(),
                url: entry.url.clone(),
                language: entry.language.clone(),
                content: String::new(),
                layout: None,
                image_url: None,
            });
        }
    }
    results
}
