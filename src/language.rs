// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Language-aware result reordering.
//!
//! A stable group-by-language: the preferred language's results move to the
//! front as a block, every other language follows in the order it first
//! appeared, and relevance order inside each block is untouched. Passing
//! `None` for the preference returns the list unchanged.
//!
//! The mechanics mirror the arithmetic the site has always used: each
//! result keeps its original index as a base weight, each language gets a
//! rank in the (reordered) distinct-language list, and results sort by
//! `base + result_count * language_rank`. Base weights are unique, so the
//! composite ordering is total and the grouping is stable by construction.

use crate::types::SearchResult;

/// Reorder `results` so the `preferred` language's block comes first.
///
/// A preference absent from the list (or `None`) degenerates to the input
/// order.
pub fn sort_by_language(results: Vec<SearchResult>, preferred: Option<&str>) -> Vec<SearchResult> {
    let Some(preferred) = preferred else {
        return results;
    };
    if !results.iter().any(|r| r.language == preferred) {
        return results;
    }

    // Distinct languages in first-occurrence order, preference moved first.
    let mut languages: Vec<String> = Vec::new();
    for result in &results {
        if !languages.iter().any(|l| l == &result.language) {
            languages.push(result.language.clone());
        }
    }
    let pos = languages
        .iter()
        .position(|l| l == preferred)
        .unwrap_or_default();
    let lang = languages.remove(pos);
    languages.insert(0, lang);

    let count = results.len();
    let rank = |language: &str| -> usize {
        languages
            .iter()
            .position(|l| l == language)
            .unwrap_or(languages.len())
    };

    let mut weighted: Vec<(usize, SearchResult)> = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| (index + count * rank(&result.language), result))
        .collect();
    weighted.sort_by_key(|(weight, _)| *weight);
    weighted.into_iter().map(|(_, result)| result).collect()
}
