// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-token keyword highlighting.
//!
//! Keywords are matched as substrings anywhere in the content, but the text
//! that gets wrapped is always the *entire enclosing token* - searching
//! "cat" highlights all of "category", never a partial word. The steps:
//!
//! 1. tokenize the content with the delimiter-preserving splitter,
//! 2. for every case-insensitive keyword occurrence, resolve the token
//!    whose character span contains the occurrence start,
//! 3. sort the collected tokens longest-first,
//! 4. wrap every case-insensitive occurrence of each token, preserving the
//!    matched text's original casing.
//!
//! Longest-first ordering keeps the markers well-nested when one token is a
//! substring of another ("cat" inside "category"): the longer token is
//! wrapped first, and the shorter token's pass may re-wrap text *inside*
//! those markers but never tears them apart.

use crate::tokenize::delimited_tokens;
use crate::utils::{find_ci, fold_chars};
use std::collections::HashSet;

/// Marker strings wrapped around highlighted tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightDelimiters {
    pub start: String,
    pub end: String,
}

impl Default for HighlightDelimiters {
    fn default() -> Self {
        Self {
            start: "<strong>".to_string(),
            end: "</strong>".to_string(),
        }
    }
}

/// Wrap every whole-token occurrence of the given keywords in `content`.
///
/// Keywords that never occur contribute nothing; empty keywords are
/// ignored. The returned string differs from `content` only by inserted
/// delimiter markers.
pub fn highlight_keywords(
    keywords: &[&str],
    content: &str,
    delimiters: &HighlightDelimiters,
) -> String {
    let tokens = delimited_tokens(content);

    // Character span of each token, for offset -> token resolution.
    let mut spans: Vec<(usize, usize, &str)> = Vec::with_capacity(tokens.len());
    let mut pos = 0;
    for token in &tokens {
        let len = token.chars().count();
        spans.push((pos, pos + len, token));
        pos += len;
    }

    // Collect tokens to highlight in first-discovery order, then sort
    // longest-first. The stable sort keeps discovery order among ties.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut to_highlight: Vec<&str> = Vec::new();
    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        for offset in find_ci(content, keyword) {
            if let Some(token) = token_at(&spans, offset) {
                if seen.insert(token) {
                    to_highlight.push(token);
                }
            }
        }
    }
    to_highlight.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut highlighted = content.to_string();
    for token in to_highlight {
        highlighted = wrap_occurrences(&highlighted, token, delimiters);
    }
    highlighted
}

/// The token whose character span contains `offset`, if any.
fn token_at<'a>(spans: &[(usize, usize, &'a str)], offset: usize) -> Option<&'a str> {
    spans
        .iter()
        .find(|(start, end, _)| *start <= offset && offset < *end)
        .map(|(_, _, token)| *token)
}

/// Replace every case-insensitive, non-overlapping occurrence of `needle`
/// with the matched text (original casing) wrapped in the delimiters.
fn wrap_occurrences(content: &str, needle: &str, delimiters: &HighlightDelimiters) -> String {
    let folded = fold_chars(content);
    let needle_f = fold_chars(needle);
    if needle_f.is_empty() {
        return content.to_string();
    }

    let char_starts: Vec<usize> = content.char_indices().map(|(i, _)| i).collect();
    let byte_at = |char_idx: usize| -> usize {
        char_starts.get(char_idx).copied().unwrap_or(content.len())
    };

    let mut out = String::with_capacity(content.len());
    let mut i = 0;
    while i < folded.len() {
        if i + needle_f.len() <= folded.len() && folded[i..i + needle_f.len()] == needle_f[..] {
            out.push_str(&delimiters.start);
            out.push_str(&content[byte_at(i)..byte_at(i + needle_f.len())]);
            out.push_str(&delimiters.end);
            i += needle_f.len();
        } else {
            out.push_str(&content[byte_at(i)..byte_at(i + 1)]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(keywords: &[&str], content: &str) -> String {
        highlight_keywords(keywords, content, &HighlightDelimiters::default())
    }

    #[test]
    fn test_single_keyword_whole_token() {
        assert_eq!(
            highlight(&["cat"], "The cat sat"),
            "The <strong>cat</strong> sat"
        );
    }

    #[test]
    fn test_substring_match_widens_to_token() {
        assert_eq!(
            highlight(&["cat"], "catalog of items"),
            "<strong>catalog</strong> of items"
        );
    }

    #[test]
    fn test_longest_token_wrapped_first() {
        // "category" must come out wrapped as one full token; the "cat"
        // pass then re-wraps inside the existing, still well-nested markers
        assert_eq!(
            highlight(&["cat", "category"], "category cat"),
            "<strong><strong>cat</strong>egory</strong> <strong>cat</strong>"
        );
    }

    #[test]
    fn test_preserves_original_casing() {
        assert_eq!(
            highlight(&["cat"], "Cat and CAT"),
            "<strong>Cat</strong> and <strong>CAT</strong>"
        );
    }

    #[test]
    fn test_absent_keyword_is_noop() {
        assert_eq!(highlight(&["dog"], "The cat sat"), "The cat sat");
    }

    #[test]
    fn test_empty_keyword_ignored() {
        assert_eq!(highlight(&[""], "The cat sat"), "The cat sat");
    }

    #[test]
    fn test_punctuation_bounds_tokens() {
        assert_eq!(
            highlight(&["cat"], "(cat) sat"),
            "(<strong>cat</strong>) sat"
        );
    }

    #[test]
    fn test_keyword_spanning_delimiter_highlights_enclosing_token() {
        // the occurrence of "cat s" starts inside the "cat" token
        assert_eq!(
            highlight(&["cat s"], "The cat sat"),
            "The <strong>cat</strong> sat"
        );
    }

    #[test]
    fn test_custom_delimiters() {
        let delims = HighlightDelimiters {
            start: "[".to_string(),
            end: "]".to_string(),
        };
        assert_eq!(
            highlight_keywords(&["cat"], "The cat sat", &delims),
            "The [cat] sat"
        );
    }

    #[test]
    fn test_all_occurrences_of_token_wrapped() {
        // "sat" never matched a keyword, so only "cat" tokens get wrapped -
        // but *every* occurrence of the "cat" token text does
        assert_eq!(
            highlight(&["cat"], "cat cat cat"),
            "<strong>cat</strong> <strong>cat</strong> <strong>cat</strong>"
        );
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            highlight(&["café"], "Le Café du coin"),
            "Le <strong>Café</strong> du coin"
        );
    }
}
