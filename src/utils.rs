// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for case-insensitive string scanning.
//!
//! Matching throughout the crate is "simple case fold" matching: each
//! character is compared through `fold_char`, which lowercases anything with
//! a single-character lowercase form. No diacritic stripping, no locale
//! rules - titles and queries are compared the way a browser regex with the
//! `i` flag would compare them.

/// Fold a single character for case-insensitive comparison.
///
/// Characters whose lowercase form expands to multiple characters (e.g. 'İ')
/// are kept as-is so that folded text stays the same length as the original.
/// Offsets computed over folded text then map 1:1 back to source characters.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(first), None) => first,
        _ => c,
    }
}

/// Fold a whole string into a char vector for offset-preserving comparison.
pub(crate) fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// All non-overlapping case-insensitive occurrences of `needle` in
/// `haystack`, as character offsets. An empty needle matches nothing.
pub(crate) fn find_ci(haystack: &str, needle: &str) -> Vec<usize> {
    let folded = fold_chars(haystack);
    let needle_f = fold_chars(needle);
    if needle_f.is_empty() || needle_f.len() > folded.len() {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    let mut i = 0;
    while i + needle_f.len() <= folded.len() {
        if folded[i..i + needle_f.len()] == needle_f[..] {
            offsets.push(i);
            i += needle_f.len();
        } else {
            i += 1;
        }
    }
    offsets
}

/// Does `haystack` contain `needle`, case-insensitively?
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    !find_ci(haystack, needle).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_char_ascii() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('z'), 'z');
        assert_eq!(fold_char('!'), '!');
    }

    #[test]
    fn test_fold_char_keeps_expanding_lowercase() {
        // 'İ' lowercases to "i\u{307}" - folding keeps the original so
        // offsets stay aligned
        assert_eq!(fold_char('İ'), 'İ');
    }

    #[test]
    fn test_find_ci_basic() {
        assert_eq!(find_ci("The cat sat", "cat"), vec![4]);
        assert_eq!(find_ci("CAT cat Cat", "cat"), vec![0, 4, 8]);
    }

    #[test]
    fn test_find_ci_inside_words() {
        // substring occurrences count, the highlighter widens them later
        assert_eq!(find_ci("category cat", "cat"), vec![0, 9]);
    }

    #[test]
    fn test_find_ci_empty_needle() {
        assert!(find_ci("anything", "").is_empty());
    }

    #[test]
    fn test_find_ci_unicode() {
        assert_eq!(find_ci("Éclair et éclair", "éclair"), vec![0, 10]);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Hello World", "world"));
        assert!(!contains_ci("Hello World", "mars"));
        assert!(!contains_ci("", "x"));
    }
}
