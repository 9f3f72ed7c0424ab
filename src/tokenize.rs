// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed character-class tokenization.
//!
//! Three splitters, each with the delimiter set spelled out as an explicit
//! predicate rather than a regex, so the exact class is visible at the call
//! site and there is nothing to quirk-match against a regex engine:
//!
//! - [`words`] splits on whitespace runs (snippet word budgets, query
//!   keywords, tier word checks),
//! - [`sentences`] splits on `.?|!` runs (snippet windows),
//! - [`delimited_tokens`] splits on the wide punctuation class while
//!   *keeping* the delimiter runs, so the highlighter can map a character
//!   offset back to its enclosing token.
//!
//! No stemming, no stopwords, no Unicode segmentation - splitting is the
//! whole tokenizer.

/// Sentence-ending characters: runs of these (plus trailing whitespace)
/// separate sentences.
pub(crate) fn is_sentence_delimiter(c: char) -> bool {
    matches!(c, '.' | '?' | '|' | '!')
}

/// The highlighter's token delimiter class:
/// `[ \t\n\r.|(){}[]"?\/+=!,;:*]`.
pub(crate) fn is_token_delimiter(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '.'
            | '|'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '"'
            | '?'
            | '\\'
            | '/'
            | '+'
            | '='
            | '!'
            | ','
            | ';'
            | ':'
            | '*'
    )
}

/// Split on runs of whitespace.
///
/// Empty input yields an empty vector. A leading or trailing whitespace run
/// produces an empty-string element; callers filter or tolerate those.
pub fn words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut start = 0;
    let mut in_run = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if !in_run {
                out.push(&text[start..i]);
                in_run = true;
            }
        } else if in_run {
            start = i;
            in_run = false;
        }
    }
    if in_run {
        out.push("");
    } else {
        out.push(&text[start..]);
    }
    out
}

/// Split into trimmed sentences on runs of `.`, `?`, `|`, `!` followed by
/// optional whitespace.
///
/// A terminal delimiter leaves a trailing empty sentence, which is kept.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if !is_sentence_delimiter(c) {
            continue;
        }
        out.push(text[start..i].trim());
        while let Some(&(_, d)) = iter.peek() {
            if is_sentence_delimiter(d) {
                iter.next();
            } else {
                break;
            }
        }
        while let Some(&(_, d)) = iter.peek() {
            if d.is_whitespace() {
                iter.next();
            } else {
                break;
            }
        }
        start = iter.peek().map_or(text.len(), |&(j, _)| j);
    }
    out.push(text[start..].trim());
    out
}

/// Split into tokens while preserving delimiter runs.
///
/// Concatenating the returned slices reproduces the input exactly; pieces
/// alternate between token text and runs of [`is_token_delimiter`]
/// characters. Only the highlighter uses this - it needs the original
/// character layout to widen substring matches to whole tokens.
pub fn delimited_tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_delim: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let is_delim = is_token_delimiter(c);
        if let Some(prev) = prev_delim {
            if prev != is_delim {
                out.push(&text[start..i]);
                start = i;
            }
        }
        prev_delim = Some(is_delim);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_basic() {
        assert_eq!(words("the quick fox"), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_words_collapses_runs() {
        assert_eq!(words("a  \t b"), vec!["a", "b"]);
    }

    #[test]
    fn test_words_empty_input() {
        assert!(words("").is_empty());
    }

    #[test]
    fn test_words_leading_trailing_whitespace() {
        assert_eq!(words(" a "), vec!["", "a", ""]);
    }

    #[test]
    fn test_sentences_basic() {
        assert_eq!(sentences("First. Second! Third"), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sentences_keeps_trailing_empty() {
        assert_eq!(sentences("Done."), vec!["Done", ""]);
    }

    #[test]
    fn test_sentences_delimiter_runs_collapse() {
        assert_eq!(sentences("What?! Really?..."), vec!["What", "Really", ""]);
    }

    #[test]
    fn test_sentences_pipe_is_a_delimiter() {
        assert_eq!(sentences("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_sentences_empty_input() {
        assert_eq!(sentences(""), vec![""]);
    }

    #[test]
    fn test_sentences_trims_pieces() {
        assert_eq!(sentences("  spaced out .next"), vec!["spaced out", "next"]);
    }

    #[test]
    fn test_delimited_tokens_roundtrip() {
        let text = "The cat (really!) sat.";
        let tokens = delimited_tokens(text);
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_delimited_tokens_alternation() {
        assert_eq!(
            delimited_tokens("a.b c"),
            vec!["a", ".", "b", " ", "c"]
        );
    }

    #[test]
    fn test_delimited_tokens_runs_stay_together() {
        assert_eq!(delimited_tokens("a?! b"), vec!["a", "?! ", "b"]);
    }

    #[test]
    fn test_delimited_tokens_empty() {
        assert!(delimited_tokens("").is_empty());
    }

    #[test]
    fn test_delimited_tokens_keeps_non_delimiter_punctuation() {
        // '-' and '\'' are not in the delimiter class
        assert_eq!(delimited_tokens("well-known it's"), vec!["well-known", " ", "it's"]);
    }
}
