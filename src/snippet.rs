// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence-windowed snippet extraction.
//!
//! A snippet is built from up to three "windows": runs of consecutive
//! sentences starting at a sentence that contains one of the query
//! keywords. The total word budget is split evenly across the selected
//! windows, so a three-window snippet never exceeds the budget by more than
//! rounding. When nothing matches, the lead-in window from sentence zero
//! stands in; when even that is empty, a fixed fallback string is returned
//! so every result has *some* description.
//!
//! The extractor runs on content that has already been highlighted - the
//! markers contain no sentence delimiters, so they ride along unharmed.

use crate::tokenize::sentences;
use crate::utils::contains_ci;

/// Returned when a document yields no usable snippet text at all.
pub const NO_DESCRIPTION_FALLBACK: &str =
    "No description is currently available for this page.";

/// Separator between windows of a multi-window snippet.
const WINDOW_SEPARATOR: &str = " ... ";

/// Normalize the tail of `text` to exactly one ellipsis: any run of
/// trailing `.` characters is replaced by `"..."`.
pub fn add_ellipses(text: &str) -> String {
    let mut out = text.trim_end_matches('.').to_string();
    out.push_str("...");
    out
}

/// Extract a highlighted snippet from `content`.
///
/// `budget` is the total word budget across all windows, `max_windows`
/// caps how many keyword-bearing windows are kept (document order), and
/// `window_sentences` is how many consecutive sentences a window spans.
pub fn extract_snippet(
    content: &str,
    keywords: &[&str],
    budget: usize,
    max_windows: usize,
    window_sentences: usize,
) -> String {
    let sents = sentences(content);
    let keywords: Vec<&str> = keywords.iter().copied().filter(|k| !k.is_empty()).collect();

    let mut windows: Vec<String> = sents
        .iter()
        .enumerate()
        .filter(|(_, sentence)| keywords.iter().any(|k| contains_ci(sentence, k)))
        .take(max_windows)
        .map(|(start, _)| sentence_window(&sents, start, window_sentences))
        .collect();

    if windows.is_empty() {
        let lead_in = sentence_window(&sents, 0, window_sentences);
        let constrained = truncate_words(&lead_in, budget);
        if constrained.is_empty() {
            return NO_DESCRIPTION_FALLBACK.to_string();
        }
        return add_ellipses(constrained);
    }

    let per_window = budget.div_ceil(windows.len());
    for window in &mut windows {
        *window = truncate_words(window, per_window).to_string();
    }

    if windows.len() == 1 {
        add_ellipses(&windows[0])
    } else {
        windows.join(WINDOW_SEPARATOR)
    }
}

/// Join up to `count` consecutive sentences starting at `start` with
/// `". "`, skipping empty sentences and stopping at the end of the list.
fn sentence_window(sents: &[&str], start: usize, count: usize) -> String {
    sents
        .iter()
        .skip(start)
        .take(count)
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(". ")
}

/// Truncate `text` to its first `max_words` whitespace-separated words,
/// preserving the original delimiter whitespace inside the kept prefix.
fn truncate_words(text: &str, max_words: usize) -> &str {
    if max_words == 0 {
        return "";
    }
    // Pieces alternate word / whitespace run; keeping 2n-1 pieces ends the
    // cut exactly after the nth word.
    let keep = 2 * max_words - 1;
    let mut piece = 0;
    let mut prev_ws: Option<bool> = None;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let is_ws = c.is_whitespace();
        match prev_ws {
            None => {
                if is_ws {
                    piece = 1;
                }
            }
            Some(prev) => {
                if prev != is_ws {
                    piece += 1;
                }
            }
        }
        prev_ws = Some(is_ws);
        if piece >= keep {
            return &text[..i];
        }
        end = i + c.len_utf8();
    }
    &text[..end]
}
