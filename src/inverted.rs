// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction for the full-text path.
//!
//! Terms map to posting lists of (document, field) pairs - no offsets, no
//! positions, because ranking here only needs to know *which* field of
//! *which* document a term touched. Title and content are the only fields a
//! compiled page has.
//!
//! # Invariants
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by
//!    (doc_id, field) and deduplicated
//! 2. **DOC_FREQ_CORRECT**: `doc_freq` equals the count of unique doc ids
//! 3. **NON_EMPTY**: every term has at least one posting

use crate::types::{Document, FieldKind, InvertedIndex, Posting, PostingList};
use std::collections::HashMap;

/// Word boundary detection: anything non-alphanumeric separates terms.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Tokenize text into lowercased index terms.
///
/// Splits at non-alphanumeric characters; no stemming, no stopword removal.
/// Queries go through the same function so index and query terms agree.
pub(crate) fn index_terms(text: &str) -> Vec<String> {
    text.split(is_word_boundary)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Build an inverted index over every document's title and content.
pub fn build_inverted_index(corpus: &[Document]) -> InvertedIndex {
    let mut terms: HashMap<String, Vec<Posting>> = HashMap::new();

    for (doc_id, doc) in corpus.iter().enumerate() {
        let fields = [
            (FieldKind::Title, doc.title.as_str()),
            (FieldKind::Content, doc.content.as_str()),
        ];
        for (field, text) in fields {
            for term in index_terms(text) {
                terms.entry(term).or_default().push(Posting { doc_id, field });
            }
        }
    }

    // INVARIANT: POSTING_LIST_SORTED
    let mut final_terms: HashMap<String, PostingList> = HashMap::with_capacity(terms.len());
    for (term, mut postings) in terms {
        postings.sort();
        postings.dedup();

        let mut doc_ids: Vec<usize> = postings.iter().map(|p| p.doc_id).collect();
        doc_ids.dedup();
        let doc_freq = doc_ids.len();

        final_terms.insert(term, PostingList { postings, doc_freq });
    }

    InvertedIndex {
        terms: final_terms,
        total_docs: corpus.len(),
    }
}

/// Check that an inverted index is well-formed (debug assertion).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub(crate) fn check_inverted_index_well_formed(index: &InvertedIndex) -> bool {
    for list in index.terms.values() {
        if list.postings.is_empty() {
            return false;
        }
        for i in 1..list.postings.len() {
            if list.postings[i - 1] >= list.postings[i] {
                return false;
            }
        }
        let mut doc_ids: Vec<usize> = list.postings.iter().map(|p| p.doc_id).collect();
        doc_ids.dedup();
        if list.doc_freq != doc_ids.len() {
            return false;
        }
        if list.postings.iter().any(|p| p.doc_id >= index.total_docs) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, content: &str) -> Document {
        Document {
            id: 0,
            title: title.to_string(),
            content: content.to_string(),
            permalink: format!("/{}/", title.to_lowercase()),
            language: "en".to_string(),
            layout: None,
            image_url: None,
        }
    }

    #[test]
    fn test_index_terms_simple() {
        assert_eq!(index_terms("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_index_terms_punctuation_and_case() {
        assert_eq!(index_terms("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_index_terms_empty() {
        assert!(index_terms("").is_empty());
        assert!(index_terms("...!!!").is_empty());
    }

    #[test]
    fn test_build_index_title_and_content_fields() {
        let corpus = vec![doc("Charity", "annual report")];
        let index = build_inverted_index(&corpus);

        let charity = index.terms.get("charity").unwrap();
        assert_eq!(charity.postings[0].field, FieldKind::Title);

        let report = index.terms.get("report").unwrap();
        assert_eq!(report.postings[0].field, FieldKind::Content);
    }

    #[test]
    fn test_doc_freq_counts_unique_docs() {
        let corpus = vec![
            doc("One", "shared term here"),
            doc("Two", "shared shared again"),
        ];
        let index = build_inverted_index(&corpus);
        let shared = index.terms.get("shared").unwrap();
        assert_eq!(shared.doc_freq, 2);
    }

    #[test]
    fn test_repeated_occurrences_dedup_to_one_posting() {
        let corpus = vec![doc("Echo", "echo echo echo")];
        let index = build_inverted_index(&corpus);
        let echo = index.terms.get("echo").unwrap();
        // one Title posting, one Content posting
        assert_eq!(echo.postings.len(), 2);
    }

    #[test]
    fn test_index_well_formed() {
        let corpus = vec![
            doc("About Us", "who we are and what we do"),
            doc("Contact", "reach us by mail"),
        ];
        let index = build_inverted_index(&corpus);
        assert!(check_inverted_index_well_formed(&index));
        assert_eq!(index.total_docs, 2);
    }
}
