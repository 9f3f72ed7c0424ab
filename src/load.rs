// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing the two artifacts the offline compiler emits.
//!
//! The full artifact is a JSON array of document records; the lightweight
//! artifact is a JSON object mapping language to a `title -> permalink`
//! map. JSON objects carry no order, so the lightweight loader fixes
//! candidate order as (language, then title) ascending - deterministic
//! across runs, and the order the tier buckets inherit. Callers who need a
//! different candidate order can build `LightweightEntry` values directly.

use crate::types::{Document, LightweightEntry};
use std::collections::BTreeMap;
use std::fmt;

/// Artifact parsing failure.
#[derive(Debug)]
pub enum LoadError {
    /// The corpus artifact was not a valid document array.
    Corpus(serde_json::Error),
    /// The lightweight artifact was not a valid language map.
    Lightweight(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Corpus(e) => write!(f, "invalid corpus artifact: {}", e),
            LoadError::Lightweight(e) => write!(f, "invalid lightweight artifact: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Corpus(e) | LoadError::Lightweight(e) => Some(e),
        }
    }
}

/// Parse the full corpus artifact. Array order becomes corpus order.
pub fn corpus_from_json(json: &str) -> Result<Vec<Document>, LoadError> {
    serde_json::from_str(json).map_err(LoadError::Corpus)
}

/// Parse the lightweight artifact into candidate entries.
pub fn lightweight_from_json(json: &str) -> Result<Vec<LightweightEntry>, LoadError> {
    let map: BTreeMap<String, BTreeMap<String, String>> =
        serde_json::from_str(json).map_err(LoadError::Lightweight)?;

    let mut entries = Vec::new();
    for (language, titles) in map {
        for (title, url) in titles {
            entries.push(LightweightEntry {
                title,
                url,
                language: language.clone(),
            });
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_from_json() {
        let json = r#"[
            {"title": "Home", "content": "welcome", "permalink": "/"},
            {"title": "Inicio", "content": "bienvenido", "permalink": "/es/", "lang": "es"}
        ]"#;
        let corpus = corpus_from_json(json).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].language, "en");
        assert_eq!(corpus[1].language, "es");
    }

    #[test]
    fn test_corpus_order_is_array_order() {
        let json = r#"[
            {"title": "Z Last", "content": "", "permalink": "/z/"},
            {"title": "A First", "content": "", "permalink": "/a/"}
        ]"#;
        let corpus = corpus_from_json(json).unwrap();
        assert_eq!(corpus[0].title, "Z Last");
    }

    #[test]
    fn test_corpus_invalid_json() {
        let err = corpus_from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid corpus artifact"));
    }

    #[test]
    fn test_lightweight_from_json() {
        let json = r#"{
            "en": {"Home": "/", "About": "/about/"},
            "es": {"Inicio": "/es/"}
        }"#;
        let entries = lightweight_from_json(json).unwrap();
        // (language, title) ascending
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "About");
        assert_eq!(entries[0].language, "en");
        assert_eq!(entries[1].title, "Home");
        assert_eq!(entries[2].language, "es");
        assert_eq!(entries[2].url, "/es/");
    }

    #[test]
    fn test_lightweight_invalid_shape() {
        let err = lightweight_from_json(r#"["not", "a", "map"]"#).unwrap_err();
        assert!(err.to_string().contains("invalid lightweight artifact"));
    }

    #[test]
    fn test_lightweight_empty() {
        assert!(lightweight_from_json("{}").unwrap().is_empty());
    }
}
