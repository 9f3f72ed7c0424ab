// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search core.
//!
//! Two immutable datasets exist at query time: the full corpus (a `Vec` of
//! [`Document`] records whose order is the tie-break order everywhere) and
//! the lightweight title map (a `Vec` of [`LightweightEntry`] in the same
//! role). Both are built once by the offline site compiler and never touched
//! again - every query-time function in this crate is a pure read over them.
//!
//! # Invariants
//!
//! - **Corpus order is meaningful.** Positions double as document ids, and
//!   ties within a relevance rank or a match tier resolve in corpus order.
//! - **`Posting.doc_id < total_docs`** for every posting in an
//!   [`InvertedIndex`], and every posting list is sorted and non-empty.
//! - **Nothing is mutated after load.** `Document` and `LightweightEntry`
//!   have no interior mutability; sessions holding them are `Sync`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A searchable page, as emitted by the offline compiler.
///
/// `content` is the HTML-stripped plain text of the page body. Optional
/// fields missing from the artifact deserialize to their defaults; `lang`
/// in particular defaults to `"en"`, matching the compiler's own rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: usize,
    pub title: String,
    pub content: String,
    pub permalink: String,
    #[serde(default = "default_language", rename = "lang")]
    pub language: String,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

fn default_language() -> String {
    "en".to_string()
}

/// One candidate of the lightweight (title-only) search path.
///
/// The lightweight artifact is a per-language `title -> permalink` map;
/// flattened into entries so candidate order is explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightweightEntry {
    pub title: String,
    pub url: String,
    pub language: String,
}

/// What callers get back from a search.
///
/// The full-text path fills every field (`content` holds the highlighted,
/// budget-constrained snippet); the lightweight path leaves `content` empty
/// and the optional fields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub language: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

// =============================================================================
// MATCH TIERS
// =============================================================================

/// Match-quality bucket for the lightweight path.
///
/// Tiers replace a continuous relevance score: every candidate lands in the
/// first tier it satisfies, or in none. The enum ordering is the result
/// ordering - `FullStart` results come first, `StartWord` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// The whole candidate title starts with the whole query string.
    FullStart,
    /// Some title word equals some query word exactly.
    FullWord,
    /// The whole candidate title starts with some individual query word.
    StartMatch,
    /// Some title word starts with some individual query word.
    StartWord,
}

/// Number of tiers, for per-tier bucket arrays.
pub(crate) const TIER_COUNT: usize = 4;

// =============================================================================
// INVERTED INDEX TYPES
// =============================================================================

/// Which field of a document a posting landed in. `Title` outranks
/// `Content` regardless of occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Title,
    Content,
}

/// One (document, field) occurrence of an indexed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Posting {
    pub doc_id: usize,
    pub field: FieldKind,
}

/// All postings for one term, plus the number of distinct documents.
#[derive(Debug, Clone)]
pub struct PostingList {
    pub postings: Vec<Posting>,
    pub doc_freq: usize,
}

/// Token-based inverted index over document titles and content.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    pub terms: HashMap<String, PostingList>,
    pub total_docs: usize,
}
