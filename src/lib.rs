// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexical search core for small, statically compiled multilingual sites.
//!
//! An offline compiler turns the site into two artifacts: a full corpus of
//! page records and a lightweight per-language `title -> permalink` map.
//! This crate is everything that happens after that - loading the
//! artifacts once, then answering queries as pure reads:
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌───────────────┐
//! │ tokenize.rs│────▶│ tiered.rs   │────▶│  session.rs   │
//! │ (words,    │     │ (title      │     │ (Lightweight- │
//! │  sentences)│     │  tiers)     │     │  Session)     │
//! └────────────┘     └─────────────┘     └───────────────┘
//!        │           ┌─────────────┐     ┌───────────────┐
//!        ├──────────▶│ inverted.rs │────▶│  session.rs   │
//!        │           │ search.rs   │     │ (Search-      │
//!        │           │ (retrieval) │     │  Session)     │
//!        │           └─────────────┘     └───────┬───────┘
//!        │           ┌─────────────┐             │
//!        └──────────▶│ highlight.rs│◀────────────┤
//!                    │ snippet.rs  │             ▼
//!                    └─────────────┘     ┌───────────────┐
//!                                        │  language.rs  │
//!                                        │ (grouping)    │
//!                                        └───────────────┘
//! ```
//!
//! Two search paths share one result type:
//!
//! - **Lightweight**: title-only, tiered matching ([`search_titles`],
//!   [`LightweightSession`]). Four fixed match tiers instead of scores.
//! - **Full-text**: inverted index over titles and content
//!   ([`SearchSession`]), producing highlighted, word-budgeted snippets.
//!
//! Both cap results (default 100) and can group a preferred language's
//! results first without disturbing relevance order otherwise.
//!
//! # Usage
//!
//! ```
//! use loupe::{Document, SearchSession};
//!
//! let corpus = vec![Document {
//!     id: 0,
//!     title: "Charity Projects".to_string(),
//!     content: "Our charity projects span two decades.".to_string(),
//!     permalink: "/projects/".to_string(),
//!     language: "en".to_string(),
//!     layout: None,
//!     image_url: None,
//! }];
//!
//! let session = SearchSession::build(corpus);
//! let results = session.search("charity", None);
//! assert_eq!(results[0].url, "/projects/");
//! assert!(results[0].content.contains("<strong>charity</strong>"));
//! ```

mod highlight;
mod inverted;
mod language;
mod load;
mod search;
mod session;
mod snippet;
mod tiered;
mod tokenize;
mod types;
mod utils;

pub use highlight::{highlight_keywords, HighlightDelimiters};
pub use inverted::build_inverted_index;
pub use language::sort_by_language;
pub use load::{corpus_from_json, lightweight_from_json, LoadError};
pub use search::{retrieve, CONTENT_WEIGHT, PREFIX_FACTOR, TITLE_WEIGHT};
pub use session::{LightweightSession, SearchConfig, SearchSession};
pub use snippet::{add_ellipses, extract_snippet, NO_DESCRIPTION_FALLBACK};
pub use tiered::{classify_title, search_titles, TierMode};
pub use tokenize::{delimited_tokens, sentences, words};
pub use types::{
    Document, FieldKind, InvertedIndex, LightweightEntry, MatchTier, Posting, PostingList,
    SearchResult,
};
