// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query sessions: build once, then read forever.
//!
//! A session owns an immutable dataset (plus, for the full-text path, the
//! index built over it) and exposes `search` as a pure read. The ordering
//! guarantee - the index is complete before the first query - holds
//! structurally: there is no way to obtain a session without running its
//! constructor to completion, and nothing mutates a session afterwards.
//! Sessions are `Send + Sync`, so callers may share one behind an `Arc`
//! and query from as many threads (or wrap calls in as many futures) as
//! they like, without locks.

use crate::highlight::{highlight_keywords, HighlightDelimiters};
use crate::inverted::build_inverted_index;
use crate::language::sort_by_language;
use crate::search::retrieve;
use crate::snippet::extract_snippet;
use crate::tiered::{search_titles, TierMode};
use crate::tokenize::words;
use crate::types::{Document, InvertedIndex, LightweightEntry, SearchResult};

/// Knobs shared by both search paths.
///
/// The defaults are the values the site has always shipped with; override
/// what you need via struct update syntax.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results per query.
    pub result_limit: usize,
    /// Total snippet word budget, split evenly across snippet windows.
    pub word_budget: usize,
    /// Maximum number of snippet windows per result.
    pub max_windows: usize,
    /// How many consecutive sentences one snippet window spans.
    pub window_sentences: usize,
    /// Markers wrapped around highlighted tokens.
    pub delimiters: HighlightDelimiters,
    /// Which tiers the lightweight matcher evaluates.
    pub tier_mode: TierMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: 100,
            word_budget: 100,
            max_windows: 3,
            window_sentences: 20,
            delimiters: HighlightDelimiters::default(),
            tier_mode: TierMode::default(),
        }
    }
}

/// Full-text search session over a document corpus.
///
/// Holds the corpus and the inverted index built from it. Corpus order is
/// significant: positions double as document ids and break ranking ties.
#[derive(Debug)]
pub struct SearchSession {
    corpus: Vec<Document>,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchSession {
    /// Build a session with the default configuration.
    pub fn build(corpus: Vec<Document>) -> Self {
        Self::build_with_config(corpus, SearchConfig::default())
    }

    /// Build a session with an explicit configuration.
    pub fn build_with_config(corpus: Vec<Document>, config: SearchConfig) -> Self {
        let index = build_inverted_index(&corpus);
        Self {
            corpus,
            index,
            config,
        }
    }

    /// The documents this session searches, in corpus order.
    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    /// Search titles and content, returning highlighted snippets.
    ///
    /// `result_language` groups that language's results first; `None`
    /// keeps pure relevance order. Empty queries return no results.
    pub fn search(&self, query: &str, result_language: Option<&str>) -> Vec<SearchResult> {
        let doc_ids = retrieve(&self.index, query, self.config.result_limit);

        // Snippet keywords are the raw whitespace-split query words; all
        // downstream matching is case-insensitive anyway.
        let keywords: Vec<&str> = words(query).into_iter().filter(|w| !w.is_empty()).collect();

        let results = doc_ids
            .into_iter()
            .map(|doc_id| {
                let doc = &self.corpus[doc_id];
                let highlighted =
                    highlight_keywords(&keywords, &doc.content, &self.config.delimiters);
                let snippet = extract_snippet(
                    &highlighted,
                    &keywords,
                    self.config.word_budget,
                    self.config.max_windows,
                    self.config.window_sentences,
                );
                SearchResult {
                    title: doc.title.clone(),
                    url: doc.permalink.clone(),
                    language: doc.language.clone(),
                    content: snippet,
                    layout: doc.layout.clone(),
                    image_url: doc.image_url.clone(),
                }
            })
            .collect();

        sort_by_language(results, result_language)
    }
}

/// Title-only search session over the lightweight artifact.
#[derive(Debug)]
pub struct LightweightSession {
    entries: Vec<LightweightEntry>,
    config: SearchConfig,
}

impl LightweightSession {
    /// Build a session with the default configuration.
    pub fn build(entries: Vec<LightweightEntry>) -> Self {
        Self::build_with_config(entries, SearchConfig::default())
    }

    /// Build a session with an explicit configuration.
    pub fn build_with_config(entries: Vec<LightweightEntry>, config: SearchConfig) -> Self {
        Self { entries, config }
    }

    /// The candidate entries this session searches, in candidate order.
    pub fn entries(&self) -> &[LightweightEntry] {
        &self.entries
    }

    /// Tiered title search; results carry no snippet.
    pub fn search(&self, query: &str, result_language: Option<&str>) -> Vec<SearchResult> {
        let results = search_titles(
            &self.entries,
            query,
            self.config.tier_mode,
            self.config.result_limit,
        );
        sort_by_language(results, result_language)
    }
}
