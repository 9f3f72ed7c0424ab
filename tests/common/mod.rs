// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared builders for integration tests.

use loupe::{Document, LightweightEntry};

pub fn doc(id: usize, title: &str, content: &str) -> Document {
    doc_in(id, title, content, "en")
}

pub fn doc_in(id: usize, title: &str, content: &str, language: &str) -> Document {
    Document {
        id,
        title: title.to_string(),
        content: content.to_string(),
        permalink: format!("/{}/{}/", language, id),
        language: language.to_string(),
        layout: Some("page".to_string()),
        image_url: None,
    }
}

pub fn entry(title: &str) -> LightweightEntry {
    entry_in(title, "en")
}

pub fn entry_in(title: &str, language: &str) -> LightweightEntry {
    LightweightEntry {
        title: title.to_string(),
        url: format!("/{}/{}/", language, title.to_lowercase().replace(' ', "-")),
        language: language.to_string(),
    }
}
