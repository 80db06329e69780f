//! Common utilities for gazetteer benchmarks
//!
//! Shared helpers for generating gazetteers and input text.

#![allow(dead_code)]

use gazetteer::{GazetteerConfig, NormalizeConfig, StringMatcher, TokenMatcher};

/// Sample text used as the repeating unit of larger inputs.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog near New York City \
while a red fox watches from San Francisco Bay.";

/// Synthetic gazetteer entries: `count` three-word names built from a
/// small vocabulary, plus a few names that occur in [`SAMPLE_TEXT`].
pub fn generate_entries(count: usize) -> Vec<String> {
    let words = [
        "red", "quick", "brown", "lazy", "new", "york", "city", "san", "francisco", "bay",
        "fox", "dog",
    ];
    let mut entries: Vec<String> = (0..count)
        .map(|i| {
            let a = words[i % words.len()];
            let b = words[(i / words.len()) % words.len()];
            let c = words[(i / (words.len() * words.len())) % words.len()];
            format!("{a} {b} {c}")
        })
        .collect();
    entries.extend(
        ["new york", "new york city", "san francisco", "red fox", "lazy dog"]
            .iter()
            .map(|s| s.to_string()),
    );
    entries
}

/// Input text of roughly `bytes` bytes.
pub fn generate_text(bytes: usize) -> String {
    let mut text = String::with_capacity(bytes + SAMPLE_TEXT.len());
    while text.len() < bytes {
        text.push_str(SAMPLE_TEXT);
        text.push(' ');
    }
    text
}

pub fn case_insensitive_config() -> GazetteerConfig {
    GazetteerConfig {
        name: Some("bench".into()),
        normalize: NormalizeConfig::new()
            .with_lowercase(true)
            .with_ignore_punctuation(true),
        ..Default::default()
    }
}

pub fn string_gazetteer(config: &GazetteerConfig, entries: &[String]) -> StringMatcher<usize> {
    let mut sm = config.string_matcher();
    for (i, entry) in entries.iter().enumerate() {
        sm.add(entry, Some(i), false);
    }
    sm
}

pub fn token_gazetteer(config: &GazetteerConfig, entries: &[String]) -> TokenMatcher<usize> {
    let mut tm = config.token_matcher();
    for (i, entry) in entries.iter().enumerate() {
        tm.add_text(entry, Some(i), false);
    }
    tm
}
