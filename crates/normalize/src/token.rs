use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A whitespace-delimited token and where it sits in the source text.
///
/// Offsets are UTF-8 byte offsets; `end` is exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    fn at(source: &str, span: Range<usize>) -> Self {
        Self {
            text: source[span.clone()].to_owned(),
            start: span.start,
            end: span.end,
        }
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Byte ranges of the whitespace-delimited runs in `text`, in order.
pub fn token_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices();
    std::iter::from_fn(move || {
        let (start, _) = chars.find(|(_, ch)| !ch.is_whitespace())?;
        let end = chars
            .find(|(_, ch)| ch.is_whitespace())
            .map_or(text.len(), |(idx, _)| idx);
        Some(start..end)
    })
}

/// Split `text` on Unicode whitespace.
///
/// Used when a token matcher is given a plain string entry. No folding is
/// done here; that is the matcher's map function.
pub fn tokenize(text: &str) -> Vec<Token> {
    token_spans(text).map(|span| Token::at(text, span)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = tokenize("  some \u{10348}word\n end");
        let texts: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        assert_eq!(texts, vec!["some", "\u{10348}word", "end"]);
        assert_eq!((tokens[0].start, tokens[0].end), (2, 6));
        assert_eq!(tokens[1].end - tokens[1].start, "\u{10348}word".len());
        assert_eq!(tokens[2].end, "  some \u{10348}word\n end".len());
    }

    #[test]
    fn spans_skip_whitespace_runs() {
        let spans: Vec<_> = token_spans("a  bc\td ").collect();
        assert_eq!(spans, vec![0..1, 3..5, 6..7]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(tokenize(" \t\n ").is_empty());
        assert!(tokenize("").is_empty());
    }
}
