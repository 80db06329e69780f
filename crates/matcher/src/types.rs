use std::fmt;

use trie::Entry;

/// A gazetteer hit produced by `find`.
///
/// `start`/`end` are element offsets into the scanned input (characters for
/// string input, tokens for token input); `end` is exclusive. `matched` is the
/// input slice covered by the match, ignored elements inside it included.
/// `data` is the entry's data, or the matcher's default when the entry has
/// none, and `matcher_data` is the constant attached to every match of the
/// matcher that produced it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Match<'a, S: ?Sized, T, A = ()> {
    pub start: usize,
    pub end: usize,
    pub matched: &'a S,
    pub data: &'a Entry<T>,
    pub matcher_data: &'a A,
}

impl<'a, S: ?Sized, T, A> Match<'a, S, T, A> {
    pub fn new(
        start: usize,
        end: usize,
        matched: &'a S,
        data: &'a Entry<T>,
        matcher_data: &'a A,
    ) -> Self {
        Self {
            start,
            end,
            matched,
            data,
            matcher_data,
        }
    }

    /// Number of input elements covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<S: ?Sized, T, A> Clone for Match<'_, S, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, T, A> Copy for Match<'_, S, T, A> {}

impl<T: fmt::Display, A> fmt::Display for Match<'_, str, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} {:?} => {}",
            self.start, self.end, self.matched, self.data
        )
    }
}

/// Raw scan result: where a match lies and which entry data it resolved to.
///
/// Spans are what the scanner emits; the string and token matchers turn them
/// into [`Match`] values over their own input type.
#[derive(Debug, PartialEq, Eq)]
pub struct Span<'m, T> {
    pub start: usize,
    pub end: usize,
    pub data: &'m Entry<T>,
}

impl<T> Span<'_, T> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}
