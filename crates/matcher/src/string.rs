//! Character-level gazetteer matching.
//!
//! Entries and input are plain strings; elements are `char`s and all match
//! offsets are character offsets, not byte offsets.

use std::borrow::Cow;
use std::fmt;

use normalize::{fold_char, ignore_char, NormalizeConfig};
use trie::{Entry, TrieError};

use crate::engine::Matcher;
use crate::options::FindOptions;
use crate::replace::{plan, Piece};
use crate::types::{Match, Span};

/// Matcher whose elements are characters.
///
/// ```rust
/// use matcher::{FindOptions, StringMatcher};
///
/// let mut sm: StringMatcher<u32> = StringMatcher::new();
/// for (i, entry) in ["this", "word", "words", "thisis", "his"].into_iter().enumerate() {
///     sm.add(entry, Some(i as u32), false);
/// }
///
/// let found = sm.find("thisis a word", &FindOptions::default());
/// assert_eq!(found.len(), 2);
/// assert_eq!((found[0].start, found[0].end, found[0].matched), (0, 6, "thisis"));
/// assert_eq!(sm.replace("thisis a word"), "3 a 1");
/// ```
pub type StringMatcher<T, A = ()> = Matcher<char, char, T, A>;

/// Character offsets of `text` mapped to byte offsets, plus one trailing
/// entry for `text.len()`.
fn char_table(text: &str) -> (Vec<usize>, Vec<char>) {
    let (mut offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
    offsets.push(text.len());
    (offsets, chars)
}

impl<T, A> Matcher<char, char, T, A> {
    /// Use the stock ignore/fold rules from `cfg`.
    pub fn with_normalize(self, cfg: &NormalizeConfig) -> Self {
        let ignore_cfg = cfg.clone();
        let map_cfg = cfg.clone();
        self.with_ignore(move |ch: &char| ignore_char(*ch, &ignore_cfg))
            .with_map(move |ch: &char| fold_char(*ch, &map_cfg))
    }

    /// Add `entry` with `data`; see [`Matcher::add_elements`].
    pub fn add(&mut self, entry: &str, data: Option<T>, append: bool) {
        self.add_elements(entry.chars(), data, append);
    }

    /// Add several entries sharing the same data.
    pub fn add_all<I>(&mut self, entries: I, data: Option<T>, append: bool)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        T: Clone,
    {
        for entry in entries {
            self.add(entry.as_ref(), data.clone(), append);
        }
    }

    /// Store `value` for `key` directly, without append semantics.
    pub fn set(&mut self, key: &str, value: Entry<T>) {
        self.set_elements(key.chars(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Entry<T>> {
        self.get_elements(key.chars())
    }

    /// Data for `key`, or `default` when `key` is not an entry.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Entry<T>) -> &'a Entry<T> {
        self.get(key).unwrap_or(default)
    }

    /// Exact lookup failing with [`TrieError::KeyNotFound`].
    pub fn lookup(&self, key: &str) -> Result<&Entry<T>, TrieError> {
        self.get(key).ok_or_else(|| TrieError::not_found(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Find gazetteer entries in `text`.
    pub fn find<'a>(&'a self, text: &'a str, options: &FindOptions) -> Vec<Match<'a, str, T, A>> {
        self.find_with(text, options, Match::new)
    }

    /// Like [`find`](Self::find), building each result with `factory`,
    /// called as `(start, end, matched, data, matcher_data)`.
    pub fn find_with<'a, M, F>(&'a self, text: &'a str, options: &FindOptions, mut factory: F) -> Vec<M>
    where
        F: FnMut(usize, usize, &'a str, &'a Entry<T>, &'a A) -> M,
    {
        let (offsets, spans) = self.scan_text(text, options);
        spans
            .into_iter()
            .map(|span| {
                let matched = &text[offsets[span.start]..offsets[span.end]];
                factory(span.start, span.end, matched, span.data, self.matcher_data())
            })
            .collect()
    }

    /// Replace every longest, non-overlapping match in `text` with the
    /// string form of its entry data.
    ///
    /// An entry without data renders as the empty string, so its matches are
    /// deleted from the output unless the matcher has default data.
    pub fn replace<'t>(&self, text: &'t str) -> Cow<'t, str>
    where
        T: fmt::Display,
    {
        self.replace_with(text, &FindOptions::default(), |m| m.data.to_string())
    }

    /// Replace matches in `text` with `replacer(match)`.
    ///
    /// Only the `from`/`to` bounds of `options` are used; replacement always
    /// scans for the longest match and skips ahead. Text without matches is
    /// returned borrowed. `m.data` is `Entry::NoData` for an entry without
    /// data when no default is set.
    pub fn replace_with<'t, F>(&self, text: &'t str, options: &FindOptions, mut replacer: F) -> Cow<'t, str>
    where
        F: FnMut(&Match<'_, str, T, A>) -> String,
    {
        let (offsets, spans) = self.scan_text(text, &options.for_replace());
        if spans.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        for piece in plan(&spans, offsets.len() - 1) {
            match piece {
                Piece::Keep(range) => out.push_str(&text[offsets[range.start]..offsets[range.end]]),
                Piece::Replace(span) => {
                    let matched = &text[offsets[span.start]..offsets[span.end]];
                    let found = Match::new(span.start, span.end, matched, span.data, self.matcher_data());
                    out.push_str(&replacer(&found));
                }
            }
        }
        Cow::Owned(out)
    }

    fn scan_text(&self, text: &str, options: &FindOptions) -> (Vec<usize>, Vec<Span<'_, T>>) {
        let (offsets, chars) = char_table(text);
        let spans = self.scan(&chars, options);
        (offsets, spans)
    }
}
