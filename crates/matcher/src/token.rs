//! Token-level gazetteer matching.
//!
//! Elements are whole tokens. Input is any slice of string-like tokens and
//! match offsets are token offsets. Entries are token sequences; a plain
//! string entry is split on whitespace with [`add_text`](Matcher::add_text).

use std::fmt;

use normalize::{fold_token, ignore_token, tokenize, NormalizeConfig};
use trie::{Entry, TrieError};

use crate::engine::Matcher;
use crate::options::FindOptions;
use crate::replace::{plan, Piece};
use crate::types::Match;

/// Matcher whose elements are tokens, stored in the trie as owned strings.
///
/// ```rust
/// use matcher::{FindOptions, TokenMatcher};
///
/// let mut tm: TokenMatcher<u32> = TokenMatcher::new().with_map(|t: &str| t.to_lowercase());
/// tm.add_text("New York", Some(1), false);
///
/// let tokens = ["flights", "to", "NEW", "YORK"];
/// let found = tm.find(&tokens, &FindOptions::default());
/// assert_eq!((found[0].start, found[0].end), (2, 4));
/// assert_eq!(found[0].matched, &["NEW", "YORK"]);
/// ```
pub type TokenMatcher<T, A = ()> = Matcher<str, String, T, A>;

fn views<S: AsRef<str>>(tokens: &[S]) -> Vec<&str> {
    tokens.iter().map(AsRef::as_ref).collect()
}

impl<T, A> Matcher<str, String, T, A> {
    /// Use the stock ignore/fold rules from `cfg`.
    pub fn with_normalize(self, cfg: &NormalizeConfig) -> Self {
        let ignore_cfg = cfg.clone();
        let map_cfg = cfg.clone();
        self.with_ignore(move |token: &str| ignore_token(token, &ignore_cfg))
            .with_map(move |token: &str| fold_token(token, &map_cfg))
    }

    /// Add a token sequence with `data`; see [`Matcher::add_elements`].
    pub fn add<S: AsRef<str>>(&mut self, entry: &[S], data: Option<T>, append: bool) {
        self.add_elements(entry.iter().map(AsRef::as_ref), data, append);
    }

    /// Add a string entry, split into tokens on whitespace.
    pub fn add_text(&mut self, entry: &str, data: Option<T>, append: bool) {
        let tokens = tokenize(entry);
        self.add(&tokens, data, append);
    }

    /// Add several token sequences sharing the same data.
    pub fn add_all<I, S>(&mut self, entries: I, data: Option<T>, append: bool)
    where
        I: IntoIterator,
        I::Item: AsRef<[S]>,
        S: AsRef<str>,
        T: Clone,
    {
        for entry in entries {
            self.add(entry.as_ref(), data.clone(), append);
        }
    }

    /// Store `value` for `key` directly, without append semantics.
    pub fn set<S: AsRef<str>>(&mut self, key: &[S], value: Entry<T>) {
        self.set_elements(key.iter().map(AsRef::as_ref), value);
    }

    pub fn get<S: AsRef<str>>(&self, key: &[S]) -> Option<&Entry<T>> {
        self.get_elements(key.iter().map(AsRef::as_ref))
    }

    /// Data for `key`, or `default` when `key` is not an entry.
    pub fn get_or<'a, S: AsRef<str>>(&'a self, key: &[S], default: &'a Entry<T>) -> &'a Entry<T> {
        self.get(key).unwrap_or(default)
    }

    /// Exact lookup failing with [`TrieError::KeyNotFound`].
    pub fn lookup<S: AsRef<str>>(&self, key: &[S]) -> Result<&Entry<T>, TrieError> {
        self.get(key).ok_or_else(|| TrieError::not_found(views(key)))
    }

    pub fn contains<S: AsRef<str>>(&self, key: &[S]) -> bool {
        self.get(key).is_some()
    }

    /// Find gazetteer entries in `tokens`.
    pub fn find<'a, S: AsRef<str>>(
        &'a self,
        tokens: &'a [S],
        options: &FindOptions,
    ) -> Vec<Match<'a, [S], T, A>> {
        self.find_with(tokens, options, Match::new)
    }

    /// Like [`find`](Self::find), building each result with `factory`,
    /// called as `(start, end, matched, data, matcher_data)`.
    pub fn find_with<'a, S, M, F>(&'a self, tokens: &'a [S], options: &FindOptions, mut factory: F) -> Vec<M>
    where
        S: AsRef<str>,
        F: FnMut(usize, usize, &'a [S], &'a Entry<T>, &'a A) -> M,
    {
        self.scan(&views(tokens), options)
            .into_iter()
            .map(|span| {
                factory(
                    span.start,
                    span.end,
                    &tokens[span.start..span.end],
                    span.data,
                    self.matcher_data(),
                )
            })
            .collect()
    }

    /// Replace every longest, non-overlapping match with one token holding
    /// the string form of its entry data.
    ///
    /// An entry without data renders as the empty string, so its matches
    /// become an empty token unless the matcher has default data.
    pub fn replace<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String>
    where
        T: fmt::Display,
    {
        self.replace_with(tokens, &FindOptions::default(), |m| m.data.to_string())
    }

    /// Replace each match with the token `replacer(match)`.
    ///
    /// Only the `from`/`to` bounds of `options` are used; replacement always
    /// scans for the longest match and skips ahead. Unmatched tokens are
    /// copied through.
    pub fn replace_with<S, F>(&self, tokens: &[S], options: &FindOptions, mut replacer: F) -> Vec<String>
    where
        S: AsRef<str>,
        F: FnMut(&Match<'_, [S], T, A>) -> String,
    {
        let spans = self.scan(&views(tokens), &options.for_replace());
        let mut out = Vec::with_capacity(tokens.len());
        for piece in plan(&spans, tokens.len()) {
            match piece {
                Piece::Keep(range) => out.extend(tokens[range].iter().map(|t| t.as_ref().to_owned())),
                Piece::Replace(span) => {
                    let matched = &tokens[span.start..span.end];
                    let found = Match::new(span.start, span.end, matched, span.data, self.matcher_data());
                    out.push(replacer(&found));
                }
            }
        }
        out
    }
}
