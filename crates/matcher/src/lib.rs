//! # Gazetteer matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` finds known entries (names, phrases, terms) inside a sequence of
//! elements. Entries are stored in a prefix trie (`trie`); a scan walks the
//! trie from every candidate start position and reports where entries occur,
//! with the data each entry was added with.
//!
//! Two flavours share one engine:
//! - [`StringMatcher`]: elements are characters, offsets are char offsets.
//! - [`TokenMatcher`]: elements are tokens, offsets are token offsets.
//!
//! ## Core Types
//!
//! - [`Matcher`]: the generic engine. Holds the trie, an ignore predicate, a
//!   map function applied to every element, a default for entries added
//!   without data, and constant `matcher_data` attached to every match.
//! - [`FindOptions`]: `all` / `skip` selection policy and inclusive
//!   `from..=to` start bounds.
//! - [`Match`]: one hit: span, matched input, entry data, matcher data.
//! - [`Entry`]: data stored per entry: none, one value, or an appended list.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Entry, FindOptions, StringMatcher};
//! use normalize::NormalizeConfig;
//!
//! let cfg = NormalizeConfig::new()
//!     .with_lowercase(true)
//!     .with_ignore_whitespace(true);
//! let mut sm: StringMatcher<&str> = StringMatcher::new().with_normalize(&cfg);
//! sm.add("New York", Some("LOC"), false);
//! sm.add("York", Some("LOC-SHORT"), false);
//!
//! let found = sm.find("fly to new york", &FindOptions::default());
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].matched, "new york");
//! assert_eq!(found[0].data, &Entry::Data("LOC"));
//!
//! assert_eq!(sm.replace("fly to new york"), "fly to LOC");
//! ```
//!
//! ## Observability
//!
//! Every scan emits a `matcher_find` debug event with its bounds, policy,
//! match count and elapsed time. Install a [`MatchMetrics`] implementation
//! via [`set_match_metrics`] to receive the same numbers programmatically;
//! this is typically done once during startup.

mod engine;
mod metrics;
mod options;
mod replace;
mod string;
mod token;
mod types;

pub use crate::engine::{IgnoreFn, MapFn, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::options::FindOptions;
pub use crate::string::StringMatcher;
pub use crate::token::TokenMatcher;
pub use crate::types::{Match, Span};
pub use trie::{Entry, TrieError};
