//! Workspace umbrella crate for gazetteer matching.
//!
//! This crate stitches together the prefix trie, element normalization and
//! the matchers so callers can build, query and configure a gazetteer from a
//! single API entry point.
//!
//! ```
//! use gazetteer::{FindOptions, GazetteerConfig};
//!
//! let config = GazetteerConfig::from_yaml(
//!     "version: \"1\"\nnormalize:\n  lowercase: true\n",
//! )
//! .expect("valid config");
//!
//! let mut cities = config.string_matcher::<&str>();
//! cities.add("Berlin", Some("DE"), false);
//! assert_eq!(cities.replace("from berlin"), "from DE");
//! assert_eq!(cities.find("BERLIN", &FindOptions::default()).len(), 1);
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, GazetteerConfig};
pub use matcher::{
    FindOptions, IgnoreFn, MapFn, Match, MatchMetrics, Matcher, Span, StringMatcher, TokenMatcher,
    set_match_metrics,
};
pub use normalize::{
    NormalizeConfig, NormalizeError, Token, fold_char, fold_token, ignore_char, ignore_token,
    tokenize,
};
pub use trie::{Entry, NodeId, Trie, TrieError};
