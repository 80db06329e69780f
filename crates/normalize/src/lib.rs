//! Element normalization for gazetteer matchers.
//!
//! Matchers compare elements (characters or tokens) after two injectable
//! steps: an ignore predicate that drops elements entirely, and a map
//! function that folds the rest. This crate provides the stock versions of
//! both, driven by a [`NormalizeConfig`], plus the whitespace tokenizer used
//! for string entries of a token matcher.
//!
//! ## What we do
//!
//! - Lowercasing (locale-free, single-character mappings for chars)
//! - NFKC for tokens
//! - Ignoring whitespace and/or punctuation
//! - Whitespace tokenization with byte offsets
//!
//! ## Pure function guarantee
//!
//! No I/O, no locale dependence. The same element and config always fold to
//! the same result, which is what lets entries and input meet in the trie.

mod config;
mod error;
mod fold;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::fold::{fold_char, fold_token, ignore_char, ignore_token};
pub use crate::token::{token_spans, tokenize, Token};
