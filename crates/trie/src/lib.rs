//! Gazetteer trie.
//!
//! A prefix tree keyed by elements (characters or tokens) where every node
//! may carry the data of a complete gazetteer entry. This crate is the
//! storage half of the matcher; scanning lives in the `matcher` crate.
//!
//! ## Layout
//!
//! Nodes are kept in one arena and addressed by [`NodeId`]. Each node owns a
//! map from element to child handle, so there are no back references and the
//! whole graph is freed when the [`Trie`] drops.
//!
//! ## Entry data
//!
//! A node is a complete entry when it holds an [`Entry`]. The entry may have
//! no data ([`Entry::NoData`]), a single value ([`Entry::Data`]) or a list of
//! appended values ([`Entry::Many`]).
//!
//! ```rust
//! use trie::{Entry, Trie};
//!
//! let mut trie: Trie<char, u32> = Trie::new();
//! trie.insert("word".chars(), Some(1), false);
//! trie.insert("word".chars(), Some(2), true);
//!
//! assert_eq!(trie.get("word".chars()), Some(&Entry::many([1, 2])));
//! assert!(trie.get("wor".chars()).is_none());
//! ```

mod entry;
mod error;
mod trie;

pub use crate::entry::Entry;
pub use crate::error::TrieError;
pub use crate::trie::{NodeId, Trie};
