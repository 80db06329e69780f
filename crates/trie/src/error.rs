use thiserror::Error;

/// Errors produced by exact lookups against a trie.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrieError {
    /// The key has no path in the trie, or the path ends on a node that is
    /// not a complete entry.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

impl TrieError {
    /// Error for `key`, rendered with its `Debug` form.
    pub fn not_found(key: impl std::fmt::Debug) -> Self {
        TrieError::KeyNotFound {
            key: format!("{key:?}"),
        }
    }
}
