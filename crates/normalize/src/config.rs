//! Configuration for element normalization.
//!
//! [`NormalizeConfig`] decides which elements a matcher skips and how the
//! remaining ones are folded before they are compared against the trie. The
//! same config must be used when adding entries and when scanning, otherwise
//! entries and input are folded differently and never meet.
//!
//! # Versioning
//!
//! The `version` field tracks folding behavior. Any change to how characters
//! or tokens are folded must come with a version bump so tries built under
//! an older version can be told apart.
//!
//! # Examples
//!
//! ```rust
//! use normalize::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.lowercase);
//! assert!(!config.ignore_whitespace);
//!
//! let case_insensitive = NormalizeConfig::new().with_lowercase(true);
//! assert!(case_insensitive.lowercase);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Folding and ignore rules shared by entries and scanned input.
///
/// The default is the identity: nothing ignored, nothing folded. This keeps
/// a freshly built matcher exact unless a caller opts in.
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "normalize_unicode": false,
///   "ignore_whitespace": false,
///   "ignore_punctuation": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the folding rules. Must be >= 1.
    pub version: u32,

    /// Apply locale-free Unicode lowercasing.
    ///
    /// For characters only single-character mappings are applied; a
    /// character whose lowercase form expands (e.g. `İ`) is kept as is so
    /// character offsets stay aligned with the input.
    pub lowercase: bool,

    /// Apply NFKC to tokens before lowercasing. Characters are never
    /// decomposed.
    pub normalize_unicode: bool,

    /// Skip whitespace characters, and tokens made only of whitespace.
    pub ignore_whitespace: bool,

    /// Skip Unicode punctuation characters, and tokens made only of
    /// punctuation.
    pub ignore_punctuation: bool,
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn with_ignore_punctuation(mut self, ignore_punctuation: bool) -> Self {
        self.ignore_punctuation = ignore_punctuation;
        self
    }

    /// True when every element is kept and compared verbatim.
    pub fn is_identity(&self) -> bool {
        !(self.lowercase
            || self.normalize_unicode
            || self.ignore_whitespace
            || self.ignore_punctuation)
    }

    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: false,
            normalize_unicode: false,
            ignore_whitespace: false,
            ignore_punctuation: false,
        }
    }
}
