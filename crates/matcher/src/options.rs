use serde::{Deserialize, Serialize};

/// Selection policy and bounds for a single scan.
///
/// - `all`: keep every entry found at a start position (shortest first)
///   instead of only the longest one.
/// - `skip`: after a start position produced a match, resume scanning at the
///   end of its longest match instead of the next element.
/// - `from`: first element that may start a match.
/// - `to`: last element that may start a match (inclusive, not an exclusive
///   end). Clamped to the input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FindOptions {
    pub all: bool,
    pub skip: bool,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_from(mut self, from: usize) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: usize) -> Self {
        self.to = Some(to);
        self
    }

    /// The policy replacement always uses: longest match, skipping ahead.
    /// Bounds are kept.
    pub(crate) fn for_replace(&self) -> Self {
        Self {
            all: false,
            skip: true,
            ..*self
        }
    }

    /// Inclusive `(from, to)` start positions for an input of `len`
    /// elements, or `None` when no position may start a match.
    pub(crate) fn bounds(&self, len: usize) -> Option<(usize, usize)> {
        let last = len.checked_sub(1)?;
        let from = self.from.unwrap_or(0);
        let to = self.to.map_or(last, |to| to.min(last));
        (from <= to).then_some((from, to))
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            all: false,
            skip: true,
            from: None,
            to: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_longest_with_skip() {
        let opts = FindOptions::default();
        assert!(!opts.all);
        assert!(opts.skip);
        assert_eq!(opts.bounds(5), Some((0, 4)));
    }

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(FindOptions::default().bounds(0), None);
    }

    #[test]
    fn to_is_clamped_and_inclusive() {
        let opts = FindOptions::new().with_from(2).with_to(100);
        assert_eq!(opts.bounds(5), Some((2, 4)));
        assert_eq!(FindOptions::new().with_to(2).bounds(5), Some((0, 2)));
    }

    #[test]
    fn inverted_or_out_of_range_bounds_are_empty() {
        assert_eq!(FindOptions::new().with_from(5).bounds(5), None);
        assert_eq!(FindOptions::new().with_from(3).with_to(1).bounds(5), None);
    }

    #[test]
    fn replace_policy_keeps_range() {
        let opts = FindOptions::new()
            .with_all(true)
            .with_skip(false)
            .with_from(1)
            .for_replace();
        assert!(!opts.all);
        assert!(opts.skip);
        assert_eq!(opts.from, Some(1));
    }

    #[test]
    fn deserializes_with_defaults() {
        let opts: FindOptions = serde_json::from_str(r#"{"all": true}"#).expect("parse");
        assert!(opts.all);
        assert!(opts.skip);
        assert_eq!(opts.to, None);
    }
}
