//! Entry data stored at trie nodes.
//!
//! A node either carries no entry at all (`Option::None` in the trie) or an
//! [`Entry`]. The entry itself distinguishes "this entry has no data" from
//! "this entry has data", plus the accumulated form produced by appending.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data attached to a complete gazetteer entry.
///
/// # Serialization
///
/// ```rust
/// use trie::Entry;
///
/// let entry: Entry<u32> = Entry::Many(vec![Some(4), None, Some(5)]);
/// assert_eq!(entry.to_string(), "[4, , 5]");
/// assert_eq!(Entry::many([4, 5]), Entry::Many(vec![Some(4), Some(5)]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Entry<T> {
    /// The entry exists but was added without data.
    NoData,
    /// A single data value, as written by a replacing insert.
    Data(T),
    /// Values accumulated by appending inserts, in insertion order. An
    /// append without data leaves a `None` slot.
    Many(Vec<Option<T>>),
}

impl<T> Entry<T> {
    /// List form holding every item of `items`.
    pub fn many<I: IntoIterator<Item = T>>(items: I) -> Self {
        Entry::Many(items.into_iter().map(Some).collect())
    }

    /// Returns true if the entry carries no data.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Entry::NoData)
    }

    /// The single data value, if this entry holds exactly one via `Data`.
    pub fn as_data(&self) -> Option<&T> {
        match self {
            Entry::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The accumulated values, if this entry was built by appending.
    pub fn as_many(&self) -> Option<&[Option<T>]> {
        match self {
            Entry::Many(items) => Some(items),
            _ => None,
        }
    }

    /// Append `data` to this entry, converting it to the list form.
    ///
    /// Every call adds exactly one slot, `None` included. An existing
    /// single value, with or without data, is kept as the first slot.
    pub fn append(&mut self, data: Option<T>) {
        let prior = std::mem::replace(self, Entry::NoData);
        *self = match prior {
            Entry::NoData => Entry::Many(vec![None, data]),
            Entry::Data(first) => Entry::Many(vec![Some(first), data]),
            Entry::Many(mut items) => {
                items.push(data);
                Entry::Many(items)
            }
        };
    }

    /// Returns `self` unless it is `NoData`, in which case `fallback` is used.
    pub fn or<'a>(&'a self, fallback: &'a Entry<T>) -> &'a Entry<T> {
        if self.is_no_data() {
            fallback
        } else {
            self
        }
    }
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Entry::NoData
    }
}

impl<T> From<Option<T>> for Entry<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => Entry::Data(data),
            None => Entry::NoData,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    /// `NoData` renders as the empty string, `Data` as its value and `Many`
    /// as a bracketed, comma separated list with empty slots for `None`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::NoData => Ok(()),
            Entry::Data(data) => write!(f, "{data}"),
            Entry::Many(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(item) = item {
                        write!(f, "{item}")?;
                    }
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_promotes_to_list() {
        let mut entry: Entry<u32> = Entry::many([]);
        entry.append(Some(1));
        assert_eq!(entry, Entry::many([1]));
        entry.append(Some(2));
        assert_eq!(entry, Entry::many([1, 2]));

        let mut single = Entry::Data(7);
        single.append(Some(8));
        assert_eq!(single, Entry::many([7, 8]));

        let mut bare: Entry<u32> = Entry::NoData;
        bare.append(Some(8));
        assert_eq!(bare, Entry::Many(vec![None, Some(8)]));
    }

    #[test]
    fn append_without_data_keeps_a_slot() {
        let mut entry: Entry<u32> = Entry::many([]);
        entry.append(None);
        entry.append(None);
        entry.append(Some(3));
        assert_eq!(entry, Entry::Many(vec![None, None, Some(3)]));
        assert_eq!(entry.as_many().map(<[_]>::len), Some(3));
        assert_eq!(entry.to_string(), "[, , 3]");
    }

    #[test]
    fn fallback_only_replaces_missing_data() {
        let fallback = Entry::Data("default");
        assert_eq!(Entry::NoData.or(&fallback), &fallback);
        assert_eq!(Entry::Data("own").or(&fallback), &Entry::Data("own"));
        assert_eq!(Entry::<&str>::many([]).or(&fallback), &Entry::many([]));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Entry::<u8>::NoData.to_string(), "");
        assert_eq!(Entry::Data(3).to_string(), "3");
        assert_eq!(Entry::many(["a", "b"]).to_string(), "[a, b]");
    }

    #[test]
    fn serde_tagged_layout() {
        let json = serde_json::to_string(&Entry::Data(1u8)).expect("serialize");
        assert_eq!(json, r#"{"kind":"data","value":1}"#);
        let back: Entry<u8> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Entry::Data(1));
    }
}
