use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, trace};
use trie::{Entry, NodeId, Trie};

use crate::metrics::metrics_recorder;
use crate::options::FindOptions;
use crate::types::Span;


/// Predicate deciding which input elements are skipped.
pub type IgnoreFn<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Folds an input element into the key stored in the trie.
pub type MapFn<E, K> = Box<dyn Fn(&E) -> K + Send + Sync>;

/// Gazetteer matcher over elements `E`, stored in the trie as keys `K`.
///
/// Every element, whether it comes from an entry being added or from input
/// being scanned, goes through the same two steps: elements for which the
/// ignore predicate holds are dropped, the rest are folded by the map
/// function. Configure both before adding entries; entries added under one
/// configuration are not re-folded when it changes.
///
/// The element-generic operations live here. [`StringMatcher`] and
/// [`TokenMatcher`] add the typed `add`/`find`/`replace` surface.
///
/// [`StringMatcher`]: crate::StringMatcher
/// [`TokenMatcher`]: crate::TokenMatcher
pub struct Matcher<E: ?Sized, K, T, A = ()> {
    trie: Trie<K, T>,
    ignore: IgnoreFn<E>,
    map: MapFn<E, K>,
    default_data: Entry<T>,
    matcher_data: A,
}

impl<E, K, T> Matcher<E, K, T, ()>
where
    E: ?Sized + ToOwned<Owned = K>,
    K: Eq + Hash,
{
    /// A matcher that ignores nothing and compares elements verbatim.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            ignore: Box::new(|_: &E| false),
            map: Box::new(|el: &E| el.to_owned()),
            default_data: Entry::NoData,
            matcher_data: (),
        }
    }
}

impl<E, K, T> Default for Matcher<E, K, T, ()>
where
    E: ?Sized + ToOwned<Owned = K>,
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized, K: Eq + Hash, T, A> Matcher<E, K, T, A> {
    /// Replace the ignore predicate.
    pub fn with_ignore<F>(mut self, ignore: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.ignore = Box::new(ignore);
        self
    }

    /// Replace the map function.
    pub fn with_map<F>(mut self, map: F) -> Self
    where
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        self.map = Box::new(map);
        self
    }

    /// Data reported for matched entries that were added without data.
    pub fn with_default_data(mut self, data: T) -> Self {
        self.default_data = Entry::Data(data);
        self
    }

    /// Attach `matcher_data` to every match this matcher produces.
    pub fn with_matcher_data<B>(self, matcher_data: B) -> Matcher<E, K, T, B> {
        Matcher {
            trie: self.trie,
            ignore: self.ignore,
            map: self.map,
            default_data: self.default_data,
            matcher_data,
        }
    }

    pub fn trie(&self) -> &Trie<K, T> {
        &self.trie
    }

    pub fn matcher_data(&self) -> &A {
        &self.matcher_data
    }

    pub fn default_data(&self) -> &Entry<T> {
        &self.default_data
    }

    /// Number of entries in the gazetteer.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Add one entry given as a sequence of elements.
    ///
    /// Ignored elements are dropped and the rest folded; an entry that is
    /// empty afterwards is silently skipped. With `append` the stored data
    /// becomes a list that `data` is pushed onto, otherwise it is replaced.
    pub fn add_elements<I>(&mut self, entry: I, data: Option<T>, append: bool)
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let Self {
            trie, ignore, map, ..
        } = self;
        let (ignore, map) = (&**ignore, &**map);
        let keys = entry.into_iter().filter_map(|el| {
            let el: &E = el.borrow();
            (!ignore(el)).then(|| map(el))
        });
        if trie.insert(keys, data, append).is_none() {
            trace!("matcher_add_ignored");
        }
    }

    /// Store `value` for the entry verbatim, bypassing append semantics.
    pub fn set_elements<I>(&mut self, entry: I, value: Entry<T>)
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let Self {
            trie, ignore, map, ..
        } = self;
        let (ignore, map) = (&**ignore, &**map);
        let keys = entry.into_iter().filter_map(|el| {
            let el: &E = el.borrow();
            (!ignore(el)).then(|| map(el))
        });
        if trie.set(keys, value).is_none() {
            trace!("matcher_set_ignored");
        }
    }

    /// Data stored for the entry, if it exists.
    pub fn get_elements<I>(&self, key: I) -> Option<&Entry<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut node = NodeId::ROOT;
        for el in key {
            let el: &E = el.borrow();
            if (self.ignore)(el) {
                continue;
            }
            node = self.trie.child(node, &(self.map)(el))?;
        }
        self.trie.value(node)
    }

    /// Scan `elements` and return the accepted spans in increasing start
    /// order (increasing length within one start when `options.all`).
    ///
    /// A span's `end` is one past the last non-ignored element of the entry,
    /// so ignored elements trailing a match are never part of it.
    pub fn scan<X>(&self, elements: &[X], options: &FindOptions) -> Vec<Span<'_, T>>
    where
        X: Borrow<E>,
    {
        let started = Instant::now();
        let mut spans = Vec::new();
        let Some((from, to)) = options.bounds(elements.len()) else {
            trace!(
                len = elements.len(),
                from = ?options.from,
                to = ?options.to,
                "matcher_find_empty_range"
            );
            return spans;
        };

        let mut start = from;
        while start <= to {
            let first: &E = elements[start].borrow();
            if (self.ignore)(first) {
                start += 1;
                continue;
            }

            let mut node = NodeId::ROOT;
            let mut longest: Option<Span<'_, T>> = None;
            let mut cursor = start;
            while cursor < elements.len() {
                let el: &E = elements[cursor].borrow();
                cursor += 1;
                if (self.ignore)(el) {
                    continue;
                }
                node = match self.trie.child(node, &(self.map)(el)) {
                    Some(child) => child,
                    None => break,
                };
                if let Some(entry) = self.trie.value(node) {
                    let span = Span {
                        start,
                        end: cursor,
                        data: entry.or(&self.default_data),
                    };
                    trace!(start, end = cursor, "matcher_candidate");
                    if options.all {
                        spans.push(span);
                    }
                    longest = Some(span);
                }
            }

            match longest {
                Some(span) => {
                    if !options.all {
                        spans.push(span);
                    }
                    start = if options.skip {
                        span.end.max(start + 1)
                    } else {
                        start + 1
                    };
                }
                None => start += 1,
            }
        }

        let elapsed = started.elapsed();
        debug!(
            from,
            to,
            all = options.all,
            skip = options.skip,
            matches = spans.len(),
            elapsed_micros = elapsed.as_micros() as u64,
            "matcher_find"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_find(elapsed, to + 1 - from, spans.len());
        }
        spans
    }
}

impl<E, K, T, A> fmt::Debug for Matcher<E, K, T, A>
where
    E: ?Sized,
    K: Eq + Hash,
    T: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("entries", &self.trie.len())
            .field("nodes", &self.trie.node_count())
            .field("default_data", &self.default_data)
            .field("matcher_data", &self.matcher_data)
            .finish_non_exhaustive()
    }
}
