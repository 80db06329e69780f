use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::entry::Entry;
use crate::error::TrieError;

/// Handle of a node inside a [`Trie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Handle for arena position `index`, or `None` past `u32::MAX`.
    fn from_index(index: usize) -> Option<NodeId> {
        u32::try_from(index).ok().map(NodeId)
    }
}

#[derive(Debug, Clone)]
struct Node<K, T> {
    children: FxHashMap<K, NodeId>,
    value: Option<Entry<T>>,
}

impl<K, T> Node<K, T> {
    fn empty() -> Self {
        Self {
            children: FxHashMap::default(),
            value: None,
        }
    }
}

/// Prefix tree keyed by element `K`, holding an optional [`Entry<T>`] per node.
///
/// Nodes live in a single arena and reference their children by [`NodeId`].
/// Keys are taken as already-normalized elements; dropping ignored elements
/// and mapping is the caller's job.
///
/// The root never carries a value: inserting or setting an empty key is a
/// no-op.
#[derive(Debug, Clone)]
pub struct Trie<K, T> {
    nodes: Vec<Node<K, T>>,
    entries: usize,
}

impl<K, T> Default for Trie<K, T> {
    fn default() -> Self {
        Self {
            nodes: vec![Node::empty()],
            entries: 0,
        }
    }
}

impl<K: Eq + Hash, T> Trie<K, T> {
    /// Create an empty trie holding only the root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of complete entries stored.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert `data` under `key`.
    ///
    /// With `append` the node's entry is turned into a list and `data` is
    /// pushed onto it (see [`Entry::append`]); otherwise the entry is
    /// overwritten. Returns the terminal node, or `None` when the key was
    /// empty or the arena ran out of node handles. In the latter case no
    /// entry is stored, though a prefix of the path may have been created.
    pub fn insert<I>(&mut self, key: I, data: Option<T>, append: bool) -> Option<NodeId>
    where
        I: IntoIterator<Item = K>,
    {
        let node = self.create_path(key)?;
        let slot = &mut self.nodes[node.index()].value;
        if slot.is_none() {
            self.entries += 1;
        }
        if append {
            slot.get_or_insert_with(|| Entry::Many(Vec::new()))
                .append(data);
        } else {
            *slot = Some(Entry::from(data));
        }
        Some(node)
    }

    /// Store `value` under `key` verbatim, bypassing append semantics.
    pub fn set<I>(&mut self, key: I, value: Entry<T>) -> Option<NodeId>
    where
        I: IntoIterator<Item = K>,
    {
        let node = self.create_path(key)?;
        if self.nodes[node.index()].value.replace(value).is_none() {
            self.entries += 1;
        }
        Some(node)
    }

    /// Follow `key` from the root without creating nodes.
    pub fn find_node<I>(&self, key: I) -> Option<NodeId>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        key.into_iter()
            .try_fold(NodeId::ROOT, |node, el| {
                self.child(node, <I::Item as Borrow<K>>::borrow(&el))
            })
    }

    /// Entry stored under `key`, if the path exists and ends on an entry.
    pub fn get<I>(&self, key: I) -> Option<&Entry<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        self.find_node(key).and_then(|node| self.value(node))
    }

    /// Like [`Trie::get`], falling back to `default` when nothing is stored.
    pub fn get_or<'a, I>(&'a self, key: I, default: &'a Entry<T>) -> &'a Entry<T>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Exact lookup that fails with [`TrieError::KeyNotFound`].
    pub fn lookup(&self, key: &[K]) -> Result<&Entry<T>, TrieError>
    where
        K: fmt::Debug,
    {
        self.get(key).ok_or_else(|| TrieError::not_found(key))
    }

    pub fn contains<I>(&self, key: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        self.get(key).is_some()
    }

    /// Child of `node` reached through `key`.
    #[inline]
    pub fn child<Q>(&self, node: NodeId, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.nodes
            .get(node.index())
            .and_then(|n| n.children.get(key))
            .copied()
    }

    /// Entry stored at `node`, if it is a complete entry.
    #[inline]
    pub fn value(&self, node: NodeId) -> Option<&Entry<T>> {
        self.nodes.get(node.index()).and_then(|n| n.value.as_ref())
    }

    fn create_path<I>(&mut self, key: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = K>,
    {
        let mut node = NodeId::ROOT;
        for el in key {
            node = match self.nodes[node.index()].children.get(&el) {
                Some(&child) => child,
                None => {
                    let child = NodeId::from_index(self.nodes.len())?;
                    self.nodes.push(Node::empty());
                    self.nodes[node.index()].children.insert(el, child);
                    child
                }
            };
        }
        (node != NodeId::ROOT).then_some(node)
    }
}
