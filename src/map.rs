//! A trie-backed map whose keys are sets, supporting exact, subset and
//! superset lookups with projected enumeration.
//!
//! ```rust
//! use settrie::{SetTrieMap, Mode};
//!
//! let mut m: SetTrieMap<i32, &str> = SetTrieMap::new();
//! m.assign([1, 2], "A");
//! m.assign([1, 2, 3], "B");
//! m.assign([2, 3, 5], "C");
//!
//! assert_eq!(m.get([1, 2, 3]), Some(&"B"));
//! assert_eq!(m.get([1, 2, 3, 4]), None);
//! assert_eq!(
//!     m.supersets([1, 2], Mode::Values).count(),
//!     2
//! );
//! ```

mod iter;
mod subset;
mod superset;

use crate::node::Node;
use crate::projection::{Mode, Projection};
use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::ops::Index;

pub use iter::Preorder;
pub use subset::Subsets;
pub use superset::Supersets;

/// The iterator returned by [`SetTrieMap::keys`], and the default iteration
/// order for `&SetTrieMap` (spec.md §4.3: "iteration over the container
/// itself ... is equivalent to `keys()`").
pub type Keys<'a, K, V> = std::iter::Map<Preorder<'a, K, V>, fn(Projection<'a, K, V>) -> BTreeSet<K>>;

/// A map from sets to single values, supporting subset/superset queries
/// over the keys.
#[derive(Debug, Default)]
pub struct SetTrieMap<K, V> {
    root: Node<K, V>,
}

impl<K, V> SetTrieMap<K, V> {
    /// Creates a new, empty `SetTrieMap`.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Node::new() }
    }
}

impl<K: Ord, V> SetTrieMap<K, V> {
    /// Associates `value` with key set `k`, replacing any value previously
    /// assigned to the same (sorted, de-duplicated) key set.
    pub fn assign(&mut self, k: impl IntoIterator<Item = K>, value: V) {
        let sorted: BTreeSet<K> = k.into_iter().collect();
        let mut node = &mut self.root;
        for key in sorted {
            node = node.child_or_insert(key);
        }
        node.set_payload(value);
    }

    /// Returns the value assigned to `k`, if any.
    #[must_use]
    pub fn get(&self, k: impl IntoIterator<Item = K>) -> Option<&V> {
        let sorted: BTreeSet<K> = k.into_iter().collect();
        let mut node = &self.root;
        for key in &sorted {
            node = node.child(key)?;
        }
        node.payload()
    }

    /// Returns the value assigned to `k`, or `default` if `k` is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, k: impl IntoIterator<Item = K>, default: &'a V) -> &'a V {
        self.get(k).unwrap_or(default)
    }

    /// Returns `true` iff `k` has an assigned value.
    #[must_use]
    pub fn contains_key(&self, k: impl IntoIterator<Item = K>) -> bool {
        self.get(k).is_some()
    }

    /// Returns `true` iff some stored key set is a superset of (or equal
    /// to) `q`.
    #[must_use]
    pub fn hassuperset(&self, q: impl IntoIterator<Item = K>) -> bool {
        let q: BTreeSet<K> = q.into_iter().collect();
        let q: Vec<K> = q.into_iter().collect();
        Self::hassuperset_at(&self.root, &q, 0)
    }

    fn hassuperset_at(node: &Node<K, V>, q: &[K], idx: usize) -> bool {
        if idx == q.len() {
            return true;
        }
        for (k, child) in node.children() {
            if *k > q[idx] {
                break;
            }
            let next_idx = if *k == q[idx] { idx + 1 } else { idx };
            if Self::hassuperset_at(child, q, next_idx) {
                return true;
            }
        }
        false
    }

    /// Returns `true` iff some stored key set is a subset of (or equal to)
    /// `q`.
    #[must_use]
    pub fn hassubset(&self, q: impl IntoIterator<Item = K>) -> bool {
        let q: BTreeSet<K> = q.into_iter().collect();
        let q: Vec<K> = q.into_iter().collect();
        Self::hassubset_at(&self.root, &q, 0)
    }

    fn hassubset_at(node: &Node<K, V>, q: &[K], idx: usize) -> bool {
        if node.is_terminal() {
            return true;
        }
        if idx == q.len() {
            return false;
        }
        if let Some(child) = node.child(&q[idx]) {
            if Self::hassubset_at(child, q, idx + 1) {
                return true;
            }
        }
        Self::hassubset_at(node, q, idx + 1)
    }
}

impl<K: Ord + Clone, V> SetTrieMap<K, V> {
    /// Lazily enumerates every entry whose key set is a superset of (or
    /// equal to) `q`, projected according to `mode`, in pre-order.
    #[must_use]
    pub fn supersets(&self, q: impl IntoIterator<Item = K>, mode: Mode) -> Supersets<'_, K, V> {
        let q: BTreeSet<K> = q.into_iter().collect();
        Supersets::new(&self.root, q.into_iter().collect(), mode)
    }

    /// Lazily enumerates every entry whose key set is a subset of (or
    /// equal to) `q`, projected according to `mode`, in pre-order.
    #[must_use]
    pub fn subsets<'a, 'b>(&'a self, q: &'b BTreeSet<K>, mode: Mode) -> Subsets<'a, 'b, K, V> {
        Subsets::new(&self.root, q, mode)
    }

    /// Iterates over every entry, projected according to `mode`, in
    /// pre-order.
    #[must_use]
    pub fn iter(&self, mode: Mode) -> Preorder<'_, K, V> {
        Preorder::new(&self.root, mode)
    }

    /// Iterates over every stored key set, in pre-order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.iter(Mode::Keys).map(Projection::into_key)
    }

    /// Iterates over every stored value, in pre-order of its key.
    #[must_use]
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter(Mode::Values).map(Projection::into_value)
    }

    /// Iterates over every `(key set, value)` pair, in pre-order.
    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = (BTreeSet<K>, &V)> + '_ {
        self.iter(Mode::Pairs).map(Projection::into_pair)
    }
}

impl<K: Ord + Clone + fmt::Debug, V: fmt::Debug> SetTrieMap<K, V> {
    /// Writes one line per node, pre-order, to `out`. Indentation is
    /// `level * tabsize` copies of `tabchr`; the root is printed as the
    /// literal text `None`; terminal nodes are suffixed with `: <value>`.
    pub fn print_tree(&self, out: &mut impl Write, tabchr: char, tabsize: usize) -> io::Result<()> {
        writeln!(out, "None")?;
        for (key, child) in self.root.children() {
            Self::print_node(key, child, 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }

    fn print_node(
        key: &K,
        node: &Node<K, V>,
        level: usize,
        tabchr: char,
        tabsize: usize,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let indent: String = std::iter::repeat(tabchr).take(level * tabsize).collect();
        match node.payload() {
            Some(v) => writeln!(out, "{indent}{key:?}: {v:?}")?,
            None => writeln!(out, "{indent}{key:?}")?,
        }
        for (child_key, child) in node.children() {
            Self::print_node(child_key, child, level + 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }
}

/// Indexed retrieval, panicking on an absent key (Rust's usual missing-key
/// convention, spec.md §7). There is no `IndexMut` companion: as with
/// `std::collections::HashMap`, assigning through an index would require
/// fabricating a value for a key that isn't present yet, so `assign`
/// remains the sole setter (spec.md §4.3's "index-style assignment").
impl<K: Ord, V, Q: IntoIterator<Item = K>> Index<Q> for SetTrieMap<K, V> {
    type Output = V;

    fn index(&self, index: Q) -> &V {
        self.get(index).expect("key not present in SetTrieMap")
    }
}

/// Bare iteration over a `SetTrieMap` is equivalent to [`SetTrieMap::keys`]
/// (spec.md §4.3).
impl<'a, K: Ord + Clone, V> IntoIterator for &'a SetTrieMap<K, V> {
    type Item = BTreeSet<K>;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl<I, K, V> Extend<(I, V)> for SetTrieMap<K, V>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    fn extend<F: IntoIterator<Item = (I, V)>>(&mut self, iter: F) {
        for (k, v) in iter {
            self.assign(k, v);
        }
    }
}

impl<I, K, V> FromIterator<(I, V)> for SetTrieMap<K, V>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    fn from_iter<F: IntoIterator<Item = (I, V)>>(iter: F) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Ord + Clone + fmt::Debug, V: fmt::Debug> fmt::Display for SetTrieMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<_> = self.items().map(|(k, v)| (k, v)).collect();
        write!(f, "{pairs:?}")
    }
}
