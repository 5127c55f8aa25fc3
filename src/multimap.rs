//! A trie-backed multimap whose keys are sets and whose values accumulate
//! in an ordered list per key, supporting subset/superset queries.
//!
//! ```rust
//! use settrie::{SetTrieMultiMap, Mode};
//!
//! let mut m: SetTrieMultiMap<i32, &str> = SetTrieMultiMap::new();
//! m.assign([1, 2], "A");
//! m.assign([1, 2], "A2");
//! m.assign([1, 2, 3], "B");
//!
//! assert_eq!(m.get([1, 2]), Some(&["A", "A2"][..]));
//! assert_eq!(m.count([1, 2]), 2);
//! assert_eq!(m.supersets([1, 2], Mode::Values).count(), 3);
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

/// The iterator returned by [`SetTrieMultiMap::keys`], and the default
/// iteration order for `&SetTrieMultiMap` (spec.md §4.4: this container
/// "extends SetTrieMap: all of SetTrieMap's surface", including §4.3's
/// "iteration over the container itself is equivalent to `keys()`").
pub type Keys<'a, K, V> = std::iter::Map<Preorder<'a, K, V>, fn(Projection<'a, K, V>) -> BTreeSet<K>>;

/// A map from sets to ordered lists of values, supporting subset/superset
/// queries over the keys.
#[derive(Debug, Default)]
pub struct SetTrieMultiMap<K, V> {
    root: Node<K, Vec<V>>,
}

impl<K, V> SetTrieMultiMap<K, V> {
    /// Creates a new, empty `SetTrieMultiMap`.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Node::new() }
    }
}

impl<K: Ord, V> SetTrieMultiMap<K, V> {
    /// Appends `value` to the list assigned to key set `k`, creating the
    /// entry if absent. Returns the number of values now assigned to `k`.
    pub fn assign(&mut self, k: impl IntoIterator<Item = K>, value: V) -> usize {
        let sorted: BTreeSet<K> = k.into_iter().collect();
        let mut node = &mut self.root;
        for key in sorted {
            node = node.child_or_insert(key);
        }
        let values = node.payload_or_insert_with(Vec::new);
        values.push(value);
        values.len()
    }

    /// Returns the values assigned to `k`, if any.
    #[must_use]
    pub fn get(&self, k: impl IntoIterator<Item = K>) -> Option<&[V]> {
        let sorted: BTreeSet<K> = k.into_iter().collect();
        let mut node = &self.root;
        for key in &sorted {
            node = node.child(key)?;
        }
        node.payload().map(Vec::as_slice)
    }

    /// Returns the values assigned to `k`, or `default` if `k` is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, k: impl IntoIterator<Item = K>, default: &'a [V]) -> &'a [V] {
        self.get(k).unwrap_or(default)
    }

    /// Returns the number of values assigned to `k` (zero if absent).
    #[must_use]
    pub fn count(&self, k: impl IntoIterator<Item = K>) -> usize {
        self.get(k).map_or(0, <[V]>::len)
    }

    /// Iterates over the values assigned to `k`, in insertion order. Empty
    /// if `k` is absent.
    #[must_use]
    pub fn iterget(&self, k: impl IntoIterator<Item = K>) -> impl Iterator<Item = &V> {
        self.get(k).unwrap_or(&[]).iter()
    }

    /// Returns `true` iff `k` has at least one assigned value.
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

    fn hassuperset_at(node: &Node<K, Vec<V>>, q: &[K], idx: usize) -> bool {
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

    fn hassubset_at(node: &Node<K, Vec<V>>, q: &[K], idx: usize) -> bool {
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

impl<K: Ord + Clone, V> SetTrieMultiMap<K, V> {
    /// Lazily enumerates every entry whose key set is a superset of (or
    /// equal to) `q`, projected according to `mode`, in pre-order. A
    /// terminal with several stored values yields one emission per value
    /// in [`Mode::Values`]/[`Mode::Pairs`], but exactly one in
    /// [`Mode::Keys`].
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

    /// Iterates over every stored key set, in pre-order, once each
    /// regardless of how many values it holds.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.iter(Mode::Keys).map(Projection::into_key)
    }

    /// Iterates over every stored value, in pre-order of its key and
    /// insertion order within a key.
    #[must_use]
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter(Mode::Values).map(Projection::into_value)
    }

    /// Iterates over every `(key set, value)` pair, one per stored value.
    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = (BTreeSet<K>, &V)> + '_ {
        self.iter(Mode::Pairs).map(Projection::into_pair)
    }
}

impl<K: Ord + Clone + fmt::Debug, V: fmt::Debug> SetTrieMultiMap<K, V> {
    /// Writes one line per node, pre-order, to `out`. Indentation is
    /// `level * tabsize` copies of `tabchr`; the root is printed as the
    /// literal text `None`; terminal nodes are suffixed with `: <values>`.
    pub fn print_tree(&self, out: &mut impl Write, tabchr: char, tabsize: usize) -> io::Result<()> {
        writeln!(out, "None")?;
        for (key, child) in self.root.children() {
            Self::print_node(key, child, 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }

    fn print_node(
        key: &K,
        node: &Node<K, Vec<V>>,
        level: usize,
        tabchr: char,
        tabsize: usize,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let indent: String = std::iter::repeat(tabchr).take(level * tabsize).collect();
        match node.payload() {
            Some(values) => writeln!(out, "{indent}{key:?}: {values:?}")?,
            None => writeln!(out, "{indent}{key:?}")?,
        }
        for (child_key, child) in node.children() {
            Self::print_node(child_key, child, level + 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }
}

/// Indexed retrieval of the full value list, panicking on an absent key
/// (Rust's usual missing-key convention, spec.md §7). As with
/// [`SetTrieMap`](crate::SetTrieMap), there is no `IndexMut` companion;
/// `assign` remains the sole setter.
impl<K: Ord, V, Q: IntoIterator<Item = K>> Index<Q> for SetTrieMultiMap<K, V> {
    type Output = [V];

    fn index(&self, index: Q) -> &[V] {
        self.get(index).expect("key not present in SetTrieMultiMap")
    }
}

/// Bare iteration over a `SetTrieMultiMap` is equivalent to
/// [`SetTrieMultiMap::keys`] (spec.md §4.3/§4.4).
impl<'a, K: Ord + Clone, V> IntoIterator for &'a SetTrieMultiMap<K, V> {
    type Item = BTreeSet<K>;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl<I, K, V> Extend<(I, V)> for SetTrieMultiMap<K, V>
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

impl<I, K, V> FromIterator<(I, V)> for SetTrieMultiMap<K, V>
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

impl<K: Ord + Clone + fmt::Debug, V: fmt::Debug> fmt::Display for SetTrieMultiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<_> = self.items().map(|(k, v)| (k, v)).collect();
        write!(f, "{pairs:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_c() -> SetTrieMultiMap<i32, &'static str> {
        let mut m = SetTrieMultiMap::new();
        let entries: [(Vec<i32>, &str); 11] = [
            (vec![1, 3], "A"),
            (vec![1, 3], "AA"),
            (vec![1, 3, 5], "B"),
            (vec![1, 4], "C"),
            (vec![1, 4], "CC"),
            (vec![1, 2, 4], "D"),
            (vec![1, 2, 4], "DD"),
            (vec![2, 4], "E"),
            (vec![2, 3, 5], "F"),
            (vec![2, 3, 5], "FF"),
            (vec![2, 3, 5], "FFF"),
        ];
        for (k, v) in entries {
            m.assign(k, v);
        }
        m
    }

    fn set(items: &[i32]) -> BTreeSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn scenario_c_get_and_count() {
        let m = scenario_c();
        assert_eq!(m.get([1, 3]), Some(&["A", "AA"][..]));
        assert_eq!(m.get([2, 3, 5]), Some(&["F", "FF", "FFF"][..]));
        let empty: &[&str] = &[];
        assert_eq!(m.get_or([44], empty), empty);
        assert_eq!(m.count([2, 3, 5]), 3);
        assert_eq!(m.count([9]), 0);
    }

    #[test]
    fn scenario_c_iterget() {
        let m = scenario_c();
        let got: Vec<_> = m.iterget([2, 3, 5]).collect();
        assert_eq!(got, vec![&"F", &"FF", &"FFF"]);
    }

    #[test]
    fn scenario_c_assign_returns_running_length() {
        let mut m: SetTrieMultiMap<i32, &str> = SetTrieMultiMap::new();
        assert_eq!(m.assign([1, 2], "x"), 1);
        assert_eq!(m.assign([1, 2], "y"), 2);
        assert_eq!(m.assign([1, 2], "z"), 3);
    }

    #[test]
    fn scenario_c_keys_count_once_per_key() {
        let m = scenario_c();
        assert_eq!(m.keys().count(), 6);
        assert_eq!(m.values().count(), 11);
        assert_eq!(m.items().count(), 11);
    }

    #[test]
    fn scenario_c_supersets_values_multi_emit() {
        let m = scenario_c();
        let got: Vec<_> = m
            .supersets([3, 5], Mode::Values)
            .map(Projection::into_value)
            .collect();
        assert_eq!(got, vec![&"B", &"F", &"FF", &"FFF"]);
    }

    #[test]
    fn scenario_c_subsets_values_full_preorder() {
        let m = scenario_c();
        let universe = set(&[1, 2, 3, 4, 5]);
        let got: Vec<_> = m
            .subsets(&universe, Mode::Values)
            .map(Projection::into_value)
            .collect();
        assert_eq!(
            got,
            vec![
                &"D", &"DD", &"A", &"AA", &"B", &"C", &"CC", &"F", &"FF", &"FFF", &"E"
            ]
        );
    }

    #[test]
    fn scenario_c_supersets_keys_single_emit() {
        let m = scenario_c();
        let got: Vec<_> = m
            .supersets([2, 3, 5], Mode::Keys)
            .map(Projection::into_key)
            .collect();
        assert_eq!(got, vec![set(&[2, 3, 5])]);
    }

    #[test]
    fn index_returns_value_list() {
        let m = scenario_c();
        assert_eq!(&m[[1, 3]], &["A", "AA"]);
        assert_eq!(&m[[2, 3, 5]], &["F", "FF", "FFF"]);
    }

    #[test]
    #[should_panic(expected = "key not present")]
    fn index_panics_on_absent_key() {
        let m = scenario_c();
        let _ = &m[[9, 10]];
    }

    #[test]
    fn bare_iteration_matches_keys() {
        let m = scenario_c();
        let via_keys: Vec<_> = m.keys().collect();
        let via_bare: Vec<_> = (&m).into_iter().collect();
        assert_eq!(via_keys, via_bare);
        for s in &m {
            assert!(via_keys.contains(&s));
        }
    }

    #[test]
    fn empty_multimap() {
        let m: SetTrieMultiMap<i32, &str> = SetTrieMultiMap::new();
        assert_eq!(m.keys().count(), 0);
        assert_eq!(m.get([1]), None);
        assert_eq!(m.count([1]), 0);
        assert!(m.hassuperset(Vec::<i32>::new()));
        assert!(!m.hassubset(Vec::<i32>::new()));
    }

    #[test]
    fn scenario_c_hassuperset_hassubset() {
        let m = scenario_c();
        assert!(m.hassuperset([3, 5]));
        assert!(!m.hassuperset([6]));
        assert!(m.hassubset([1, 3, 5, 9]));
        assert!(!m.hassubset([9, 10]));
    }
}
