//! A trie over sorted sets of elements, supporting exact, subset and
//! superset queries.
//!
//! ```rust
//! use settrie::SetTrie;
//! use std::collections::BTreeSet;
//!
//! let mut t: SetTrie<i32> = SetTrie::new();
//! t.add([1, 3]);
//! t.add([1, 2, 3]);
//! t.add([3, 4, 5]);
//!
//! assert!(t.contains([1, 3]));
//! assert!(t.hassuperset([1, 3]));
//! assert_eq!(
//!     t.supersets([1, 3]).collect::<Vec<_>>(),
//!     vec![BTreeSet::from([1, 2, 3]), BTreeSet::from([1, 3])]
//! );
//! ```

mod iter;
mod subset;
mod superset;

use crate::node::Node;
use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;

pub use iter::Preorder;
pub use subset::Subsets;
pub use superset::Supersets;

/// Container of sets, supporting fast exact, subset and superset queries.
///
/// Think of it as a `BTreeSet<BTreeSet<K>>` optimized for the containment
/// queries a plain set of sets can't answer efficiently: "does any stored
/// set contain all of `Q`?" and "does any stored set lie entirely within
/// `Q`?", both as existence checks and as full enumerations.
///
/// # Restrictions
///
/// `K` must implement [`Ord`]; the trie stores, at each node, its children
/// sorted by `K`. Unlike a hand-rolled trie keyed by array index or byte,
/// elements are inserted in whatever order the caller provides them in —
/// `add` sorts internally, so callers never need to pre-sort a set
/// themselves.
#[derive(Debug, Default)]
pub struct SetTrie<K> {
    root: Node<K, ()>,
}

impl<K> SetTrie<K> {
    /// Creates a new, empty `SetTrie`.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: Node::new() }
    }
}

impl<K: Ord> SetTrie<K> {
    /// Adds set `s` to the container. Idempotent: adding the same set twice
    /// leaves the trie observationally unchanged.
    ///
    /// ```rust
    /// let mut t = settrie::SetTrie::new();
    /// t.add([1, 2]);
    /// t.add([1, 2]);
    /// assert_eq!(t.iter().count(), 1);
    /// ```
    pub fn add(&mut self, s: impl IntoIterator<Item = K>) {
        let sorted: BTreeSet<K> = s.into_iter().collect();
        let mut node = &mut self.root;
        for key in sorted {
            node = node.child_or_insert(key);
        }
        node.set_payload(());
    }

    /// Returns `true` iff `s` was previously added to this trie.
    #[must_use]
    pub fn contains(&self, s: impl IntoIterator<Item = K>) -> bool {
        let sorted: BTreeSet<K> = s.into_iter().collect();
        let mut node = &self.root;
        for key in &sorted {
            match node.child(key) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal()
    }

    /// Returns `true` iff some stored set is a superset of (or equal to) `q`.
    #[must_use]
    pub fn hassuperset(&self, q: impl IntoIterator<Item = K>) -> bool {
        let q: BTreeSet<K> = q.into_iter().collect();
        let q: Vec<K> = q.into_iter().collect();
        Self::hassuperset_at(&self.root, &q, 0)
    }

    fn hassuperset_at(node: &Node<K, ()>, q: &[K], idx: usize) -> bool {
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

    /// Returns `true` iff some stored set is a subset of (or equal to) `q`.
    #[must_use]
    pub fn hassubset(&self, q: impl IntoIterator<Item = K>) -> bool {
        let q: BTreeSet<K> = q.into_iter().collect();
        let q: Vec<K> = q.into_iter().collect();
        Self::hassubset_at(&self.root, &q, 0)
    }

    fn hassubset_at(node: &Node<K, ()>, q: &[K], idx: usize) -> bool {
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

impl<K: Ord + Clone> SetTrie<K> {
    /// Lazily enumerates every stored set that is a superset of (or equal
    /// to) `q`, in pre-order.
    ///
    /// ```rust
    /// let mut t = settrie::SetTrie::new();
    /// t.add([1]);
    /// t.add([1, 2]);
    /// t.add([1, 2, 3]);
    /// assert_eq!(t.supersets([1]).count(), 3);
    /// ```
    #[must_use]
    pub fn supersets(&self, q: impl IntoIterator<Item = K>) -> Supersets<'_, K> {
        let q: BTreeSet<K> = q.into_iter().collect();
        Supersets::new(&self.root, q.into_iter().collect())
    }

    /// Lazily enumerates every stored set that is a subset of (or equal to)
    /// `q`, in pre-order.
    #[must_use]
    pub fn subsets<'a, 'b>(&'a self, q: &'b BTreeSet<K>) -> Subsets<'a, 'b, K> {
        Subsets::new(&self.root, q)
    }

    /// Iterates over every stored set, in pre-order.
    #[must_use]
    pub fn iter(&self) -> Preorder<'_, K> {
        Preorder::new(&self.root)
    }
}

impl<K: Ord + Clone + fmt::Debug> SetTrie<K> {
    /// Writes one line per node, pre-order, to `out`. Indentation is
    /// `level * tabsize` copies of `tabchr`; the root is printed as the
    /// literal text `None`; terminal nodes are suffixed with `#`.
    pub fn print_tree(&self, out: &mut impl Write, tabchr: char, tabsize: usize) -> io::Result<()> {
        writeln!(out, "None")?;
        for (key, child) in self.root.children() {
            Self::print_node(key, child, 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }

    fn print_node(
        key: &K,
        node: &Node<K, ()>,
        level: usize,
        tabchr: char,
        tabsize: usize,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let indent: String = std::iter::repeat(tabchr).take(level * tabsize).collect();
        let marker = if node.is_terminal() { "#" } else { "" };
        writeln!(out, "{indent}{key:?}{marker}")?;
        for (child_key, child) in node.children() {
            Self::print_node(child_key, child, level + 1, tabchr, tabsize, out)?;
        }
        Ok(())
    }
}

impl<I, K> Extend<I> for SetTrie<K>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    fn extend<F: IntoIterator<Item = I>>(&mut self, iter: F) {
        for s in iter {
            self.add(s);
        }
    }
}

impl<I, K> FromIterator<I> for SetTrie<K>
where
    I: IntoIterator<Item = K>,
    K: Ord,
{
    fn from_iter<F: IntoIterator<Item = I>>(iter: F) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Ord + Clone + fmt::Debug> fmt::Display for SetTrie<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> SetTrie<i32> {
        let mut t = SetTrie::new();
        for s in [
            vec![1, 3],
            vec![1, 3, 5],
            vec![1, 4],
            vec![1, 2, 4],
            vec![2, 4],
            vec![2, 3, 5],
        ] {
            t.add(s);
        }
        t
    }

    fn set(items: &[i32]) -> BTreeSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn scenario_a_full_iteration() {
        let t = scenario_a();
        let got: Vec<_> = t.iter().collect();
        let want = vec![
            set(&[1, 2, 4]),
            set(&[1, 3]),
            set(&[1, 3, 5]),
            set(&[1, 4]),
            set(&[2, 3, 5]),
            set(&[2, 4]),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn scenario_a_contains() {
        let t = scenario_a();
        assert!(t.contains([1, 3]));
        assert!(!t.contains([1]));
        assert!(!t.contains([1, 3, 5, 7]));
    }

    #[test]
    fn scenario_a_hassuperset() {
        let t = scenario_a();
        assert!(t.hassuperset([3, 5]));
        assert!(!t.hassuperset([6]));
        assert!(!t.hassuperset([2, 4, 5]));
    }

    #[test]
    fn scenario_a_supersets() {
        let t = scenario_a();
        assert_eq!(
            t.supersets([3, 5]).collect::<Vec<_>>(),
            vec![set(&[1, 3, 5]), set(&[2, 3, 5])]
        );
        assert_eq!(
            t.supersets([1]).collect::<Vec<_>>(),
            vec![set(&[1, 2, 4]), set(&[1, 3]), set(&[1, 3, 5]), set(&[1, 4])]
        );
        assert_eq!(t.supersets([1, 2, 4, 5]).count(), 0);
    }

    #[test]
    fn scenario_a_hassubset() {
        let t = scenario_a();
        assert!(t.hassubset([1, 2, 3]));
        assert!(!t.hassubset([3, 4, 5]));
    }

    #[test]
    fn scenario_a_subsets() {
        let t = scenario_a();
        assert_eq!(
            t.subsets(&set(&[1, 2, 4, 11])).collect::<Vec<_>>(),
            vec![set(&[1, 2, 4]), set(&[1, 4]), set(&[2, 4])]
        );
        assert_eq!(
            t.subsets(&set(&[0, 1, 3, 5])).collect::<Vec<_>>(),
            vec![set(&[1, 3]), set(&[1, 3, 5])]
        );
        assert_eq!(t.subsets(&set(&[1, 2, 3, 4, 5])).count(), 6);
    }

    #[test]
    fn empty_trie() {
        let t: SetTrie<i32> = SetTrie::new();
        assert_eq!(t.iter().count(), 0);
        assert!(t.hassuperset(Vec::<i32>::new()));
        assert!(!t.hassuperset([1]));
        assert!(!t.hassubset([1, 2, 3]));
        assert!(!t.hassubset(Vec::<i32>::new()));
    }

    #[test]
    fn pretty_print_matches_scenario_e() {
        let t = scenario_a();
        let mut out = Vec::new();
        t.print_tree(&mut out, ' ', 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "None");
        // {1,3} and {1,3,5} share the path 1 -> 3, with 3 itself terminal.
        assert!(lines.contains(&"  1"));
        assert!(lines.contains(&"    3#"));
        assert!(lines.contains(&"      5#"));
    }

    #[test]
    fn display_is_preorder_list() {
        let t = scenario_a();
        let text = t.to_string();
        assert!(text.starts_with('['));
        assert!(text.ends_with(']'));
    }

    mod proptest {
        use super::super::*;
        use ::proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            #[test]
            fn insertion_idempotent(mut sets: Vec<Vec<i8>>) {
                sets.truncate(20);
                let mut t: SetTrie<i8> = SetTrie::new();
                for s in &sets {
                    t.add(s.clone());
                }
                let once: Vec<_> = t.iter().collect();
                for s in &sets {
                    t.add(s.clone());
                }
                let twice: Vec<_> = t.iter().collect();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn exact_round_trip(mut sets: Vec<Vec<i8>>) {
                sets.truncate(20);
                let mut t: SetTrie<i8> = SetTrie::new();
                for s in &sets {
                    t.add(s.clone());
                }
                for s in &sets {
                    prop_assert!(t.contains(s.clone()));
                }
            }

            #[test]
            fn superset_correctness(mut sets: Vec<Vec<i8>>, query: Vec<i8>) {
                sets.truncate(12);
                let mut t: SetTrie<i8> = SetTrie::new();
                for s in &sets {
                    t.add(s.clone());
                }
                let q: BTreeSet<i8> = query.iter().copied().collect();
                let has = t.hassuperset(query.clone());
                let enumerated = t.supersets(query.clone()).count() > 0;
                prop_assert_eq!(has, enumerated);

                let any_superset = sets.iter().any(|s| {
                    let s: HashSet<i8> = s.iter().copied().collect();
                    q.iter().all(|e| s.contains(e))
                });
                prop_assert_eq!(has, any_superset);
            }

            #[test]
            fn subset_correctness(mut sets: Vec<Vec<i8>>, query: Vec<i8>) {
                sets.truncate(12);
                let mut t: SetTrie<i8> = SetTrie::new();
                for s in &sets {
                    t.add(s.clone());
                }
                let q: BTreeSet<i8> = query.iter().copied().collect();
                let has = t.hassubset(query.clone());
                let enumerated = t.subsets(&q).count() > 0;
                prop_assert_eq!(has, enumerated);

                let any_subset = sets.iter().any(|s| {
                    let s: BTreeSet<i8> = s.iter().copied().collect();
                    s.is_subset(&q)
                });
                prop_assert_eq!(has, any_subset);
            }
        }
    }
}
