//! The shared trie vertex used by `SetTrie`, `SetTrieMap` and `SetTrieMultiMap`.
//!
//! `Node<K, P>` carries no label of its own: a node's element is already the
//! `K` half of the `(K, Node<K, P>)` pair stored in its parent's child list,
//! so there is no overloaded "nodes compare by label" relation to maintain
//! here (see Design Notes in SPEC_FULL.md). The three containers differ only
//! in what `P` is: `()` for plain membership, `V` for a single value, `Vec<V>`
//! for an ordered list of values.

/// A single trie vertex. Not part of the public API: every container wraps
/// its own `Node<K, P>` tree and exposes only the operations the spec calls
/// for.
#[derive(Debug)]
pub(crate) struct Node<K, P> {
    children: Vec<(K, Node<K, P>)>,
    payload: Option<P>,
}

impl<K, P> Node<K, P> {
    pub(crate) const fn new() -> Self {
        Self {
            children: Vec::new(),
            payload: None,
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    pub(crate) fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub(crate) fn set_payload(&mut self, payload: P) {
        self.payload = Some(payload);
    }

    pub(crate) fn payload_or_insert_with(&mut self, default: impl FnOnce() -> P) -> &mut P {
        self.payload.get_or_insert_with(default)
    }

    pub(crate) fn children(&self) -> &[(K, Node<K, P>)] {
        &self.children
    }
}

impl<K, P> Default for Node<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, P> Node<K, P> {
    fn find(&self, key: &K) -> Result<usize, usize> {
        self.children.binary_search_by(|(k, _)| k.cmp(key))
    }

    /// The child whose label equals `key`, if any.
    pub(crate) fn child(&self, key: &K) -> Option<&Node<K, P>> {
        self.find(key).ok().map(|idx| &self.children[idx].1)
    }

    /// The child whose label equals `key`, creating an empty one if absent.
    pub(crate) fn child_or_insert(&mut self, key: K) -> &mut Node<K, P> {
        match self.find(&key) {
            Ok(idx) => &mut self.children[idx].1,
            Err(idx) => {
                self.children.insert(idx, (key, Node::new()));
                &mut self.children[idx].1
            }
        }
    }
}

/// Large tries built from one long chain of inserts (e.g. a single sorted
/// sequence inserted element-by-element via repeated `entry`-style descents)
/// are, structurally, a linked list of `Node`s. The derived recursive `Drop`
/// would blow the stack on such a trie; this iterative version flattens the
/// whole subtree into a work list first.
impl<K, P> Drop for Node<K, P> {
    fn drop(&mut self) {
        let mut stack = Vec::with_capacity(self.children.len());
        while let Some((_, child)) = self.children.pop() {
            stack.push(child);
            while let Some(mut current) = stack.pop() {
                while let Some((_, child)) = current.children.pop() {
                    stack.push(child);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn child_or_insert_creates_in_sorted_order() {
        let mut root: Node<i32, ()> = Node::new();
        root.child_or_insert(3);
        root.child_or_insert(1);
        root.child_or_insert(2);
        let keys: Vec<_> = root.children().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn terminal_tracks_payload() {
        let mut root: Node<i32, &'static str> = Node::new();
        assert!(!root.is_terminal());
        root.set_payload("a");
        assert!(root.is_terminal());
        assert_eq!(root.payload(), Some(&"a"));
    }

    #[test]
    fn drop_deep_chain_does_not_overflow() {
        let mut root: Node<i32, ()> = Node::new();
        let mut current = &mut root;
        for i in 0..200_000 {
            current = current.child_or_insert(i);
        }
        current.set_payload(());
        drop(root);
    }
}
