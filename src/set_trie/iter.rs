use crate::node::Node;
use std::collections::BTreeSet;

/// Full pre-order traversal of a `SetTrie` subtree, used both for
/// [`SetTrie::iter`](crate::SetTrie::iter) and internally by
/// [`Supersets`](super::superset::Supersets) once a query has been fully
/// matched (everything below that point qualifies unconditionally).
pub struct Preorder<'a, K> {
    stack: Vec<(Vec<K>, std::slice::Iter<'a, (K, Node<K, ()>)>)>,
    pending: Option<BTreeSet<K>>,
}

impl<'a, K: Ord + Clone> Preorder<'a, K> {
    pub(crate) fn new(node: &'a Node<K, ()>) -> Self {
        Self::with_prefix(node, Vec::new())
    }

    pub(crate) fn with_prefix(node: &'a Node<K, ()>, prefix: Vec<K>) -> Self {
        let pending = node.is_terminal().then(|| prefix.iter().cloned().collect());
        Self {
            stack: vec![(prefix, node.children().iter())],
            pending,
        }
    }
}

impl<'a, K: Ord + Clone> Iterator for Preorder<'a, K> {
    type Item = BTreeSet<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        loop {
            let descended = match self.stack.last_mut() {
                Some((prefix, iter)) => iter.next().map(|(k, child)| {
                    let mut child_prefix = prefix.clone();
                    child_prefix.push(k.clone());
                    (child_prefix, child)
                }),
                None => return None,
            };
            match descended {
                None => {
                    self.stack.pop();
                }
                Some((child_prefix, child)) => {
                    if child.is_terminal() {
                        self.pending = Some(child_prefix.iter().cloned().collect());
                    }
                    self.stack.push((child_prefix, child.children().iter()));
                    if let Some(item) = self.pending.take() {
                        return Some(item);
                    }
                }
            }
        }
    }
}
