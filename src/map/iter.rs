use crate::node::Node;
use crate::projection::{Mode, Projection};
use std::collections::BTreeSet;

/// Full pre-order traversal of a `SetTrieMap` subtree, projected according
/// to `mode`. Also used internally by `Supersets` once a query has been
/// fully matched.
pub struct Preorder<'a, K, V> {
    mode: Mode,
    stack: Vec<(Vec<K>, std::slice::Iter<'a, (K, Node<K, V>)>)>,
    pending: Option<Projection<'a, K, V>>,
}

impl<'a, K: Ord + Clone, V> Preorder<'a, K, V> {
    pub(crate) fn new(node: &'a Node<K, V>, mode: Mode) -> Self {
        Self::with_prefix(node, Vec::new(), mode)
    }

    pub(crate) fn with_prefix(node: &'a Node<K, V>, prefix: Vec<K>, mode: Mode) -> Self {
        let pending = node.payload().map(|v| emit(&prefix, v, mode));
        Self {
            mode,
            stack: vec![(prefix, node.children().iter())],
            pending,
        }
    }
}

pub(super) fn emit<'a, K: Ord + Clone, V>(
    path: &[K],
    value: &'a V,
    mode: Mode,
) -> Projection<'a, K, V> {
    match mode {
        Mode::Keys => Projection::Key(path.iter().cloned().collect()),
        Mode::Values => Projection::Value(value),
        Mode::Pairs => Projection::Pair(path.iter().cloned().collect::<BTreeSet<K>>(), value),
    }
}

impl<'a, K: Ord + Clone, V> Iterator for Preorder<'a, K, V> {
    type Item = Projection<'a, K, V>;

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
                    if let Some(v) = child.payload() {
                        self.pending = Some(emit(&child_prefix, v, self.mode));
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
