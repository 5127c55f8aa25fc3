use crate::node::Node;
use crate::projection::{Mode, Projection};
use std::collections::{BTreeSet, VecDeque};

/// Full pre-order traversal of a `SetTrieMultiMap` subtree, projected
/// according to `mode`. Unlike the single-value map, a terminal with `n`
/// stored values produces `n` emissions in [`Mode::Values`]/[`Mode::Pairs`]
/// (one per occurrence, in insertion order) but exactly one in
/// [`Mode::Keys`].
pub struct Preorder<'a, K, V> {
    mode: Mode,
    stack: Vec<(Vec<K>, std::slice::Iter<'a, (K, Node<K, Vec<V>>)>)>,
    pending: VecDeque<Projection<'a, K, V>>,
}

impl<'a, K: Ord + Clone, V> Preorder<'a, K, V> {
    pub(crate) fn new(node: &'a Node<K, Vec<V>>, mode: Mode) -> Self {
        Self::with_prefix(node, Vec::new(), mode)
    }

    pub(crate) fn with_prefix(node: &'a Node<K, Vec<V>>, prefix: Vec<K>, mode: Mode) -> Self {
        let mut pending = VecDeque::new();
        if let Some(values) = node.payload() {
            emit_into(&prefix, values, mode, &mut pending);
        }
        Self {
            mode,
            stack: vec![(prefix, node.children().iter())],
            pending,
        }
    }
}

pub(super) fn emit_into<'a, K: Ord + Clone, V>(
    path: &[K],
    values: &'a [V],
    mode: Mode,
    out: &mut VecDeque<Projection<'a, K, V>>,
) {
    match mode {
        Mode::Keys => out.push_back(Projection::Key(path.iter().cloned().collect())),
        Mode::Values => out.extend(values.iter().map(Projection::Value)),
        Mode::Pairs => {
            let key: BTreeSet<K> = path.iter().cloned().collect();
            out.extend(values.iter().map(move |v| Projection::Pair(key.clone(), v)));
        }
    }
}

impl<'a, K: Ord + Clone, V> Iterator for Preorder<'a, K, V> {
    type Item = Projection<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.pop_front() {
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
                    if let Some(values) = child.payload() {
                        emit_into(&child_prefix, values, self.mode, &mut self.pending);
                    }
                    self.stack.push((child_prefix, child.children().iter()));
                    if let Some(item) = self.pending.pop_front() {
                        return Some(item);
                    }
                }
            }
        }
    }
}
