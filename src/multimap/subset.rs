use super::iter::emit_into;
use crate::node::Node;
use crate::projection::{Mode, Projection};
use std::collections::{BTreeSet, VecDeque};

/// Lazy, projected enumeration of all entries whose key set is a subset of
/// a query set.
pub struct Subsets<'a, 'b, K, V> {
    mode: Mode,
    stack: Vec<(Vec<K>, std::slice::Iter<'a, (K, Node<K, Vec<V>>)>)>,
    query: &'b BTreeSet<K>,
    pending: VecDeque<Projection<'a, K, V>>,
}

impl<'a, 'b, K: Ord + Clone, V> Subsets<'a, 'b, K, V> {
    pub(crate) fn new(root: &'a Node<K, Vec<V>>, query: &'b BTreeSet<K>, mode: Mode) -> Self {
        let mut pending = VecDeque::new();
        if let Some(values) = root.payload() {
            emit_into(&[], values, mode, &mut pending);
        }
        Self {
            mode,
            stack: vec![(Vec::new(), root.children().iter())],
            query,
            pending,
        }
    }
}

impl<'a, 'b, K: Ord + Clone, V> Iterator for Subsets<'a, 'b, K, V> {
    type Item = Projection<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.pop_front() {
            return Some(item);
        }
        loop {
            let descended = match self.stack.last_mut() {
                Some((prefix, iter)) => loop {
                    match iter.next() {
                        None => break None,
                        Some((k, child)) => {
                            if self.query.contains(k) {
                                let mut child_prefix = prefix.clone();
                                child_prefix.push(k.clone());
                                break Some((child_prefix, child));
                            }
                        }
                    }
                },
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
