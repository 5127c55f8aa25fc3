use crate::node::Node;
use std::collections::BTreeSet;

/// Lazy enumeration of all stored sets that are subsets of a query set.
///
/// Built from the spec's "`Q` as a membership oracle" description: at every
/// node, descend into a child only if its label is a member of `Q`.
pub struct Subsets<'a, 'b, K> {
    stack: Vec<(Vec<K>, std::slice::Iter<'a, (K, Node<K, ()>)>)>,
    query: &'b BTreeSet<K>,
    pending: Option<BTreeSet<K>>,
}

impl<'a, 'b, K: Ord + Clone> Subsets<'a, 'b, K> {
    pub(crate) fn new(root: &'a Node<K, ()>, query: &'b BTreeSet<K>) -> Self {
        let pending = root.is_terminal().then(BTreeSet::new);
        Self {
            stack: vec![(Vec::new(), root.children().iter())],
            query,
            pending,
        }
    }
}

impl<'a, 'b, K: Ord + Clone> Iterator for Subsets<'a, 'b, K> {
    type Item = BTreeSet<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
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
