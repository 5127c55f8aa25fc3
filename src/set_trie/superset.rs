use super::iter::Preorder;
use crate::node::Node;
use std::collections::BTreeSet;

struct Frame<'a, K> {
    iter: std::slice::Iter<'a, (K, Node<K, ()>)>,
    /// Index into the owning `Supersets::query`: unmatched elements start here.
    start: usize,
    prefix: Vec<K>,
}

/// Lazy enumeration of all stored sets that are supersets of a query set.
///
/// Implements the pruned descent from spec.md §4.2: a child labeled below
/// the next unmatched query element may still reach it deeper in the tree,
/// so it is always explored; a child labeled above it cannot, so the sorted
/// sibling scan stops there. The moment every query element has been
/// matched along a path, everything in that subtree qualifies, so the rest
/// of the work is handed off to an unrestricted [`Preorder`].
pub struct Supersets<'a, K> {
    query: Vec<K>,
    stack: Vec<Frame<'a, K>>,
    active: Option<Preorder<'a, K>>,
}

impl<'a, K: Ord + Clone> Supersets<'a, K> {
    pub(crate) fn new(root: &'a Node<K, ()>, query: Vec<K>) -> Self {
        if query.is_empty() {
            return Self {
                query,
                stack: Vec::new(),
                active: Some(Preorder::new(root)),
            };
        }
        let stack = vec![Frame {
            iter: root.children().iter(),
            start: 0,
            prefix: Vec::new(),
        }];
        Self {
            query,
            stack,
            active: None,
        }
    }
}

impl<'a, K: Ord + Clone> Iterator for Supersets<'a, K> {
    type Item = BTreeSet<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(active) = &mut self.active {
                match active.next() {
                    Some(item) => return Some(item),
                    None => self.active = None,
                }
            }

            let query = &self.query;
            let frame = match self.stack.last_mut() {
                Some(frame) => frame,
                None => return None,
            };
            let cur = &query[frame.start];

            match frame.iter.next() {
                None => {
                    self.stack.pop();
                }
                Some((k, child)) => {
                    if k > cur {
                        // sorted order: no later sibling can help either.
                        self.stack.pop();
                    } else {
                        let mut prefix = frame.prefix.clone();
                        prefix.push(k.clone());
                        if k == cur {
                            let new_start = frame.start + 1;
                            if new_start == query.len() {
                                self.active = Some(Preorder::with_prefix(child, prefix));
                            } else {
                                self.stack.push(Frame {
                                    iter: child.children().iter(),
                                    start: new_start,
                                    prefix,
                                });
                            }
                        } else {
                            let start = frame.start;
                            self.stack.push(Frame {
                                iter: child.children().iter(),
                                start,
                                prefix,
                            });
                        }
                    }
                }
            }
        }
    }
}
