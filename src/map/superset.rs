use super::iter::Preorder;
use crate::node::Node;
use crate::projection::{Mode, Projection};

struct Frame<'a, K, V> {
    iter: std::slice::Iter<'a, (K, Node<K, V>)>,
    start: usize,
    prefix: Vec<K>,
}

/// Lazy, projected enumeration of all entries whose key set is a superset
/// of a query set. See `set_trie::superset::Supersets` for the pruning
/// rule this implements.
pub struct Supersets<'a, K, V> {
    query: Vec<K>,
    mode: Mode,
    stack: Vec<Frame<'a, K, V>>,
    active: Option<Preorder<'a, K, V>>,
}

impl<'a, K: Ord + Clone, V> Supersets<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>, query: Vec<K>, mode: Mode) -> Self {
        if query.is_empty() {
            return Self {
                query,
                mode,
                stack: Vec::new(),
                active: Some(Preorder::new(root, mode)),
            };
        }
        let stack = vec![Frame {
            iter: root.children().iter(),
            start: 0,
            prefix: Vec::new(),
        }];
        Self {
            query,
            mode,
            stack,
            active: None,
        }
    }
}

impl<'a, K: Ord + Clone, V> Iterator for Supersets<'a, K, V> {
    type Item = Projection<'a, K, V>;

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
                        self.stack.pop();
                    } else {
                        let mut prefix = frame.prefix.clone();
                        prefix.push(k.clone());
                        if k == cur {
                            let new_start = frame.start + 1;
                            if new_start == query.len() {
                                self.active = Some(Preorder::with_prefix(child, prefix, self.mode));
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
