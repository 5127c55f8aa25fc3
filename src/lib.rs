#![warn(clippy::all, clippy::cargo, missing_docs)]
//! Fast subset, superset and exact-membership queries over sets, backed by
//! a trie whose edge labels are the elements of a totally ordered universe.
//!
//! Three containers share this shape:
//!
//! - [`SetTrie`] stores sets themselves (pure membership).
//! - [`SetTrieMap`] associates a single value with each stored set.
//! - [`SetTrieMultiMap`] associates an ordered list of values with each
//!   stored set.
//!
//! ```rust
//! use settrie::SetTrie;
//! use std::collections::BTreeSet;
//!
//! let mut t = SetTrie::new();
//! t.add([1, 3]);
//! t.add([1, 3, 5]);
//! t.add([2, 4]);
//!
//! assert!(t.contains([1, 3]));
//! assert!(t.hassuperset([1]));
//! let found: Vec<BTreeSet<i32>> = t.supersets([1]).collect();
//! assert_eq!(
//!     found,
//!     vec![[1, 3].into_iter().collect(), [1, 3, 5].into_iter().collect()]
//! );
//! ```
//!
//! # Restrictions
//!
//! Keys are required to be [`Ord`]; unlike a raw trie, callers need not
//! presort a key set themselves, as every insertion and query collects its
//! input into a [`std::collections::BTreeSet`] first.
//!
//! # Performance
//!
//! Subset and superset enumeration are lazily evaluated external iterators.
//! Superset queries do more work per level than subset queries (a bounded
//! scan of siblings rather than a single membership check), so prefer
//! structuring a problem around subset queries where there is a choice.

mod node;
mod projection;

pub mod map;
pub mod multimap;
pub mod set_trie;

pub use map::SetTrieMap;
pub use multimap::SetTrieMultiMap;
pub use projection::{Mode, Projection};
pub use set_trie::SetTrie;
