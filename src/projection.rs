//! Projection modes shared by `SetTrieMap` and `SetTrieMultiMap`.

use std::collections::BTreeSet;

/// Selects what a `SetTrieMap`/`SetTrieMultiMap` enumeration emits.
///
/// The source this crate is modelled on accepts an open string (or `None`)
/// for this and treats anything other than `"keys"`/`"values"` as the
/// default pairs behavior. A closed enum makes that "unrecognized mode
/// falls back to pairs" clause unreachable rather than merely documented:
/// there is no value of `Mode` that isn't one of the three the spec names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Emit only the key set.
    Keys,
    /// Emit only the stored value.
    Values,
    /// Emit `(key set, value)` pairs. The default.
    #[default]
    Pairs,
}

/// One emission from a projected enumeration.
///
/// `SetTrieMultiMap` emits one `Projection` per stored value occurrence
/// (except in [`Mode::Keys`], where a key with several values still emits
/// once); `SetTrieMap` emits exactly one per stored key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection<'a, K, V> {
    /// The key set of a matching entry.
    Key(BTreeSet<K>),
    /// The value of a matching entry.
    Value(&'a V),
    /// A `(key set, value)` pair.
    Pair(BTreeSet<K>, &'a V),
}

impl<'a, K, V> Projection<'a, K, V> {
    /// Unwraps a [`Mode::Keys`] emission. Panics if this isn't a `Key`.
    pub(crate) fn into_key(self) -> BTreeSet<K> {
        match self {
            Projection::Key(k) => k,
            _ => unreachable!("Mode::Keys only ever produces Projection::Key"),
        }
    }

    /// Unwraps a [`Mode::Values`] emission. Panics if this isn't a `Value`.
    pub(crate) fn into_value(self) -> &'a V {
        match self {
            Projection::Value(v) => v,
            _ => unreachable!("Mode::Values only ever produces Projection::Value"),
        }
    }

    /// Unwraps a [`Mode::Pairs`] emission. Panics if this isn't a `Pair`.
    pub(crate) fn into_pair(self) -> (BTreeSet<K>, &'a V) {
        match self {
            Projection::Pair(k, v) => (k, v),
            _ => unreachable!("Mode::Pairs only ever produces Projection::Pair"),
        }
    }
}
