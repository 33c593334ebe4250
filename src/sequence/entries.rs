//! Keyed collections for [`map_indexed`](super::map_indexed).
//!
//! A [`WithEntries`] value exposes its contents as `(key, value)` pairs in
//! its natural iteration order. Lists use positions as keys; maps use their
//! own keys; [`pairs`] adapts any iterable of 2-tuples.

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::iter::Enumerate;
use std::{slice, vec};

use indexmap::IndexMap;

/// A collection that can be viewed as `(key, value)` entries.
pub trait WithEntries {
    /// The key of each entry.
    type Key;
    /// The value of each entry.
    type Value;
    /// The iterator over the entries.
    type Entries: Iterator<Item = (Self::Key, Self::Value)>;

    /// Consumes the collection and returns its entries.
    fn entries(self) -> Self::Entries;
}

impl<T> WithEntries for Vec<T> {
    type Key = usize;
    type Value = T;
    type Entries = Enumerate<vec::IntoIter<T>>;

    fn entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }
}

impl<'a, T> WithEntries for &'a [T] {
    type Key = usize;
    type Value = &'a T;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    fn entries(self) -> Self::Entries {
        self.iter().enumerate()
    }
}

impl<K, V> WithEntries for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries = btree_map::IntoIter<K, V>;

    fn entries(self) -> Self::Entries {
        self.into_iter()
    }
}

impl<'a, K, V> WithEntries for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Value = &'a V;
    type Entries = btree_map::Iter<'a, K, V>;

    fn entries(self) -> Self::Entries {
        self.iter()
    }
}

/// Entries follow the map's unspecified iteration order.
impl<K, V, H> WithEntries for HashMap<K, V, H> {
    type Key = K;
    type Value = V;
    type Entries = hash_map::IntoIter<K, V>;

    fn entries(self) -> Self::Entries {
        self.into_iter()
    }
}

impl<K, V, H> WithEntries for IndexMap<K, V, H> {
    type Key = K;
    type Value = V;
    type Entries = indexmap::map::IntoIter<K, V>;

    fn entries(self) -> Self::Entries {
        self.into_iter()
    }
}

/// An iterable of 2-tuples viewed as entries. Built with [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<I>(I);

/// Treats each `(key, value)` tuple produced by `source` as an entry.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, map_indexed, pairs};
///
/// let labelled = map_indexed(pairs(vec![("a", 1), ("b", 2)]), |key, value| format!("{key}{value}"));
/// assert_eq!(as_array(labelled), vec!["a1", "b2"]);
/// ```
pub fn pairs<S, K, V>(source: S) -> Pairs<S::IntoIter>
where
    S: IntoIterator<Item = (K, V)>,
{
    Pairs(source.into_iter())
}

impl<I, K, V> WithEntries for Pairs<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
    type Entries = I;

    fn entries(self) -> Self::Entries {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn lists_are_keyed_by_position() {
        let entries: Vec<_> = vec!['x', 'y'].entries().collect();
        assert_eq!(entries, vec![(0, 'x'), (1, 'y')]);

        let borrowed: &[u8] = &[7, 8];
        assert_eq!(borrowed.entries().last(), Some((1, &8)));
    }

    #[rstest]
    fn ordered_maps_keep_key_order() {
        let map = BTreeMap::from([(2, "two"), (1, "one")]);
        let keys: Vec<_> = (&map).entries().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[rstest]
    fn index_maps_keep_insertion_order() {
        let mut map: IndexMap<&str, u8> = IndexMap::new();
        map.insert("z", 1);
        map.insert("a", 2);
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries, vec![("z", 1), ("a", 2)]);
    }
}
