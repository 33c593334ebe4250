//! Element-wise transformations and positional pairing.
//!
//! # Laws
//!
//! For finite `a` and `b`:
//!
//! ```text
//! zip(a, b).count() == min(a.len(), b.len())
//! unzip(zip(a, b)) == (a, b)            when a.len() == b.len()
//! ```

use std::iter::{FilterMap, Fuse, FusedIterator, Map};

use itertricks_derive::pointfree;

use super::entries::WithEntries;

/// Applies `mapper` to every element.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, map, map_with};
///
/// assert_eq!(as_array(map(vec![1, 2], |value| value * 3)), vec![3, 6]);
///
/// let lengths = map_with(|word: &str| word.len());
/// assert_eq!(as_array(lengths(vec!["ab", "c"])), vec![2, 1]);
/// ```
#[pointfree]
pub fn map<S, F, U>(source: S, mapper: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    source.into_iter().map(mapper)
}

/// Applies `mapper` to every element, skipping the `None` results.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, map_not_null};
///
/// let parsed = map_not_null(vec!["1", "x", "3"], |text| text.parse::<u8>().ok());
/// assert_eq!(as_array(parsed), vec![1, 3]);
/// ```
#[pointfree]
pub fn map_not_null<S, F, U>(source: S, mapper: F) -> FilterMap<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Option<U>,
{
    source.into_iter().filter_map(mapper)
}

/// The sequence returned by [`map_indexed`].
#[derive(Debug, Clone)]
pub struct MapIndexed<E, F> {
    entries: Fuse<E>,
    mapper: F,
}

/// Applies `mapper(key, value)` to every entry of a keyed collection.
///
/// Lists are keyed by position. Output follows the collection's iteration
/// order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use itertricks::sequence::{as_array, map_indexed};
///
/// let stock = BTreeMap::from([("apples", 3), ("pears", 0)]);
/// let lines = map_indexed(stock, |name, amount| format!("{name}: {amount}"));
/// assert_eq!(as_array(lines), vec!["apples: 3", "pears: 0"]);
///
/// let positions = map_indexed(vec!['a', 'b'], |index, letter| (letter, index));
/// assert_eq!(as_array(positions), vec![('a', 0), ('b', 1)]);
/// ```
#[pointfree]
pub fn map_indexed<S, F, U>(source: S, mapper: F) -> MapIndexed<S::Entries, F>
where
    S: WithEntries,
    F: FnMut(S::Key, S::Value) -> U,
{
    MapIndexed {
        entries: source.entries().fuse(),
        mapper,
    }
}

impl<E, F, K, V, U> Iterator for MapIndexed<E, F>
where
    E: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;
        Some((self.mapper)(key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E, F, K, V, U> FusedIterator for MapIndexed<E, F>
where
    E: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> U,
{
}

/// The sequence returned by [`map_indexed_not_null`].
#[derive(Debug, Clone)]
pub struct MapIndexedNotNull<E, F> {
    entries: Fuse<E>,
    mapper: F,
}

/// Applies `mapper(key, value)` to every entry, skipping the `None` results.
#[pointfree]
pub fn map_indexed_not_null<S, F, U>(source: S, mapper: F) -> MapIndexedNotNull<S::Entries, F>
where
    S: WithEntries,
    F: FnMut(S::Key, S::Value) -> Option<U>,
{
    MapIndexedNotNull {
        entries: source.entries().fuse(),
        mapper,
    }
}

impl<E, F, K, V, U> Iterator for MapIndexedNotNull<E, F>
where
    E: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let mapper = &mut self.mapper;
        self.entries.find_map(|(key, value)| mapper(key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl<E, F, K, V, U> FusedIterator for MapIndexedNotNull<E, F>
where
    E: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> Option<U>,
{
}

/// The sequence returned by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<L, R> {
    left: L,
    right: R,
    done: bool,
}

impl<L: Iterator, R: Iterator> Zip<L, R> {
    fn pull(&mut self) -> Option<(L::Item, R::Item)> {
        if self.done {
            return None;
        }
        let pair = self
            .left
            .next()
            .and_then(|left| self.right.next().map(|right| (left, right)));
        self.done = pair.is_none();
        pair
    }

    fn remaining(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (bound, None) | (None, bound) => bound,
        };
        (left_lower.min(right_lower), upper)
    }
}

/// Pairs elements positionally, stopping when either side runs out.
///
/// A side is never pulled again after either side is exhausted, and no
/// partial pair is produced.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, zip};
///
/// let pairs = zip(vec![1, 2, 3], vec![15, 16, 17, 18]);
/// assert_eq!(as_array(pairs), vec![(1, 15), (2, 16), (3, 17)]);
/// ```
#[pointfree]
pub fn zip<L, R>(left: L, right: R) -> Zip<L::IntoIter, R::IntoIter>
where
    L: IntoIterator,
    R: IntoIterator,
{
    Zip {
        left: left.into_iter(),
        right: right.into_iter(),
        done: false,
    }
}

impl<L: Iterator, R: Iterator> Iterator for Zip<L, R> {
    type Item = (L::Item, R::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining()
    }
}

impl<L: Iterator, R: Iterator> FusedIterator for Zip<L, R> {}

/// The sequence returned by [`zip_map`].
#[derive(Debug, Clone)]
pub struct ZipMap<L, R, F> {
    pairs: Zip<L, R>,
    mapper: F,
}

/// Combines elements positionally with `mapper`, stopping when either side runs out.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, zip_map_with};
///
/// let add_offsets = zip_map_with(vec![10, 20], |value: i32, offset: i32| value + offset);
/// assert_eq!(as_array(add_offsets(vec![1, 2, 3])), vec![11, 22]);
/// ```
#[pointfree]
pub fn zip_map<L, R, F, U>(left: L, right: R, mapper: F) -> ZipMap<L::IntoIter, R::IntoIter, F>
where
    L: IntoIterator,
    R: IntoIterator,
    F: FnMut(L::Item, R::Item) -> U,
{
    ZipMap {
        pairs: zip(left, right),
        mapper,
    }
}

impl<L, R, F, U> Iterator for ZipMap<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (left, right) = self.pairs.pull()?;
        Some((self.mapper)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.remaining()
    }
}

impl<L, R, F, U> FusedIterator for ZipMap<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> U,
{
}

/// Splits a sequence of pairs into two collections, preserving order.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::unzip;
///
/// assert_eq!(unzip(vec![(1, 'a'), (2, 'b')]), (vec![1, 2], vec!['a', 'b']));
/// assert_eq!(unzip(Vec::<(u8, u8)>::new()), (vec![], vec![]));
/// ```
pub fn unzip<S, A, B>(source: S) -> (Vec<A>, Vec<B>)
where
    S: IntoIterator<Item = (A, B)>,
{
    source.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::add;
    use crate::sequence::{as_array, count, pairs, repeat};
    use indexmap::IndexMap;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn map_with_matches_direct_call() {
        let increment = map_with(add(1));
        assert_eq!(as_array(increment(vec![1, 2])), as_array(map(vec![1, 2], add(1))));
    }

    #[rstest]
    fn map_not_null_skips_none() {
        let halves = map_not_null(count::<u8>(), |value| (value % 2 == 0).then_some(value / 2));
        assert_eq!(as_array(halves.take(3)), vec![0, 1, 2]);
    }

    #[rstest]
    fn map_indexed_over_pairs() {
        let source = pairs(vec![("x", 1), ("y", 2)]);
        let joined = map_indexed(source, |key, value| format!("{key}={value}"));
        assert_eq!(as_array(joined), vec!["x=1", "y=2"]);
    }

    #[rstest]
    fn map_indexed_over_index_map_keeps_insertion_order() {
        let mut source: IndexMap<char, u32> = IndexMap::new();
        source.insert('b', 2);
        source.insert('a', 1);
        let doubled = map_indexed_with(|key: char, value: u32| (key, value * 2));
        assert_eq!(as_array(doubled(source)), vec![('b', 4), ('a', 2)]);
    }

    #[rstest]
    fn map_indexed_not_null_filters_entries() {
        let words = vec!["zero", "one", "two", "three"];
        let odd_words = map_indexed_not_null(words, |index, word| (index % 2 == 1).then_some(word));
        assert_eq!(as_array(odd_words), vec!["one", "three"]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![15, 16, 17, 18], vec![(1, 15), (2, 16), (3, 17)])]
    #[case(vec![1, 2, 3, 4], vec![9], vec![(1, 9)])]
    #[case(vec![], vec![1], vec![])]
    fn zip_stops_at_shorter_side(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        assert_eq!(as_array(zip(left.clone(), right.clone())), expected);
        assert_eq!(as_array(zip_with(right)(left)), expected);
    }

    #[rstest]
    fn zip_with_infinite_side() {
        let labelled = zip(vec!['a', 'b'], count::<usize>());
        assert_eq!(as_array(labelled), vec![('a', 0), ('b', 1)]);
        assert_eq!(zip(repeat(1), vec![2, 3]).size_hint(), (2, Some(2)));
    }

    #[rstest]
    fn zip_never_pulls_after_exhaustion() {
        let pulled = Cell::new(0);
        let right = count::<u8>().inspect(|_| pulled.set(pulled.get() + 1));
        let mut zipped = zip(Vec::<u8>::new(), right);

        assert_eq!(zipped.next(), None);
        assert_eq!(zipped.next(), None);
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn zip_map_combines_positionally() {
        let sums = zip_map(vec![1, 2, 3], vec![10, 20], |left, right| left + right);
        assert_eq!(as_array(sums), vec![11, 22]);
    }

    #[rstest]
    fn unzip_splits_pairs() {
        let (numbers, letters) = unzip(zip(1..=3, "abc".chars()));
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(letters, vec!['a', 'b', 'c']);
    }
}
