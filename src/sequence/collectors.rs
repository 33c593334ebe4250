//! Terminal consumers that realize a sequence into a collection or a count.
//!
//! Keyed results are [`IndexMap`]s, so keys come out in the order they were
//! first seen. The hasher is [`GroupHasher`], selected by cargo feature.

use std::hash::Hash;

use indexmap::IndexMap;
use itertricks_derive::pointfree;

/// The hasher used by [`as_counter`] and the `group_by` family.
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// The hasher used by [`as_counter`] and the `group_by` family.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// The hasher used by [`as_counter`] and the `group_by` family.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::hash::RandomState;

/// Occurrence counts in first-seen order, as returned by [`as_counter`].
pub type Counter<T> = IndexMap<T, usize, GroupHasher>;

/// Groups in first-occurrence key order, as returned by [`group_by`].
pub type Groups<K, V> = IndexMap<K, Vec<V>, GroupHasher>;

/// Realizes `source` into a vector, preserving order.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, range};
///
/// assert_eq!(range(4_u8).map(as_array), Ok(vec![0, 1, 2, 3, 4]));
/// ```
pub fn as_array<S: IntoIterator>(source: S) -> Vec<S::Item> {
    source.into_iter().collect()
}

/// Counts the elements that satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::as_count;
///
/// assert_eq!(as_count("hello".chars(), |letter| *letter == 'l'), 2);
/// ```
#[pointfree]
pub fn as_count<S, P>(source: S, mut predicate: P) -> usize
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().filter(|item| predicate(item)).count()
}

/// Counts occurrences of each distinct element.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::as_counter;
///
/// let counts = as_counter("banana".chars());
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![('b', 1), ('a', 3), ('n', 2)]);
/// ```
pub fn as_counter<S>(source: S) -> Counter<S::Item>
where
    S: IntoIterator,
    S::Item: Hash + Eq,
{
    let mut counter = Counter::default();
    for item in source {
        *counter.entry(item).or_insert(0) += 1;
    }
    counter
}

/// Groups elements by the key `key_selector` computes for them.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::group_by;
///
/// let by_parity = group_by(vec![3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(by_parity[&false], vec![3, 5]);
/// assert_eq!(by_parity.keys().copied().collect::<Vec<_>>(), vec![false, true]);
/// ```
#[pointfree]
pub fn group_by<S, F, K>(source: S, key_selector: F) -> Groups<K, S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Hash + Eq,
{
    group_by_map(source, key_selector, |item| item)
}

/// Groups elements by key, storing `transform(element)` in each group.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::group_by_map;
///
/// let initials = group_by_map(vec!["ant", "bee", "asp"], |word| word.len(), |word| &word[..1]);
/// assert_eq!(initials[&3], vec!["a", "b", "a"]);
/// ```
#[pointfree]
pub fn group_by_map<S, F, T, K, V>(source: S, mut key_selector: F, mut transform: T) -> Groups<K, V>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    T: FnMut(S::Item) -> V,
    K: Hash + Eq,
{
    let mut groups = Groups::default();
    for item in source {
        let key = key_selector(&item);
        groups.entry(key).or_insert_with(Vec::new).push(transform(item));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::gt;
    use crate::sequence::{count, take};
    use rstest::rstest;

    #[rstest]
    fn as_array_realizes_in_order() {
        assert_eq!(as_array(take(count::<i8>(), 3)), vec![0, 1, 2]);
        assert_eq!(as_array(Vec::<i8>::new()), Vec::<i8>::new());
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1, 5, 9], 2)]
    fn as_count_counts_matches(#[case] source: Vec<i32>, #[case] expected: usize) {
        assert_eq!(as_count(source.clone(), gt(4)), expected);
        assert_eq!(as_count_with(gt(4))(source), expected);
    }

    #[rstest]
    fn as_counter_keeps_first_seen_order() {
        let counter = as_counter(vec!["b", "a", "b", "c", "a", "b"]);
        let entries: Vec<_> = counter.into_iter().collect();
        assert_eq!(entries, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[rstest]
    fn group_by_keeps_source_order_within_groups() {
        let groups = group_by(vec![10, 21, 12, 33, 14], |value| value % 10 > 1);
        let entries: Vec<_> = groups.into_iter().collect();
        assert_eq!(entries, vec![(false, vec![10, 21]), (true, vec![12, 33, 14])]);
    }

    #[rstest]
    fn group_by_with_matches_direct_call() {
        let by_length = group_by_with(|word: &&str| word.len());
        let words = vec!["a", "bb", "c"];
        assert_eq!(by_length(words.clone()), group_by(words, |word| word.len()));
    }

    #[rstest]
    fn group_by_map_transforms_members() {
        let lengths = group_by_map_with(|word: &String| word.starts_with('x'), |word: String| word.len());
        let groups = lengths(vec![String::from("xy"), String::from("abc"), String::from("x")]);
        assert_eq!(groups[&true], vec![2, 1]);
        assert_eq!(groups[&false], vec![3]);
    }

    #[rstest]
    fn empty_source_gives_empty_groups() {
        assert!(group_by(Vec::<u8>::new(), |value| *value).is_empty());
        assert!(as_counter(Vec::<u8>::new()).is_empty());
    }
}
