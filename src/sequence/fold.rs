//! Folds, reductions, and scans.
//!
//! | operator             | seed                | empty source     | output           |
//! |----------------------|---------------------|------------------|------------------|
//! | [`fold`]             | explicit initial    | the initial      | final value      |
//! | [`fold_monoid`]      | the monoid identity | the identity     | final value      |
//! | [`reduce`]           | the first element   | `None`           | final value      |
//! | [`scan`]             | the first element   | nothing          | every value      |
//! | [`scan_fold`]        | explicit initial    | just the initial | initial + values |
//!
//! The `_right` variants realize the whole source first and then work from
//! its last element towards its first, so they must not be given infinite
//! sequences. The combining function always receives the accumulator first.
//!
//! # Laws
//!
//! ```text
//! fold(s, init, f)          == s.into_iter().fold(init, f)
//! fold_right(s, init, f)    == fold(reversed(s), init, f)
//! reduce(s, f)              == scan(s, f).last()
//! scan_fold(s, init, f)     == [init] ++ scan over s seeded with init
//! ```
//!
//! # Examples
//!
//! ```rust
//! use itertricks::sequence::{as_array, fold_monoid, reduce_right, scan};
//! use itertricks::typeclass::MonoidOf;
//!
//! let sum = MonoidOf::new(0, |left: i32, right: i32| left + right);
//! assert_eq!(fold_monoid(vec![1, 2, 3, 4, 5], sum), Ok(15));
//!
//! let concat = |left: String, right: String| left + &right;
//! let letters = || "abcd".chars().map(String::from);
//! assert_eq!(as_array(scan(letters(), concat)), vec!["a", "ab", "abc", "abcd"]);
//! assert_eq!(reduce_right(letters(), concat), Some(String::from("dcba")));
//! ```

use std::iter::{Fuse, FusedIterator, Rev};
use std::vec;

use itertricks_derive::pointfree;

use crate::curry::curry2;
use crate::error::SequenceError;
use crate::typeclass::{IntoMonoid, MonoidInstance, SemigroupInstance};

fn realize_reversed<S: IntoIterator>(source: S) -> Rev<vec::IntoIter<S::Item>> {
    source.into_iter().collect::<Vec<_>>().into_iter().rev()
}

fn concat_all<I, M>(source: I, monoid: &M) -> I::Item
where
    I: Iterator,
    M: MonoidInstance<I::Item>,
{
    source.fold(monoid.empty(), |accumulator, item| monoid.concat(accumulator, item))
}

// =============================================================================
// fold
// =============================================================================

/// Accumulates from `initial`, combining each element in order.
#[pointfree]
pub fn fold<S, A, F>(source: S, initial: A, combine: F) -> A
where
    S: IntoIterator,
    F: FnMut(A, S::Item) -> A,
{
    source.into_iter().fold(initial, combine)
}

/// Accumulates with a monoid: its identity seeds the fold and its `concat` combines.
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete. The check
/// happens before `source` is touched.
///
/// # Examples
///
/// ```rust
/// use itertricks::error::{MonoidPart, SequenceError};
/// use itertricks::sequence::fold_monoid;
/// use itertricks::typeclass::{Canonical, MonoidParts, Sum};
///
/// assert_eq!(fold_monoid(vec![Sum::new(2), Sum::new(3)], Canonical::new()), Ok(Sum::new(5)));
///
/// let missing_concat = MonoidParts::<i32, fn(i32, i32) -> i32>::new(Some(0), None);
/// assert_eq!(
///     fold_monoid(vec![1, 2], missing_concat),
///     Err(SequenceError::NotAMonoid { missing: MonoidPart::Concat })
/// );
/// ```
pub fn fold_monoid<S, M>(source: S, monoid: M) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    M: IntoMonoid<S::Item>,
{
    let monoid = monoid.into_monoid()?;
    Ok(concat_all(source.into_iter(), &monoid))
}

/// Pointfree form of [`fold_monoid`].
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete, before
/// the function is built.
pub fn fold_monoid_with<S, M>(monoid: M) -> Result<impl Fn(S) -> S::Item + Clone, SequenceError>
where
    S: IntoIterator,
    M: IntoMonoid<S::Item>,
    M::Instance: Clone,
{
    let monoid = monoid.into_monoid()?;
    Ok(curry2(
        |source: S, monoid: M::Instance| concat_all(source.into_iter(), &monoid),
        monoid,
    ))
}

/// Accumulates from `initial`, combining elements from last to first.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::fold_right;
///
/// let digits = fold_right(vec![1, 2, 3], String::new(), |text, digit| text + &digit.to_string());
/// assert_eq!(digits, "321");
/// ```
#[pointfree]
pub fn fold_right<S, A, F>(source: S, initial: A, combine: F) -> A
where
    S: IntoIterator,
    F: FnMut(A, S::Item) -> A,
{
    realize_reversed(source).fold(initial, combine)
}

/// Accumulates with a monoid, combining elements from last to first.
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete.
pub fn fold_right_monoid<S, M>(source: S, monoid: M) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    M: IntoMonoid<S::Item>,
{
    let monoid = monoid.into_monoid()?;
    Ok(concat_all(realize_reversed(source), &monoid))
}

/// Pointfree form of [`fold_right_monoid`].
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete, before
/// the function is built.
pub fn fold_right_monoid_with<S, M>(
    monoid: M,
) -> Result<impl Fn(S) -> S::Item + Clone, SequenceError>
where
    S: IntoIterator,
    M: IntoMonoid<S::Item>,
    M::Instance: Clone,
{
    let monoid = monoid.into_monoid()?;
    Ok(curry2(
        |source: S, monoid: M::Instance| concat_all(realize_reversed(source), &monoid),
        monoid,
    ))
}

// =============================================================================
// reduce
// =============================================================================

/// Combines all elements, seeding with the first one.
///
/// Returns `None` for an empty source.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::reduce;
///
/// assert_eq!(reduce(vec![3, 1, 2], i32::max), Some(3));
/// assert_eq!(reduce(Vec::<i32>::new(), i32::max), None);
/// ```
#[pointfree]
pub fn reduce<S, F>(source: S, combine: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    source.into_iter().reduce(combine)
}

/// Combines all elements from last to first, seeding with the last one.
///
/// Returns `None` for an empty source.
#[pointfree]
pub fn reduce_right<S, F>(source: S, combine: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    realize_reversed(source).reduce(combine)
}

/// Combines all elements with a semigroup, seeding with the first one.
///
/// Returns `None` for an empty source.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::reduce_semigroup;
/// use itertricks::typeclass::{Canonical, Max};
///
/// let largest = reduce_semigroup(vec![Max::new(4), Max::new(9), Max::new(2)], Canonical::new());
/// assert_eq!(largest, Some(Max::new(9)));
/// ```
#[pointfree]
pub fn reduce_semigroup<S, G>(source: S, semigroup: G) -> Option<S::Item>
where
    S: IntoIterator,
    G: SemigroupInstance<S::Item>,
{
    source
        .into_iter()
        .reduce(|accumulator, item| semigroup.concat(accumulator, item))
}

// =============================================================================
// scan
// =============================================================================

/// The sequence returned by [`scan`] and [`scan_right`].
#[derive(Debug, Clone)]
pub struct Scan<I: Iterator, F> {
    source: Fuse<I>,
    accumulator: Option<I::Item>,
    combine: F,
}

/// Yields every intermediate value of [`reduce`].
#[pointfree]
pub fn scan<S, F>(source: S, combine: F) -> Scan<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Scan {
        source: source.into_iter().fuse(),
        accumulator: None,
        combine,
    }
}

/// Yields every intermediate value of [`reduce_right`].
///
/// The source is realized when this is called.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, scan_right};
///
/// assert_eq!(as_array(scan_right(vec![1, 2, 3], |total, value| total + value)), vec![3, 5, 6]);
/// ```
#[pointfree]
pub fn scan_right<S, F>(source: S, combine: F) -> Scan<Rev<vec::IntoIter<S::Item>>, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    scan(realize_reversed(source), combine)
}

impl<I, F> Iterator for Scan<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        let accumulated = match self.accumulator.take() {
            None => item,
            Some(accumulator) => (self.combine)(accumulator, item),
        };
        self.accumulator = Some(accumulated.clone());
        Some(accumulated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> FusedIterator for Scan<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

/// The sequence returned by [`scan_fold`] and [`scan_fold_right`].
#[derive(Debug, Clone)]
pub struct ScanFold<I, A, F> {
    source: Fuse<I>,
    accumulator: Option<A>,
    emitted_initial: bool,
    combine: F,
}

/// Yields `initial`, then every intermediate value of [`fold`].
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, scan_fold};
///
/// assert_eq!(as_array(scan_fold(vec![1, 2, 3], 10, |total, value| total + value)), vec![10, 11, 13, 16]);
/// assert_eq!(as_array(scan_fold(Vec::<i32>::new(), 10, |total, value| total + value)), vec![10]);
/// ```
#[pointfree]
pub fn scan_fold<S, A, F>(source: S, initial: A, combine: F) -> ScanFold<S::IntoIter, A, F>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(A, S::Item) -> A,
{
    ScanFold {
        source: source.into_iter().fuse(),
        accumulator: Some(initial),
        emitted_initial: false,
        combine,
    }
}

/// Yields `initial`, then every intermediate value of [`fold_right`].
///
/// The source is realized when this is called.
#[pointfree]
pub fn scan_fold_right<S, A, F>(
    source: S,
    initial: A,
    combine: F,
) -> ScanFold<Rev<vec::IntoIter<S::Item>>, A, F>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(A, S::Item) -> A,
{
    scan_fold(realize_reversed(source), initial, combine)
}

impl<I, A, F> Iterator for ScanFold<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.emitted_initial {
            self.emitted_initial = true;
            return self.accumulator.clone();
        }
        let item = self.source.next()?;
        let accumulated = (self.combine)(self.accumulator.take()?, item);
        self.accumulator = Some(accumulated.clone());
        Some(accumulated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let initial = usize::from(!self.emitted_initial);
        (
            lower.saturating_add(initial),
            upper.and_then(|upper| upper.checked_add(initial)),
        )
    }
}

impl<I, A, F> FusedIterator for ScanFold<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
}

/// The sequence returned by [`scan_fold_monoid`].
#[derive(Debug, Clone)]
pub struct ScanMonoid<I: Iterator, M> {
    source: Fuse<I>,
    accumulator: Option<I::Item>,
    monoid: M,
}

/// Yields the monoid identity, then every intermediate value of [`fold_monoid`].
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, scan_fold_monoid};
/// use itertricks::typeclass::MonoidOf;
///
/// let product = MonoidOf::new(1, |left: u32, right: u32| left * right);
/// let factorials = scan_fold_monoid(1..=4, product).map(as_array);
/// assert_eq!(factorials, Ok(vec![1, 1, 2, 6, 24]));
/// ```
pub fn scan_fold_monoid<S, M>(
    source: S,
    monoid: M,
) -> Result<ScanMonoid<S::IntoIter, M::Instance>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
    M: IntoMonoid<S::Item>,
{
    let monoid = monoid.into_monoid()?;
    Ok(ScanMonoid::new(source.into_iter(), monoid))
}

/// Pointfree form of [`scan_fold_monoid`].
///
/// # Errors
///
/// Returns [`SequenceError::NotAMonoid`] if `monoid` is incomplete, before
/// the function is built.
pub fn scan_fold_monoid_with<S, M>(
    monoid: M,
) -> Result<impl Fn(S) -> ScanMonoid<S::IntoIter, M::Instance> + Clone, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
    M: IntoMonoid<S::Item>,
    M::Instance: Clone,
{
    let monoid = monoid.into_monoid()?;
    Ok(curry2(
        |source: S, monoid: M::Instance| ScanMonoid::new(source.into_iter(), monoid),
        monoid,
    ))
}

impl<I, M> ScanMonoid<I, M>
where
    I: Iterator,
    M: MonoidInstance<I::Item>,
{
    fn new(source: I, monoid: M) -> Self {
        Self {
            source: source.fuse(),
            accumulator: None,
            monoid,
        }
    }
}

impl<I, M> Iterator for ScanMonoid<I, M>
where
    I: Iterator,
    I::Item: Clone,
    M: MonoidInstance<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let accumulated = if self.accumulator.is_none() {
            self.monoid.empty()
        } else {
            let item = self.source.next()?;
            let accumulator = self.accumulator.take()?;
            self.monoid.concat(accumulator, item)
        };
        self.accumulator = Some(accumulated.clone());
        Some(accumulated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let identity = usize::from(self.accumulator.is_none());
        (
            lower.saturating_add(identity),
            upper.and_then(|upper| upper.checked_add(identity)),
        )
    }
}

impl<I, M> FusedIterator for ScanMonoid<I, M>
where
    I: Iterator,
    I::Item: Clone,
    M: MonoidInstance<I::Item>,
{
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fold_matches_std_fold(source in proptest::collection::vec(-1000i64..1000, 0..64), initial in -1000i64..1000) {
            let expected = source.iter().fold(initial, |total, value| total.wrapping_mul(3).wrapping_sub(*value));
            prop_assert_eq!(fold(source, initial, |total: i64, value: i64| total.wrapping_mul(3).wrapping_sub(value)), expected);
        }

        #[test]
        fn prop_reduce_is_last_scan_value(source in proptest::collection::vec(any::<u8>(), 0..64)) {
            let maximum = |left: u8, right: u8| left.max(right);
            prop_assert_eq!(reduce(source.clone(), maximum), scan(source, maximum).last());
        }

        #[test]
        fn prop_fold_right_is_fold_of_reversed(source in proptest::collection::vec(any::<i16>(), 0..64)) {
            let push = |mut items: Vec<i16>, item: i16| { items.push(item); items };
            let mut reversed = source.clone();
            reversed.reverse();
            prop_assert_eq!(fold_right(source, Vec::new(), push), reversed);
        }
    }
}
