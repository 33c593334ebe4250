//! Filtering operators.
//!
//! # Laws
//!
//! For every finite source `s` and predicate `p`, every element of `s` is in
//! exactly one of `filter(s, p)` and `filter_not(s, p)`, and
//! `partition(s, p)` agrees with both.
//!
//! # Examples
//!
//! ```rust
//! use itertricks::compose::gt;
//! use itertricks::sequence::{as_array, filter, filter_not, partition};
//!
//! let values = vec![1, 5, 2, 7];
//! assert_eq!(as_array(filter(values.clone(), gt(3))), vec![5, 7]);
//! assert_eq!(as_array(filter_not(values.clone(), gt(3))), vec![1, 2]);
//!
//! let split = partition(values, gt(3));
//! assert_eq!(split.left, vec![1, 2]);
//! assert_eq!(split.right, vec![5, 7]);
//! ```

use std::iter::{Filter, Fuse, FusedIterator};

use itertricks_derive::pointfree;

/// Yields the elements for which `predicate` returns `true`, in order.
#[pointfree]
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().filter(predicate)
}

/// The sequence returned by [`filter_not`].
#[derive(Debug, Clone)]
pub struct FilterNot<I, P> {
    source: Fuse<I>,
    predicate: P,
}

/// Yields the elements for which `predicate` returns `false`, in order.
#[pointfree]
pub fn filter_not<S, P>(source: S, predicate: P) -> FilterNot<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    FilterNot {
        source: source.into_iter().fuse(),
        predicate,
    }
}

impl<I, P> Iterator for FilterNot<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilterNot<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// The sequence returned by [`filter_indexed`].
#[derive(Debug, Clone)]
pub struct FilterIndexed<I, P> {
    source: Fuse<I>,
    index: usize,
    predicate: P,
}

/// Yields the elements for which `predicate(index, &element)` returns `true`.
///
/// The index counts every element pulled from `source`, kept or not.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, filter_indexed};
///
/// let even_positions = filter_indexed(vec!['a', 'b', 'c', 'd'], |index, _| index % 2 == 0);
/// assert_eq!(as_array(even_positions), vec!['a', 'c']);
/// ```
#[pointfree]
pub fn filter_indexed<S, P>(source: S, predicate: P) -> FilterIndexed<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(usize, &S::Item) -> bool,
{
    FilterIndexed {
        source: source.into_iter().fuse(),
        index: 0,
        predicate,
    }
}

impl<I, P> Iterator for FilterIndexed<I, P>
where
    I: Iterator,
    P: FnMut(usize, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.source.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(index, &item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilterIndexed<I, P>
where
    I: Iterator,
    P: FnMut(usize, &I::Item) -> bool,
{
}

/// The two halves produced by [`partition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Partitioned<T> {
    /// Elements for which the predicate returned `false`.
    pub left: Vec<T>,
    /// Elements for which the predicate returned `true`.
    pub right: Vec<T>,
}

impl<T> Partitioned<T> {
    /// Returns `(left, right)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.left, self.right)
    }
}

/// Splits `source` in one pass: non-matches go `left`, matches go `right`.
///
/// Relative order is preserved within each half.
#[pointfree]
pub fn partition<S, P>(source: S, mut predicate: P) -> Partitioned<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    let mut halves = Partitioned {
        left: Vec::new(),
        right: Vec::new(),
    };
    for item in source {
        if predicate(&item) {
            halves.right.push(item);
        } else {
            halves.left.push(item);
        }
    }
    halves
}
