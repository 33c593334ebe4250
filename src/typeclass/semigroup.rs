//! Associative merging, the algebra behind
//! [`reduce_semigroup`](crate::sequence::reduce_semigroup).
//!
//! A semigroup has no identity element, so reducing an empty sequence yields
//! `None` rather than a value.
//!
//! # Examples
//!
//! ```rust
//! use itertricks::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! assert_eq!(Sum::new(3).combine(Sum::new(4)), Sum::new(7));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// Values that merge pairwise under an associative operation.
///
/// [`Canonical`](super::Canonical) lifts any `Semigroup` into the
/// instance [`reduce_semigroup`](crate::sequence::reduce_semigroup) expects.
pub trait Semigroup {
    /// Merges `other` into `self`.
    ///
    /// Grouping must not matter: a sequence reduced from the left or from the
    /// right arrives at the same value.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is ignored; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("Hello, ").combine(String::from("World!")),
            "Hello, World!"
        );
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Some(Sum::new(1)), Some(Sum::new(2)), Some(Sum::new(3)))]
    #[case(Some(Sum::new(1)), None, Some(Sum::new(1)))]
    #[case(None, Some(Sum::new(2)), Some(Sum::new(2)))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn max_and_min_pick_extremes() {
        assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
        assert_eq!(Min::new(3).combine(Min::new(5)), Min::new(3));
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = (Sum::new(1), Product::new(2));
        let right = (Sum::new(3), Product::new(4));
        assert_eq!(left.combine(right), (Sum::new(4), Product::new(8)));
    }

    #[rstest]
    fn folding_order_does_not_matter_for_max() {
        let values = [Max::new(4), Max::new(11), Max::new(7)];
        let from_left = values.into_iter().reduce(Semigroup::combine);
        let from_right = values.into_iter().rev().reduce(|right, left| left.combine(right));
        assert_eq!(from_left, Some(Max::new(11)));
        assert_eq!(from_left, from_right);
    }
}
