//! Numeric wrapper types selecting an algebraic operation.
//!
//! The same underlying number can be folded by addition ([`Sum`]),
//! multiplication ([`Product`]), or by keeping an extreme ([`Max`], [`Min`]).
//! Wrapping the elements of a sequence picks the monoid that
//! [`fold_monoid`](crate::sequence::fold_monoid) uses through
//! [`Canonical`](super::Canonical).
//!
//! # Examples
//!
//! ```rust
//! use itertricks::sequence::{fold_monoid, map};
//! use itertricks::typeclass::{Canonical, Product};
//!
//! let factorial = fold_monoid(map(1..=5, Product::new), Canonical::new());
//! assert_eq!(factorial.map(Product::into_inner), Ok(120));
//! ```

macro_rules! numeric_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

numeric_wrapper!(
    /// Additive semigroup/monoid. The identity element is `Sum(0)`.
    Sum
);

numeric_wrapper!(
    /// Multiplicative semigroup/monoid. The identity element is `Product(1)`.
    Product
);

numeric_wrapper!(
    /// Keeps the larger value. The identity element is `Max(A::MIN_VALUE)`.
    Max
);

numeric_wrapper!(
    /// Keeps the smaller value. The identity element is `Min(A::MAX_VALUE)`.
    Min
);

/// A trait for types that have minimum and maximum bounds.
///
/// Provides the identity elements of [`Max`] and [`Min`] as monoids.
///
/// ```rust
/// use itertricks::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),+) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )+
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);
