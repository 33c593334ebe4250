//! Helper combinators for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use itertricks::compose::identity;
/// use itertricks::sequence::{as_array, map};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(as_array(map(vec![1, 2, 3], identity)), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use itertricks::compose::constant;
/// use itertricks::sequence::{as_array, map};
///
/// let zeros = as_array(map(vec!["a", "b", "c"], constant(0)));
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}
