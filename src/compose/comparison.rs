//! Builders for one-argument predicates and transforms.
//!
//! Each builder captures its operand and returns a closure shaped for the
//! sequence operators: predicates take `&T` and return `bool`, [`add`]
//! takes `T` and returns `T`. All returned closures are `Clone`, so they can
//! be handed to pointfree operators.
//!
//! # Examples
//!
//! ```
//! use itertricks::compose::{add, lt};
//! use itertricks::sequence::{as_array, filter, map};
//!
//! let small = as_array(map(filter(vec![1, 5, 2, 8], lt(4)), add(100)));
//! assert_eq!(small, vec![101, 102]);
//! ```

use std::ops::Add;

/// Returns a predicate testing `element < bound`.
#[inline]
pub fn lt<T: PartialOrd + Clone>(bound: T) -> impl Fn(&T) -> bool + Clone {
    move |element| *element < bound
}

/// Returns a predicate testing `element <= bound`.
#[inline]
pub fn le<T: PartialOrd + Clone>(bound: T) -> impl Fn(&T) -> bool + Clone {
    move |element| *element <= bound
}

/// Returns a predicate testing `element > bound`.
#[inline]
pub fn gt<T: PartialOrd + Clone>(bound: T) -> impl Fn(&T) -> bool + Clone {
    move |element| *element > bound
}

/// Returns a predicate testing `element >= bound`.
#[inline]
pub fn ge<T: PartialOrd + Clone>(bound: T) -> impl Fn(&T) -> bool + Clone {
    move |element| *element >= bound
}

/// Returns a predicate testing `element == expected`.
#[inline]
pub fn eq<T: PartialEq + Clone>(expected: T) -> impl Fn(&T) -> bool + Clone {
    move |element| *element == expected
}

/// Returns a transform adding `operand` to its argument.
#[inline]
pub fn add<T: Add<Output = T> + Clone>(operand: T) -> impl Fn(T) -> T + Clone {
    move |element| element + operand.clone()
}
