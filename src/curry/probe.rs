//! Runtime sequence probing for dynamically typed values.
//!
//! Inside the crate, "is this a sequence" is an `IntoIterator` bound checked
//! by the compiler. Values that arrive type-erased (behind [`Any`]) are
//! probed against the standard containers instead. Maps, strings, closures
//! and other plain values are rejected.
//!
//! # Examples
//!
//! ```rust
//! use itertricks::curry::probe::{is_sequence, sequence_of};
//!
//! let values = vec![1, 2, 3];
//! let total: i32 = sequence_of::<i32, _>(&values).map(|probed| probed.sum()).unwrap_or(0);
//! assert_eq!(total, 6);
//!
//! assert!(!is_sequence::<i32, _>(&42));
//! ```

use std::any::{Any, type_name};
use std::collections::{LinkedList, VecDeque, linked_list, vec_deque};
use std::slice;

use crate::error::SequenceError;

/// Borrowed iteration over a probed container.
#[derive(Clone, Debug)]
pub enum Probed<'a, T> {
    /// A `Vec<T>` or `Box<[T]>`.
    Slice(slice::Iter<'a, T>),
    /// A `VecDeque<T>`.
    Deque(vec_deque::Iter<'a, T>),
    /// A `LinkedList<T>`.
    List(linked_list::Iter<'a, T>),
}

impl<'a, T> Iterator for Probed<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Slice(iterator) => iterator.next(),
            Self::Deque(iterator) => iterator.next(),
            Self::List(iterator) => iterator.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Slice(iterator) => iterator.size_hint(),
            Self::Deque(iterator) => iterator.size_hint(),
            Self::List(iterator) => iterator.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Probed<'_, T> {}

/// Views `value` as a sequence of `T`.
///
/// # Errors
///
/// Returns [`SequenceError::NotASequence`] naming the type of `value` when it
/// is not a `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, or `LinkedList<T>`.
pub fn sequence_of<T: 'static, V: Any>(value: &V) -> Result<Probed<'_, T>, SequenceError> {
    let erased: &dyn Any = value;

    if let Some(vector) = erased.downcast_ref::<Vec<T>>() {
        return Ok(Probed::Slice(vector.iter()));
    }
    if let Some(boxed) = erased.downcast_ref::<Box<[T]>>() {
        return Ok(Probed::Slice(boxed.iter()));
    }
    if let Some(deque) = erased.downcast_ref::<VecDeque<T>>() {
        return Ok(Probed::Deque(deque.iter()));
    }
    if let Some(list) = erased.downcast_ref::<LinkedList<T>>() {
        return Ok(Probed::List(list.iter()));
    }

    let element = type_name::<T>();
    let type_name = type_name::<V>();
    tracing::debug!(type_name, element, "value is not a sequence");
    Err(SequenceError::NotASequence { type_name })
}

/// Returns `true` if [`sequence_of`] would accept `value`.
pub fn is_sequence<T: 'static, V: Any>(value: &V) -> bool {
    let erased: &dyn Any = value;
    erased.is::<Vec<T>>()
        || erased.is::<Box<[T]>>()
        || erased.is::<VecDeque<T>>()
        || erased.is::<LinkedList<T>>()
}
