//! Value-level semigroup and monoid instances.
//!
//! The [`Semigroup`] and [`Monoid`] traits attach one operation to a type.
//! Fold-family operators instead take the operation as a *configuration
//! value*, so the same element type can be folded in several ways without
//! newtype wrappers:
//!
//! - [`SemigroupOf`]: a combining function
//! - [`MonoidOf`]: an identity element plus a combining function
//! - [`Canonical`]: the type-class instance of the element type
//! - [`MonoidParts`]: an unchecked record whose pieces may be missing
//!
//! [`IntoMonoid`] is the single conversion point. It is where an incomplete
//! [`MonoidParts`] is rejected with [`SequenceError::NotAMonoid`].
//!
//! # Examples
//!
//! ```rust
//! use itertricks::typeclass::{IntoMonoid, MonoidInstance, MonoidOf, MonoidParts, SemigroupInstance};
//!
//! let sum = MonoidOf::new(0, |left: i32, right: i32| left + right);
//! assert_eq!(sum.concat(sum.empty(), 5), 5);
//!
//! let incomplete: MonoidParts<i32, fn(i32, i32) -> i32> = MonoidParts::new(Some(0), None);
//! assert!(incomplete.into_monoid().is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Monoid, Semigroup};
use crate::error::{MonoidPart, SequenceError};

/// An associative combining operation supplied as a value.
pub trait SemigroupInstance<A> {
    /// Combines two values. Must be associative.
    fn concat(&self, left: A, right: A) -> A;
}

/// A [`SemigroupInstance`] with an identity element.
pub trait MonoidInstance<A>: SemigroupInstance<A> {
    /// Returns a fresh identity element.
    fn empty(&self) -> A;
}

/// A semigroup built from a combining function.
#[derive(Clone, Copy)]
pub struct SemigroupOf<F> {
    concat: F,
}

impl<F> SemigroupOf<F> {
    /// Wraps a combining function.
    pub const fn new(concat: F) -> Self {
        Self { concat }
    }
}

impl<A, F> SemigroupInstance<A> for SemigroupOf<F>
where
    F: Fn(A, A) -> A,
{
    fn concat(&self, left: A, right: A) -> A {
        (self.concat)(left, right)
    }
}

impl<F> fmt::Debug for SemigroupOf<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SemigroupOf").finish_non_exhaustive()
    }
}

/// A monoid built from an identity element and a combining function.
#[derive(Clone, Copy)]
pub struct MonoidOf<A, F> {
    empty: A,
    concat: F,
}

impl<A, F> MonoidOf<A, F> {
    /// Pairs an identity element with a combining function.
    pub const fn new(empty: A, concat: F) -> Self {
        Self { empty, concat }
    }
}

impl<A, F> SemigroupInstance<A> for MonoidOf<A, F>
where
    F: Fn(A, A) -> A,
{
    fn concat(&self, left: A, right: A) -> A {
        (self.concat)(left, right)
    }
}

impl<A, F> MonoidInstance<A> for MonoidOf<A, F>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    fn empty(&self) -> A {
        self.empty.clone()
    }
}

impl<A: fmt::Debug, F> fmt::Debug for MonoidOf<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonoidOf")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

/// The type-class instance of `T`, usable wherever a value-level instance is expected.
///
/// ```rust
/// use itertricks::typeclass::{Canonical, MonoidInstance, SemigroupInstance};
///
/// let strings = Canonical::<String>::new();
/// assert_eq!(strings.concat(strings.empty(), String::from("a")), "a");
/// ```
pub struct Canonical<T>(PhantomData<fn() -> T>);

impl<T> Canonical<T> {
    /// Creates the instance.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Canonical<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Canonical<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Canonical<T> {}

impl<T> fmt::Debug for Canonical<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Canonical<{}>", std::any::type_name::<T>())
    }
}

impl<T: Semigroup> SemigroupInstance<T> for Canonical<T> {
    fn concat(&self, left: T, right: T) -> T {
        left.combine(right)
    }
}

impl<T: Monoid> MonoidInstance<T> for Canonical<T> {
    fn empty(&self) -> T {
        T::empty()
    }
}

/// A monoid record whose identity element or combining function may be absent.
///
/// Useful where the pieces are assembled at run time. Converting it with
/// [`IntoMonoid::into_monoid`] checks that both pieces are present.
#[derive(Clone, Copy, Debug)]
pub struct MonoidParts<A, F> {
    /// The identity element, if supplied.
    pub empty: Option<A>,
    /// The combining function, if supplied.
    pub concat: Option<F>,
}

impl<A, F> MonoidParts<A, F> {
    /// Creates a record from optional pieces.
    pub const fn new(empty: Option<A>, concat: Option<F>) -> Self {
        Self { empty, concat }
    }
}

impl<A, F> TryFrom<MonoidParts<A, F>> for MonoidOf<A, F> {
    type Error = SequenceError;

    fn try_from(parts: MonoidParts<A, F>) -> Result<Self, Self::Error> {
        match (parts.empty, parts.concat) {
            (Some(empty), Some(concat)) => Ok(Self::new(empty, concat)),
            (empty, concat) => {
                let missing = match (empty.is_some(), concat.is_some()) {
                    (true, _) => MonoidPart::Concat,
                    (false, true) => MonoidPart::Empty,
                    (false, false) => MonoidPart::Both,
                };
                tracing::debug!(%missing, "rejected incomplete monoid");
                Err(SequenceError::NotAMonoid { missing })
            }
        }
    }
}

/// Conversion into a checked [`MonoidInstance`].
///
/// Complete instances convert infallibly; [`MonoidParts`] may fail.
pub trait IntoMonoid<A> {
    /// The checked instance.
    type Instance: MonoidInstance<A>;

    /// Checks the monoid contract.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotAMonoid`] when the identity element or the
    /// combining function is missing.
    fn into_monoid(self) -> Result<Self::Instance, SequenceError>;
}

impl<A, F> IntoMonoid<A> for MonoidOf<A, F>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    type Instance = Self;

    fn into_monoid(self) -> Result<Self::Instance, SequenceError> {
        Ok(self)
    }
}

impl<T: Monoid> IntoMonoid<T> for Canonical<T> {
    type Instance = Self;

    fn into_monoid(self) -> Result<Self::Instance, SequenceError> {
        Ok(self)
    }
}

impl<A, F> IntoMonoid<A> for MonoidParts<A, F>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    type Instance = MonoidOf<A, F>;

    fn into_monoid(self) -> Result<Self::Instance, SequenceError> {
        MonoidOf::try_from(self)
    }
}
