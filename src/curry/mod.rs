//! Direct and pointfree calling conventions.
//!
//! Every operator in [`sequence`](crate::sequence) has two entry points:
//!
//! - **direct**: `op(source, config...)` runs immediately
//! - **pointfree**: `op_with(config...)` returns a reusable function awaiting
//!   the source
//!
//! Most pointfree companions are generated by the `#[pointfree]` attribute.
//! Operators that validate their configuration first build the companion by
//! hand with [`curry2`] or [`curry3`], after validation has succeeded.
//!
//! [`Dispatch`] makes the choice between the two conventions an explicit
//! value, for callers that decide at run time whether a source is available.
//!
//! # Laws
//!
//! For every logic function `f`, configuration `c`, and source `s`:
//!
//! ```text
//! curry2(f, c)(s) == f(s, c)
//! Dispatch::pointfree(c).resolve(f).pending().apply(s) == Dispatch::direct(s, c).resolve(f).applied()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use itertricks::curry::{Dispatch, Resolved};
//! use itertricks::sequence::{as_array, take};
//!
//! let logic = |source: Vec<i32>, count: usize| as_array(take(source, count));
//!
//! let direct = Dispatch::direct(vec![1, 2, 3], 2).resolve(logic);
//! assert_eq!(direct.applied(), Some(vec![1, 2]));
//!
//! let Resolved::Pending(partial) = Dispatch::<Vec<i32>, usize>::pointfree(2).resolve(logic) else {
//!     unreachable!();
//! };
//! assert_eq!(partial.apply(vec![7, 8, 9]), vec![7, 8]);
//! assert_eq!(partial.apply(vec![4]), vec![4]);
//! ```

pub mod probe;

use std::fmt;

/// An operator call whose source may or may not have been supplied yet.
#[derive(Clone, PartialEq, Eq)]
pub enum Dispatch<S, C> {
    /// The source is present; the call runs immediately.
    Direct {
        /// The sequence to operate on.
        source: S,
        /// The operator configuration.
        config: C,
    },
    /// Only the configuration is present; the call waits for a source.
    Pointfree(C),
}

impl<S, C> Dispatch<S, C> {
    /// Creates a direct call.
    pub const fn direct(source: S, config: C) -> Self {
        Self::Direct { source, config }
    }

    /// Creates a pointfree call.
    pub const fn pointfree(config: C) -> Self {
        Self::Pointfree(config)
    }

    /// Returns `true` if the source has been supplied.
    pub const fn is_direct(&self) -> bool {
        matches!(self, Self::Direct { .. })
    }

    /// Returns the configuration, whichever form the call takes.
    pub const fn config(&self) -> &C {
        match self {
            Self::Direct { config, .. } | Self::Pointfree(config) => config,
        }
    }

    /// Runs `logic` now for a direct call, or captures it for a pointfree one.
    ///
    /// `logic` is never invoked for a pointfree call, so no work happens
    /// before a source arrives.
    pub fn resolve<F, O>(self, logic: F) -> Resolved<O, F, C>
    where
        F: Fn(S, C) -> O,
    {
        match self {
            Self::Direct { source, config } => Resolved::Applied(logic(source, config)),
            Self::Pointfree(config) => Resolved::Pending(Partial::new(logic, config)),
        }
    }
}

impl<S, C: fmt::Debug> fmt::Debug for Dispatch<S, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct { config, .. } => formatter
                .debug_struct("Direct")
                .field("config", config)
                .finish_non_exhaustive(),
            Self::Pointfree(config) => formatter.debug_tuple("Pointfree").field(config).finish(),
        }
    }
}

/// The outcome of [`Dispatch::resolve`].
#[derive(Clone, Debug)]
pub enum Resolved<O, F, C> {
    /// The operator ran and produced its output.
    Applied(O),
    /// The operator is waiting for its source.
    Pending(Partial<F, C>),
}

impl<O, F, C> Resolved<O, F, C> {
    /// Returns the output of a direct call.
    pub fn applied(self) -> Option<O> {
        match self {
            Self::Applied(output) => Some(output),
            Self::Pending(_) => None,
        }
    }

    /// Returns the partial application of a pointfree call.
    pub fn pending(self) -> Option<Partial<F, C>> {
        match self {
            Self::Applied(_) => None,
            Self::Pending(partial) => Some(partial),
        }
    }
}

/// An operator with its configuration captured, awaiting a source.
///
/// The configuration is cloned for each [`apply`](Self::apply), so one
/// partial application can be reused across any number of sources.
#[derive(Clone)]
pub struct Partial<F, C> {
    logic: F,
    config: C,
}

impl<F, C> Partial<F, C> {
    /// Captures `config` for `logic`.
    pub const fn new(logic: F, config: C) -> Self {
        Self { logic, config }
    }

    /// Returns the captured configuration.
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Applies the operator to `source`, keeping the partial application reusable.
    pub fn apply<S, O>(&self, source: S) -> O
    where
        F: Fn(S, C) -> O,
        C: Clone,
    {
        (self.logic)(source, self.config.clone())
    }

    /// Applies the operator to `source`, consuming the partial application.
    pub fn apply_once<S, O>(self, source: S) -> O
    where
        F: FnOnce(S, C) -> O,
    {
        (self.logic)(source, self.config)
    }

    /// Converts the partial application into a plain closure, e.g. for [`pipe!`](crate::pipe!).
    pub fn into_fn<S, O>(self) -> impl Fn(S) -> O + Clone
    where
        F: Fn(S, C) -> O + Clone,
        C: Clone,
    {
        move |source| self.apply(source)
    }
}

impl<F, C: fmt::Debug> fmt::Debug for Partial<F, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builds the pointfree form of a two-argument operator.
///
/// # Examples
///
/// ```rust
/// use itertricks::curry::curry2;
/// use itertricks::sequence::{as_array, drop};
///
/// let skip_two = curry2(|source: Vec<u8>, count| as_array(drop(source, count)), 2);
/// assert_eq!(skip_two(vec![1, 2, 3]), vec![3]);
/// ```
#[inline]
pub fn curry2<S, C, O, F>(logic: F, config: C) -> impl Fn(S) -> O + Clone
where
    F: Fn(S, C) -> O + Clone,
    C: Clone,
{
    move |source| logic(source, config.clone())
}

/// Builds the pointfree form of a three-argument operator.
#[inline]
pub fn curry3<S, A, B, O, F>(logic: F, first: A, second: B) -> impl Fn(S) -> O + Clone
where
    F: Fn(S, A, B) -> O + Clone,
    A: Clone,
    B: Clone,
{
    move |source| logic(source, first.clone(), second.clone())
}
