//! # itertricks
//!
//! Composable, lazy operators over anything that implements [`IntoIterator`].
//!
//! ## Overview
//!
//! - **Sequence operators**: constructors, filters, predicates, transformations,
//!   slicing, collectors, folds and scans
//! - **Two calling conventions**: every operator can be called directly with its
//!   source, or pointfree with only its configuration
//! - **Function Composition**: `pipe!` and `compose!` for building pipelines
//! - **Type Classes**: `Semigroup` and `Monoid`, plus value-level instances for
//!   the fold family
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid, and the numeric wrappers
//! - `compose`: `pipe!`, `compose!`, and helper combinators
//! - `sequence`: the operators (implies `typeclass` and `compose`)
//! - `fxhash` / `ahash`: the hasher used by grouping collectors
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use itertricks::prelude::*;
//!
//! let evens = pipe!(
//!     count::<u64>(),
//!     filter_with(|value: &u64| value % 2 == 0),
//!     take_with(4),
//!     as_array
//! );
//! assert_eq!(evens, vec![0, 2, 4, 6]);
//!
//! let windows = windowed(evens, 2, WindowOptions::default()).map(as_array);
//! assert_eq!(windows, Ok(vec![vec![0, 2], vec![2, 4], vec![4, 6]]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operators, type classes, composition helpers, and the
/// error type.
///
/// # Usage
///
/// ```rust
/// use itertricks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::curry::{Dispatch, Partial, Resolved, curry2, curry3};
    pub use crate::error::SequenceError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod curry;
pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;
