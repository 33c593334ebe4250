//! Algebraic structures used by the fold family of operators.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Foundation Types
//!
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! ## Value-Level Instances
//!
//! Operators such as [`fold_monoid`](crate::sequence::fold_monoid) accept an
//! instance *value* rather than relying on the element type alone:
//!
//! - [`SemigroupOf`], [`MonoidOf`]: instances built from closures
//! - [`Canonical`]: the type-class instance of a type
//! - [`MonoidParts`]: a possibly incomplete record, checked by [`IntoMonoid`]
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use itertricks::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use itertricks::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod instance;
mod monoid;
mod semigroup;
mod wrappers;

pub use instance::{
    Canonical, IntoMonoid, MonoidInstance, MonoidOf, MonoidParts, SemigroupInstance, SemigroupOf,
};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
