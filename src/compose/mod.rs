//! Function composition utilities.
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Compose functions left-to-right (data flow style)
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: creates a function that always returns the same value
//! - [`lt`], [`le`], [`gt`], [`ge`], [`eq`]: comparison predicate builders
//! - [`add`]: an addition transform builder
//!
//! # Examples
//!
//! ```
//! use itertricks::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe/Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod comparison;
mod compose_macro;
mod pipe_macro;
mod utils;

pub use comparison::{add, eq, ge, gt, le, lt};
pub use utils::{constant, identity};

pub use crate::compose;
pub use crate::pipe;
