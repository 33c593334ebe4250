//! Procedural macros for itertricks.
//!
//! This crate provides the attribute that gives every itertricks operator its
//! two calling conventions.
//!
//! # Available Attribute Macros
//!
//! - [`macro@pointfree`]: Emits the pointfree companion of a direct-form operator
//!
//! # Example
//!
//! ```rust,ignore
//! use itertricks_derive::pointfree;
//!
//! #[pointfree]
//! pub fn take<S: IntoIterator>(source: S, count: usize) -> std::iter::Take<S::IntoIter> {
//!     source.into_iter().take(count)
//! }
//!
//! // Direct form
//! let direct: Vec<i32> = take(vec![1, 2, 3], 2).collect();
//!
//! // Pointfree form: configuration first, sequence later
//! let first_two = take_with(2);
//! let curried: Vec<i32> = first_two(vec![1, 2, 3]).collect();
//!
//! assert_eq!(direct, curried);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod pointfree;

use proc_macro::TokenStream;

/// Generates the pointfree companion of a direct-form sequence operator.
///
/// The annotated function must take the sequence as its first argument and
/// one or more configuration values after it. The original function is left
/// unchanged; a second function named `<name>_with` is emitted next to it.
///
/// # Generated Code
///
/// For an operator `fn op<S, P>(source: S, predicate: P) -> Out`, generates:
///
/// ```rust,ignore
/// pub fn op_with<S, P>(predicate: P) -> impl Fn(S) -> Out + Clone
/// where
///     P: Clone,
/// { ... }
/// ```
///
/// Applying the returned closure to a sequence is equivalent to calling the
/// direct form with the same configuration.
///
/// # Options
///
/// - `#[pointfree(name = zip_to)]` overrides the companion name.
///
/// # Compile Errors
///
/// - The function has no configuration argument
/// - The function is a method, or is `async`
/// - A configuration argument is bound by a pattern instead of an identifier
/// - The function returns `()`
#[proc_macro_attribute]
pub fn pointfree(attribute: TokenStream, item: TokenStream) -> TokenStream {
    pointfree::pointfree_impl(attribute, item)
}
