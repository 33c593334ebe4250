//! The `pipe!` macro for left-to-right function application.
//!
//! Pointfree operators such as [`filter_with`](crate::sequence::filter_with)
//! return single-argument functions, so a pipeline is a value threaded
//! through them with [`pipe!`].

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`.
///
/// While [`compose!`](crate::compose!) creates a new function, `pipe!` immediately
/// applies the transformations to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ## Sequence pipeline
///
/// ```
/// use itertricks::pipe;
/// use itertricks::compose::gt;
/// use itertricks::sequence::{as_array, filter_with, map_with, take_with, count};
///
/// let result = pipe!(
///     count::<u32>(),
///     filter_with(gt(3)),
///     map_with(|value: u32| value * 10),
///     take_with(3),
///     as_array
/// );
/// assert_eq!(result, vec![40, 50, 60]);
/// ```
///
/// ## Plain functions
///
/// ```
/// use itertricks::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, to_string, get_length), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn pipe_applies_left_to_right() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        assert_eq!(pipe!(3, square, double, add_one), 19);
    }

    #[rstest]
    fn pipe_accepts_trailing_comma() {
        let negate = |x: i32| -x;
        assert_eq!(pipe!(7, negate,), -7);
    }
}
