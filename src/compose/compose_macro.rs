//! The `compose!` macro for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// A reusable pipeline stage built from pointfree operators:
///
/// ```
/// use itertricks::compose;
/// use itertricks::compose::ge;
/// use itertricks::sequence::{as_count_with, take_while_with};
///
/// let count_leading_large = compose!(as_count_with(ge(0)), take_while_with(ge(10)));
///
/// assert_eq!(count_leading_large(vec![12, 40, 3, 99]), 2);
/// assert_eq!(count_leading_large(vec![1, 40]), 0);
/// ```
///
/// ```
/// use itertricks::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    #[rstest]
    fn compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[rstest]
    fn compose_three_applies_right_to_left() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        let composed = compose!(add_one, double, square);
        assert_eq!(composed(3), 19);
    }

    #[rstest]
    fn compose_identity_is_neutral() {
        let double = |x: i32| x * 2;
        let left = compose!(identity, double);
        let right = compose!(double, identity);
        assert_eq!(left(21), right(21));
    }
}
