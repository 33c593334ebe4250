//! The integer abstraction behind [`range`](super::range) and [`count`](super::count).

use std::fmt;

/// A primitive integer usable as a range bound or step.
///
/// Implemented for every primitive integer up to 64 bits, plus `isize` and
/// `usize`. Arithmetic is checked so that a sequence reaching the end of the
/// type's domain stops instead of wrapping.
pub trait Integer: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;
    /// The default step.
    const ONE: Self;
    /// The smallest value of the type.
    const MIN: Self;
    /// The largest value of the type.
    const MAX: Self;

    /// Adds `step`, returning `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;

    /// Converts to `i128` for error reporting and length computations.
    fn widen(self) -> i128;
}

macro_rules! impl_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Integer for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$integer>::MIN;
                const MAX: Self = <$integer>::MAX;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn checked_step_stops_at_the_domain_edge() {
        assert_eq!(i8::MAX.checked_step(1), None);
        assert_eq!(250_u8.checked_step(5), Some(255));
        assert_eq!((-3_i32).checked_step(-2), Some(-5));
    }

    #[rstest]
    fn widen_preserves_extremes() {
        assert_eq!(u64::MAX.widen(), i128::from(u64::MAX));
        assert_eq!(i64::MIN.widen(), i128::from(i64::MIN));
    }
}
