//! Short-circuiting boolean consumers.
//!
//! Each predicate pulls only as many elements as it needs to settle its
//! answer, so most of them are safe on infinite sequences whenever the
//! answer is eventually decided.
//!
//! | operator     | empty source | stops pulling when              |
//! |--------------|--------------|---------------------------------|
//! | [`some`]     | `false`      | the first match                 |
//! | [`all`]      | `true`       | the first non-match             |
//! | [`none`]     | `true`       | the first match                 |
//! | [`more_than`]| `n == 0`     | the match count reaches `n`     |
//! | [`less_than`]| `n > 0`      | the match count reaches `n`     |
//! | [`empty`]    | `true`       | after at most one element       |

use itertricks_derive::pointfree;

/// Returns `true` if any element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use itertricks::compose::gt;
/// use itertricks::sequence::{count, some};
///
/// assert!(some(count::<u32>(), gt(1_000)));
/// assert!(!some(Vec::<u32>::new(), gt(0)));
/// ```
#[pointfree]
pub fn some<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().any(|item| predicate(&item))
}

/// Returns `true` if every element satisfies `predicate`.
#[pointfree]
pub fn all<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().all(|item| predicate(&item))
}

/// Returns `true` if no element satisfies `predicate`.
#[pointfree]
pub fn none<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    !some(source, predicate)
}

/// Returns `true` if at least `threshold` elements satisfy `predicate`.
///
/// Pulling stops as soon as the count reaches `threshold`. A threshold of
/// zero is trivially met without pulling anything.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{count, more_than};
///
/// assert!(more_than(count::<u64>(), 3, |value| value % 2 == 0));
/// assert!(!more_than(vec![1, 2, 3], 2, |value| *value > 2));
/// ```
#[pointfree]
pub fn more_than<S, P>(source: S, threshold: usize, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    matches_reach(source, threshold, predicate)
}

/// Returns `true` if fewer than `threshold` elements satisfy `predicate`.
///
/// Pulling stops as soon as the count reaches `threshold`, because the
/// answer is `false` from that point on. A threshold of zero can never be
/// undercut, so it returns `false` without pulling anything.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{count, less_than};
///
/// assert!(less_than(vec![1, 2, 3], 2, |value| *value > 2));
/// assert!(!less_than(count::<u64>(), 2, |value| *value > 10));
/// ```
#[pointfree]
pub fn less_than<S, P>(source: S, threshold: usize, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    !matches_reach(source, threshold, predicate)
}

fn matches_reach<S, P>(source: S, threshold: usize, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    if threshold == 0 {
        return true;
    }
    let mut matched = 0;
    for item in source {
        if predicate(&item) {
            matched += 1;
            if matched == threshold {
                return true;
            }
        }
    }
    false
}

/// Returns `true` if `source` produces no elements.
///
/// At most one element is pulled.
pub fn empty<S: IntoIterator>(source: S) -> bool {
    source.into_iter().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{eq, gt, lt};
    use crate::sequence::count;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(vec![], false, true, true)]
    #[case(vec![1, 2], false, true, true)]
    #[case(vec![1, 5], true, false, false)]
    #[case(vec![7, 9], true, true, false)]
    fn boolean_consumers(
        #[case] source: Vec<i32>,
        #[case] any_large: bool,
        #[case] all_small_or_large: bool,
        #[case] no_large: bool,
    ) {
        assert_eq!(some(source.clone(), gt(4)), any_large);
        assert_eq!(
            all(source.clone(), |value| *value < 3 || *value > 6),
            all_small_or_large
        );
        assert_eq!(none(source, gt(4)), no_large);
    }

    #[rstest]
    fn some_short_circuits_on_infinite_source() {
        assert!(some_with(eq(50_u8))(count::<u8>()));
        assert!(!all(count::<u8>(), lt(10)));
    }

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn more_than_counts_matches(#[case] threshold: usize, #[case] expected: bool) {
        assert_eq!(more_than(vec![1, 2, 3, 4, 5, 6], threshold, |value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(3, false)]
    #[case(4, true)]
    fn less_than_counts_matches(#[case] threshold: usize, #[case] expected: bool) {
        assert_eq!(less_than(vec![1, 2, 3, 4, 5, 6], threshold, |value| value % 2 == 0), expected);
    }

    #[rstest]
    fn less_than_stops_once_threshold_is_reached() {
        let pulled = Cell::new(0);
        let source = count::<u32>().inspect(|_| pulled.set(pulled.get() + 1));

        assert!(!less_than(source, 2, |value| *value >= 3));
        assert_eq!(pulled.get(), 5);
    }

    #[rstest]
    fn zero_threshold_pulls_nothing() {
        let pulled = Cell::new(0);
        let source = count::<u32>().inspect(|_| pulled.set(pulled.get() + 1));
        let at_least_none = more_than_with(0, gt(1_u32));

        assert!(at_least_none(source));
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn empty_pulls_at_most_one_element() {
        let pulled = Cell::new(0);
        let source = count::<u32>().inspect(|_| pulled.set(pulled.get() + 1));

        assert!(!empty(source));
        assert_eq!(pulled.get(), 1);
        assert!(empty(Vec::<u32>::new()));
    }
}
