//! Sequence constructors.
//!
//! These operators create sequences rather than transform them:
//!
//! - [`generator_from`]: repeatedly applies a step function to a seed
//! - [`range`], [`range_between`], [`range_step`]: bounded arithmetic sequences
//! - [`count`], [`count_from`], [`count_by`]: arithmetic sequences that end at
//!   the integer bound
//! - [`cycle`]: replays a finite source forever
//! - [`repeat`]: one value, forever
//!
//! All ranges are inclusive of their stop value and are validated when they
//! are constructed, before any element is produced.
//!
//! # Examples
//!
//! ```rust
//! use itertricks::sequence::{as_array, range, range_step};
//!
//! assert_eq!(range(3).map(as_array), Ok(vec![0, 1, 2, 3]));
//! assert_eq!(range_step(5, 0, -1).map(as_array), Ok(vec![5, 4, 3, 2, 1, 0]));
//! assert!(range_step(4, 5, -1).is_err());
//! ```

use std::iter::{FusedIterator, Repeat};
use std::mem;

use static_assertions::assert_impl_all;

use super::integer::Integer;
use crate::error::{RangeFault, SequenceError};

// =============================================================================
// generator_from
// =============================================================================

enum GeneratorState<T> {
    Seed(T),
    Last(T),
    Done,
}

/// The sequence returned by [`generator_from`].
pub struct GeneratorFrom<T, F> {
    state: GeneratorState<T>,
    step: F,
}

/// Produces `seed`, `step(seed)`, `step(step(seed))`, and so on.
///
/// The sequence ends the first time `step` returns `None`; the value before
/// that is the last one produced. A `None` seed produces nothing. `step` runs
/// only when the next element is pulled, never ahead of time.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, generator_from};
///
/// let halves = generator_from(Some(40_u32), |value| (*value > 5).then(|| value / 2));
/// assert_eq!(as_array(halves), vec![40, 20, 10, 5]);
///
/// let nothing = generator_from(None::<u32>, |value| Some(value + 1));
/// assert_eq!(nothing.count(), 0);
/// ```
pub fn generator_from<T, F>(seed: Option<T>, step: F) -> GeneratorFrom<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    let state = seed.map_or(GeneratorState::Done, GeneratorState::Seed);
    GeneratorFrom { state, step }
}

impl<T, F> Iterator for GeneratorFrom<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let produced = match mem::replace(&mut self.state, GeneratorState::Done) {
            GeneratorState::Seed(seed) => seed,
            GeneratorState::Last(previous) => (self.step)(&previous)?,
            GeneratorState::Done => return None,
        };
        self.state = GeneratorState::Last(produced.clone());
        Some(produced)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            GeneratorState::Seed(_) => (1, None),
            GeneratorState::Last(_) => (0, None),
            GeneratorState::Done => (0, Some(0)),
        }
    }
}

impl<T: Clone, F: FnMut(&T) -> Option<T>> FusedIterator for GeneratorFrom<T, F> {}

// =============================================================================
// range
// =============================================================================

/// The inclusive arithmetic sequence returned by [`range`] and its variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<T> {
    next: Option<T>,
    stop: T,
    step: T,
    ascending: bool,
}

/// Produces `0, 1, ..., stop`.
///
/// # Errors
///
/// Returns [`SequenceError::MalformedRange`] if `stop` is negative.
pub fn range<T: Integer>(stop: T) -> Result<Range<T>, SequenceError> {
    range_step(T::ZERO, stop, T::ONE)
}

/// Produces `start, start + 1, ..., stop`.
///
/// # Errors
///
/// Returns [`SequenceError::MalformedRange`] if `start > stop`.
pub fn range_between<T: Integer>(start: T, stop: T) -> Result<Range<T>, SequenceError> {
    range_step(start, stop, T::ONE)
}

/// Produces `start, start + step, ...` up to and including `stop`.
///
/// The last element is the final value that does not pass `stop`, so
/// `range_step(0, 5, 2)` ends at `4`. A step that would overflow the
/// integer type ends the sequence.
///
/// # Errors
///
/// Returns [`SequenceError::MalformedRange`] if `step` is zero, if `step` is
/// positive and `start > stop`, or if `step` is negative and `start < stop`.
///
/// # Examples
///
/// ```rust
/// use itertricks::error::{RangeFault, SequenceError};
/// use itertricks::sequence::{as_array, range_step};
///
/// assert_eq!(range_step(0, 5, 2).map(as_array), Ok(vec![0, 2, 4]));
///
/// let error = range_step(2, 1, 1).unwrap_err();
/// assert!(matches!(
///     error,
///     SequenceError::MalformedRange { fault: RangeFault::AscendingStepDescendingBounds, .. }
/// ));
/// ```
pub fn range_step<T: Integer>(start: T, stop: T, step: T) -> Result<Range<T>, SequenceError> {
    // Ascending first.
    let fault = if step > T::ZERO {
        if start <= stop {
            return Ok(Range::new(start, stop, step, true));
        }
        RangeFault::AscendingStepDescendingBounds
    } else if step < T::ZERO {
        if start >= stop {
            return Ok(Range::new(start, stop, step, false));
        }
        RangeFault::DescendingStepAscendingBounds
    } else {
        RangeFault::ZeroStep
    };

    tracing::debug!(%start, %stop, %step, %fault, "rejected malformed range");
    Err(SequenceError::MalformedRange {
        start: start.widen(),
        stop: stop.widen(),
        step: step.widen(),
        fault,
    })
}

impl<T: Integer> Range<T> {
    const fn new(start: T, stop: T, step: T, ascending: bool) -> Self {
        Self {
            next: Some(start),
            stop,
            step,
            ascending,
        }
    }

    fn remaining(&self) -> Option<u128> {
        let current = self.next?.widen();
        let distance = (self.stop.widen() - current).unsigned_abs();
        Some(distance / self.step.widen().unsigned_abs() + 1)
    }
}

impl<T: Integer> Iterator for Range<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_step(self.step).filter(|following| {
            if self.ascending {
                *following <= self.stop
            } else {
                *following >= self.stop
            }
        });
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            None => (0, Some(0)),
            Some(remaining) => usize::try_from(remaining).map_or((usize::MAX, None), |exact| (exact, Some(exact))),
        }
    }
}

impl<T: Integer> FusedIterator for Range<T> {}

// =============================================================================
// count
// =============================================================================

/// The arithmetic sequence returned by [`count`] and its variants.
///
/// Its `size_hint` is exact while the step is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count<T> {
    next: Option<T>,
    step: T,
}

/// Produces `0, 1, 2, ...` until the integer type overflows.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, count, take};
///
/// assert_eq!(as_array(take(count::<u64>(), 3)), vec![0, 1, 2]);
/// ```
pub const fn count<T: Integer>() -> Count<T> {
    count_by(T::ZERO, T::ONE)
}

/// Produces `start, start + 1, ...` until the integer type overflows.
pub const fn count_from<T: Integer>(start: T) -> Count<T> {
    count_by(start, T::ONE)
}

/// Produces `start, start + step, ...` until the integer type overflows.
pub const fn count_by<T: Integer>(start: T, step: T) -> Count<T> {
    Count {
        next: Some(start),
        step,
    }
}

impl<T: Integer> Iterator for Count<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_step(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Remaining::Exact(remaining) => {
                usize::try_from(remaining).map_or((usize::MAX, None), |exact| (exact, Some(exact)))
            }
            Remaining::Unbounded => (usize::MAX, None),
        }
    }
}

impl<T: Integer> FusedIterator for Count<T> {}

enum Remaining {
    Exact(u128),
    Unbounded,
}

impl<T: Integer> Count<T> {
    // A zero step never reaches the end of the type.
    fn remaining(&self) -> Remaining {
        let Some(current) = self.next else {
            return Remaining::Exact(0);
        };
        let step = self.step.widen();
        let distance = match step.signum() {
            0 => return Remaining::Unbounded,
            1 => T::MAX.widen() - current.widen(),
            _ => current.widen() - T::MIN.widen(),
        };
        Remaining::Exact(distance.unsigned_abs() / step.unsigned_abs() + 1)
    }
}

// =============================================================================
// cycle
// =============================================================================

/// The sequence returned by [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    buffer: Vec<I::Item>,
    position: usize,
}

/// Replays `source`, then loops over everything it produced, forever.
///
/// Elements are buffered as they pass through the first time. A source that
/// produces nothing gives an empty cycle.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, cycle, take};
///
/// assert_eq!(as_array(take(cycle(vec!['a', 'b']), 5)), vec!['a', 'b', 'a', 'b', 'a']);
/// assert_eq!(cycle(Vec::<char>::new()).next(), None);
/// ```
pub fn cycle<S>(source: S) -> Cycle<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Cycle {
        source: Some(source.into_iter()),
        buffer: Vec::new(),
        position: 0,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = &mut self.source {
            if let Some(item) = source.next() {
                self.buffer.push(item.clone());
                return Some(item);
            }
            self.source = None;
            tracing::trace!(buffered = self.buffer.len(), "cycle source exhausted, replaying buffer");
        }

        let item = self.buffer.get(self.position).cloned()?;
        self.position = (self.position + 1) % self.buffer.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            None if self.buffer.is_empty() => (0, Some(0)),
            None => (usize::MAX, None),
            Some(source) => {
                let (lower, _) = source.size_hint();
                if lower > 0 || !self.buffer.is_empty() {
                    (usize::MAX, None)
                } else {
                    (0, None)
                }
            }
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// repeat
// =============================================================================

/// Produces `value` forever.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, repeat, take};
///
/// assert_eq!(as_array(take(repeat("x"), 3)), vec!["x", "x", "x"]);
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    std::iter::repeat(value)
}

assert_impl_all!(Range<i32>: Send, Sync, Clone);
assert_impl_all!(Count<u64>: Send, Sync, Clone);
assert_impl_all!(Cycle<std::vec::IntoIter<String>>: Send, Sync, Clone);
