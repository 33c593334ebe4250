//! Slicing operators: prefixes, suffixes, chunks and sliding windows.
//!
//! `chunked` and `windowed` validate their sizes when they are called, and
//! their pointfree forms validate before returning, so a bad size is
//! reported before any element is consumed.

use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator, Skip, SkipWhile, Take, TakeWhile};

use itertricks_derive::pointfree;

use crate::curry::curry2;
use crate::error::SequenceError;

/// Yields at most the first `count` elements.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, take};
///
/// assert_eq!(as_array(take(vec![1, 2, 3], 2)), vec![1, 2]);
/// assert_eq!(as_array(take(vec![1, 2, 3], 10)), vec![1, 2, 3]);
/// ```
#[pointfree]
pub fn take<S>(source: S, count: usize) -> Take<S::IntoIter>
where
    S: IntoIterator,
{
    source.into_iter().take(count)
}

/// Yields elements while `predicate` holds, excluding the first failure.
#[pointfree]
pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().take_while(predicate)
}

/// Skips the first `count` elements and yields the rest.
#[pointfree]
pub fn drop<S>(source: S, count: usize) -> Skip<S::IntoIter>
where
    S: IntoIterator,
{
    source.into_iter().skip(count)
}

/// Skips elements while `predicate` holds, then yields everything after.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, drop_while};
///
/// let rest = drop_while(vec![1, 2, 5, 1], |value| *value < 3);
/// assert_eq!(as_array(rest), vec![5, 1]);
/// ```
#[pointfree]
pub fn drop_while<S, P>(source: S, predicate: P) -> SkipWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().skip_while(predicate)
}

// =============================================================================
// chunked
// =============================================================================

/// The sequence returned by [`chunked`].
#[derive(Debug, Clone)]
pub struct Chunked<I> {
    source: Fuse<I>,
    size: usize,
}

/// Groups consecutive elements into vectors of `size`.
///
/// The final chunk is shorter when the source does not divide evenly.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{as_array, chunked};
///
/// assert_eq!(chunked(vec![0, 1, 2, 3], 2).map(as_array), Ok(vec![vec![0, 1], vec![2, 3]]));
/// assert_eq!(chunked(vec![0, 1, 2], 2).map(as_array), Ok(vec![vec![0, 1], vec![2]]));
/// assert!(chunked(vec![0], 0).is_err());
/// ```
pub fn chunked<S>(source: S, size: usize) -> Result<Chunked<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
{
    let size = validate_size("chunked", size)?;
    Ok(Chunked {
        source: source.into_iter().fuse(),
        size,
    })
}

/// Pointfree form of [`chunked`].
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSize`] if `size` is zero.
pub fn chunked_with<S>(size: usize) -> Result<impl Fn(S) -> Chunked<S::IntoIter> + Clone, SequenceError>
where
    S: IntoIterator,
{
    let size = validate_size("chunked", size)?;
    Ok(curry2(
        |source: S, size: usize| Chunked {
            source: source.into_iter().fuse(),
            size,
        },
        size,
    ))
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.source.by_ref().take(self.size).collect();
        (!chunk.is_empty()).then_some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (lower.div_ceil(self.size), upper.map(|upper| upper.div_ceil(self.size)))
    }
}

impl<I: Iterator> FusedIterator for Chunked<I> {}

// =============================================================================
// windowed
// =============================================================================

/// Options for [`windowed`].
///
/// Each setter returns a new value; the defaults are a step of one and no
/// partial window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowOptions {
    step: usize,
    partial_window: bool,
}

impl WindowOptions {
    /// The default options: step `1`, no partial window.
    pub const DEFAULT: Self = Self {
        step: 1,
        partial_window: false,
    };

    /// Starts a new window every `step` elements.
    #[must_use]
    pub const fn with_step(self, step: usize) -> Self {
        Self { step, ..self }
    }

    /// Whether to emit the trailing window shorter than the window size.
    #[must_use]
    pub const fn with_partial_window(self, partial_window: bool) -> Self {
        Self {
            partial_window,
            ..self
        }
    }

    /// The distance between the starts of consecutive windows.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Whether the trailing partial window is emitted.
    pub const fn partial_window(&self) -> bool {
        self.partial_window
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The sequence returned by [`windowed`].
#[derive(Debug, Clone)]
pub struct Windowed<I: Iterator> {
    source: Fuse<I>,
    buffer: VecDeque<I::Item>,
    size: usize,
    step: usize,
    partial_window: bool,
    pending_skip: usize,
    finished: bool,
}

/// Yields sliding windows of `size` consecutive elements.
///
/// A new window starts every `options.step()` elements; when the step is
/// larger than the window, the elements in between belong to no window.
/// Windows shorter than `size` can only occur at the end. They are dropped
/// unless `options.partial_window()` is set, in which case the single
/// remaining buffer is emitted once.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSize`] if `size` is zero and
/// [`SequenceError::InvalidStep`] if the step is zero.
///
/// # Examples
///
/// ```rust
/// use itertricks::sequence::{WindowOptions, as_array, windowed};
///
/// let full = windowed(vec![1, 2, 3, 4, 5], 3, WindowOptions::default());
/// assert_eq!(full.map(as_array), Ok(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]));
///
/// let options = WindowOptions::default().with_partial_window(true);
/// let partial = windowed(vec![1, 2, 3, 4, 5], 3, options);
/// assert_eq!(
///     partial.map(as_array),
///     Ok(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5]])
/// );
/// ```
pub fn windowed<S>(
    source: S,
    size: usize,
    options: WindowOptions,
) -> Result<Windowed<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let size = validate_window(size, options)?;
    Ok(Windowed::new(source.into_iter(), size, options))
}

/// Pointfree form of [`windowed`].
///
/// # Errors
///
/// Returns the same errors as [`windowed`], before any source is supplied.
pub fn windowed_with<S>(
    size: usize,
    options: WindowOptions,
) -> Result<impl Fn(S) -> Windowed<S::IntoIter> + Clone, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let size = validate_window(size, options)?;
    Ok(curry2(
        move |source: S, options: WindowOptions| Windowed::new(source.into_iter(), size, options),
        options,
    ))
}

impl<I: Iterator> Windowed<I> {
    fn new(source: I, size: usize, options: WindowOptions) -> Self {
        Self {
            source: source.fuse(),
            buffer: VecDeque::with_capacity(size),
            size,
            step: options.step,
            partial_window: options.partial_window,
            pending_skip: 0,
            finished: false,
        }
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.pending_skip > 0 {
            if self.source.next().is_none() {
                self.pending_skip = 0;
                break;
            }
            self.pending_skip -= 1;
        }

        while self.buffer.len() < self.size {
            let Some(item) = self.source.next() else {
                self.finished = true;
                let emit_partial = self.partial_window && !self.buffer.is_empty();
                return emit_partial.then(|| self.buffer.drain(..).collect());
            };
            self.buffer.push_back(item);
        }

        let window: Vec<_> = self.buffer.iter().cloned().collect();
        let advance = self.step.min(self.size);
        self.buffer.drain(..advance);
        self.pending_skip = self.step - advance;
        Some(window)
    }
}

impl<I> FusedIterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

fn validate_size(operator: &'static str, size: usize) -> Result<usize, SequenceError> {
    if size == 0 {
        tracing::debug!(operator, size, "rejected window size");
        return Err(SequenceError::InvalidSize { operator, size });
    }
    Ok(size)
}

fn validate_window(size: usize, options: WindowOptions) -> Result<usize, SequenceError> {
    let size = validate_size("windowed", size)?;
    if options.step == 0 {
        tracing::debug!(step = options.step, "rejected window step");
        return Err(SequenceError::InvalidStep {
            operator: "windowed",
            step: options.step,
        });
    }
    Ok(size)
}
