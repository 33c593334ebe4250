//! Error types for sequence construction.
//!
//! Every error in this crate is raised eagerly, at the moment an operator is
//! configured, and never after elements have started flowing. Nothing is
//! retried or recovered internally.
//!
//! # Examples
//!
//! ```rust
//! use itertricks::error::{RangeFault, SequenceError};
//! use itertricks::sequence::range_step;
//!
//! let error = range_step(1, 2, 0).unwrap_err();
//! assert_eq!(
//!     error,
//!     SequenceError::MalformedRange { start: 1, stop: 2, step: 0, fault: RangeFault::ZeroStep }
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Represents every failure an operator can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A range whose step would never reach its stop.
    #[error("malformed range from {start} to {stop} by {step}: {fault}")]
    MalformedRange {
        /// The first value of the range.
        start: i128,
        /// The inclusive bound of the range.
        stop: i128,
        /// The distance between consecutive values.
        step: i128,
        /// Why the combination is rejected.
        fault: RangeFault,
    },

    /// A chunk or window size of zero.
    #[error("invalid size {size} for {operator}: size must be greater than zero")]
    InvalidSize {
        /// The operator that rejected the size.
        operator: &'static str,
        /// The rejected size.
        size: usize,
    },

    /// A window step of zero.
    #[error("invalid step {step} for {operator}: step must be greater than zero")]
    InvalidStep {
        /// The operator that rejected the step.
        operator: &'static str,
        /// The rejected step.
        step: usize,
    },

    /// A single fold argument that does not satisfy the monoid contract.
    #[error("not a monoid: the {missing} is missing")]
    NotAMonoid {
        /// Which part of the monoid was absent.
        missing: MonoidPart,
    },

    /// A value without an iteration capability used where a sequence is required.
    #[error("not a sequence: {type_name} does not expose an iteration capability")]
    NotASequence {
        /// The type name of the offending value.
        type_name: &'static str,
    },
}

/// The reason a range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFault {
    /// The step is zero, so the range would never advance.
    ZeroStep,
    /// The step is positive but `start` is above `stop`.
    AscendingStepDescendingBounds,
    /// The step is negative but `start` is below `stop`.
    DescendingStepAscendingBounds,
}

impl fmt::Display for RangeFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(formatter, "a step of zero never advances"),
            Self::AscendingStepDescendingBounds => {
                write!(formatter, "a positive step cannot reach a stop below the start")
            }
            Self::DescendingStepAscendingBounds => {
                write!(formatter, "a negative step cannot reach a stop above the start")
            }
        }
    }
}

/// The part of a monoid that was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonoidPart {
    /// The identity element.
    Empty,
    /// The associative combining function.
    Concat,
    /// Neither the identity element nor the combining function.
    Both,
}

impl fmt::Display for MonoidPart {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "identity element"),
            Self::Concat => write!(formatter, "combining function"),
            Self::Both => write!(formatter, "identity element and combining function"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn malformed_range_display_names_bounds_and_fault() {
        let error = SequenceError::MalformedRange {
            start: 10,
            stop: 4,
            step: 1,
            fault: RangeFault::AscendingStepDescendingBounds,
        };

        assert_eq!(
            error.to_string(),
            "malformed range from 10 to 4 by 1: a positive step cannot reach a stop below the start"
        );
    }

    #[rstest]
    #[case(MonoidPart::Empty, "not a monoid: the identity element is missing")]
    #[case(MonoidPart::Concat, "not a monoid: the combining function is missing")]
    #[case(
        MonoidPart::Both,
        "not a monoid: the identity element and combining function is missing"
    )]
    fn not_a_monoid_display(#[case] missing: MonoidPart, #[case] expected: &str) {
        assert_eq!(SequenceError::NotAMonoid { missing }.to_string(), expected);
    }

    #[rstest]
    fn invalid_size_display() {
        let error = SequenceError::InvalidSize {
            operator: "chunked",
            size: 0,
        };

        assert_eq!(
            error.to_string(),
            "invalid size 0 for chunked: size must be greater than zero"
        );
    }

    #[rstest]
    fn implements_error_trait() {
        let error = SequenceError::NotASequence { type_name: "u8" };
        let _: &dyn std::error::Error = &error;
    }
}
