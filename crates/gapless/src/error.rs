//! Error types for the gapless containers.

use std::error::Error;
use std::fmt;

/// Errors from [`GrowSeq`](crate::GrowSeq) operations.
///
/// Every failure is detected synchronously at the offending call and
/// returned to the immediate caller; the sequence is never left partially
/// mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// Indexed access outside `[0, len)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Element count at the time of the call.
        len: usize,
    },
    /// Growth could not reserve a new backing block.
    ///
    /// The sequence keeps its prior block, length, and capacity.
    AllocationFailed {
        /// Capacity requested for the new block, in elements.
        requested: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to reserve backing block of {requested} elements")
            }
        }
    }
}

impl Error for SequenceError {}

/// Errors from [`LifoStack`](crate::LifoStack) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `top` called on an empty stack.
    Empty,
    /// The backing sequence failed (allocation during a push).
    Sequence(SequenceError),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "stack is empty"),
            Self::Sequence(reason) => write!(f, "backing sequence failed: {reason}"),
        }
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sequence(reason) => Some(reason),
            Self::Empty => None,
        }
    }
}

impl From<SequenceError> for StackError {
    fn from(reason: SequenceError) -> Self {
        Self::Sequence(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_index_and_len() {
        let err = SequenceError::OutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 5 out of range for sequence of length 3"
        );
    }

    #[test]
    fn stack_error_source_exposes_sequence_cause() {
        let err = StackError::from(SequenceError::AllocationFailed { requested: 8 });
        assert!(err.source().is_some());
        assert!(StackError::Empty.source().is_none());
    }
}
