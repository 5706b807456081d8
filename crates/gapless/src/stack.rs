//! LIFO stack backed by a [`GrowSeq`].

use crate::error::StackError;
use crate::seq::GrowSeq;

/// A last-in-first-out stack.
///
/// Every operation delegates to the end of a backing [`GrowSeq`]: `push`
/// appends, `pop` and `top` read or remove the last element. All cost and
/// growth behaviour is the sequence's.
#[derive(Debug)]
pub struct LifoStack<T> {
    seq: GrowSeq<T>,
}

impl<T> LifoStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { seq: GrowSeq::new() }
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Push `element` onto the top of the stack.
    ///
    /// Fails only if the backing sequence cannot grow, surfaced as
    /// [`StackError::Sequence`]; the stack is unchanged on failure.
    pub fn push(&mut self, element: T) -> Result<(), StackError> {
        self.seq.append(element)?;
        Ok(())
    }

    /// The top element without removing it.
    ///
    /// Returns [`StackError::Empty`] on an empty stack.
    pub fn top(&self) -> Result<&T, StackError> {
        self.seq.last().ok_or(StackError::Empty)
    }

    /// Remove and return the top element.
    ///
    /// Returns [`StackError::Empty`] on an empty stack, with no state
    /// change.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.seq.remove_last().ok_or(StackError::Empty)
    }
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
