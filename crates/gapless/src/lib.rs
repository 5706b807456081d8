//! Contiguous growable sequence and LIFO stack primitives.
//!
//! Two small containers with explicit capacity accounting:
//!
//! - [`GrowSeq`]: a single contiguous, index-addressable sequence with
//!   amortized O(1) append via capacity doubling.
//! - [`LifoStack`]: a stack that delegates every operation to a
//!   [`GrowSeq`]'s end.
//!
//! # Growth policy
//!
//! A sequence starts with capacity 1. When an append finds the backing
//! block full, a block of exactly twice the capacity is reserved, the
//! elements are moved into it in order, and the old block is released.
//! Across N appends the total moves stay below 2N, which is what makes
//! append O(1) amortized; the sequence exposes
//! [`growth_count`](GrowSeq::growth_count) and
//! [`elements_moved`](GrowSeq::elements_moved) so callers can observe the
//! schedule directly.
//!
//! Errors are explicit: out-of-range reads, pops from an empty stack, and
//! failed growth reservations all come back as typed errors, never panics.
//! A failed growth leaves the sequence exactly as it was.
//!
//! # Quick start
//!
//! ```rust
//! use gapless::{GrowSeq, LifoStack};
//!
//! let mut seq = GrowSeq::new();
//! seq.append("a").unwrap();
//! seq.append("b").unwrap();
//! assert_eq!(*seq.get(1).unwrap(), "b");
//! assert_eq!(seq.capacity(), 2);
//!
//! let mut stack = LifoStack::new();
//! stack.push(5).unwrap();
//! stack.push(3).unwrap();
//! assert_eq!(stack.pop().unwrap(), 3);
//! assert_eq!(stack.pop().unwrap(), 5);
//! assert!(stack.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod seq;
pub mod stack;

// Public re-exports for the primary API surface.
pub use error::{SequenceError, StackError};
pub use seq::GrowSeq;
pub use stack::LifoStack;
