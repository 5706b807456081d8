//! Benchmark workloads for the gapless containers.
//!
//! Provides deterministic, seed-driven operation sequences so bench runs
//! are comparable across machines and commits:
//!
//! - [`mixed_workload`]: seeded push/pop mix that trends upward and
//!   exercises growth
//! - [`run_stack`]: apply a workload to a fresh [`LifoStack`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gapless::LifoStack;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single stack operation in a generated workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOp {
    /// Push the given value.
    Push(u64),
    /// Pop the top value. Runners skip the pop when the stack is empty.
    Pop,
}

/// Generate a deterministic mixed push/pop workload.
///
/// Roughly two pushes for every pop, so the stack trends upward and the
/// backing sequence keeps growing. Same seed, same sequence.
pub fn mixed_workload(seed: u64, ops: usize) -> Vec<StackOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..ops)
        .map(|_| {
            if rng.random_range(0..3u8) < 2 {
                StackOp::Push(rng.random())
            } else {
                StackOp::Pop
            }
        })
        .collect()
}

/// Apply a workload to a fresh stack, ignoring pops on empty.
///
/// Returns the final stack length so callers can keep the result live.
pub fn run_stack(ops: &[StackOp]) -> usize {
    let mut stack = LifoStack::new();
    for op in ops {
        match op {
            StackOp::Push(v) => stack.push(*v).expect("stack push failed"),
            StackOp::Pop => {
                let _ = stack.pop();
            }
        }
    }
    stack.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_workload_is_deterministic() {
        let a = mixed_workload(42, 1000);
        let b = mixed_workload(42, 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = mixed_workload(42, 1000);
        let b = mixed_workload(43, 1000);
        assert_ne!(a, b);
    }

    #[test]
    fn mixed_workload_trends_upward() {
        let ops = mixed_workload(42, 10_000);
        let final_len = run_stack(&ops);
        // ~2/3 pushes to ~1/3 pops leaves the stack well above empty.
        assert!(final_len > 1000, "final length {final_len} unexpectedly low");
    }
}
