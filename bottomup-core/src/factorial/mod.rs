//! `n!` computed top-down (recursion) and bottom-up (a loop).
//!
//! Both strategies use wrapping `u64` multiplication: from `21!` on the value
//! is only correct modulo 2^64, and from `66!` on it is zero. Use
//! [`factorial_checked`] when an exact answer matters.

mod stack;

pub use stack::StackBudget;
use stack::{Exhausted, StackProbe};
use std::{io, thread};

#[derive(Debug, thiserror::Error)]
pub enum FactorialError {
    #[error(
        "stack exhausted computing {n}! at depth {depth}: {used_bytes} bytes used, budget {budget} bytes"
    )]
    StackExhausted {
        n: u64,
        depth: u64,
        used_bytes: usize,
        budget: usize,
    },
    #[error("failed to spawn recursion thread")]
    Spawn(#[source] io::Error),
}

/// Bottom-up: one accumulator, constant stack.
#[must_use]
pub fn factorial_iterative(n: u64) -> u64 {
    let mut result = 1_u64;
    for k in 1..=n {
        result = result.wrapping_mul(k);
    }
    result
}

/// Exact `n!`, or `None` if it does not fit in a `u64` (`n > 20`).
#[must_use]
pub fn factorial_checked(n: u64) -> Option<u64> {
    (1..=n).try_fold(1_u64, u64::checked_mul)
}

/// Top-down: `n * (n - 1)!`, one stack frame per factor.
///
/// Runs on a dedicated thread whose stack is sized from `budget`. Once the
/// recursion has consumed more than `budget` bytes it unwinds with
/// [`FactorialError::StackExhausted`] instead of overflowing.
///
/// # Errors
///
/// [`FactorialError::StackExhausted`] when the recursion outgrows `budget`,
/// [`FactorialError::Spawn`] if the thread cannot be created.
pub fn factorial_recursive(n: u64, budget: StackBudget) -> Result<u64, FactorialError> {
    let stack_size = budget.thread_stack_size();
    let handle = thread::Builder::new()
        .name("factorial-recursive".to_owned())
        .stack_size(stack_size)
        .spawn(move || {
            let probe = StackProbe::new(budget);
            product_to(n, &probe, 0)
        })
        .map_err(FactorialError::Spawn)?;
    tracing::debug!(n, stack_size, "spawned recursion thread");

    let result = match handle.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    };
    result.map_err(|Exhausted { depth, used_bytes }| {
        tracing::debug!(n, depth, used_bytes, "recursion cut off");
        FactorialError::StackExhausted {
            n,
            depth,
            used_bytes,
            budget: budget.bytes(),
        }
    })
}

fn product_to(n: u64, probe: &StackProbe, depth: u64) -> Result<u64, Exhausted> {
    probe.check(depth)?;
    if n <= 1 {
        return Ok(1);
    }
    // keep the multiplication pending in this frame
    let rest = std::hint::black_box(product_to(n - 1, probe, depth + 1)?);
    Ok(n.wrapping_mul(rest))
}
