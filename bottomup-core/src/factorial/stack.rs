//! Stack accounting for recursion.
//!
//! A real stack overflow aborts the whole process, so the recursive strategy
//! runs on its own thread and compares the address of a local in the current
//! frame against the one recorded at entry. The thread gets the budget plus
//! [`HEADROOM`], so the budget is always hit before the guard page.

const DEFAULT_BUDGET: usize = 512 * 1024;
const HEADROOM: usize = 256 * 1024;

/// Bytes of stack a recursion may consume before it is cut off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackBudget {
    bytes: usize,
}

impl Default for StackBudget {
    fn default() -> Self {
        Self::from_bytes(DEFAULT_BUDGET)
    }
}

impl StackBudget {
    #[must_use]
    pub const fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }
    #[must_use]
    pub const fn from_kib(kib: usize) -> Self {
        Self::from_bytes(kib.saturating_mul(1024))
    }
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bytes
    }
    /// Size to request for the thread running the recursion.
    pub(crate) const fn thread_stack_size(self) -> usize {
        self.bytes.saturating_add(HEADROOM)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Exhausted {
    pub(crate) depth: u64,
    pub(crate) used_bytes: usize,
}

pub(crate) struct StackProbe {
    base: usize,
    limit: usize,
}

impl StackProbe {
    /// Record the current frame as the zero point.
    pub(crate) fn new(budget: StackBudget) -> Self {
        Self {
            base: stack_addr(),
            limit: budget.bytes(),
        }
    }
    pub(crate) fn used(&self) -> usize {
        // direction of growth is platform specific
        self.base.abs_diff(stack_addr())
    }
    pub(crate) fn check(&self, depth: u64) -> Result<(), Exhausted> {
        let used_bytes = self.used();
        if used_bytes > self.limit {
            Err(Exhausted { depth, used_bytes })
        } else {
            Ok(())
        }
    }
}

// Never inlined, so every caller measures from the same relative offset.
#[inline(never)]
fn stack_addr() -> usize {
    let marker = 0_u8;
    std::hint::black_box(std::ptr::from_ref(&marker)) as usize
}
