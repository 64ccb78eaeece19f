//! Inputs shared by the benchmarks.

/// `len` ascending values drawn from `0..len / run` so that runs average
/// `run` elements.
#[must_use]
pub fn sorted_with_runs(len: usize, run: u32, seed: u64) -> Vec<u32> {
    let mut r = oorandom::Rand32::new(seed);
    let range = (len as u32 / run.max(1)).max(1);
    let mut v: Vec<u32> = (0..len).map(|_| r.rand_range(0..range)).collect();
    v.sort_unstable();
    v
}
