//! Collapse runs of equal values in an ascending slice.
//!
//! Input is assumed sorted but never checked. Unsorted input only collapses
//! adjacent equal values, which is still well defined, just not "distinct".

#[cfg(test)]
mod proptest;

/// Copy one representative of every run into a new `Vec`, preserving order.
///
/// Compares by value, so runs of large numbers collapse just like small ones.
#[must_use]
pub fn dedup_sorted<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if out.last() != Some(value) {
            out.push(value.clone());
        }
    }
    out
}

/// In-place variant of [`dedup_sorted`] using O(1) extra space.
///
/// `i` is the last kept element, `j` scans ahead for the next run.
pub fn dedup_sorted_in_place<T: PartialEq>(vec: &mut Vec<T>) {
    // no sortedness assert: unsorted input only collapses adjacent runs
    let s = vec.as_mut_slice();
    if s.len() <= 1 {
        return;
    }
    let mut i = 0;
    let mut j = 1;
    loop {
        while j < s.len() && s[i] == s[j] {
            j += 1;
        }
        if j == s.len() {
            break;
        }
        i += 1;
        s.swap(i, j);
        j += 1;
    }
    vec.truncate(i + 1);
}
