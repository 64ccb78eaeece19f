//! Bottom-up vs top-down: small algorithms shown in both a recursive and an
//! iterative shape, with the recursive stack hazard made observable.

pub mod dedup;
pub mod factorial;
pub mod list;
pub mod stopwatch;

pub use dedup::{dedup_sorted, dedup_sorted_in_place};
pub use factorial::{
    FactorialError, StackBudget, factorial_checked, factorial_iterative, factorial_recursive,
};
pub use list::{Link, List, Node, dedup_sorted_list};
pub use stopwatch::{StopWatch, StopWatchError, TaskInfo};
