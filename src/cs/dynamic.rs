//! Dynamic-programming algorithms.
//!
//! - [`knapsack`]: 0-1 knapsack by bottom-up tabulation
//! - [`longest_increasing_subsequence`]: LIS length and reconstruction

pub mod knapsack;
pub mod longest_increasing_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use knapsack::{
    knapsack_max_value, knapsack_max_value_compact, knapsack_solution, KnapsackSolution,
};
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_indices,
    longest_increasing_subsequence_length,
};
