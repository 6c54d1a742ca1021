//! Two small, independent algorithm families:
//!
//! * [`knapsack`]: the unbounded knapsack ("cake thief") problem, solved exactly by dynamic
//!   programming and heuristically by two greedy variants.
//! * [`nuts_bolts`]: sorting two permuted sequences into mutually matching order using only
//!   cross-sequence comparisons.

/// Error type shared by both algorithm families.
pub mod error;

/// Unbounded knapsack solvers.
pub mod knapsack;

/// Randomized nuts-and-bolts matcher.
pub mod nuts_bolts;

/// Helpers to verify the state of inputs and results.
pub mod util;

#[doc(inline)]
pub use error::{Error, Result, Violation};
