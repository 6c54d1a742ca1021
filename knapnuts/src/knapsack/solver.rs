use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::knapsack::{Item, max_value_greedy_pqueue, max_value_greedy_sort, max_value_iterative};
use crate::{Error, Result};

/// Common interface of the unbounded knapsack strategies, so they can be swapped freely.
pub trait KnapsackSolver {
    /// Human readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Maximum value obtainable within `capacity`, taking any number of copies of each item type.
    fn max_value(&self, capacity: u64, items: &[Item]) -> Result<u64>;
}

/// Exact solver, see [`max_value_iterative`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicProgramming;

/// Greedy heuristic with a priority queue, see [`max_value_greedy_pqueue`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPQueue;

/// Greedy heuristic with in-place sorting, see [`max_value_greedy_sort`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySort;

impl KnapsackSolver for DynamicProgramming {
    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn max_value(&self, capacity: u64, items: &[Item]) -> Result<u64> {
        max_value_iterative(capacity, items)
    }
}

impl KnapsackSolver for GreedyPQueue {
    fn name(&self) -> &'static str {
        "Greedy p-queue"
    }

    fn max_value(&self, capacity: u64, items: &[Item]) -> Result<u64> {
        Ok(max_value_greedy_pqueue(capacity, items))
    }
}

impl KnapsackSolver for GreedySort {
    fn name(&self) -> &'static str {
        "Greedy sorting"
    }

    fn max_value(&self, capacity: u64, items: &[Item]) -> Result<u64> {
        //sorting happens on a copy, the caller's order is left untouched
        let mut items = items.to_vec();
        Ok(max_value_greedy_sort(capacity, &mut items))
    }
}

/// Selects one of the available [`KnapsackSolver`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "dp")]
    DynamicProgramming,
    #[serde(rename = "greedy-pqueue")]
    GreedyPQueue,
    #[serde(rename = "greedy-sort")]
    GreedySort,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DynamicProgramming,
        Strategy::GreedyPQueue,
        Strategy::GreedySort,
    ];

    pub fn solver(&self) -> &'static dyn KnapsackSolver {
        match self {
            Strategy::DynamicProgramming => &DynamicProgramming,
            Strategy::GreedyPQueue => &GreedyPQueue,
            Strategy::GreedySort => &GreedySort,
        }
    }

    /// Whether the strategy always returns the optimal value.
    pub fn is_exact(&self) -> bool {
        matches!(self, Strategy::DynamicProgramming)
    }

    fn key(&self) -> &'static str {
        match self {
            Strategy::DynamicProgramming => "dp",
            Strategy::GreedyPQueue => "greedy-pqueue",
            Strategy::GreedySort => "greedy-sort",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.key() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown strategy {s:?}, expected one of [dp, greedy-pqueue, greedy-sort]"
                ))
            })
    }
}
