use std::cmp::Ordering;

use itertools::Itertools;

use crate::knapsack::{Item, best_first};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every nut fits the bolt at the same position.
pub fn is_matched<N, B, F>(nuts: &[N], bolts: &[B], cmp: F) -> bool
where
    F: Fn(&N, &B) -> Ordering,
{
    nuts.len() == bolts.len() && nuts.iter().zip(bolts).all(|(n, b)| cmp(n, b).is_eq())
}

/// The items are ordered from most to least attractive for the greedy strategies.
pub fn sorted_best_first(items: &[Item]) -> bool {
    items
        .iter()
        .tuple_windows()
        .all(|(a, b)| best_first(a, b) != Ordering::Greater)
}
