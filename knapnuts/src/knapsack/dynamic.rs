use log::debug;

use crate::knapsack::Item;
use crate::{Error, Result};

/// Maximum value obtainable within `capacity` when every item type can be taken any number of times.
///
/// Bottom-up dynamic programming over a single table `best[0..=capacity]`, where `best[k]` is the
/// best value found so far for weight `k`.
/// The items are processed one after the other and each is propagated forward through the table,
/// so a single pass per item already accounts for taking it repeatedly.
///
/// Time O(items × capacity), space O(capacity).
///
/// # Errors
/// [`Error::InvalidInput`] if a table of `capacity + 1` entries cannot be allocated.
pub fn max_value_iterative(capacity: u64, items: &[Item]) -> Result<u64> {
    let too_large = || Error::InvalidInput(format!("capacity {capacity} is too large to tabulate"));

    let cap = usize::try_from(capacity)
        .ok()
        .filter(|c| *c < usize::MAX)
        .ok_or_else(too_large)?;

    let mut best: Vec<u64> = Vec::new();
    best.try_reserve_exact(cap + 1).map_err(|_| too_large())?;
    best.resize(cap + 1, 0);

    for item in items {
        // heavier than the capacity, can never be taken
        let Some(weight) = usize::try_from(item.weight()).ok().filter(|w| *w <= cap) else {
            continue;
        };
        for k in 0..=(cap - weight) {
            let candidate = best[k].saturating_add(item.value());
            if candidate > best[k + weight] {
                best[k + weight] = candidate;
            }
        }
    }

    debug!(
        "[DP] capacity {}, {} item types, best value {}",
        capacity,
        items.len(),
        best[cap]
    );

    Ok(best[cap])
}
