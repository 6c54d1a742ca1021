use log::debug;

use crate::knapsack::item::{Item, best_first};
use crate::util::assertions;

/// Greedy heuristic for the unbounded knapsack, working on a sorted slice.
///
/// Same heuristic as [`max_value_greedy_pqueue`](crate::knapsack::max_value_greedy_pqueue):
/// `items` is sorted once, in place, in order of preference (see [`best_first`]) and every retry
/// pass starts one position further into the slice instead of rebuilding a queue.
///
/// Time O(items log items) for the sort plus O(items²) for the passes, no extra space.
pub fn max_value_greedy_sort(capacity: u64, items: &mut [Item]) -> u64 {
    items.sort_unstable_by(best_first);
    debug_assert!(assertions::sorted_best_first(items));

    let mut max_value = 0;
    let mut n_passes = 0;
    for start in 0..items.len() {
        let mut remaining = capacity;
        let mut value = 0u64;
        let mut prev: Option<&Item> = None;
        let mut repeat = false;

        for item in &items[start..] {
            if remaining == 0 {
                break;
            }
            if prev.is_some_and(|p| p.ratio_cmp(item).is_eq()) {
                repeat = true;
            }
            prev = Some(item);

            let (gained, left) = item.fill(remaining);
            value = value.saturating_add(gained);
            remaining = left;
        }
        n_passes += 1;
        max_value = max_value.max(value);

        if !repeat {
            break;
        }
    }

    debug!(
        "[GREEDY] sort: capacity {}, {} passes, best value {}",
        capacity, n_passes, max_value
    );

    max_value
}
