use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::knapsack::item::{Item, best_first};

/// Greedy heuristic for the unbounded knapsack, driven by a priority queue.
///
/// A pass pops item types in order of preference (see [`best_first`]) and takes as many copies of
/// each as still fit. Ties in ratio make the greedy choice ambiguous, so when a pass encounters
/// two consecutive items with equal ratios, it is repeated without the item that was at the head
/// of the queue. The best value of all passes is returned.
///
/// This is a heuristic: it is exact for some item sets (all ratios equal, for example) but in
/// general it can return less than [`max_value_iterative`](crate::knapsack::max_value_iterative).
/// Always agrees with [`max_value_greedy_sort`](crate::knapsack::max_value_greedy_sort).
///
/// Every pass works on a full copy of the queue: time O(items² log items), space O(items).
pub fn max_value_greedy_pqueue(capacity: u64, items: &[Item]) -> u64 {
    let mut queue = items.iter().copied().map(Ranked).collect::<BinaryHeap<_>>();

    let mut max_value = 0;
    let mut n_passes = 0;
    while !queue.is_empty() {
        let mut pass_queue = queue.clone();
        let mut remaining = capacity;
        let mut value = 0u64;
        let mut prev: Option<Item> = None;
        let mut repeat = false;

        while remaining > 0 {
            let Some(Ranked(item)) = pass_queue.pop() else {
                break;
            };
            if prev.is_some_and(|p| p.ratio_cmp(&item).is_eq()) {
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
        // retry, starting with the next item type
        queue.pop();
    }

    debug!(
        "[GREEDY] p-queue: capacity {}, {} passes, best value {}",
        capacity, n_passes, max_value
    );

    max_value
}

/// Orders items in a max-heap so that the preferred item is on top.
#[derive(Clone, Copy, Debug)]
struct Ranked(Item);

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        best_first(&other.0, &self.0)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Ranked {}
