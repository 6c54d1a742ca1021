mod dynamic;
mod greedy_pqueue;
mod greedy_sort;
mod item;
mod solver;

#[doc(inline)]
pub use dynamic::max_value_iterative;
#[doc(inline)]
pub use greedy_pqueue::max_value_greedy_pqueue;
#[doc(inline)]
pub use greedy_sort::max_value_greedy_sort;
#[doc(inline)]
pub use item::{Item, best_first};
#[doc(inline)]
pub use solver::{DynamicProgramming, GreedyPQueue, GreedySort, KnapsackSolver, Strategy};

/// The classic set of cake types: every cake is worth exactly its weight.
pub fn classic_cakes() -> Vec<Item> {
    [(2, 2), (3, 3), (5, 5), (6, 6)]
        .into_iter()
        .map(|(w, v)| Item::new(w, v).expect("classic cakes have positive weights"))
        .collect()
}
