use knapnuts::knapsack::Strategy;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::{Deserialize, Serialize};

/// Configuration of the demo drivers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed for the PRNG. If undefined, the drivers run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Knapsack strategies to run, in this order
    pub strategies: Vec<Strategy>,
    /// Sequences longer than this are truncated when printed
    pub print_limit: usize,
}

impl DemoConfig {
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub fn rng(&self) -> SmallRng {
        match self.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            strategies: Strategy::ALL.to_vec(),
            print_limit: 50,
        }
    }
}
