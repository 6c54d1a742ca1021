use knapnuts::knapsack::{Item, Strategy};
use serde::Serialize;

use crate::config::DemoConfig;

#[derive(Serialize, Clone, Debug)]
pub struct KnapsackOutput {
    pub capacity: u64,
    pub items: Vec<Item>,
    pub results: Vec<StrategyOutcome>,
    pub config: DemoConfig,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub value: u64,
    pub elapsed_ms: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct NutsBoltsOutput {
    pub n: usize,
    pub before: Sequences,
    pub after: Sequences,
    pub elapsed_ms: f64,
    pub config: DemoConfig,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Sequences {
    pub nuts: Vec<usize>,
    pub bolts: Vec<usize>,
}
