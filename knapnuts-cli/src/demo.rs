use std::fmt::Display;
use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use knapnuts::knapsack::{Item, Strategy};
use knapnuts::nuts_bolts::match_nuts_bolts_ord;
use log::{info, warn};
use rand::seq::SliceRandom;
use thousands::Separable;

use crate::config::DemoConfig;
use crate::io::output::{KnapsackOutput, NutsBoltsOutput, Sequences, StrategyOutcome};

/// Runs every configured strategy on the same instance and times them.
pub fn run_knapsack(capacity: u64, items: Vec<Item>, config: &DemoConfig) -> Result<KnapsackOutput> {
    info!(
        "[KS] capacity {} with {} item types: {}",
        capacity.separate_with_commas(),
        items.len(),
        items.iter().join(" ")
    );

    let mut results = Vec::with_capacity(config.strategies.len());
    for strategy in &config.strategies {
        let solver = strategy.solver();
        let start = Instant::now();
        let value = solver.max_value(capacity, &items)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "[KS] {} finished in {:.3}ms, value {}",
            solver.name(),
            elapsed_ms,
            value.separate_with_commas()
        );
        results.push(StrategyOutcome {
            strategy: *strategy,
            value,
            elapsed_ms,
        });
    }

    if let Some(optimum) = exact_value(&results) {
        for outcome in results.iter().filter(|r| r.value < optimum) {
            warn!(
                "[KS] {} fell {} short of the optimum",
                outcome.strategy.solver().name(),
                (optimum - outcome.value).separate_with_commas()
            );
        }
    }

    Ok(KnapsackOutput {
        capacity,
        items,
        results,
        config: config.clone(),
    })
}

fn exact_value(results: &[StrategyOutcome]) -> Option<u64> {
    results
        .iter()
        .find(|r| r.strategy.is_exact())
        .map(|r| r.value)
}

/// Matches `0..n` against itself after shuffling nuts and bolts independently.
pub fn run_nuts_bolts(n: usize, config: &DemoConfig) -> Result<NutsBoltsOutput> {
    let mut rng = config.rng();
    let mut nuts = (0..n).collect_vec();
    let mut bolts = nuts.clone();
    nuts.shuffle(&mut rng);
    bolts.shuffle(&mut rng);

    let before = Sequences {
        nuts: nuts.clone(),
        bolts: bolts.clone(),
    };

    let start = Instant::now();
    match_nuts_bolts_ord(&mut nuts, &mut bolts, &mut rng)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        "[NB] matched {} pairs in {:.3}ms",
        n.separate_with_commas(),
        elapsed_ms
    );

    Ok(NutsBoltsOutput {
        n,
        before,
        after: Sequences { nuts, bolts },
        elapsed_ms,
        config: config.clone(),
    })
}

/// Space separated listing of `seq`, eliding the middle when it has more than `limit` elements.
pub fn format_sequence<T: Display>(seq: &[T], limit: usize) -> String {
    if seq.len() <= limit {
        return seq.iter().join(" ");
    }
    let head = limit.div_ceil(2);
    let tail = limit - head;
    format!(
        "{} ... {}",
        seq[..head].iter().join(" "),
        seq[seq.len() - tail..].iter().join(" ")
    )
    .trim()
    .to_string()
}
