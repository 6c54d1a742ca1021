use std::path::PathBuf;

use clap::{Args, Parser};
use knapnuts::Error;
use knapnuts::knapsack::{Item, Strategy};
use log::LevelFilter;

/// Arguments shared by both drivers.
#[derive(Args, Debug)]
pub struct CommonArgs {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Write a JSON report of the run to this file
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// Solves an unbounded knapsack ("cake thief") instance with several strategies.
#[derive(Parser, Debug)]
#[command(name = "knapsack", author, version, about)]
pub struct KnapsackCli {
    /// Weight capacity of the knapsack
    #[arg(value_parser = parse_capacity, allow_negative_numbers = true)]
    pub capacity: u64,
    /// Item types as <weight>:<value>, the classic cakes 2:2 3:3 5:5 6:6 when omitted
    #[arg(value_name = "WEIGHT:VALUE")]
    pub items: Vec<Item>,
    /// Strategy to run, can be repeated [dp, greedy-pqueue, greedy-sort]. Overrides the config file
    #[arg(short, long = "strategy", value_name = "STRATEGY")]
    pub strategies: Vec<Strategy>,
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Matches a random instance of nuts and bolts.
#[derive(Parser, Debug)]
#[command(name = "nutsbolts", author, version, about)]
pub struct NutsBoltsCli {
    /// Number of nut and bolt pairs
    pub n: usize,
    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_capacity(s: &str) -> Result<u64, Error> {
    s.trim().parse::<u64>().map_err(|_| {
        Error::InvalidInput(format!(
            "capacity must be a non-negative integer, got {s:?}"
        ))
    })
}
