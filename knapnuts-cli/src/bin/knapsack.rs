use anyhow::Result;
use clap::Parser as ClapParser;
use knapnuts::knapsack::classic_cakes;
use knapnuts_cli::io;
use knapnuts_cli::io::cli::KnapsackCli;
use knapnuts_cli::demo::run_knapsack;
use log::info;

fn main() -> Result<()> {
    let args = KnapsackCli::parse();
    io::init_logger(args.common.log_level)?;

    let mut config = io::load_config(args.common.config_file.as_deref())?;
    if !args.strategies.is_empty() {
        config.strategies = args.strategies;
    }

    let items = match args.items.is_empty() {
        true => {
            info!("[MAIN] No items provided, using the classic cakes");
            classic_cakes()
        }
        false => args.items,
    };

    let output = run_knapsack(args.capacity, items, &config)?;

    for outcome in &output.results {
        println!(
            "{} solution takes {:.3} ms - result {}",
            outcome.strategy.solver().name(),
            outcome.elapsed_ms,
            outcome.value
        );
    }

    if let Some(path) = args.common.output_file {
        io::write_json(&output, &path)?;
    }

    Ok(())
}
