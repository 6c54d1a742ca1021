use anyhow::Result;
use clap::Parser as ClapParser;
use knapnuts_cli::demo::{format_sequence, run_nuts_bolts};
use knapnuts_cli::io;
use knapnuts_cli::io::cli::NutsBoltsCli;

fn main() -> Result<()> {
    let args = NutsBoltsCli::parse();
    io::init_logger(args.common.log_level)?;

    let config = io::load_config(args.common.config_file.as_deref())?;
    let output = run_nuts_bolts(args.n, &config)?;
    let limit = config.print_limit;

    println!("Before sorting:");
    println!("{}", format_sequence(&output.before.nuts, limit));
    println!("{}", format_sequence(&output.before.bolts, limit));

    println!("After sorting:");
    println!("{}", format_sequence(&output.after.nuts, limit));
    println!("{}", format_sequence(&output.after.bolts, limit));

    println!("Matching takes {:.3} ms", output.elapsed_ms);

    if let Some(path) = args.common.output_file {
        io::write_json(&output, &path)?;
    }

    Ok(())
}
