use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use pipe_loop::perception::load_grid;
use pipe_loop::solver::{run_batch, solve};

/// Pipe-loop solver: farthest loop point and enclosed cell count.
#[derive(Parser, Debug)]
#[command(name = "pipe-loop", version, about)]
struct Cli {
    /// Grid file, or a directory of `*.txt` grids
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if cli.input.is_dir() {
        info!("running batch over {}", cli.input.display());
        let report = run_batch(&cli.input)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.print_summary();
        }
        return Ok(());
    }

    let grid = load_grid(&cli.input)?;
    let result = solve(&grid).with_context(|| format!("cannot solve {}", cli.input.display()))?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.half_length);
        println!("{}", result.enclosed);
    }
    Ok(())
}
