//! CLI entry point for the match-and-cascade puzzle simulator

use clap::Parser;
use jellyfield::io::cli::{Cli, SimulationRunner};

fn main() -> jellyfield::Result<()> {
    let cli = Cli::parse();
    let mut runner = SimulationRunner::new(cli);
    runner.run()
}
