//! CLI entry point for the frontier-driven map generator

use clap::Parser;
use growtiles::io::cli::{Cli, GenerationRunner};

fn main() -> growtiles::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}
