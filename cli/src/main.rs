mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{averages, export, graph, merge, suggest};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Graph(args) => graph::run(&cli, args),
        Commands::Merge(args) => merge::run(&cli, args),
        Commands::Averages(args) => averages::run(&cli, args),
        Commands::Suggest(args) => suggest::run(&cli, args),
        Commands::Export(args) => export::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
