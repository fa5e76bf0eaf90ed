mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("Orbiton CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let backend = cli.backend;
    match cli.command {
        Commands::Validate(args) => commands::validate::run(args, backend),
        Commands::Positions(args) => commands::positions::run(args, backend),
        Commands::Orbital(args) => commands::orbital::run(args, backend),
        Commands::Backends => commands::backends::run(),
    }
}
