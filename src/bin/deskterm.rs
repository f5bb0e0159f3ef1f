//! Deskterm CLI Binary
//!
//! Command-line interface for the virtual filesystem terminal.

use anyhow::Context;
use clap::Parser;
use deskterm::config::ConfigLoader;
use deskterm::logging::init_logging;
use deskterm::tooling::cli::{Cli, CliContext, Commands};
use std::io;
use std::process;

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigLoader::load().context("loading config")?,
    };
    cli.apply_logging_overrides(&mut config);
    init_logging(Some(&config.logging)).context("initializing logging")?;

    if let Some(fs) = &cli.fs {
        config.filesystem.definition = Some(fs.clone());
    }
    let context = CliContext::from_config(config).context("building virtual filesystem")?;

    match &cli.command {
        Commands::Repl { no_color } => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            context.run_repl(stdin.lock(), &mut stdout, !no_color)?;
        }
        command => {
            let output = context.execute(command)?;
            println!("{}", output);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
