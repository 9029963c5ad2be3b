use std::path::Path;

use clap::Parser;
use miette::Result;
use shadowpaste::cli::{Cli, Commands};
use shadowpaste::config::Config;
use shadowpaste::output::Printer;

fn main() -> Result<()> {
    let Cli {
        config,
        quiet,
        command,
    } = Cli::parse();

    let printer = if quiet { Printer::quiet() } else { Printer::new() };
    let load_config = || Config::discover(config.as_deref(), Path::new("."));

    match command {
        Commands::Merge(args) => {
            let config = load_config()?;
            shadowpaste::cli::merge::run(args, &config, &printer)?;
        }
        Commands::Locate(args) => {
            let config = load_config()?;
            shadowpaste::cli::locate::run(args, &config, &printer)?;
        }
        Commands::Init(args) => shadowpaste::cli::init::run(args, &printer)?,
        Commands::Completions(args) => shadowpaste::cli::completions::run(args)?,
    }

    Ok(())
}
