//! Main entry point for the layerconf CLI.
//!
//! Commands operate on a single config file located through the global
//! options:
//! - `get`: Print the resolved value of a key
//! - `set`: Set a key in the config file
//! - `unset`: Remove a key from the config file
//! - `show`: Print every setting from the config file
//! - `path`: Print the config file location

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

/// Parse arguments, exiting with the invalid-arguments code on bad input.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(CliError::from(e).exit_code());
        }
    }
}

fn main() {
    let cli = parse_cli();

    // Route library diagnostics to stderr at the requested verbosity
    let logger = layerconf::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_name: cli.config_name,
        config_type: cli.config_type,
        config_paths: cli.config_paths,
        env_prefix: cli.env_prefix,
        no_env: cli.no_env,
        flags: cli.flags.into_iter().collect(),
    };

    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Unset(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
