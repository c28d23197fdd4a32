//! CLI structure and command definitions.
//!
//! Global options describe where the config file lives and which override
//! tiers are active; subcommands act on the resulting store.

use crate::commands::{
    CompletionsCommand, GetCommand, PathCommand, SetCommand, ShowCommand, UnsetCommand,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit layered configuration files.
#[derive(Parser)]
#[command(name = "layerconf")]
#[command(version, about = "Inspect and edit layered configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Config file base name, without extension
    #[arg(
        long,
        value_name = "NAME",
        global = true,
        env = "LAYERCONF_CONFIG_NAME",
        default_value = "config"
    )]
    pub config_name: String,

    /// Config file format (json, yaml or yml); also used as the extension
    #[arg(
        long,
        value_name = "TYPE",
        global = true,
        env = "LAYERCONF_CONFIG_TYPE",
        default_value = "json"
    )]
    pub config_type: String,

    /// Directory to search for the config file (repeatable, first match wins)
    #[arg(long = "config-path", value_name = "DIR", global = true, action = ArgAction::Append)]
    pub config_paths: Vec<PathBuf>,

    /// Prefix for environment variable lookups (e.g. APP -> APP_PORT)
    #[arg(long, value_name = "PREFIX", global = true)]
    pub env_prefix: Option<String>,

    /// Do not fall back to environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Override a key for this invocation (repeatable)
    #[arg(
        long = "flag",
        value_name = "KEY=VALUE",
        global = true,
        value_parser = parse_key_val
    )]
    pub flags: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved value of a key
    Get(GetCommand),

    /// Set a key in the config file
    Set(SetCommand),

    /// Remove a key from the config file
    Unset(UnsetCommand),

    /// Print every setting from the config file
    Show(ShowCommand),

    /// Print the config file location
    Path(PathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Parse a `KEY=VALUE` pair. The value may be empty; the key may not.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
