//! Build script for layerconf-cli.
//!
//! Generates the man page into OUT_DIR. Build scripts cannot depend on the
//! crate being built, so the command structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("layerconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit layered configuration files")
        .long_about(
            "Read, override and persist JSON or YAML configuration, resolving keys \
             through command-line flags, the config file and environment variables",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-name")
                .long("config-name")
                .help("Config file base name, without extension")
                .value_name("NAME")
                .global(true)
                .env("LAYERCONF_CONFIG_NAME")
                .default_value("config"),
        )
        .arg(
            Arg::new("config-type")
                .long("config-type")
                .help("Config file format (json, yaml or yml); also used as the extension")
                .value_name("TYPE")
                .global(true)
                .env("LAYERCONF_CONFIG_TYPE")
                .default_value("json"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Directory to search for the config file (repeatable, first match wins)")
                .value_name("DIR")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("env-prefix")
                .long("env-prefix")
                .help("Prefix for environment variable lookups")
                .value_name("PREFIX")
                .global(true),
        )
        .arg(
            Arg::new("no-env")
                .long("no-env")
                .help("Do not fall back to environment variables")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flag")
                .long("flag")
                .help("Override a key for this invocation (repeatable)")
                .value_name("KEY=VALUE")
                .global(true)
                .action(ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Print the resolved value of a key")
                .long_about("Resolve a key through flags, the config file and the environment"),
            Command::new("set")
                .about("Set a key in the config file")
                .long_about("Set a key and write the config file to the first config path"),
            Command::new("unset")
                .about("Remove a key from the config file")
                .long_about("Remove a key and write the config file to the first config path"),
            Command::new("show")
                .about("Print every setting from the config file")
                .long_about("Print the settings table, without flag or environment overrides"),
            Command::new("path")
                .about("Print the config file location")
                .long_about("Print the file writes go to, or the file a read loads"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("layerconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
