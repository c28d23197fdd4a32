//! Utility functions for CLI operations.
//!
//! Builds a [`ConfigStore`] from the global options and converts between
//! command-line text and configuration values.

use crate::error::CliError;
use layerconf::{ConfigStore, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Config file base name.
    pub config_name: String,

    /// Config file format string.
    pub config_type: String,

    /// Search paths, in order. Empty means the current directory.
    pub config_paths: Vec<PathBuf>,

    /// Environment variable prefix.
    pub env_prefix: Option<String>,

    /// Disable the environment tier.
    pub no_env: bool,

    /// Per-invocation overrides, bound as the flag tier.
    pub flags: BTreeMap<String, String>,
}

/// Configure a store from the global options without touching the disk.
pub fn build_store(global: &GlobalOptions) -> ConfigStore {
    let mut store = ConfigStore::new();
    store.set_config_name(global.config_name.as_str());
    store.set_config_type(global.config_type.as_str());

    if global.config_paths.is_empty() {
        store.add_config_path(".");
    } else {
        for path in &global.config_paths {
            store.add_config_path(path.clone());
        }
    }

    if let Some(prefix) = &global.env_prefix {
        store.set_env_prefix(prefix);
    }
    if !global.no_env {
        store.automatic_env();
    }
    if !global.flags.is_empty() {
        store.bind_flags(global.flags.clone());
    }

    store
}

/// Build a store and load its file.
///
/// A missing file is not an error here: commands start from empty
/// settings and a later write creates the file. Every other read failure
/// is returned.
pub fn load_store(global: &GlobalOptions) -> Result<ConfigStore, CliError> {
    let mut store = build_store(global);
    match store.read_in_config() {
        Ok(()) => Ok(store),
        Err(e) if e.is_not_found() => {
            log::info!("{e}; starting from empty settings");
            Ok(store)
        }
        Err(e) => Err(e.into()),
    }
}

/// Interpret command-line text as a configuration value.
///
/// The text is read as a YAML scalar, so `8080` becomes an integer and
/// `true` a boolean. Anything that does not parse, and the empty string,
/// stays a string.
pub fn parse_value(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::from(raw);
    }
    serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            config_name: "config".to_string(),
            config_type: "json".to_string(),
            config_paths: vec![],
            env_prefix: None,
            no_env: true,
            flags: BTreeMap::new(),
        }
    }

    #[test]
    fn test_parse_value_scalars() {
        assert_eq!(parse_value("8080"), Value::Integer(8080));
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("0.5"), Value::Float(0.5));
        assert_eq!(parse_value("myapp"), Value::from("myapp"));
        assert_eq!(parse_value("\"8080\""), Value::from("8080"));
        assert_eq!(parse_value(""), Value::from(""));
    }

    #[test]
    fn test_parse_value_flow_collections() {
        assert_eq!(parse_value("[a, b]"), Value::from(vec!["a", "b"]));
        assert!(parse_value("{port: 1}").as_mapping().is_some());
    }

    #[test]
    fn test_parse_value_invalid_yaml_stays_string() {
        assert_eq!(parse_value("a: b: c"), Value::from("a: b: c"));
    }

    #[test]
    fn test_build_store_defaults_to_current_dir() {
        let store = build_store(&options());
        assert_eq!(
            store.config_file_path().unwrap(),
            PathBuf::from(".").join("config.json")
        );
    }

    #[test]
    fn test_build_store_binds_flags() {
        let mut global = options();
        global.flags.insert("port".to_string(), "9000".to_string());
        let store = build_store(&global);
        assert_eq!(store.get_string("port"), "9000");
    }

    #[test]
    fn test_load_store_tolerates_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut global = options();
        global.config_paths = vec![temp_dir.path().to_path_buf()];

        let store = load_store(&global).unwrap();
        assert!(store.all_settings().is_empty());
    }

    #[test]
    fn test_load_store_reports_bad_type() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("config.ini"), "a=1").unwrap();
        let mut global = options();
        global.config_type = "ini".to_string();
        global.config_paths = vec![temp_dir.path().to_path_buf()];

        let err = load_store(&global).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
