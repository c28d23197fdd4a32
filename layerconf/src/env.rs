//! Environment variable lookup for the fallback tier.
//!
//! Keys map to variable names by upper-casing and replacing `.` with `_`,
//! with an optional `PREFIX_` in front. The lookup itself goes through
//! [`EnvSource`] so tests never have to mutate the process environment.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read access to a set of environment variables.
pub trait EnvSource: Send + Sync {
    /// The value of `name`, or `None` if it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Derive the environment variable name for a config key.
///
/// `prefix` is used as given; the store upper-cases it when it is set.
///
/// # Examples
///
/// ```
/// use layerconf::env::env_key;
///
/// assert_eq!(env_key("db.port", "APP"), "APP_DB_PORT");
/// assert_eq!(env_key("port", ""), "PORT");
/// ```
#[must_use]
pub fn env_key(key: &str, prefix: &str) -> String {
    let name = key.replace('.', "_").to_uppercase();
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}_{name}")
    }
}
