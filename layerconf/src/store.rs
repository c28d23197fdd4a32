//! The configuration store.
//!
//! A [`ConfigStore`] owns a settings table and knows where its file lives.
//! Lookups go through three tiers, highest precedence first:
//!
//! 1. Bound command-line flags (non-empty string values only)
//! 2. The settings table (file contents and [`ConfigStore::set`] calls)
//! 3. Environment variables, when [`ConfigStore::automatic_env`] is on
//!
//! # Examples
//!
//! ```
//! use layerconf::{ConfigStore, Value};
//! use layerconf::fs::MemFs;
//!
//! let mut store = ConfigStore::new().with_fs(MemFs::new());
//! store.set_config_name("config");
//! store.set_config_type("json");
//! store.add_config_path("/etc/myapp");
//!
//! store.set("port", 8080);
//! store.set("name", "myapp");
//! store.write_config().unwrap();
//!
//! assert_eq!(store.get("port"), Some(Value::from(8080)));
//! assert_eq!(store.get_string("name"), "myapp");
//! assert_eq!(store.get_string("port"), "");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::env::{env_key, EnvSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::flags::FlagLookup;
use crate::format::ConfigFormat;
use crate::fs::{FileSystem, OsFs};
use crate::value::{Mapping, Value};

/// Layered key/value configuration backed by a JSON or YAML file.
///
/// Not internally synchronized. Share it behind a single lock if more than
/// one thread needs it.
pub struct ConfigStore {
    name: String,
    config_type: String,
    search_paths: Vec<PathBuf>,
    settings: Mapping,
    flags: Option<Box<dyn FlagLookup>>,
    env_enabled: bool,
    env_prefix: String,
    config_file_used: Option<PathBuf>,
    fs: Box<dyn FileSystem>,
    env: Box<dyn EnvSource>,
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("name", &self.name)
            .field("config_type", &self.config_type)
            .field("search_paths", &self.search_paths)
            .field("settings", &self.settings)
            .field("flags_bound", &self.flags.is_some())
            .field("env_enabled", &self.env_enabled)
            .field("env_prefix", &self.env_prefix)
            .field("config_file_used", &self.config_file_used)
            .finish_non_exhaustive()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Creates an empty store using the OS file system and process
    /// environment. No flags are bound and the environment tier is off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            config_type: String::new(),
            search_paths: Vec::new(),
            settings: Mapping::new(),
            flags: None,
            env_enabled: false,
            env_prefix: String::new(),
            config_file_used: None,
            fs: Box::new(OsFs),
            env: Box::new(ProcessEnv),
        }
    }

    /// Replace the file system used for reads and writes.
    #[must_use]
    pub fn with_fs(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Replace the environment used by the fallback tier.
    #[must_use]
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Set the file base name, without extension.
    pub fn set_config_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the file format. Not validated until the next read or write.
    pub fn set_config_type(&mut self, config_type: impl Into<String>) {
        self.config_type = config_type.into();
    }

    /// Append a directory to the search list.
    pub fn add_config_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Set the environment variable prefix. Stored upper-cased.
    pub fn set_env_prefix(&mut self, prefix: &str) {
        self.env_prefix = prefix.to_uppercase();
    }

    /// Turn on the environment variable tier.
    pub fn automatic_env(&mut self) {
        self.env_enabled = true;
    }

    /// Bind a flag set as the highest-precedence tier, replacing any
    /// earlier binding.
    pub fn bind_flags(&mut self, flags: impl FlagLookup + 'static) {
        self.flags = Some(Box::new(flags));
    }

    /// Insert or overwrite a setting.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Resolve `key` through flags, settings and environment.
    ///
    /// Returns `None` when no tier has a value. That is not an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_with_env(key, self.env.as_ref())
    }

    /// Like [`get`](Self::get), but reads environment variables from `env`
    /// instead of the store's own source.
    #[must_use]
    pub fn get_with_env(&self, key: &str, env: &dyn EnvSource) -> Option<Value> {
        if let Some(flags) = &self.flags {
            if let Some(val) = flags.get_string(key).filter(|v| !v.is_empty()) {
                log::debug!("resolved '{key}' from flags");
                return Some(Value::String(val));
            }
        }

        if let Some(val) = self.settings.get(key) {
            log::debug!("resolved '{key}' from settings");
            return Some(val.clone());
        }

        if self.env_enabled {
            let var = env_key(key, &self.env_prefix);
            if let Some(val) = env.var(&var).filter(|v| !v.is_empty()) {
                log::debug!("resolved '{key}' from environment variable {var}");
                return Some(Value::String(val));
            }
        }

        None
    }

    /// Resolve `key` and return it if it is a string, else the empty string.
    ///
    /// Numbers, booleans and other non-string values are not converted.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s,
            Some(
                Value::Null
                | Value::Bool(_)
                | Value::Integer(_)
                | Value::Float(_)
                | Value::Sequence(_)
                | Value::Mapping(_),
            )
            | None => String::new(),
        }
    }

    /// Whether any tier has a value for `key`.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key from the settings table, returning its old value.
    ///
    /// Flags and environment variables are not affected.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.settings.remove(key)
    }

    /// The settings table, without flag or environment overlays.
    #[must_use]
    pub const fn all_settings(&self) -> &Mapping {
        &self.settings
    }

    /// Sorted keys of the settings table.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        self.settings.keys().cloned().collect()
    }

    /// The file loaded by the most recent successful
    /// [`read_in_config`](Self::read_in_config).
    #[must_use]
    pub fn config_file_used(&self) -> Option<&Path> {
        self.config_file_used.as_deref()
    }

    /// The file [`write_config`](Self::write_config) would target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSearchPathConfigured`] if no path was added.
    pub fn config_file_path(&self) -> Result<PathBuf> {
        self.search_paths
            .first()
            .map(|dir| self.file_in(dir))
            .ok_or(Error::NoSearchPathConfigured)
    }

    /// Find the config file and load it, replacing all current settings.
    ///
    /// Search paths are tried in the order they were added. On any error
    /// the current settings are left as they were.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigFileNotFound`] if no search path holds the file
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::UnsupportedFormat`] if the config type is not json/yaml/yml
    /// - [`Error::Decode`] if the contents are malformed
    pub fn read_in_config(&mut self) -> Result<()> {
        let path = self.find_config_file()?;

        let bytes = self.fs.read(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        let format: ConfigFormat = self.config_type.parse()?;
        let settings = format.decode(&bytes)?;

        log::debug!(
            "loaded {} settings from {}",
            settings.len(),
            path.display()
        );
        self.settings = settings;
        self.config_file_used = Some(path);
        Ok(())
    }

    /// Serialize all settings to the file in the first search path.
    ///
    /// The target is always the first path, even when the last read came
    /// from a later one.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSearchPathConfigured`] if no path was added
    /// - [`Error::UnsupportedFormat`] if the config type is not json/yaml/yml
    /// - [`Error::Encode`] if serialization fails
    /// - [`Error::Io`] if the file cannot be written
    pub fn write_config(&self) -> Result<()> {
        let path = self.config_file_path()?;
        let format: ConfigFormat = self.config_type.parse()?;
        let bytes = format.encode(&self.settings)?;

        self.fs
            .write(&path, &bytes)
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;

        log::debug!(
            "wrote {} settings to {}",
            self.settings.len(),
            path.display()
        );
        Ok(())
    }

    fn file_in(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.name, self.config_type))
    }

    fn find_config_file(&self) -> Result<PathBuf> {
        let mut searched = Vec::with_capacity(self.search_paths.len());
        for dir in &self.search_paths {
            let candidate = self.file_in(dir);
            if self.fs.exists(&candidate) {
                log::debug!("found config file {}", candidate.display());
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        Err(Error::ConfigFileNotFound {
            name: self.name.clone(),
            searched,
        })
    }
}
