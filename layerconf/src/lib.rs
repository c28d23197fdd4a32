#![cfg_attr(not(test), deny(missing_docs))]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # layerconf
//!
//! Layered key/value configuration.
//!
//! Settings are loaded from a JSON or YAML file, overridden programmatically,
//! optionally overlaid by command-line flags and environment variables, and
//! written back to disk.
//!
//! ## Core Types
//!
//! - [`ConfigStore`]: the settings table, its file location and lookup tiers
//! - [`Value`]: a closed set of untyped configuration values
//! - [`ConfigFormat`]: the JSON and YAML codecs
//! - [`fs::FileSystem`], [`env::EnvSource`], [`flags::FlagLookup`]: the
//!   capabilities the store is built on
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use layerconf::ConfigStore;
//! use std::collections::HashMap;
//!
//! let mut env = HashMap::new();
//! env.insert("APP_DB_PORT".to_string(), "5432".to_string());
//!
//! let mut store = ConfigStore::new().with_env(env);
//! store.set_env_prefix("app");
//! store.automatic_env();
//! store.set("db.host", "localhost");
//!
//! assert_eq!(store.get_string("db.host"), "localhost");
//! assert_eq!(store.get_string("db.port"), "5432");
//! assert!(store.get("db.user").is_none());
//! ```

pub mod env;
pub mod error;
pub mod flags;
pub mod format;
pub mod fs;
pub mod logging;
pub mod store;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{CodecError, Error, Result};
pub use format::ConfigFormat;
pub use logging::{init_logger, LogLevel, Logger};
pub use store::ConfigStore;
pub use value::{Mapping, Value};
