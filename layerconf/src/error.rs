//! Error types for the layerconf library.
//!
//! Every fallible store operation returns [`Result`], built on `thiserror`.
//! The absent-key fallback of `get`/`get_string` is not an error and never
//! shows up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::ConfigFormat;

/// Result type alias for operations that may fail with a layerconf error.
///
/// # Examples
///
/// ```
/// use layerconf::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the layerconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// No search path contained `{name}.{format}`.
    #[error("config file not found: {name} (searched {})", display_paths(searched))]
    ConfigFileNotFound {
        /// The configured base name.
        name: String,
        /// Every candidate file that was checked.
        searched: Vec<PathBuf>,
    },

    /// The configured format is not one of json, yaml or yml.
    #[error("unsupported config type: {format}")]
    UnsupportedFormat {
        /// The format string as configured.
        format: String,
    },

    /// The file contents could not be decoded.
    #[error("failed to decode {format} config: {source}")]
    Decode {
        /// The format used for decoding.
        format: ConfigFormat,
        /// The underlying codec error.
        #[source]
        source: CodecError,
    },

    /// The settings could not be encoded.
    #[error("failed to encode {format} config: {source}")]
    Encode {
        /// The format used for encoding.
        format: ConfigFormat,
        /// The underlying codec error.
        #[source]
        source: CodecError,
    },

    /// Reading or writing the config file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A write was attempted before any search path was added.
    #[error("no config path configured: add a search path before writing")]
    NoSearchPathConfigured,
}

/// Error raised by one of the serialization codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON codec failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML codec failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed but its top level is not a mapping.
    #[error("top-level document must be a mapping, found {found}")]
    NotAMapping {
        /// Type name of the value that was found instead.
        found: &'static str,
    },

    /// JSON has no representation for NaN or infinite floats.
    #[error("cannot encode non-finite float at '{key}'")]
    NonFiniteFloat {
        /// Dotted path of the offending value, with `[i]` for list items.
        key: String,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no paths".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Check if error indicates the config file could not be located.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::Error;
    ///
    /// let err = Error::ConfigFileNotFound { name: "config".into(), searched: vec![] };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigFileNotFound { .. })
    }

    /// Check if error was caused by an unsupported format string.
    #[must_use]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
