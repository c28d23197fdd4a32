//! Serialization formats and their codecs.
//!
//! A store keeps its format as the raw string the caller configured; it is
//! only parsed into a [`ConfigFormat`] when a file is read or written.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Error, Result};
use crate::value::{Mapping, Value};

/// A supported configuration file format.
///
/// Parsing is case-insensitive and accepts `yml` as an alias for YAML.
///
/// # Examples
///
/// ```
/// use layerconf::ConfigFormat;
///
/// assert_eq!("JSON".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
/// assert_eq!("yml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
/// assert!("xml".parse::<ConfigFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON, written with 2-space indentation.
    Json,
    /// YAML, written with the default encoder settings.
    Yaml,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl ConfigFormat {
    /// Decode a document into a settings mapping.
    ///
    /// An empty document (or one that is just `null`) yields an empty
    /// mapping. Any other non-mapping top level is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not a valid document of
    /// this format, or if the top level is not a mapping.
    pub fn decode(self, bytes: &[u8]) -> Result<Mapping> {
        let decoded = match self {
            Self::Json => serde_json::from_slice::<Value>(bytes).map_err(CodecError::from),
            Self::Yaml => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    Ok(Value::Null)
                } else {
                    decode_yaml(bytes)
                }
            }
        };

        match decoded {
            Ok(Value::Mapping(m)) => Ok(m),
            Ok(Value::Null) => Ok(Mapping::new()),
            Ok(other) => Err(Error::Decode {
                format: self,
                source: CodecError::NotAMapping {
                    found: other.type_name(),
                },
            }),
            Err(source) => Err(Error::Decode {
                format: self,
                source,
            }),
        }
    }

    /// Encode a settings mapping into bytes.
    ///
    /// JSON output is pretty-printed with two spaces and ends in a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the codec rejects the data. JSON rejects
    /// NaN and infinite floats anywhere in the mapping.
    pub fn encode(self, settings: &Mapping) -> Result<Vec<u8>> {
        let encoded = match self {
            Self::Json => match non_finite_key(settings) {
                Some(key) => Err(CodecError::NonFiniteFloat { key }),
                None => serde_json::to_vec_pretty(settings)
                    .map(|mut buf| {
                        buf.push(b'\n');
                        buf
                    })
                    .map_err(CodecError::from),
            },
            Self::Yaml => serde_yaml::to_string(settings)
                .map(String::into_bytes)
                .map_err(CodecError::from),
        };

        encoded.map_err(|source| Error::Encode {
            format: self,
            source,
        })
    }
}

/// Parse YAML with merge keys applied and custom tags dropped.
fn decode_yaml(bytes: &[u8]) -> std::result::Result<Value, CodecError> {
    let mut doc = untag(serde_yaml::from_slice::<serde_yaml::Value>(bytes)?);
    doc.apply_merge()?;
    Ok(serde_yaml::from_value(doc)?)
}

fn untag(value: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Tagged(tagged) => untag(tagged.value),
        Yaml::Sequence(items) => Yaml::Sequence(items.into_iter().map(untag).collect()),
        Yaml::Mapping(map) => Yaml::Mapping(
            map.into_iter()
                .map(|(k, v)| (untag(k), untag(v)))
                .collect(),
        ),
        other => other,
    }
}

fn non_finite_key(settings: &Mapping) -> Option<String> {
    settings
        .iter()
        .find_map(|(key, value)| non_finite_path(value, key.clone()))
}

fn non_finite_path(value: &Value, path: String) -> Option<String> {
    match value {
        Value::Float(f) if !f.is_finite() => Some(path),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| non_finite_path(item, format!("{path}[{i}]"))),
        Value::Mapping(map) => map
            .iter()
            .find_map(|(key, item)| non_finite_path(item, format!("{path}.{key}"))),
        _ => None,
    }
}
