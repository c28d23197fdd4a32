//! Command-line flag lookup for the highest-precedence tier.
//!
//! The store only ever asks a flag set for the string value of a named
//! flag. Anything that can answer that implements [`FlagLookup`].

use std::collections::{BTreeMap, HashMap};

use clap::ArgMatches;

/// String lookup into a parsed set of flags.
pub trait FlagLookup: Send + Sync {
    /// The string value of flag `name`, or `None` if there is no such flag
    /// or it does not hold a string.
    fn get_string(&self, name: &str) -> Option<String>;
}

impl FlagLookup for HashMap<String, String> {
    fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FlagLookup for BTreeMap<String, String> {
    fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Looks up `String`-typed arguments by id.
///
/// Unknown ids and arguments parsed into other types count as not found,
/// so a boolean switch never shadows a setting of the same name.
///
/// # Examples
///
/// ```
/// use clap::{Arg, Command};
/// use layerconf::flags::FlagLookup;
///
/// let matches = Command::new("app")
///     .arg(Arg::new("port").long("port"))
///     .get_matches_from(["app", "--port", "9000"]);
///
/// assert_eq!(matches.get_string("port"), Some("9000".to_string()));
/// assert_eq!(matches.get_string("name"), None);
/// ```
impl FlagLookup for ArgMatches {
    fn get_string(&self, name: &str) -> Option<String> {
        self.try_get_one::<String>(name).ok().flatten().cloned()
    }
}
