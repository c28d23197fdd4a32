//! CLI command implementations.
//!
//! - `get`: Print the resolved value of a key
//! - `set`: Set a key in the config file
//! - `unset`: Remove a key from the config file
//! - `show`: Print every setting from the config file
//! - `path`: Print the config file location
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get;
pub mod path;
pub mod set;
pub mod show;
pub mod unset;

pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use path::PathCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
pub use unset::UnsetCommand;
