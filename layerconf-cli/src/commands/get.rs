//! Command to print the resolved value of a key.

use crate::error::CliError;
use crate::utils::{load_store, GlobalOptions};
use clap::Args;

/// Print the resolved value of a key.
///
/// Strings print as-is; other values print as compact JSON.
#[derive(Args)]
pub struct GetCommand {
    /// Key to resolve
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Only print string values; anything else prints an empty line
    #[arg(long)]
    pub string: bool,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_store(global)?;

        if self.string {
            println!("{}", store.get_string(&self.key));
            return Ok(());
        }

        match store.get(&self.key) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "key not set: {}",
                self.key
            ))),
        }
    }
}
