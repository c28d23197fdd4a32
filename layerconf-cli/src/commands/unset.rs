//! Command to remove a key from the config file.

use crate::error::CliError;
use crate::utils::{load_store, GlobalOptions};
use clap::Args;

/// Remove a key and write the config file.
#[derive(Args)]
pub struct UnsetCommand {
    /// Key to remove
    #[arg(value_name = "KEY")]
    pub key: String,
}

impl UnsetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut store = load_store(global)?;

        if store.unset(&self.key).is_none() {
            return Err(CliError::SemanticFailure(format!(
                "key not set in config file: {}",
                self.key
            )));
        }

        store.write_config()?;
        Ok(())
    }
}
