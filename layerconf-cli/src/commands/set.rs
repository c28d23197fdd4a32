//! Command to set a key in the config file.

use crate::error::CliError;
use crate::utils::{load_store, parse_value, GlobalOptions};
use clap::Args;
use layerconf::Value;

/// Set a key and write the config file.
#[derive(Args)]
pub struct SetCommand {
    /// Key to set
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New value, read as a YAML scalar (8080 is a number, true a boolean)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Store VALUE as a string without interpreting it
    #[arg(long)]
    pub string: bool,
}

impl SetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut store = load_store(global)?;

        let value = if self.string {
            Value::from(self.value)
        } else {
            parse_value(&self.value)
        };
        log::info!("setting '{}' to {} value {value}", self.key, value.type_name());

        store.set(self.key, value);
        store.write_config()?;
        Ok(())
    }
}
