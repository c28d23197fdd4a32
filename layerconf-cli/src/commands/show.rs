//! Command to print every setting from the config file.

use crate::error::CliError;
use crate::utils::{load_store, GlobalOptions};
use clap::Args;
use layerconf::ConfigFormat;
use std::io::Write;

/// Print the settings table.
///
/// Flag and environment overrides are not included; this is what
/// `set` would write back.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format (defaults to the config type)
    #[arg(long, value_name = "TYPE")]
    pub format: Option<String>,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_store(global)?;

        let format: ConfigFormat = self
            .format
            .as_deref()
            .unwrap_or(&global.config_type)
            .parse()?;
        let bytes = format.encode(store.all_settings())?;

        std::io::stdout().write_all(&bytes)?;
        Ok(())
    }
}
