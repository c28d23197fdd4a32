//! Command to print the config file location.

use crate::error::CliError;
use crate::utils::{build_store, load_store, GlobalOptions};
use clap::Args;

/// Print the file that `set` writes to, or with `--read`, the file a read
/// actually loads.
#[derive(Args)]
pub struct PathCommand {
    /// Print the file found by searching the config paths instead
    #[arg(long)]
    pub read: bool,
}

impl PathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.read {
            let store = build_store(global);
            println!("{}", store.config_file_path()?.display());
            return Ok(());
        }

        let store = load_store(global)?;
        match store.config_file_used() {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no {}.{} found in any config path",
                global.config_name, global.config_type
            ))),
        }
    }
}
