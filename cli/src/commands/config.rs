use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::WrapErr;

use cosmos_rpc_app::config::{self, Config};

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print the default configuration as TOML
    Default,

    /// Load a configuration file and check it
    Validate(ValidateCmd),
}

#[derive(Debug, Args)]
pub struct ValidateCmd {
    /// Path to the configuration file
    #[clap(long, short = 'c', value_name = "PATH")]
    pub config: PathBuf,
}

impl ConfigCmd {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            ConfigCmd::Default => {
                config::store_writer(&Config::default(), std::io::stdout())?;
            }
            ConfigCmd::Validate(cmd) => {
                let config = config::load(&cmd.config)
                    .wrap_err_with(|| format!("failed to load {}", cmd.config.display()))?;
                config.validate()?;

                println!("configuration at {} is valid", cmd.config.display());
            }
        }

        Ok(())
    }
}
