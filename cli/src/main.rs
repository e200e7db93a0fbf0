//! `cosmos-rpc`: serves the Tendermint ABCI application interface and the
//! Cosmos SDK module services, and talks to running nodes.

#![forbid(unsafe_code)]

mod commands;
mod components;

use clap::Parser;

use cosmos_rpc_app::config::GlobalConfig;

use crate::commands::Command;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

impl Cli {
    /// Logging settings: those of the configuration file for `start`, the
    /// defaults otherwise.
    fn global_config(&self) -> eyre::Result<GlobalConfig> {
        match &self.command {
            Command::Start(cmd) => Ok(cmd.load_config()?.global),
            _ => Ok(GlobalConfig::default()),
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    components::init_tracing(&cli.global_config()?)?;

    cli.command.run().await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::commands::{ConfigCmd, Module};

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_commands() {
        let cli = Cli::try_parse_from(["cosmos-rpc", "start", "--config", "node.toml"]).unwrap();
        match cli.command {
            Command::Start(cmd) => assert_eq!(cmd.config.unwrap().to_str(), Some("node.toml")),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["cosmos-rpc", "config", "default"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCmd::Default)));

        let cli = Cli::try_parse_from(["cosmos-rpc", "params", "gov"]).unwrap();
        match cli.command {
            Command::Params(cmd) => {
                assert_eq!(cmd.module, Module::Gov);
                assert_eq!(cmd.addr, "http://127.0.0.1:9090");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["cosmos-rpc", "echo", "ping"]).unwrap();
        match cli.command {
            Command::Echo(cmd) => assert_eq!(cmd.message, "ping"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_modules() {
        assert!(Cli::try_parse_from(["cosmos-rpc", "params", "bank"]).is_err());
        assert!(Cli::try_parse_from(["cosmos-rpc", "config", "validate"]).is_err());
    }

    #[test]
    fn start_without_config_uses_defaults() {
        let cli = Cli::try_parse_from(["cosmos-rpc", "start"]).unwrap();
        assert_eq!(cli.global_config().unwrap(), GlobalConfig::default());
    }
}
