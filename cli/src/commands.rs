//! The `cosmos-rpc` subcommands.

mod config;
mod echo;
mod params;
mod services;
mod start;

use clap::Subcommand;

pub use config::ConfigCmd;
pub use echo::EchoCmd;
pub use params::{Module, ParamsCmd};
pub use services::ServicesCmd;
pub use start::StartCmd;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the ABCI application and the module gRPC services
    Start(StartCmd),

    /// Print or validate the configuration
    #[clap(subcommand)]
    Config(ConfigCmd),

    /// List every gRPC method path served by this node
    Services(ServicesCmd),

    /// Send an ABCI Echo to a running node
    Echo(EchoCmd),

    /// Query the parameters of a module
    Params(ParamsCmd),
}

impl Command {
    pub async fn run(self) -> eyre::Result<()> {
        match self {
            Command::Start(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run(),
            Command::Services(cmd) => cmd.run(),
            Command::Echo(cmd) => cmd.run().await,
            Command::Params(cmd) => cmd.run().await,
        }
    }
}
