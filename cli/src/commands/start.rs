use std::path::PathBuf;

use clap::Args;
use eyre::WrapErr;
use tracing::{info, warn};

use cosmos_rpc_app::config::{self, Config};
use cosmos_rpc_app::genesis::{Genesis, SharedState};
use cosmos_rpc_app::kvstore::KvStore;
use cosmos_rpc_app::server;

#[derive(Debug, Args)]
pub struct StartCmd {
    /// Path to the configuration file; the defaults are used when omitted
    #[clap(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl StartCmd {
    pub fn load_config(&self) -> eyre::Result<Config> {
        match &self.config {
            Some(path) => config::load(path)
                .wrap_err_with(|| format!("failed to load {}", path.display())),
            None => Ok(Config::default()),
        }
    }

    pub async fn run(self) -> eyre::Result<()> {
        let config = self.load_config()?;
        config.validate()?;

        info!(chain_id = %config.chain.id, "starting node");

        let state = SharedState::new(config.chain.id.clone(), Genesis::default());
        let app = KvStore::new(state.clone(), config.snapshot);

        server::run(&config, app, state, shutdown_signal()).await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C"),
        Err(e) => {
            warn!("failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await
        }
    }
}
