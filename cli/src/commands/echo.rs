use clap::Args;
use tracing::debug;

use cosmos_rpc_proto::tendermint::abci::abci_application_client::AbciApplicationClient;
use tendermint_proto::abci::RequestEcho;

#[derive(Debug, Args)]
pub struct EchoCmd {
    /// Address of the node's ABCI server
    #[clap(long, default_value = "http://127.0.0.1:26658")]
    pub addr: String,

    /// The message to echo
    pub message: String,
}

impl EchoCmd {
    pub async fn run(self) -> eyre::Result<()> {
        debug!(addr = %self.addr, "connecting");

        let mut client = AbciApplicationClient::connect(self.addr).await?;

        let response = client
            .echo(RequestEcho {
                message: self.message,
            })
            .await?
            .into_inner();

        println!("{}", response.message);

        Ok(())
    }
}
