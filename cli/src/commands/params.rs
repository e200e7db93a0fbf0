use clap::{Args, ValueEnum};
use tonic::transport::Channel;

use cosmos_rpc_proto::cosmos::distribution::v1beta1 as distribution;
use cosmos_rpc_proto::cosmos::gov::v1beta1 as gov;
use cosmos_rpc_proto::cosmos::staking::v1beta1 as staking;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Module {
    Staking,
    Distribution,
    Gov,
}

#[derive(Debug, Args)]
pub struct ParamsCmd {
    /// The module whose parameters to query
    #[clap(value_enum)]
    pub module: Module,

    /// Address of the node's gRPC server
    #[clap(long, default_value = "http://127.0.0.1:9090")]
    pub addr: String,
}

impl ParamsCmd {
    pub async fn run(self) -> eyre::Result<()> {
        let channel = Channel::from_shared(self.addr)?.connect().await?;

        match self.module {
            Module::Staking => {
                let response = staking::query_client::QueryClient::new(channel)
                    .params(staking::QueryParamsRequest {})
                    .await?;
                println!("{:#?}", response.into_inner().params);
            }
            Module::Distribution => {
                let response = distribution::query_client::QueryClient::new(channel)
                    .params(distribution::QueryParamsRequest {})
                    .await?;
                println!("{:#?}", response.into_inner().params);
            }
            Module::Gov => {
                let mut client = gov::query_client::QueryClient::new(channel);

                for params_type in ["voting", "deposit", "tallying"] {
                    let response = client
                        .params(gov::QueryParamsRequest {
                            params_type: params_type.to_string(),
                        })
                        .await?
                        .into_inner();

                    match params_type {
                        "voting" => println!("{:#?}", response.voting_params),
                        "deposit" => println!("{:#?}", response.deposit_params),
                        _ => println!("{:#?}", response.tally_params),
                    }
                }
            }
        }

        Ok(())
    }
}
