use clap::Args;

use cosmos_rpc_proto::services;

#[derive(Debug, Args)]
pub struct ServicesCmd {
    /// Only list the services whose full name starts with this prefix
    #[clap(long, value_name = "PREFIX")]
    pub filter: Option<String>,
}

impl ServicesCmd {
    pub fn run(self) -> eyre::Result<()> {
        let prefix = self.filter.unwrap_or_default();

        for service in services::ALL.iter().filter(|s| s.name.starts_with(&prefix)) {
            for path in service.method_paths() {
                println!("{}", path);
            }
        }

        Ok(())
    }
}
