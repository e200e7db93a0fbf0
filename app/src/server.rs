//! Wires the services into the two tonic servers a node runs: the ABCI
//! server the consensus engine connects to, and the gRPC server clients query.

use core::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use futures::future::{try_join, FutureExt};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tracing::info;

use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::reflection_service_server::ReflectionServiceServer;
use cosmos_rpc_proto::cosmos::distribution::v1beta1::{
    msg_server::MsgServer as DistributionMsgServer,
    query_server::QueryServer as DistributionQueryServer,
};
use cosmos_rpc_proto::cosmos::gov::v1beta1::{
    msg_server::MsgServer as GovMsgServer, query_server::QueryServer as GovQueryServer,
};
use cosmos_rpc_proto::cosmos::group::v1beta1::{
    msg_server::MsgServer as GroupMsgServer, query_server::QueryServer as GroupQueryServer,
};
use cosmos_rpc_proto::cosmos::staking::v1beta1::{
    msg_server::MsgServer as StakingMsgServer, query_server::QueryServer as StakingQueryServer,
};
use cosmos_rpc_proto::tendermint::abci::abci_application_server::AbciApplicationServer;

use crate::abci::{AbciService, Application};
use crate::config::{ChainConfig, Config};
use crate::error::Error;
use crate::genesis::SharedState;
use crate::modules::{distribution, gov, staking};
use crate::reflection::DescriptorService;
use crate::unimplemented;

pub fn abci_router<A: Application>(timeout: Duration, app: A) -> Router {
    Server::builder()
        .timeout(timeout)
        .add_service(AbciApplicationServer::new(AbciService::new(app)))
}

/// The module query services, the reflection service and the default Msg
/// services.
pub fn grpc_router(timeout: Duration, state: SharedState, chain: ChainConfig) -> Router {
    Server::builder()
        .timeout(timeout)
        .add_service(StakingQueryServer::new(staking::QueryService::new(
            state.clone(),
        )))
        .add_service(DistributionQueryServer::new(
            distribution::QueryService::new(state.clone()),
        ))
        .add_service(GovQueryServer::new(gov::QueryService::new(state.clone())))
        .add_service(GroupQueryServer::new(unimplemented::GroupQuery))
        .add_service(StakingMsgServer::new(unimplemented::StakingMsg))
        .add_service(DistributionMsgServer::new(unimplemented::DistributionMsg))
        .add_service(GovMsgServer::new(unimplemented::GovMsg))
        .add_service(GroupMsgServer::new(unimplemented::GroupMsg))
        .add_service(ReflectionServiceServer::new(DescriptorService::new(
            state, chain,
        )))
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, Error> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr, e))
}

/// Serves `router` on an already bound listener until `shutdown` completes.
pub async fn serve(
    router: Router,
    listener: TcpListener,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Error> {
    router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .map_err(Error::transport)
}

/// Runs both servers until `shutdown` completes or either server fails.
pub async fn run<A: Application>(
    config: &Config,
    app: A,
    state: SharedState,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Error> {
    let abci_listener = bind(config.abci.listen_addr).await?;
    let grpc_listener = bind(config.grpc.listen_addr).await?;

    info!(addr = %config.abci.listen_addr, "ABCI server listening");
    info!(addr = %config.grpc.listen_addr, "gRPC server listening");

    let shutdown = shutdown
        .map(|()| info!("shutting down servers"))
        .shared();

    let abci = serve(
        abci_router(config.grpc.timeout, app),
        abci_listener,
        shutdown.clone(),
    );
    let grpc = serve(
        grpc_router(config.grpc.timeout, state, config.chain.clone()),
        grpc_listener,
        shutdown,
    );

    try_join(abci, grpc).await?;

    info!("servers stopped");

    Ok(())
}
