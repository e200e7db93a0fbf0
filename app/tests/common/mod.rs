//! In-process servers on ephemeral ports.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use tokio::sync::oneshot;
use tonic::transport::server::Router;
use tonic::transport::{Channel, Endpoint};

use cosmos_rpc_app::config::{ChainConfig, SnapshotConfig};
use cosmos_rpc_app::genesis::{Genesis, SharedState};
use cosmos_rpc_app::kvstore::KvStore;
use cosmos_rpc_app::server;

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// A running server; it shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub channel: Channel,
    _shutdown: oneshot::Sender<()>,
}

pub async fn spawn(router: Router) -> TestServer {
    let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");

    let (shutdown, stopped) = oneshot::channel::<()>();

    tokio::spawn(server::serve(router, listener, async move {
        let _ = stopped.await;
    }));

    let channel = Endpoint::from_shared(format!("http://{}", addr))
        .expect("valid endpoint")
        .timeout(TIMEOUT)
        .connect()
        .await
        .expect("connect to test server");

    TestServer {
        addr,
        channel,
        _shutdown: shutdown,
    }
}

pub fn snapshot_config() -> SnapshotConfig {
    SnapshotConfig {
        interval: 2,
        keep_recent: 2,
        chunk_size: 32,
    }
}

/// A key/value node: its ABCI server and its gRPC server sharing one chain state.
pub struct KvNode {
    pub abci: TestServer,
    pub grpc: TestServer,
    pub state: SharedState,
}

pub async fn kv_node(chain_id: &str) -> KvNode {
    let state = SharedState::new(chain_id, Genesis::default());
    let store = KvStore::new(state.clone(), snapshot_config());

    let abci = spawn(server::abci_router(TIMEOUT, store)).await;
    let grpc = spawn(server::grpc_router(
        TIMEOUT,
        state.clone(),
        ChainConfig::default(),
    ))
    .await;

    KvNode { abci, grpc, state }
}
