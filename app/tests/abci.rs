mod common;

use test_log::test;
use tonic::transport::Channel;
use tonic::Code;

use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::reflection_service_client::ReflectionServiceClient;
use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::GetChainDescriptorRequest;
use cosmos_rpc_proto::tendermint::abci::abci_application_client::AbciApplicationClient;
use tendermint_proto::abci::{
    response_apply_snapshot_chunk, response_offer_snapshot, RequestApplySnapshotChunk,
    RequestBeginBlock, RequestCommit, RequestDeliverTx, RequestEcho, RequestEndBlock, RequestInfo,
    RequestInitChain, RequestListSnapshots, RequestLoadSnapshotChunk, RequestOfferSnapshot,
    RequestQuery, Snapshot,
};
use tendermint_proto::types::Header;

use common::{kv_node, KvNode};

type Client = AbciApplicationClient<Channel>;

fn client(node: &KvNode) -> Client {
    AbciApplicationClient::new(node.abci.channel.clone())
}

async fn init_chain(client: &mut Client, chain_id: &str) {
    client
        .init_chain(RequestInitChain {
            chain_id: chain_id.to_string(),
            initial_height: 1,
            ..Default::default()
        })
        .await
        .unwrap();
}

fn begin_block(height: i64) -> RequestBeginBlock {
    RequestBeginBlock {
        header: Some(Header {
            height,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn tx(tx: &str) -> RequestDeliverTx {
    RequestDeliverTx {
        tx: tx.as_bytes().to_vec().into(),
    }
}

/// Runs a full block and returns the app hash of its commit.
async fn block(client: &mut Client, height: i64, txs: &[&str]) -> Vec<u8> {
    client.begin_block(begin_block(height)).await.unwrap();

    for t in txs {
        let response = client.deliver_tx(tx(t)).await.unwrap().into_inner();
        assert_eq!(response.code, 0, "{}", t);
    }

    client
        .end_block(RequestEndBlock { height })
        .await
        .unwrap();

    client
        .commit(RequestCommit {})
        .await
        .unwrap()
        .into_inner()
        .data
        .to_vec()
}

#[test(tokio::test)]
async fn echo_round_trip() {
    let node = kv_node("echo-1").await;

    let response = client(&node)
        .echo(RequestEcho {
            message: "ping".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.message, "ping");
}

#[test(tokio::test)]
async fn deliver_tx_before_begin_block_is_rejected() {
    let node = kv_node("order-1").await;

    let status = client(&node).deliver_tx(tx("a=1")).await.unwrap_err();

    assert_eq!(status.code(), Code::FailedPrecondition);
    assert!(status.message().contains("DeliverTx"));
}

#[test(tokio::test)]
async fn commit_before_end_block_is_rejected() {
    let node = kv_node("order-2").await;
    let mut client = client(&node);

    init_chain(&mut client, "order-2").await;
    client.begin_block(begin_block(1)).await.unwrap();

    let status = client.commit(RequestCommit {}).await.unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);

    // The rejected commit left the block open.
    client.deliver_tx(tx("a=1")).await.unwrap();
}

#[test(tokio::test)]
async fn init_chain_after_begin_block_is_rejected() {
    let node = kv_node("order-3").await;
    let mut client = client(&node);

    init_chain(&mut client, "order-3").await;
    block(&mut client, 1, &[]).await;

    let status = client
        .init_chain(RequestInitChain::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[test(tokio::test)]
async fn end_block_height_must_match() {
    let node = kv_node("order-4").await;
    let mut client = client(&node);

    init_chain(&mut client, "order-4").await;
    client.begin_block(begin_block(1)).await.unwrap();

    let status = client
        .end_block(RequestEndBlock { height: 2 })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[test(tokio::test)]
async fn deliver_commit_query() {
    let node = kv_node("kv-1").await;
    let mut client = client(&node);

    init_chain(&mut client, "kv-1").await;

    let hash = block(&mut client, 1, &["name=satoshi", "nakamoto"]).await;
    assert_eq!(hash.len(), 32);

    let query = client
        .query(RequestQuery {
            data: b"name".to_vec().into(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(query.log, "exists");
    assert_eq!(query.value.to_vec(), b"satoshi".to_vec());
    assert_eq!(query.height, 1);

    let missing = client
        .query(RequestQuery {
            data: b"satoshi".to_vec().into(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(missing.log, "does not exist");

    let info = client
        .info(RequestInfo::default())
        .await
        .unwrap()
        .into_inner();

    assert_eq!(info.data, r#"{"size":2}"#);
    assert_eq!(info.last_block_height, 1);
    assert_eq!(info.last_block_app_hash.to_vec(), hash);
}

#[test(tokio::test)]
async fn invalid_transactions_get_a_non_zero_code() {
    let node = kv_node("kv-2").await;
    let mut client = client(&node);

    init_chain(&mut client, "kv-2").await;
    client.begin_block(begin_block(1)).await.unwrap();

    let response = client.deliver_tx(tx("")).await.unwrap().into_inner();
    assert_eq!(response.code, 1);
}

async fn chunks(client: &mut Client, snapshot: &Snapshot) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();

    for chunk in 0..snapshot.chunks {
        let response = client
            .load_snapshot_chunk(RequestLoadSnapshotChunk {
                height: snapshot.height,
                format: snapshot.format,
                chunk,
            })
            .await
            .unwrap()
            .into_inner();
        chunks.push(response.chunk.to_vec());
    }

    chunks
}

async fn apply(client: &mut Client, index: u32, chunk: &[u8]) -> (i32, Vec<u32>) {
    let response = client
        .apply_snapshot_chunk(RequestApplySnapshotChunk {
            index,
            chunk: chunk.to_vec().into(),
            sender: "source".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    (response.result, response.refetch_chunks)
}

/// A source node with a snapshot at height 2, and the snapshot itself.
async fn source_with_snapshot() -> (KvNode, Snapshot, Vec<u8>) {
    let source = kv_node("sync-1").await;
    let mut client = client(&source);

    init_chain(&mut client, "sync-source").await;
    block(&mut client, 1, &["a=1", "b=2"]).await;
    let hash = block(&mut client, 2, &["c=3"]).await;

    let snapshots = client
        .list_snapshots(RequestListSnapshots {})
        .await
        .unwrap()
        .into_inner()
        .snapshots;

    assert_eq!(snapshots.len(), 1);
    let snapshot = snapshots[0].clone();
    assert_eq!(snapshot.height, 2);
    assert!(snapshot.chunks > 1);

    (source, snapshot, hash)
}

#[test(tokio::test)]
async fn state_sync_from_snapshot() {
    use response_apply_snapshot_chunk::Result as ChunkResult;

    let (source, snapshot, hash) = source_with_snapshot().await;
    let chunks = chunks(&mut client(&source), &snapshot).await;

    let target = kv_node("sync-target").await;
    let mut target_client = client(&target);

    let offer = target_client
        .offer_snapshot(RequestOfferSnapshot {
            snapshot: Some(snapshot.clone()),
            app_hash: hash.clone().into(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(offer.result, response_offer_snapshot::Result::Accept as i32);

    let (result, refetch) = apply(&mut target_client, 1, &chunks[1]).await;
    assert_eq!(result, ChunkResult::Retry as i32);
    assert_eq!(refetch, vec![0]);

    for (index, chunk) in chunks.iter().enumerate() {
        let (result, _) = apply(&mut target_client, index as u32, chunk).await;
        assert_eq!(result, ChunkResult::Accept as i32);
    }

    let info = target_client
        .info(RequestInfo::default())
        .await
        .unwrap()
        .into_inner();
    assert_eq!(info.last_block_height, 2);
    assert_eq!(info.last_block_app_hash.to_vec(), hash);

    // The restored chain state is what the gRPC services see.
    let chain = ReflectionServiceClient::new(target.grpc.channel.clone())
        .get_chain_descriptor(GetChainDescriptorRequest {})
        .await
        .unwrap()
        .into_inner()
        .chain
        .unwrap();
    assert_eq!(chain.id, "sync-source");

    // Block production continues after the snapshot height.
    block(&mut target_client, 3, &["d=4"]).await;
}

#[test(tokio::test)]
async fn snapshot_with_wrong_app_hash_is_rejected() {
    use response_apply_snapshot_chunk::Result as ChunkResult;

    let (source, snapshot, _) = source_with_snapshot().await;
    let chunks = chunks(&mut client(&source), &snapshot).await;

    let target = kv_node("sync-target").await;
    let mut target_client = client(&target);

    target_client
        .offer_snapshot(RequestOfferSnapshot {
            snapshot: Some(snapshot),
            app_hash: vec![0u8; 32].into(),
        })
        .await
        .unwrap();

    let last = chunks.len() - 1;
    for (index, chunk) in chunks.iter().enumerate() {
        let (result, _) = apply(&mut target_client, index as u32, chunk).await;

        let expected = if index == last {
            ChunkResult::RejectSnapshot
        } else {
            ChunkResult::Accept
        };
        assert_eq!(result, expected as i32, "chunk {}", index);
    }

    // Restoration was abandoned, so the node can still start from genesis.
    init_chain(&mut target_client, "sync-target").await;
}

#[test(tokio::test)]
async fn unknown_snapshot_format_is_rejected() {
    let node = kv_node("sync-format").await;

    let offer = client(&node)
        .offer_snapshot(RequestOfferSnapshot {
            snapshot: Some(Snapshot {
                height: 5,
                format: 2,
                chunks: 1,
                ..Default::default()
            }),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(
        offer.result,
        response_offer_snapshot::Result::RejectFormat as i32
    );
}

#[test(tokio::test)]
async fn last_height_is_rejected_without_wedging_the_server() {
    let node = kv_node("overflow-1").await;
    let mut client = client(&node);

    let status = client
        .init_chain(RequestInitChain {
            chain_id: "overflow-1".to_string(),
            initial_height: i64::MAX,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let response = client
        .echo(RequestEcho {
            message: "alive".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.message, "alive");

    // Genesis is still open after the rejection.
    init_chain(&mut client, "overflow-1").await;
    block(&mut client, 1, &["a=1"]).await;
}
