//! A key/value store exposed as an ABCI application.
//!
//! Transactions are UTF-8 strings of the form `key=value`; a bare `key` stores
//! `key=key`. Writes made by `DeliverTx` become visible to `Query` once the
//! block is committed. Committed state is periodically snapshotted so that new
//! nodes can state-sync from this one.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use serde_derive::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use tendermint_proto::abci::{
    response_apply_snapshot_chunk, response_offer_snapshot, Event, EventAttribute,
    RequestApplySnapshotChunk, RequestCheckTx, RequestDeliverTx, RequestInfo, RequestInitChain,
    RequestLoadSnapshotChunk, RequestOfferSnapshot, RequestQuery, ResponseApplySnapshotChunk,
    ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseInfo, ResponseInitChain,
    ResponseListSnapshots, ResponseLoadSnapshotChunk, ResponseOfferSnapshot, ResponseQuery,
    Snapshot,
};

use crate::abci::Application;
use crate::config::SnapshotConfig;
use crate::error::Error;
use crate::genesis::{ChainState, Genesis, SharedState};
use crate::util::mutex::MutexUtil;

/// The only snapshot format produced and accepted.
pub const SNAPSHOT_FORMAT: u32 = 1;

pub const APP_VERSION: u64 = 1;

const CODE_OK: u32 = 0;
const CODE_INVALID_TX: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tx {
    pub key: String,
    pub value: String,
}

impl Tx {
    pub fn parse(bytes: &[u8]) -> Result<Self, String> {
        let tx =
            std::str::from_utf8(bytes).map_err(|e| format!("transaction is not UTF-8: {}", e))?;

        if tx.is_empty() {
            return Err("empty transaction".to_string());
        }

        let (key, value) = tx.split_once('=').unwrap_or((tx, tx));

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Hash of the committed entries: SHA-256 over the length-prefixed keys and
/// values in key order.
pub fn app_hash(entries: &BTreeMap<String, String>) -> Vec<u8> {
    let mut hasher = Sha256::new();

    for (key, value) in entries {
        hasher.update((key.len() as u64).to_be_bytes());
        hasher.update(key.as_bytes());
        hasher.update((value.len() as u64).to_be_bytes());
        hasher.update(value.as_bytes());
    }

    hasher.finalize().to_vec()
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotPayload {
    height: i64,
    entries: BTreeMap<String, String>,
    chain: ChainState,
}

#[derive(Clone, Debug)]
struct StoredSnapshot {
    snapshot: Snapshot,
    chunks: Vec<Vec<u8>>,
}

#[derive(Debug)]
struct Restore {
    snapshot: Snapshot,
    app_hash: Vec<u8>,
    chunks: Vec<Vec<u8>>,
}

#[derive(Debug, Default)]
struct State {
    committed: BTreeMap<String, String>,
    pending: BTreeMap<String, String>,
    height: i64,
    app_hash: Vec<u8>,
    snapshots: VecDeque<StoredSnapshot>,
    restore: Option<Restore>,
}

pub struct KvStore {
    state: Mutex<State>,
    chain: SharedState,
    snapshot_config: SnapshotConfig,
}

impl KvStore {
    pub fn new(chain: SharedState, snapshot_config: SnapshotConfig) -> Self {
        Self {
            state: Mutex::new(State::default()),
            chain,
            snapshot_config,
        }
    }

    pub fn chain(&self) -> &SharedState {
        &self.chain
    }

    pub fn height(&self) -> i64 {
        self.state.acquire_mutex().height
    }

    pub fn app_hash(&self) -> Vec<u8> {
        self.state.acquire_mutex().app_hash.clone()
    }

    /// Looks up `key` in the committed state.
    pub fn get(&self, key: &str) -> Option<String> {
        self.state.acquire_mutex().committed.get(key).cloned()
    }

    fn take_snapshot(&self, state: &mut State) -> Result<(), Error> {
        if self.snapshot_config.chunk_size == 0 {
            return Err(Error::application(
                "snapshot chunk size must be positive".to_string(),
            ));
        }

        let payload = SnapshotPayload {
            height: state.height,
            entries: state.committed.clone(),
            chain: self.chain.snapshot(),
        };

        let bytes = serde_json::to_vec(&payload).map_err(Error::snapshot_encode)?;
        let chunks: Vec<Vec<u8>> = bytes
            .chunks(self.snapshot_config.chunk_size)
            .map(<[u8]>::to_vec)
            .collect();

        let height = u64::try_from(state.height)
            .map_err(|_| Error::application(format!("invalid snapshot height {}", state.height)))?;

        let snapshot = Snapshot {
            height,
            format: SNAPSHOT_FORMAT,
            chunks: u32::try_from(chunks.len())
                .map_err(|_| Error::application("snapshot has too many chunks".to_string()))?,
            hash: Sha256::digest(&bytes).to_vec().into(),
            ..Default::default()
        };

        info!(
            height = state.height,
            chunks = snapshot.chunks,
            size = bytes.len(),
            "snapshot taken"
        );

        state.snapshots.push_back(StoredSnapshot { snapshot, chunks });

        while state.snapshots.len() > self.snapshot_config.keep_recent {
            if let Some(pruned) = state.snapshots.pop_front() {
                debug!(height = pruned.snapshot.height, "snapshot pruned");
            }
        }

        Ok(())
    }

    fn finish_restore(
        &self,
        state: &mut State,
        restore: Restore,
    ) -> response_apply_snapshot_chunk::Result {
        use response_apply_snapshot_chunk::Result as ChunkResult;

        let bytes = restore.chunks.concat();

        if Sha256::digest(&bytes).as_slice() != restore.snapshot.hash.to_vec().as_slice() {
            warn!(height = restore.snapshot.height, "snapshot payload hash mismatch");
            return ChunkResult::RejectSnapshot;
        }

        let payload: SnapshotPayload = match serde_json::from_slice(&bytes) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    height = restore.snapshot.height,
                    "undecodable snapshot payload: {}", e
                );
                return ChunkResult::RejectSnapshot;
            }
        };

        if i64::try_from(restore.snapshot.height) != Ok(payload.height) {
            warn!(
                height = restore.snapshot.height,
                payload_height = payload.height,
                "snapshot height mismatch"
            );
            return ChunkResult::RejectSnapshot;
        }

        let hash = app_hash(&payload.entries);
        if hash != restore.app_hash {
            warn!(
                height = payload.height,
                "restored app hash does not match the trusted one"
            );
            return ChunkResult::RejectSnapshot;
        }

        info!(
            height = payload.height,
            entries = payload.entries.len(),
            "snapshot installed"
        );

        state.committed = payload.entries;
        state.pending = state.committed.clone();
        state.height = payload.height;
        state.app_hash = hash;
        self.chain.replace(payload.chain);

        ChunkResult::Accept
    }
}

fn event(key: &str, value: &str) -> Event {
    Event {
        r#type: "app".to_string(),
        attributes: vec![
            EventAttribute {
                key: "key".to_string().into(),
                value: key.to_string().into(),
                index: true,
            },
            EventAttribute {
                key: "value".to_string().into(),
                value: value.to_string().into(),
                index: true,
            },
        ],
    }
}

impl Application for KvStore {
    fn info(&self, _request: RequestInfo) -> Result<ResponseInfo, Error> {
        let state = self.state.acquire_mutex();

        Ok(ResponseInfo {
            data: serde_json::json!({ "size": state.committed.len() }).to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            app_version: APP_VERSION,
            last_block_height: state.height,
            last_block_app_hash: state.app_hash.clone().into(),
        })
    }

    fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        let genesis = Genesis::from_app_state(&request.app_state_bytes)?;

        let chain_id = if request.chain_id.is_empty() {
            self.chain.chain_id()
        } else {
            request.chain_id
        };
        self.chain.replace(ChainState { chain_id, genesis });

        let mut state = self.state.acquire_mutex();
        state.committed.clear();
        state.pending.clear();
        state.height = request.initial_height.max(1) - 1;
        state.app_hash = app_hash(&state.committed);

        Ok(ResponseInitChain {
            app_hash: state.app_hash.clone().into(),
            ..Default::default()
        })
    }

    fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error> {
        let state = self.state.acquire_mutex();
        let key = String::from_utf8_lossy(&request.data).to_string();

        let (value, log) = match state.committed.get(&key) {
            Some(value) => (value.clone(), "exists"),
            None => (String::new(), "does not exist"),
        };

        Ok(ResponseQuery {
            code: CODE_OK,
            log: log.to_string(),
            key: key.into_bytes().into(),
            value: value.into_bytes().into(),
            height: state.height,
            ..Default::default()
        })
    }

    fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        match Tx::parse(&request.tx) {
            Ok(_) => Ok(ResponseCheckTx {
                code: CODE_OK,
                gas_wanted: 1,
                ..Default::default()
            }),
            Err(log) => Ok(ResponseCheckTx {
                code: CODE_INVALID_TX,
                log,
                ..Default::default()
            }),
        }
    }

    fn deliver_tx(&self, request: RequestDeliverTx) -> Result<ResponseDeliverTx, Error> {
        let tx = match Tx::parse(&request.tx) {
            Ok(tx) => tx,
            Err(log) => {
                return Ok(ResponseDeliverTx {
                    code: CODE_INVALID_TX,
                    log,
                    ..Default::default()
                })
            }
        };

        let events = vec![event(&tx.key, &tx.value)];

        self.state.acquire_mutex().pending.insert(tx.key, tx.value);

        Ok(ResponseDeliverTx {
            code: CODE_OK,
            events,
            ..Default::default()
        })
    }

    fn commit(&self) -> Result<ResponseCommit, Error> {
        let mut state = self.state.acquire_mutex();

        let height = state
            .height
            .checked_add(1)
            .ok_or_else(|| Error::height_overflow("Commit".to_string(), state.height))?;

        state.committed = state.pending.clone();
        state.height = height;
        state.app_hash = app_hash(&state.committed);

        info!(
            height = state.height,
            entries = state.committed.len(),
            "committed block"
        );

        // The block is committed at this point, so a failed snapshot is only logged.
        let interval = self.snapshot_config.interval;
        if interval > 0 && u64::try_from(height).map_or(false, |h| h % interval == 0) {
            if let Err(e) = self.take_snapshot(&mut state) {
                warn!(height, "failed to take snapshot: {}", e);
            }
        }

        Ok(ResponseCommit {
            data: state.app_hash.clone().into(),
            ..Default::default()
        })
    }

    fn list_snapshots(&self) -> Result<ResponseListSnapshots, Error> {
        let state = self.state.acquire_mutex();

        Ok(ResponseListSnapshots {
            snapshots: state
                .snapshots
                .iter()
                .map(|stored| stored.snapshot.clone())
                .collect(),
        })
    }

    fn offer_snapshot(
        &self,
        request: RequestOfferSnapshot,
    ) -> Result<ResponseOfferSnapshot, Error> {
        use response_offer_snapshot::Result as OfferResult;

        let result = match request.snapshot {
            None => OfferResult::Reject,
            Some(snapshot) if snapshot.format != SNAPSHOT_FORMAT => OfferResult::RejectFormat,
            Some(snapshot) if snapshot.chunks == 0 => OfferResult::Reject,
            Some(snapshot) => {
                self.state.acquire_mutex().restore = Some(Restore {
                    snapshot,
                    app_hash: request.app_hash.to_vec(),
                    chunks: Vec::new(),
                });
                OfferResult::Accept
            }
        };

        Ok(ResponseOfferSnapshot {
            result: result as i32,
        })
    }

    fn load_snapshot_chunk(
        &self,
        request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error> {
        let state = self.state.acquire_mutex();

        let chunk = state
            .snapshots
            .iter()
            .find(|stored| {
                stored.snapshot.height == request.height && stored.snapshot.format == request.format
            })
            .and_then(|stored| stored.chunks.get(request.chunk as usize))
            .cloned()
            .unwrap_or_default();

        Ok(ResponseLoadSnapshotChunk {
            chunk: chunk.into(),
        })
    }

    fn apply_snapshot_chunk(
        &self,
        request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error> {
        use response_apply_snapshot_chunk::Result as ChunkResult;

        let mut state = self.state.acquire_mutex();

        let mut restore = match state.restore.take() {
            Some(restore) => restore,
            None => {
                return Ok(ResponseApplySnapshotChunk {
                    result: ChunkResult::Abort as i32,
                    ..Default::default()
                })
            }
        };

        let expected = restore.chunks.len() as u32;
        if request.index != expected {
            debug!(index = request.index, expected, "out-of-order snapshot chunk");
            state.restore = Some(restore);

            return Ok(ResponseApplySnapshotChunk {
                result: ChunkResult::Retry as i32,
                refetch_chunks: vec![expected],
                ..Default::default()
            });
        }

        restore.chunks.push(request.chunk.to_vec());

        let result = if restore.chunks.len() as u32 == restore.snapshot.chunks {
            self.finish_restore(&mut state, restore)
        } else {
            state.restore = Some(restore);
            ChunkResult::Accept
        };

        Ok(ResponseApplySnapshotChunk {
            result: result as i32,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn store(interval: u64) -> KvStore {
        KvStore::new(
            SharedState::new("kv-test", Genesis::default()),
            SnapshotConfig {
                interval,
                keep_recent: 2,
                chunk_size: 16,
            },
        )
    }

    fn deliver(store: &KvStore, tx: &str) -> ResponseDeliverTx {
        store
            .deliver_tx(RequestDeliverTx {
                tx: tx.as_bytes().to_vec().into(),
            })
            .unwrap()
    }

    #[test]
    fn parse_transactions() {
        struct Test {
            name: &'static str,
            tx: &'static [u8],
            want: Option<(&'static str, &'static str)>,
        }

        let tests = [
            Test {
                name: "key and value",
                tx: b"name=satoshi",
                want: Some(("name", "satoshi")),
            },
            Test {
                name: "bare key",
                tx: b"abc",
                want: Some(("abc", "abc")),
            },
            Test {
                name: "value containing '='",
                tx: b"a=b=c",
                want: Some(("a", "b=c")),
            },
            Test {
                name: "empty",
                tx: b"",
                want: None,
            },
            Test {
                name: "not UTF-8",
                tx: &[0xff, 0xfe],
                want: None,
            },
        ];

        for test in tests {
            let got = Tx::parse(test.tx).ok();
            let want = test.want.map(|(key, value)| Tx {
                key: key.to_string(),
                value: value.to_string(),
            });
            assert_eq!(got, want, "{}", test.name);
        }
    }

    #[test]
    fn writes_are_visible_after_commit() {
        let store = store(0);

        let response = deliver(&store, "a=1");
        assert_eq!(response.code, CODE_OK);
        assert_eq!(response.events[0].r#type, "app");
        assert_eq!(store.get("a"), None);

        store.commit().unwrap();
        assert_eq!(store.get("a"), Some("1".to_string()));
        assert_eq!(store.height(), 1);
    }

    #[test]
    fn invalid_transactions_are_not_applied() {
        let store = store(0);

        let check = store
            .check_tx(RequestCheckTx {
                tx: Vec::<u8>::new().into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(check.code, CODE_INVALID_TX);

        let response = deliver(&store, "");
        assert_eq!(response.code, CODE_INVALID_TX);
        assert!(response.events.is_empty());
    }

    #[test]
    fn app_hash_is_order_independent() {
        let first = store(0);
        deliver(&first, "a=1");
        deliver(&first, "b=2");
        first.commit().unwrap();

        let second = store(0);
        deliver(&second, "b=2");
        deliver(&second, "a=1");
        second.commit().unwrap();

        assert_eq!(first.app_hash(), second.app_hash());

        deliver(&second, "c=3");
        second.commit().unwrap();
        assert_ne!(first.app_hash(), second.app_hash());
    }

    #[test]
    fn snapshots_are_taken_and_pruned() {
        let store = store(2);

        for i in 0..6 {
            deliver(&store, &format!("key{}=value{}", i, i));
            store.commit().unwrap();
        }

        let snapshots = store.list_snapshots().unwrap().snapshots;
        let heights: Vec<u64> = snapshots.iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![4, 6]);

        let latest = &snapshots[1];
        assert_eq!(latest.format, SNAPSHOT_FORMAT);
        assert!(latest.chunks > 1);

        let chunk = store
            .load_snapshot_chunk(RequestLoadSnapshotChunk {
                height: 6,
                format: SNAPSHOT_FORMAT,
                chunk: 0,
            })
            .unwrap()
            .chunk;
        assert_eq!(chunk.len(), 16);

        let missing = store
            .load_snapshot_chunk(RequestLoadSnapshotChunk {
                height: 2,
                format: SNAPSHOT_FORMAT,
                chunk: 0,
            })
            .unwrap()
            .chunk;
        assert!(missing.is_empty());
    }

    #[test]
    fn offers_are_screened() {
        use response_offer_snapshot::Result as OfferResult;

        struct Test {
            name: &'static str,
            snapshot: Option<Snapshot>,
            want: OfferResult,
        }

        let tests = vec![
            Test {
                name: "no snapshot",
                snapshot: None,
                want: OfferResult::Reject,
            },
            Test {
                name: "unknown format",
                snapshot: Some(Snapshot {
                    height: 1,
                    format: 7,
                    chunks: 1,
                    ..Default::default()
                }),
                want: OfferResult::RejectFormat,
            },
            Test {
                name: "no chunks",
                snapshot: Some(Snapshot {
                    height: 1,
                    format: SNAPSHOT_FORMAT,
                    chunks: 0,
                    ..Default::default()
                }),
                want: OfferResult::Reject,
            },
            Test {
                name: "acceptable",
                snapshot: Some(Snapshot {
                    height: 1,
                    format: SNAPSHOT_FORMAT,
                    chunks: 1,
                    ..Default::default()
                }),
                want: OfferResult::Accept,
            },
        ];

        for test in tests {
            let response = store(0)
                .offer_snapshot(RequestOfferSnapshot {
                    snapshot: test.snapshot,
                    app_hash: Vec::<u8>::new().into(),
                })
                .unwrap();
            assert_eq!(response.result, test.want as i32, "{}", test.name);
        }
    }

    #[test]
    fn genesis_sets_chain_state() {
        let store = store(0);

        let response = store
            .init_chain(RequestInitChain {
                chain_id: "genesis-1".to_string(),
                initial_height: 10,
                app_state_bytes: br#"{"staking":{"params":{"bond_denom":"uatom"}}}"#
                    .to_vec()
                    .into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(response.app_hash.to_vec(), app_hash(&BTreeMap::new()));
        assert_eq!(store.height(), 9);
        assert_eq!(store.chain().chain_id(), "genesis-1");
        assert_eq!(
            store
                .chain()
                .read(|s| s.genesis.staking.params.bond_denom.clone()),
            "uatom"
        );
    }

    #[test]
    fn failed_snapshots_do_not_fail_the_commit() {
        let store = KvStore::new(
            SharedState::new("kv-test", Genesis::default()),
            SnapshotConfig {
                interval: 1,
                keep_recent: 2,
                chunk_size: 0,
            },
        );

        deliver(&store, "a=1");
        let first = store.commit().unwrap();
        assert_eq!(store.height(), 1);
        assert_eq!(first.data.to_vec(), store.app_hash());

        store.commit().unwrap();
        assert_eq!(store.height(), 2);
        assert!(store.list_snapshots().unwrap().snapshots.is_empty());
    }

    #[test]
    fn commit_never_overflows_the_height() {
        let store = store(0);
        store.state.acquire_mutex().height = i64::MAX;

        deliver(&store, "a=1");
        assert!(store.commit().is_err());

        assert_eq!(store.height(), i64::MAX);
        assert_eq!(store.get("a"), None);
    }
}
