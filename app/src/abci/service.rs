use std::sync::Mutex;

use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::{debug, info, warn};

use cosmos_rpc_proto::tendermint::abci::abci_application_server::AbciApplication;
use tendermint_proto::abci::{
    response_apply_snapshot_chunk, response_offer_snapshot, RequestApplySnapshotChunk,
    RequestBeginBlock, RequestCheckTx, RequestCommit, RequestDeliverTx, RequestEcho,
    RequestEndBlock, RequestFlush, RequestInfo, RequestInitChain, RequestListSnapshots,
    RequestLoadSnapshotChunk, RequestOfferSnapshot, RequestQuery, RequestSetOption,
    ResponseApplySnapshotChunk, ResponseBeginBlock, ResponseCheckTx, ResponseCommit,
    ResponseDeliverTx, ResponseEcho, ResponseEndBlock, ResponseFlush, ResponseInfo,
    ResponseInitChain, ResponseListSnapshots, ResponseLoadSnapshotChunk, ResponseOfferSnapshot,
    ResponseQuery, ResponseSetOption,
};

use super::application::Application;
use super::lifecycle::{Call, Lifecycle, Phase};
use crate::error::Error;
use crate::util::mutex::MutexUtil;

/// Serves an [`Application`] as `tendermint.abci.ABCIApplication`, rejecting
/// calls that arrive out of the order a consensus engine must follow.
///
/// The lifecycle lock is held for the duration of each call, from the order
/// check to the phase transition.
pub struct AbciService<A> {
    app: A,
    lifecycle: Mutex<Lifecycle>,
}

impl<A: Application> AbciService<A> {
    pub fn new(app: A) -> Self {
        Self {
            app,
            lifecycle: Mutex::new(Lifecycle::new()),
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.acquire_mutex().phase().clone()
    }

    fn guarded<R>(
        &self,
        call: Call,
        f: impl FnOnce(&A, &mut Lifecycle) -> Result<R, Error>,
    ) -> Result<Response<R>, Status> {
        let mut lifecycle = self.lifecycle.acquire_mutex();

        debug!(%call, phase = %lifecycle.phase(), "ABCI call");

        lifecycle.check(call)?;

        let response = f(&self.app, &mut lifecycle).map_err(|e| {
            warn!(%call, "ABCI call failed: {}", e);
            e
        })?;

        Ok(Response::new(response))
    }
}

#[async_trait]
impl<A: Application> AbciApplication for AbciService<A> {
    async fn echo(&self, request: Request<RequestEcho>) -> Result<Response<ResponseEcho>, Status> {
        self.guarded(Call::Echo, |app, _| app.echo(request.into_inner()))
    }

    async fn flush(
        &self,
        _request: Request<RequestFlush>,
    ) -> Result<Response<ResponseFlush>, Status> {
        self.guarded(Call::Flush, |app, _| {
            app.flush()?;
            Ok(ResponseFlush {})
        })
    }

    async fn info(&self, request: Request<RequestInfo>) -> Result<Response<ResponseInfo>, Status> {
        self.guarded(Call::Info, |app, lifecycle| {
            let response = app.info(request.into_inner())?;
            lifecycle.on_info(response.last_block_height)?;
            Ok(response)
        })
    }

    async fn set_option(
        &self,
        request: Request<RequestSetOption>,
    ) -> Result<Response<ResponseSetOption>, Status> {
        self.guarded(Call::SetOption, |app, _| {
            app.set_option(request.into_inner())
        })
    }

    async fn deliver_tx(
        &self,
        request: Request<RequestDeliverTx>,
    ) -> Result<Response<ResponseDeliverTx>, Status> {
        self.guarded(Call::DeliverTx, |app, _| {
            app.deliver_tx(request.into_inner())
        })
    }

    async fn check_tx(
        &self,
        request: Request<RequestCheckTx>,
    ) -> Result<Response<ResponseCheckTx>, Status> {
        self.guarded(Call::CheckTx, |app, _| app.check_tx(request.into_inner()))
    }

    async fn query(
        &self,
        request: Request<RequestQuery>,
    ) -> Result<Response<ResponseQuery>, Status> {
        self.guarded(Call::Query, |app, _| app.query(request.into_inner()))
    }

    async fn commit(
        &self,
        _request: Request<RequestCommit>,
    ) -> Result<Response<ResponseCommit>, Status> {
        self.guarded(Call::Commit, |app, lifecycle| {
            let next_height = lifecycle.commit()?;
            let response = app.commit()?;
            lifecycle.on_commit(next_height);
            Ok(response)
        })
    }

    async fn init_chain(
        &self,
        request: Request<RequestInitChain>,
    ) -> Result<Response<ResponseInitChain>, Status> {
        self.guarded(Call::InitChain, |app, lifecycle| {
            let request = request.into_inner();
            let first_height = lifecycle.init_chain(request.initial_height)?;

            info!(chain_id = %request.chain_id, first_height, "initializing chain");

            let response = app.init_chain(request)?;
            lifecycle.on_init_chain(first_height);
            Ok(response)
        })
    }

    async fn begin_block(
        &self,
        request: Request<RequestBeginBlock>,
    ) -> Result<Response<ResponseBeginBlock>, Status> {
        let request = request.into_inner();
        let header_height = request.header.as_ref().map(|header| header.height);

        self.guarded(Call::BeginBlock, |app, lifecycle| {
            let height = lifecycle.begin_block(header_height)?;
            let response = app.begin_block(request)?;
            lifecycle.on_begin_block(height);
            Ok(response)
        })
    }

    async fn end_block(
        &self,
        request: Request<RequestEndBlock>,
    ) -> Result<Response<ResponseEndBlock>, Status> {
        let request = request.into_inner();

        self.guarded(Call::EndBlock, |app, lifecycle| {
            lifecycle.end_block(request.height)?;
            let response = app.end_block(request)?;
            lifecycle.on_end_block();
            Ok(response)
        })
    }

    async fn list_snapshots(
        &self,
        _request: Request<RequestListSnapshots>,
    ) -> Result<Response<ResponseListSnapshots>, Status> {
        self.guarded(Call::ListSnapshots, |app, _| app.list_snapshots())
    }

    async fn offer_snapshot(
        &self,
        request: Request<RequestOfferSnapshot>,
    ) -> Result<Response<ResponseOfferSnapshot>, Status> {
        let request = request.into_inner();
        let offered = request.snapshot.as_ref().map(|s| (s.height, s.chunks));

        self.guarded(Call::OfferSnapshot, |app, lifecycle| {
            let (height, chunks) = match offered {
                Some((height, chunks)) => match lifecycle.snapshot_height(height) {
                    Ok(height) => (height, chunks),
                    Err(e) => {
                        warn!("rejecting snapshot offer: {}", e);
                        return Ok(ResponseOfferSnapshot {
                            result: response_offer_snapshot::Result::Reject as i32,
                        });
                    }
                },
                None => (0, 0),
            };

            let response = app.offer_snapshot(request)?;
            let result = response_offer_snapshot::Result::from_i32(response.result)
                .unwrap_or(response_offer_snapshot::Result::Unknown);

            info!(height, chunks, ?result, "snapshot offered");

            lifecycle.on_offer_snapshot(height, chunks, result);
            Ok(response)
        })
    }

    async fn load_snapshot_chunk(
        &self,
        request: Request<RequestLoadSnapshotChunk>,
    ) -> Result<Response<ResponseLoadSnapshotChunk>, Status> {
        self.guarded(Call::LoadSnapshotChunk, |app, _| {
            app.load_snapshot_chunk(request.into_inner())
        })
    }

    async fn apply_snapshot_chunk(
        &self,
        request: Request<RequestApplySnapshotChunk>,
    ) -> Result<Response<ResponseApplySnapshotChunk>, Status> {
        self.guarded(Call::ApplySnapshotChunk, |app, lifecycle| {
            let response = app.apply_snapshot_chunk(request.into_inner())?;
            let result = response_apply_snapshot_chunk::Result::from_i32(response.result)
                .unwrap_or(response_apply_snapshot_chunk::Result::Unknown);

            lifecycle.on_apply_snapshot_chunk(result)?;
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use test_log::test;
    use tonic::Code;

    use tendermint_proto::types::Header;

    use super::*;

    #[derive(Default)]
    struct Counter {
        delivered: AtomicUsize,
        last_block_height: i64,
    }

    impl Application for Counter {
        fn info(&self, _request: RequestInfo) -> Result<ResponseInfo, Error> {
            Ok(ResponseInfo {
                last_block_height: self.last_block_height,
                ..Default::default()
            })
        }

        fn deliver_tx(&self, _request: RequestDeliverTx) -> Result<ResponseDeliverTx, Error> {
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(Default::default())
        }
    }

    fn begin(height: i64) -> Request<RequestBeginBlock> {
        Request::new(RequestBeginBlock {
            header: Some(Header {
                height,
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test(tokio::test)]
    async fn rejected_calls_never_reach_the_application() {
        let service = AbciService::new(Counter::default());

        let status = service
            .deliver_tx(Request::new(RequestDeliverTx::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::FailedPrecondition);
        assert_eq!(service.app().delivered.load(Ordering::SeqCst), 0);
        assert_eq!(service.phase(), Phase::Genesis);
    }

    #[test(tokio::test)]
    async fn drives_a_block() {
        let service = AbciService::new(Counter::default());

        service
            .init_chain(Request::new(RequestInitChain {
                initial_height: 1,
                ..Default::default()
            }))
            .await
            .unwrap();

        service.begin_block(begin(1)).await.unwrap();
        service
            .deliver_tx(Request::new(RequestDeliverTx::default()))
            .await
            .unwrap();

        let status = service
            .commit(Request::new(RequestCommit {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::FailedPrecondition);

        service
            .end_block(Request::new(RequestEndBlock { height: 1 }))
            .await
            .unwrap();
        service.commit(Request::new(RequestCommit {})).await.unwrap();

        assert_eq!(service.phase(), Phase::Idle { next_height: 2 });
        assert_eq!(service.app().delivered.load(Ordering::SeqCst), 1);

        let status = service.begin_block(begin(3)).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test(tokio::test)]
    async fn info_resumes_from_committed_height() {
        let service = AbciService::new(Counter {
            last_block_height: 41,
            ..Default::default()
        });

        service
            .info(Request::new(RequestInfo::default()))
            .await
            .unwrap();
        assert_eq!(service.phase(), Phase::Idle { next_height: 42 });

        let status = service
            .init_chain(Request::new(RequestInitChain::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::FailedPrecondition);
    }

    #[test(tokio::test)]
    async fn heights_stop_before_overflow() {
        let service = AbciService::new(Counter::default());

        let status = service
            .init_chain(Request::new(RequestInitChain {
                initial_height: i64::MAX,
                ..Default::default()
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(service.phase(), Phase::Genesis);

        service
            .init_chain(Request::new(RequestInitChain {
                initial_height: i64::MAX - 1,
                ..Default::default()
            }))
            .await
            .unwrap();
        service.begin_block(begin(i64::MAX - 1)).await.unwrap();
        service
            .end_block(Request::new(RequestEndBlock {
                height: i64::MAX - 1,
            }))
            .await
            .unwrap();
        service.commit(Request::new(RequestCommit {})).await.unwrap();

        let status = service.begin_block(begin(i64::MAX)).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        // The service keeps answering after the rejection.
        let echo = service
            .echo(Request::new(RequestEcho {
                message: "still here".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(echo.message, "still here");
    }

    #[test(tokio::test)]
    async fn snapshots_beyond_the_last_height_are_rejected() {
        use tendermint_proto::abci::Snapshot;

        let service = AbciService::new(Counter::default());

        let response = service
            .offer_snapshot(Request::new(RequestOfferSnapshot {
                snapshot: Some(Snapshot {
                    height: u64::MAX,
                    format: 1,
                    chunks: 1,
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(
            response.result,
            response_offer_snapshot::Result::Reject as i32
        );
        assert_eq!(service.phase(), Phase::Genesis);
    }
}
