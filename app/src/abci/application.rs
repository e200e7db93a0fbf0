use tendermint_proto::abci::{
    RequestApplySnapshotChunk, RequestBeginBlock, RequestCheckTx, RequestDeliverTx,
    RequestEcho, RequestEndBlock, RequestInfo, RequestInitChain, RequestLoadSnapshotChunk,
    RequestOfferSnapshot, RequestQuery, RequestSetOption, ResponseApplySnapshotChunk,
    ResponseBeginBlock, ResponseCheckTx, ResponseCommit, ResponseDeliverTx, ResponseEcho,
    ResponseEndBlock, ResponseInfo, ResponseInitChain, ResponseListSnapshots,
    ResponseLoadSnapshotChunk, ResponseOfferSnapshot, ResponseQuery, ResponseSetOption,
};

use crate::error::Error;

/// An ABCI application driven by [`AbciService`](super::AbciService).
///
/// The service only invokes a method once the call is valid in the current
/// lifecycle phase, and never invokes two methods concurrently. Implementations
/// still take `&self` and keep their state behind interior mutability, since
/// the gRPC server shares the application between connections.
///
/// Every method except [`Application::info`] has a default that answers the
/// call without touching any state.
pub trait Application: Send + Sync + 'static {
    fn echo(&self, request: RequestEcho) -> Result<ResponseEcho, Error> {
        Ok(ResponseEcho {
            message: request.message,
        })
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Reports the last committed height and app hash.
    fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error>;

    fn set_option(&self, _request: RequestSetOption) -> Result<ResponseSetOption, Error> {
        Ok(Default::default())
    }

    fn init_chain(&self, _request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        Ok(Default::default())
    }

    fn query(&self, _request: RequestQuery) -> Result<ResponseQuery, Error> {
        Ok(Default::default())
    }

    fn check_tx(&self, _request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        Ok(Default::default())
    }

    fn begin_block(&self, _request: RequestBeginBlock) -> Result<ResponseBeginBlock, Error> {
        Ok(Default::default())
    }

    fn deliver_tx(&self, _request: RequestDeliverTx) -> Result<ResponseDeliverTx, Error> {
        Ok(Default::default())
    }

    fn end_block(&self, _request: RequestEndBlock) -> Result<ResponseEndBlock, Error> {
        Ok(Default::default())
    }

    fn commit(&self) -> Result<ResponseCommit, Error> {
        Ok(Default::default())
    }

    fn list_snapshots(&self) -> Result<ResponseListSnapshots, Error> {
        Ok(Default::default())
    }

    fn offer_snapshot(
        &self,
        _request: RequestOfferSnapshot,
    ) -> Result<ResponseOfferSnapshot, Error> {
        Ok(Default::default())
    }

    fn load_snapshot_chunk(
        &self,
        _request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error> {
        Ok(Default::default())
    }

    fn apply_snapshot_chunk(
        &self,
        _request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error> {
        Ok(Default::default())
    }
}
