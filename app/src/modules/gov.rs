//! `cosmos.gov.v1beta1.Query`, answered from the gov genesis.

use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::debug;

use cosmos_rpc_proto::cosmos::gov::v1beta1 as gov;
use cosmos_rpc_proto::cosmos::gov::v1beta1::query_server::Query;
use cosmos_rpc_proto::services;

use crate::genesis::SharedState;
use crate::unimplemented::unimplemented;

pub const PARAMS_VOTING: &str = "voting";
pub const PARAMS_DEPOSIT: &str = "deposit";
pub const PARAMS_TALLYING: &str = "tallying";

#[derive(Clone, Debug)]
pub struct QueryService {
    state: SharedState,
}

impl QueryService {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Query for QueryService {
    /// Only the parameter set named by `params_type` is filled in.
    async fn params(
        &self,
        request: Request<gov::QueryParamsRequest>,
    ) -> Result<Response<gov::QueryParamsResponse>, Status> {
        let params_type = request.into_inner().params_type;
        debug!(%params_type, "gov params");

        let response = self.state.read(|s| {
            let params = &s.genesis.gov;

            match params_type.as_str() {
                PARAMS_VOTING => Ok(gov::QueryParamsResponse {
                    voting_params: Some((&params.voting_params).into()),
                    ..Default::default()
                }),
                PARAMS_DEPOSIT => Ok(gov::QueryParamsResponse {
                    deposit_params: Some((&params.deposit_params).into()),
                    ..Default::default()
                }),
                PARAMS_TALLYING => Ok(gov::QueryParamsResponse {
                    tally_params: Some((&params.tally_params).into()),
                    ..Default::default()
                }),
                other => Err(Status::invalid_argument(format!(
                    "unknown params type '{}', expected one of {}, {} or {}",
                    other, PARAMS_VOTING, PARAMS_DEPOSIT, PARAMS_TALLYING
                ))),
            }
        })?;

        Ok(Response::new(response))
    }

    async fn proposal(
        &self,
        _request: Request<gov::QueryProposalRequest>,
    ) -> Result<Response<gov::QueryProposalResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Proposal")))
    }

    async fn proposals(
        &self,
        _request: Request<gov::QueryProposalsRequest>,
    ) -> Result<Response<gov::QueryProposalsResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Proposals")))
    }

    async fn vote(
        &self,
        _request: Request<gov::QueryVoteRequest>,
    ) -> Result<Response<gov::QueryVoteResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Vote")))
    }

    async fn votes(
        &self,
        _request: Request<gov::QueryVotesRequest>,
    ) -> Result<Response<gov::QueryVotesResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Votes")))
    }

    async fn deposit(
        &self,
        _request: Request<gov::QueryDepositRequest>,
    ) -> Result<Response<gov::QueryDepositResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Deposit")))
    }

    async fn deposits(
        &self,
        _request: Request<gov::QueryDepositsRequest>,
    ) -> Result<Response<gov::QueryDepositsResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("Deposits")))
    }

    async fn tally_result(
        &self,
        _request: Request<gov::QueryTallyResultRequest>,
    ) -> Result<Response<gov::QueryTallyResultResponse>, Status> {
        Err(unimplemented(&services::GOV_QUERY.method_path("TallyResult")))
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    async fn params(params_type: &str) -> Result<gov::QueryParamsResponse, Status> {
        QueryService::new(SharedState::default())
            .params(Request::new(gov::QueryParamsRequest {
                params_type: params_type.to_string(),
            }))
            .await
            .map(Response::into_inner)
    }

    #[tokio::test]
    async fn params_by_type() {
        let voting = params(PARAMS_VOTING).await.unwrap();
        assert_eq!(voting.voting_params.unwrap().voting_period.unwrap().seconds, 172800);
        assert!(voting.deposit_params.is_none());

        let deposit = params(PARAMS_DEPOSIT).await.unwrap();
        assert_eq!(deposit.deposit_params.unwrap().min_deposit[0].denom, "stake");

        let tally = params(PARAMS_TALLYING).await.unwrap();
        assert_eq!(
            tally.tally_params.unwrap().threshold,
            b"500000000000000000".to_vec()
        );
    }

    #[tokio::test]
    async fn unknown_params_type_is_invalid() {
        for params_type in ["", "Voting", "staking"] {
            let status = params(params_type).await.unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument, "{:?}", params_type);
        }
    }
}
