//! `cosmos.staking.v1beta1.Query`, answered from the staking genesis.

use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::trace;

use cosmos_rpc_proto::cosmos::staking::v1beta1 as staking;
use cosmos_rpc_proto::cosmos::staking::v1beta1::query_server::Query;
use cosmos_rpc_proto::services;

use crate::genesis::SharedState;
use crate::unimplemented::unimplemented;

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
    async fn params(
        &self,
        _request: Request<staking::QueryParamsRequest>,
    ) -> Result<Response<staking::QueryParamsResponse>, Status> {
        trace!("staking params");

        let params: staking::Params = self.state.read(|s| (&s.genesis.staking.params).into());

        Ok(Response::new(staking::QueryParamsResponse {
            params: Some(params),
        }))
    }

    async fn pool(
        &self,
        _request: Request<staking::QueryPoolRequest>,
    ) -> Result<Response<staking::QueryPoolResponse>, Status> {
        let pool: staking::Pool = self.state.read(|s| (&s.genesis.staking.pool).into());

        Ok(Response::new(staking::QueryPoolResponse { pool: Some(pool) }))
    }

    async fn validators(
        &self,
        _request: Request<staking::QueryValidatorsRequest>,
    ) -> Result<Response<staking::QueryValidatorsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("Validators")))
    }

    async fn validator(
        &self,
        _request: Request<staking::QueryValidatorRequest>,
    ) -> Result<Response<staking::QueryValidatorResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("Validator")))
    }

    async fn validator_delegations(
        &self,
        _request: Request<staking::QueryValidatorDelegationsRequest>,
    ) -> Result<Response<staking::QueryValidatorDelegationsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("ValidatorDelegations")))
    }

    async fn validator_unbonding_delegations(
        &self,
        _request: Request<staking::QueryValidatorUnbondingDelegationsRequest>,
    ) -> Result<Response<staking::QueryValidatorUnbondingDelegationsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("ValidatorUnbondingDelegations")))
    }

    async fn delegation(
        &self,
        _request: Request<staking::QueryDelegationRequest>,
    ) -> Result<Response<staking::QueryDelegationResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("Delegation")))
    }

    async fn unbonding_delegation(
        &self,
        _request: Request<staking::QueryUnbondingDelegationRequest>,
    ) -> Result<Response<staking::QueryUnbondingDelegationResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("UnbondingDelegation")))
    }

    async fn delegator_delegations(
        &self,
        _request: Request<staking::QueryDelegatorDelegationsRequest>,
    ) -> Result<Response<staking::QueryDelegatorDelegationsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("DelegatorDelegations")))
    }

    async fn delegator_unbonding_delegations(
        &self,
        _request: Request<staking::QueryDelegatorUnbondingDelegationsRequest>,
    ) -> Result<Response<staking::QueryDelegatorUnbondingDelegationsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("DelegatorUnbondingDelegations")))
    }

    async fn redelegations(
        &self,
        _request: Request<staking::QueryRedelegationsRequest>,
    ) -> Result<Response<staking::QueryRedelegationsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("Redelegations")))
    }

    async fn delegator_validators(
        &self,
        _request: Request<staking::QueryDelegatorValidatorsRequest>,
    ) -> Result<Response<staking::QueryDelegatorValidatorsResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("DelegatorValidators")))
    }

    async fn delegator_validator(
        &self,
        _request: Request<staking::QueryDelegatorValidatorRequest>,
    ) -> Result<Response<staking::QueryDelegatorValidatorResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("DelegatorValidator")))
    }

    async fn historical_info(
        &self,
        _request: Request<staking::QueryHistoricalInfoRequest>,
    ) -> Result<Response<staking::QueryHistoricalInfoResponse>, Status> {
        Err(unimplemented(&services::STAKING_QUERY.method_path("HistoricalInfo")))
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::genesis::Genesis;

    #[tokio::test]
    async fn params_follow_genesis() {
        let mut genesis = Genesis::default();
        genesis.staking.params.max_validators = 150;

        let service = QueryService::new(SharedState::new("test", genesis));

        let params = service
            .params(Request::new(staking::QueryParamsRequest {}))
            .await
            .unwrap()
            .into_inner()
            .params
            .unwrap();

        assert_eq!(params.max_validators, 150);
        assert_eq!(params.bond_denom, "stake");

        let pool = service
            .pool(Request::new(staking::QueryPoolRequest {}))
            .await
            .unwrap()
            .into_inner()
            .pool
            .unwrap();

        assert_eq!(pool.bonded_tokens, "0");
    }

    #[tokio::test]
    async fn other_queries_are_unimplemented() {
        let service = QueryService::new(SharedState::default());

        let status = service
            .validators(Request::new(staking::QueryValidatorsRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Unimplemented);
    }
}
