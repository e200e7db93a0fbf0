//! `cosmos.distribution.v1beta1.Query`, answered from the distribution genesis.

use async_trait::async_trait;
use tonic::{Request, Response, Status};

use cosmos_rpc_proto::cosmos::base::v1beta1::DecCoin;
use cosmos_rpc_proto::cosmos::distribution::v1beta1 as distribution;
use cosmos_rpc_proto::cosmos::distribution::v1beta1::query_server::Query;
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
        _request: Request<distribution::QueryParamsRequest>,
    ) -> Result<Response<distribution::QueryParamsResponse>, Status> {
        let params: distribution::Params =
            self.state.read(|s| (&s.genesis.distribution.params).into());

        Ok(Response::new(distribution::QueryParamsResponse {
            params: Some(params),
        }))
    }

    async fn validator_outstanding_rewards(
        &self,
        _request: Request<distribution::QueryValidatorOutstandingRewardsRequest>,
    ) -> Result<Response<distribution::QueryValidatorOutstandingRewardsResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("ValidatorOutstandingRewards")))
    }

    async fn validator_commission(
        &self,
        _request: Request<distribution::QueryValidatorCommissionRequest>,
    ) -> Result<Response<distribution::QueryValidatorCommissionResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("ValidatorCommission")))
    }

    async fn validator_slashes(
        &self,
        _request: Request<distribution::QueryValidatorSlashesRequest>,
    ) -> Result<Response<distribution::QueryValidatorSlashesResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("ValidatorSlashes")))
    }

    async fn delegation_rewards(
        &self,
        _request: Request<distribution::QueryDelegationRewardsRequest>,
    ) -> Result<Response<distribution::QueryDelegationRewardsResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("DelegationRewards")))
    }

    async fn delegation_total_rewards(
        &self,
        _request: Request<distribution::QueryDelegationTotalRewardsRequest>,
    ) -> Result<Response<distribution::QueryDelegationTotalRewardsResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("DelegationTotalRewards")))
    }

    async fn delegator_validators(
        &self,
        _request: Request<distribution::QueryDelegatorValidatorsRequest>,
    ) -> Result<Response<distribution::QueryDelegatorValidatorsResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("DelegatorValidators")))
    }

    async fn delegator_withdraw_address(
        &self,
        _request: Request<distribution::QueryDelegatorWithdrawAddressRequest>,
    ) -> Result<Response<distribution::QueryDelegatorWithdrawAddressResponse>, Status> {
        Err(unimplemented(&services::DISTRIBUTION_QUERY.method_path("DelegatorWithdrawAddress")))
    }

    async fn community_pool(
        &self,
        _request: Request<distribution::QueryCommunityPoolRequest>,
    ) -> Result<Response<distribution::QueryCommunityPoolResponse>, Status> {
        let pool: Vec<DecCoin> = self.state.read(|s| {
            s.genesis
                .distribution
                .fee_pool
                .community_pool
                .iter()
                .map(Into::into)
                .collect()
        });

        Ok(Response::new(distribution::QueryCommunityPoolResponse { pool }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::{Dec, DecCoin, Genesis};

    #[tokio::test]
    async fn community_pool_lists_genesis_coins() {
        let mut genesis = Genesis::default();
        genesis.distribution.fee_pool.community_pool = vec![
            DecCoin::new("stake", Dec::parse("12.5").unwrap()),
            DecCoin::new("uatom", Dec::parse("3").unwrap()),
        ];

        let service = QueryService::new(SharedState::new("test", genesis));

        let pool = service
            .community_pool(Request::new(distribution::QueryCommunityPoolRequest {}))
            .await
            .unwrap()
            .into_inner()
            .pool;

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].amount, "12500000000000000000");
        assert_eq!(pool[1].denom, "uatom");
        assert_eq!(pool[1].amount, "3000000000000000000");
    }

    #[tokio::test]
    async fn params_are_the_sdk_defaults() {
        let service = QueryService::new(SharedState::default());

        let params = service
            .params(Request::new(distribution::QueryParamsRequest {}))
            .await
            .unwrap()
            .into_inner()
            .params
            .unwrap();

        assert_eq!(params.community_tax, "20000000000000000");
        assert!(params.withdraw_addr_enabled);
    }
}
