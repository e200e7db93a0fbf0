//! Servers for every service in the catalog whose every method answers
//! `UNIMPLEMENTED`.
//!
//! The Msg services are always served by these: messages reach the modules
//! through `DeliverTx`, never directly over gRPC. Query services are served by
//! these only where no module implementation exists.

use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::debug;

use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1 as reflection;
use cosmos_rpc_proto::cosmos::distribution::v1beta1 as distribution;
use cosmos_rpc_proto::cosmos::gov::v1beta1 as gov;
use cosmos_rpc_proto::cosmos::group::v1beta1 as group;
use cosmos_rpc_proto::cosmos::staking::v1beta1 as staking;
use cosmos_rpc_proto::services;
use cosmos_rpc_proto::tendermint::abci;

/// The status returned for a method without an implementation.
pub fn unimplemented(path: &str) -> Status {
    debug!(path, "unimplemented method called");
    Status::unimplemented(format!("method {} is not implemented", path))
}

macro_rules! unimplemented_service {
    (
        $name:ident : $service:path => $descriptor:path {
            $( $method:ident ( $req:ty ) -> $resp:ty = $rpc:literal ; )*
        }
    ) => {
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        #[async_trait]
        impl $service for $name {
            $(
                async fn $method(
                    &self,
                    _request: Request<$req>,
                ) -> Result<Response<$resp>, Status> {
                    Err(unimplemented(&$descriptor.method_path($rpc)))
                }
            )*
        }
    };
}

unimplemented_service! {
    ReflectionService: reflection::reflection_service_server::ReflectionService => services::REFLECTION_SERVICE {
        get_authn_descriptor(reflection::GetAuthnDescriptorRequest) -> reflection::GetAuthnDescriptorResponse = "GetAuthnDescriptor";
        get_chain_descriptor(reflection::GetChainDescriptorRequest) -> reflection::GetChainDescriptorResponse = "GetChainDescriptor";
        get_codec_descriptor(reflection::GetCodecDescriptorRequest) -> reflection::GetCodecDescriptorResponse = "GetCodecDescriptor";
        get_configuration_descriptor(reflection::GetConfigurationDescriptorRequest) -> reflection::GetConfigurationDescriptorResponse = "GetConfigurationDescriptor";
        get_query_services_descriptor(reflection::GetQueryServicesDescriptorRequest) -> reflection::GetQueryServicesDescriptorResponse = "GetQueryServicesDescriptor";
        get_tx_descriptor(reflection::GetTxDescriptorRequest) -> reflection::GetTxDescriptorResponse = "GetTxDescriptor";
    }
}

unimplemented_service! {
    DistributionQuery: distribution::query_server::Query => services::DISTRIBUTION_QUERY {
        params(distribution::QueryParamsRequest) -> distribution::QueryParamsResponse = "Params";
        validator_outstanding_rewards(distribution::QueryValidatorOutstandingRewardsRequest) -> distribution::QueryValidatorOutstandingRewardsResponse = "ValidatorOutstandingRewards";
        validator_commission(distribution::QueryValidatorCommissionRequest) -> distribution::QueryValidatorCommissionResponse = "ValidatorCommission";
        validator_slashes(distribution::QueryValidatorSlashesRequest) -> distribution::QueryValidatorSlashesResponse = "ValidatorSlashes";
        delegation_rewards(distribution::QueryDelegationRewardsRequest) -> distribution::QueryDelegationRewardsResponse = "DelegationRewards";
        delegation_total_rewards(distribution::QueryDelegationTotalRewardsRequest) -> distribution::QueryDelegationTotalRewardsResponse = "DelegationTotalRewards";
        delegator_validators(distribution::QueryDelegatorValidatorsRequest) -> distribution::QueryDelegatorValidatorsResponse = "DelegatorValidators";
        delegator_withdraw_address(distribution::QueryDelegatorWithdrawAddressRequest) -> distribution::QueryDelegatorWithdrawAddressResponse = "DelegatorWithdrawAddress";
        community_pool(distribution::QueryCommunityPoolRequest) -> distribution::QueryCommunityPoolResponse = "CommunityPool";
    }
}

unimplemented_service! {
    DistributionMsg: distribution::msg_server::Msg => services::DISTRIBUTION_MSG {
        set_withdraw_address(distribution::MsgSetWithdrawAddress) -> distribution::MsgSetWithdrawAddressResponse = "SetWithdrawAddress";
        withdraw_delegator_reward(distribution::MsgWithdrawDelegatorReward) -> distribution::MsgWithdrawDelegatorRewardResponse = "WithdrawDelegatorReward";
        withdraw_validator_commission(distribution::MsgWithdrawValidatorCommission) -> distribution::MsgWithdrawValidatorCommissionResponse = "WithdrawValidatorCommission";
        fund_community_pool(distribution::MsgFundCommunityPool) -> distribution::MsgFundCommunityPoolResponse = "FundCommunityPool";
    }
}

unimplemented_service! {
    GovQuery: gov::query_server::Query => services::GOV_QUERY {
        proposal(gov::QueryProposalRequest) -> gov::QueryProposalResponse = "Proposal";
        proposals(gov::QueryProposalsRequest) -> gov::QueryProposalsResponse = "Proposals";
        vote(gov::QueryVoteRequest) -> gov::QueryVoteResponse = "Vote";
        votes(gov::QueryVotesRequest) -> gov::QueryVotesResponse = "Votes";
        params(gov::QueryParamsRequest) -> gov::QueryParamsResponse = "Params";
        deposit(gov::QueryDepositRequest) -> gov::QueryDepositResponse = "Deposit";
        deposits(gov::QueryDepositsRequest) -> gov::QueryDepositsResponse = "Deposits";
        tally_result(gov::QueryTallyResultRequest) -> gov::QueryTallyResultResponse = "TallyResult";
    }
}

unimplemented_service! {
    GovMsg: gov::msg_server::Msg => services::GOV_MSG {
        submit_proposal(gov::MsgSubmitProposal) -> gov::MsgSubmitProposalResponse = "SubmitProposal";
        vote(gov::MsgVote) -> gov::MsgVoteResponse = "Vote";
        vote_weighted(gov::MsgVoteWeighted) -> gov::MsgVoteWeightedResponse = "VoteWeighted";
        deposit(gov::MsgDeposit) -> gov::MsgDepositResponse = "Deposit";
    }
}

unimplemented_service! {
    GroupQuery: group::query_server::Query => services::GROUP_QUERY {
        group_info(group::QueryGroupInfoRequest) -> group::QueryGroupInfoResponse = "GroupInfo";
        group_policy_info(group::QueryGroupPolicyInfoRequest) -> group::QueryGroupPolicyInfoResponse = "GroupPolicyInfo";
        group_members(group::QueryGroupMembersRequest) -> group::QueryGroupMembersResponse = "GroupMembers";
        groups_by_admin(group::QueryGroupsByAdminRequest) -> group::QueryGroupsByAdminResponse = "GroupsByAdmin";
        group_policies_by_group(group::QueryGroupPoliciesByGroupRequest) -> group::QueryGroupPoliciesByGroupResponse = "GroupPoliciesByGroup";
        group_policies_by_admin(group::QueryGroupPoliciesByAdminRequest) -> group::QueryGroupPoliciesByAdminResponse = "GroupPoliciesByAdmin";
        proposal(group::QueryProposalRequest) -> group::QueryProposalResponse = "Proposal";
        proposals_by_group_policy(group::QueryProposalsByGroupPolicyRequest) -> group::QueryProposalsByGroupPolicyResponse = "ProposalsByGroupPolicy";
        vote_by_proposal_voter(group::QueryVoteByProposalVoterRequest) -> group::QueryVoteByProposalVoterResponse = "VoteByProposalVoter";
        votes_by_proposal(group::QueryVotesByProposalRequest) -> group::QueryVotesByProposalResponse = "VotesByProposal";
        votes_by_voter(group::QueryVotesByVoterRequest) -> group::QueryVotesByVoterResponse = "VotesByVoter";
        groups_by_member(group::QueryGroupsByMemberRequest) -> group::QueryGroupsByMemberResponse = "GroupsByMember";
    }
}

unimplemented_service! {
    GroupMsg: group::msg_server::Msg => services::GROUP_MSG {
        create_group(group::MsgCreateGroup) -> group::MsgCreateGroupResponse = "CreateGroup";
        update_group_members(group::MsgUpdateGroupMembers) -> group::MsgUpdateGroupMembersResponse = "UpdateGroupMembers";
        update_group_admin(group::MsgUpdateGroupAdmin) -> group::MsgUpdateGroupAdminResponse = "UpdateGroupAdmin";
        update_group_metadata(group::MsgUpdateGroupMetadata) -> group::MsgUpdateGroupMetadataResponse = "UpdateGroupMetadata";
        create_group_policy(group::MsgCreateGroupPolicy) -> group::MsgCreateGroupPolicyResponse = "CreateGroupPolicy";
        update_group_policy_admin(group::MsgUpdateGroupPolicyAdmin) -> group::MsgUpdateGroupPolicyAdminResponse = "UpdateGroupPolicyAdmin";
        update_group_policy_decision_policy(group::MsgUpdateGroupPolicyDecisionPolicy) -> group::MsgUpdateGroupPolicyDecisionPolicyResponse = "UpdateGroupPolicyDecisionPolicy";
        update_group_policy_metadata(group::MsgUpdateGroupPolicyMetadata) -> group::MsgUpdateGroupPolicyMetadataResponse = "UpdateGroupPolicyMetadata";
        create_proposal(group::MsgCreateProposal) -> group::MsgCreateProposalResponse = "CreateProposal";
        vote(group::MsgVote) -> group::MsgVoteResponse = "Vote";
        exec(group::MsgExec) -> group::MsgExecResponse = "Exec";
    }
}

unimplemented_service! {
    StakingQuery: staking::query_server::Query => services::STAKING_QUERY {
        validators(staking::QueryValidatorsRequest) -> staking::QueryValidatorsResponse = "Validators";
        validator(staking::QueryValidatorRequest) -> staking::QueryValidatorResponse = "Validator";
        validator_delegations(staking::QueryValidatorDelegationsRequest) -> staking::QueryValidatorDelegationsResponse = "ValidatorDelegations";
        validator_unbonding_delegations(staking::QueryValidatorUnbondingDelegationsRequest) -> staking::QueryValidatorUnbondingDelegationsResponse = "ValidatorUnbondingDelegations";
        delegation(staking::QueryDelegationRequest) -> staking::QueryDelegationResponse = "Delegation";
        unbonding_delegation(staking::QueryUnbondingDelegationRequest) -> staking::QueryUnbondingDelegationResponse = "UnbondingDelegation";
        delegator_delegations(staking::QueryDelegatorDelegationsRequest) -> staking::QueryDelegatorDelegationsResponse = "DelegatorDelegations";
        delegator_unbonding_delegations(staking::QueryDelegatorUnbondingDelegationsRequest) -> staking::QueryDelegatorUnbondingDelegationsResponse = "DelegatorUnbondingDelegations";
        redelegations(staking::QueryRedelegationsRequest) -> staking::QueryRedelegationsResponse = "Redelegations";
        delegator_validators(staking::QueryDelegatorValidatorsRequest) -> staking::QueryDelegatorValidatorsResponse = "DelegatorValidators";
        delegator_validator(staking::QueryDelegatorValidatorRequest) -> staking::QueryDelegatorValidatorResponse = "DelegatorValidator";
        historical_info(staking::QueryHistoricalInfoRequest) -> staking::QueryHistoricalInfoResponse = "HistoricalInfo";
        pool(staking::QueryPoolRequest) -> staking::QueryPoolResponse = "Pool";
        params(staking::QueryParamsRequest) -> staking::QueryParamsResponse = "Params";
    }
}

unimplemented_service! {
    StakingMsg: staking::msg_server::Msg => services::STAKING_MSG {
        create_validator(staking::MsgCreateValidator) -> staking::MsgCreateValidatorResponse = "CreateValidator";
        edit_validator(staking::MsgEditValidator) -> staking::MsgEditValidatorResponse = "EditValidator";
        delegate(staking::MsgDelegate) -> staking::MsgDelegateResponse = "Delegate";
        begin_redelegate(staking::MsgBeginRedelegate) -> staking::MsgBeginRedelegateResponse = "BeginRedelegate";
        undelegate(staking::MsgUndelegate) -> staking::MsgUndelegateResponse = "Undelegate";
    }
}

unimplemented_service! {
    AbciApplication: abci::abci_application_server::AbciApplication => services::ABCI_APPLICATION {
        echo(abci::RequestEcho) -> abci::ResponseEcho = "Echo";
        flush(abci::RequestFlush) -> abci::ResponseFlush = "Flush";
        info(abci::RequestInfo) -> abci::ResponseInfo = "Info";
        set_option(abci::RequestSetOption) -> abci::ResponseSetOption = "SetOption";
        deliver_tx(abci::RequestDeliverTx) -> abci::ResponseDeliverTx = "DeliverTx";
        check_tx(abci::RequestCheckTx) -> abci::ResponseCheckTx = "CheckTx";
        query(abci::RequestQuery) -> abci::ResponseQuery = "Query";
        commit(abci::RequestCommit) -> abci::ResponseCommit = "Commit";
        init_chain(abci::RequestInitChain) -> abci::ResponseInitChain = "InitChain";
        begin_block(abci::RequestBeginBlock) -> abci::ResponseBeginBlock = "BeginBlock";
        end_block(abci::RequestEndBlock) -> abci::ResponseEndBlock = "EndBlock";
        list_snapshots(abci::RequestListSnapshots) -> abci::ResponseListSnapshots = "ListSnapshots";
        offer_snapshot(abci::RequestOfferSnapshot) -> abci::ResponseOfferSnapshot = "OfferSnapshot";
        load_snapshot_chunk(abci::RequestLoadSnapshotChunk) -> abci::ResponseLoadSnapshotChunk = "LoadSnapshotChunk";
        apply_snapshot_chunk(abci::RequestApplySnapshotChunk) -> abci::ResponseApplySnapshotChunk = "ApplySnapshotChunk";
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use staking::msg_server::Msg as _;

    #[tokio::test]
    async fn status_names_the_method_path() {
        let status = StakingMsg
            .delegate(Request::new(staking::MsgDelegate::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Unimplemented);
        assert!(status
            .message()
            .contains("/cosmos.staking.v1beta1.Msg/Delegate"));
    }
}
