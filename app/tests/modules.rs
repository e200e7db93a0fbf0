mod common;

use test_log::test;
use tonic::Code;

use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::{
    reflection_service_client::ReflectionServiceClient, GetAuthnDescriptorRequest,
    GetConfigurationDescriptorRequest, GetQueryServicesDescriptorRequest,
};
use cosmos_rpc_proto::cosmos::distribution::v1beta1::{
    query_client::QueryClient as DistributionQueryClient, QueryParamsRequest as DistributionParams,
};
use cosmos_rpc_proto::cosmos::gov::v1beta1::{
    query_client::QueryClient as GovQueryClient, QueryParamsRequest as GovParams,
};
use cosmos_rpc_proto::cosmos::group::v1beta1::{
    msg_client::MsgClient as GroupMsgClient, query_client::QueryClient as GroupQueryClient,
    MsgCreateGroup, QueryGroupInfoRequest,
};
use cosmos_rpc_proto::cosmos::staking::v1beta1::{
    query_client::QueryClient as StakingQueryClient, QueryParamsRequest as StakingParams,
    QueryValidatorsRequest,
};
use cosmos_rpc_proto::services;

use common::kv_node;

#[test(tokio::test)]
async fn staking_params_with_empty_request() {
    let node = kv_node("modules-1").await;

    let params = StakingQueryClient::new(node.grpc.channel.clone())
        .params(StakingParams {})
        .await
        .unwrap()
        .into_inner()
        .params
        .unwrap();

    assert_eq!(params.bond_denom, "stake");
    assert_eq!(params.max_validators, 100);
    assert_eq!(params.max_entries, 7);
    assert_eq!(params.historical_entries, 10000);
    assert_eq!(params.unbonding_time.unwrap().seconds, 21 * 24 * 60 * 60);
}

#[test(tokio::test)]
async fn unanswered_queries_are_unimplemented() {
    let node = kv_node("modules-2").await;

    let status = StakingQueryClient::new(node.grpc.channel.clone())
        .validators(QueryValidatorsRequest::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
    assert!(status
        .message()
        .contains("/cosmos.staking.v1beta1.Query/Validators"));

    let status = GroupQueryClient::new(node.grpc.channel.clone())
        .group_info(QueryGroupInfoRequest { group_id: 1 })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
}

#[test(tokio::test)]
async fn msg_services_are_unimplemented() {
    let node = kv_node("modules-3").await;

    let status = GroupMsgClient::new(node.grpc.channel.clone())
        .create_group(MsgCreateGroup::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unimplemented);
}

#[test(tokio::test)]
async fn gov_and_distribution_params() {
    let node = kv_node("modules-4").await;
    let mut gov = GovQueryClient::new(node.grpc.channel.clone());

    let tally = gov
        .params(GovParams {
            params_type: "tallying".to_string(),
        })
        .await
        .unwrap()
        .into_inner()
        .tally_params
        .unwrap();
    assert_eq!(tally.quorum, b"334000000000000000".to_vec());

    let status = gov
        .params(GovParams {
            params_type: "minting".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let distribution = DistributionQueryClient::new(node.grpc.channel.clone())
        .params(DistributionParams {})
        .await
        .unwrap()
        .into_inner()
        .params
        .unwrap();
    assert_eq!(distribution.community_tax, "20000000000000000");
    assert_eq!(distribution.base_proposer_reward, "10000000000000000");
}

#[test(tokio::test)]
async fn reflection_lists_query_paths() {
    let node = kv_node("modules-5").await;
    let mut reflection = ReflectionServiceClient::new(node.grpc.channel.clone());

    let queries = reflection
        .get_query_services_descriptor(GetQueryServicesDescriptorRequest {})
        .await
        .unwrap()
        .into_inner()
        .queries
        .unwrap();

    let listed: Vec<String> = queries
        .query_services
        .iter()
        .filter(|s| s.is_module)
        .flat_map(|s| s.methods.iter().map(|m| m.full_query_path.clone()))
        .collect();

    for service in services::queries() {
        for path in service.method_paths() {
            assert!(listed.contains(&path), "{} is not listed", path);
        }
    }

    let authn = reflection
        .get_authn_descriptor(GetAuthnDescriptorRequest {})
        .await
        .unwrap()
        .into_inner()
        .authn
        .unwrap();
    let modes: Vec<(String, i32)> = authn
        .sign_modes
        .into_iter()
        .map(|m| (m.name, m.number))
        .collect();
    assert_eq!(
        modes,
        vec![
            ("SIGN_MODE_DIRECT".to_string(), 1),
            ("SIGN_MODE_LEGACY_AMINO_JSON".to_string(), 127)
        ]
    );

    let config = reflection
        .get_configuration_descriptor(GetConfigurationDescriptorRequest {})
        .await
        .unwrap()
        .into_inner()
        .config
        .unwrap();
    assert_eq!(config.bech32_account_address_prefix, "cosmos");
}
