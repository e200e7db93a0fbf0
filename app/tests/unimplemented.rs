mod common;

use test_log::test;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::server::NamedService;
use tonic::transport::{Channel, Server};
use tonic::{Code, Request};

use cosmos_rpc_app::unimplemented;
use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::reflection_service_server::ReflectionServiceServer;
use cosmos_rpc_proto::cosmos::distribution::v1beta1::{
    msg_server::MsgServer as DistributionMsgServer,
    query_server::QueryServer as DistributionQueryServer,
};
use cosmos_rpc_proto::cosmos::gov::v1beta1::{
    msg_server::MsgServer as GovMsgServer, query_server::QueryServer as GovQueryServer,
};
use cosmos_rpc_proto::cosmos::group::v1beta1::{
    msg_server::MsgServer as GroupMsgServer, query_server::QueryServer as GroupQueryServer,
};
use cosmos_rpc_proto::cosmos::staking::v1beta1::{
    msg_server::MsgServer as StakingMsgServer, query_server::QueryServer as StakingQueryServer,
};
use cosmos_rpc_proto::services;
use cosmos_rpc_proto::tendermint::abci::abci_application_server::AbciApplicationServer;

use common::spawn;

/// Sends an empty message to `path`, which every request type decodes as its
/// default value.
async fn call(channel: Channel, path: &str) -> tonic::Status {
    let mut grpc = tonic::client::Grpc::new(channel);
    grpc.ready().await.expect("channel ready");

    let path = PathAndQuery::try_from(path).expect("valid path");

    grpc.unary(Request::new(()), path, ProstCodec::<(), ()>::default())
        .await
        .expect_err("default servers never succeed")
}

#[test(tokio::test)]
async fn every_method_is_unimplemented_by_default() {
    let router = Server::builder()
        .add_service(AbciApplicationServer::new(unimplemented::AbciApplication))
        .add_service(ReflectionServiceServer::new(unimplemented::ReflectionService))
        .add_service(DistributionQueryServer::new(unimplemented::DistributionQuery))
        .add_service(DistributionMsgServer::new(unimplemented::DistributionMsg))
        .add_service(GovQueryServer::new(unimplemented::GovQuery))
        .add_service(GovMsgServer::new(unimplemented::GovMsg))
        .add_service(GroupQueryServer::new(unimplemented::GroupQuery))
        .add_service(GroupMsgServer::new(unimplemented::GroupMsg))
        .add_service(StakingQueryServer::new(unimplemented::StakingQuery))
        .add_service(StakingMsgServer::new(unimplemented::StakingMsg));

    let server = spawn(router).await;

    let mut calls = 0;
    for service in services::ALL {
        for path in service.method_paths() {
            let status = call(server.channel.clone(), &path).await;

            assert_eq!(status.code(), Code::Unimplemented, "{}", path);
            assert!(status.message().contains(&path), "{}", status.message());

            calls += 1;
        }
    }

    assert_eq!(calls, 88);
}

#[test(tokio::test)]
async fn unknown_paths_are_unimplemented() {
    let router = Server::builder().add_service(StakingMsgServer::new(unimplemented::StakingMsg));
    let server = spawn(router).await;

    let status = call(server.channel.clone(), "/cosmos.staking.v1beta1.Msg/Nope").await;
    assert_eq!(status.code(), Code::Unimplemented);
}

#[test]
fn catalog_names_match_the_servers() {
    struct Test {
        catalog: &'static str,
        server: &'static str,
    }

    let tests = [
        Test {
            catalog: services::ABCI_APPLICATION.name,
            server: <AbciApplicationServer<unimplemented::AbciApplication> as NamedService>::NAME,
        },
        Test {
            catalog: services::REFLECTION_SERVICE.name,
            server: <ReflectionServiceServer<unimplemented::ReflectionService> as NamedService>::NAME,
        },
        Test {
            catalog: services::DISTRIBUTION_QUERY.name,
            server: <DistributionQueryServer<unimplemented::DistributionQuery> as NamedService>::NAME,
        },
        Test {
            catalog: services::DISTRIBUTION_MSG.name,
            server: <DistributionMsgServer<unimplemented::DistributionMsg> as NamedService>::NAME,
        },
        Test {
            catalog: services::GOV_QUERY.name,
            server: <GovQueryServer<unimplemented::GovQuery> as NamedService>::NAME,
        },
        Test {
            catalog: services::GOV_MSG.name,
            server: <GovMsgServer<unimplemented::GovMsg> as NamedService>::NAME,
        },
        Test {
            catalog: services::GROUP_QUERY.name,
            server: <GroupQueryServer<unimplemented::GroupQuery> as NamedService>::NAME,
        },
        Test {
            catalog: services::GROUP_MSG.name,
            server: <GroupMsgServer<unimplemented::GroupMsg> as NamedService>::NAME,
        },
        Test {
            catalog: services::STAKING_QUERY.name,
            server: <StakingQueryServer<unimplemented::StakingQuery> as NamedService>::NAME,
        },
        Test {
            catalog: services::STAKING_MSG.name,
            server: <StakingMsgServer<unimplemented::StakingMsg> as NamedService>::NAME,
        },
    ];

    assert_eq!(tests.len(), services::ALL.len());

    for test in tests {
        assert_eq!(test.catalog, test.server);
    }
}
