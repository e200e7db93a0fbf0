//! `cosmos.base.reflection.v2alpha1.ReflectionService`: describes the chain,
//! its codec and the services this node serves, so that generic clients can
//! discover them without prior knowledge of the application.

use async_trait::async_trait;
use itertools::Itertools;
use tonic::{Request, Response, Status};

use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1 as reflection;
use cosmos_rpc_proto::cosmos::base::reflection::v2alpha1::reflection_service_server::ReflectionService;
use cosmos_rpc_proto::services::{self, ServiceDescriptor};

use crate::config::ChainConfig;
use crate::genesis::SharedState;

pub const MSG_INTERFACE: &str = "cosmos.base.v1beta1.Msg";
pub const CONTENT_INTERFACE: &str = "cosmos.gov.v1beta1.Content";
pub const DECISION_POLICY_INTERFACE: &str = "cosmos.group.v1beta1.DecisionPolicy";
pub const TX: &str = "cosmos.tx.v1beta1.Tx";

const TX_BODY: &str = "cosmos.tx.v1beta1.TxBody";

fn type_url(fullname: &str) -> String {
    format!("/{}", fullname)
}

fn implementer(fullname: &str) -> reflection::InterfaceImplementerDescriptor {
    reflection::InterfaceImplementerDescriptor {
        fullname: fullname.to_string(),
        type_url: type_url(fullname),
    }
}

fn accepting(fullname: &str, field: &str) -> reflection::InterfaceAcceptingMessageDescriptor {
    reflection::InterfaceAcceptingMessageDescriptor {
        fullname: fullname.to_string(),
        field_descriptor_names: vec![field.to_string()],
    }
}

/// Request types of every Msg service, in catalog order.
fn msg_types() -> impl Iterator<Item = &'static str> {
    services::msgs().flat_map(|service| service.methods.iter().map(|m| m.request))
}

pub fn authn_descriptor(chain: &ChainConfig) -> reflection::AuthnDescriptor {
    reflection::AuthnDescriptor {
        sign_modes: chain
            .sign_modes
            .iter()
            .map(|mode| reflection::SigningModeDescriptor {
                name: mode.name.clone(),
                number: mode.number,
                ..Default::default()
            })
            .collect(),
    }
}

pub fn codec_descriptor() -> reflection::CodecDescriptor {
    let msg = reflection::InterfaceDescriptor {
        fullname: MSG_INTERFACE.to_string(),
        interface_accepting_messages: vec![accepting(TX_BODY, "messages")],
        interface_implementers: msg_types().map(implementer).collect(),
    };

    let content = reflection::InterfaceDescriptor {
        fullname: CONTENT_INTERFACE.to_string(),
        interface_accepting_messages: vec![accepting(
            "cosmos.gov.v1beta1.MsgSubmitProposal",
            "content",
        )],
        interface_implementers: vec![
            implementer("cosmos.gov.v1beta1.TextProposal"),
            implementer("cosmos.distribution.v1beta1.CommunityPoolSpendProposal"),
        ],
    };

    let decision_policy = reflection::InterfaceDescriptor {
        fullname: DECISION_POLICY_INTERFACE.to_string(),
        interface_accepting_messages: vec![
            accepting("cosmos.group.v1beta1.MsgCreateGroupPolicy", "decision_policy"),
            accepting(
                "cosmos.group.v1beta1.MsgUpdateGroupPolicyDecisionPolicy",
                "decision_policy",
            ),
        ],
        interface_implementers: vec![implementer("cosmos.group.v1beta1.ThresholdDecisionPolicy")],
    };

    reflection::CodecDescriptor {
        interfaces: vec![msg, content, decision_policy],
    }
}

fn query_service(
    service: &ServiceDescriptor,
    is_module: bool,
) -> reflection::QueryServiceDescriptor {
    reflection::QueryServiceDescriptor {
        fullname: service.name.to_string(),
        is_module,
        methods: service
            .methods
            .iter()
            .map(|method| reflection::QueryMethodDescriptor {
                name: method.name.to_string(),
                full_query_path: service.method_path(method.name),
            })
            .collect(),
    }
}

pub fn query_services_descriptor() -> reflection::QueryServicesDescriptor {
    let modules = services::queries()
        .sorted_by_key(|service| service.name)
        .map(|service| query_service(service, true));

    reflection::QueryServicesDescriptor {
        query_services: modules
            .chain(std::iter::once(query_service(
                &services::REFLECTION_SERVICE,
                false,
            )))
            .collect(),
    }
}

pub fn tx_descriptor() -> reflection::TxDescriptor {
    reflection::TxDescriptor {
        fullname: TX.to_string(),
        msgs: msg_types()
            .map(|msg| reflection::MsgDescriptor {
                msg_type_url: type_url(msg),
            })
            .collect(),
    }
}

#[derive(Clone, Debug)]
pub struct DescriptorService {
    state: SharedState,
    chain: ChainConfig,
}

impl DescriptorService {
    pub fn new(state: SharedState, chain: ChainConfig) -> Self {
        Self { state, chain }
    }
}

#[async_trait]
impl ReflectionService for DescriptorService {
    async fn get_authn_descriptor(
        &self,
        _request: Request<reflection::GetAuthnDescriptorRequest>,
    ) -> Result<Response<reflection::GetAuthnDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetAuthnDescriptorResponse {
            authn: Some(authn_descriptor(&self.chain)),
        }))
    }

    async fn get_chain_descriptor(
        &self,
        _request: Request<reflection::GetChainDescriptorRequest>,
    ) -> Result<Response<reflection::GetChainDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetChainDescriptorResponse {
            chain: Some(reflection::ChainDescriptor {
                id: self.state.chain_id(),
            }),
        }))
    }

    async fn get_codec_descriptor(
        &self,
        _request: Request<reflection::GetCodecDescriptorRequest>,
    ) -> Result<Response<reflection::GetCodecDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetCodecDescriptorResponse {
            codec: Some(codec_descriptor()),
        }))
    }

    async fn get_configuration_descriptor(
        &self,
        _request: Request<reflection::GetConfigurationDescriptorRequest>,
    ) -> Result<Response<reflection::GetConfigurationDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetConfigurationDescriptorResponse {
            config: Some(reflection::ConfigurationDescriptor {
                bech32_account_address_prefix: self.chain.bech32_prefix.clone(),
            }),
        }))
    }

    async fn get_query_services_descriptor(
        &self,
        _request: Request<reflection::GetQueryServicesDescriptorRequest>,
    ) -> Result<Response<reflection::GetQueryServicesDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetQueryServicesDescriptorResponse {
            queries: Some(query_services_descriptor()),
        }))
    }

    async fn get_tx_descriptor(
        &self,
        _request: Request<reflection::GetTxDescriptorRequest>,
    ) -> Result<Response<reflection::GetTxDescriptorResponse>, Status> {
        Ok(Response::new(reflection::GetTxDescriptorResponse {
            tx: Some(tx_descriptor()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_msg_implements_the_msg_interface() {
        let codec = codec_descriptor();
        let msg = codec
            .interfaces
            .iter()
            .find(|i| i.fullname == MSG_INTERFACE)
            .unwrap();

        assert_eq!(msg.interface_implementers.len(), 4 + 4 + 11 + 5);
        assert!(msg
            .interface_implementers
            .iter()
            .any(|i| i.type_url == "/cosmos.staking.v1beta1.MsgDelegate"));
    }

    #[test]
    fn decision_policy_is_accepted_by_group_policy_msgs() {
        let codec = codec_descriptor();
        let policy = codec
            .interfaces
            .iter()
            .find(|i| i.fullname == DECISION_POLICY_INTERFACE)
            .unwrap();

        let accepting: Vec<&str> = policy
            .interface_accepting_messages
            .iter()
            .map(|m| m.fullname.as_str())
            .collect();

        assert_eq!(
            accepting,
            vec![
                "cosmos.group.v1beta1.MsgCreateGroupPolicy",
                "cosmos.group.v1beta1.MsgUpdateGroupPolicyDecisionPolicy"
            ]
        );
    }

    #[test]
    fn query_services_are_modules_except_reflection() {
        let descriptor = query_services_descriptor();

        let modules: Vec<&str> = descriptor
            .query_services
            .iter()
            .filter(|s| s.is_module)
            .map(|s| s.fullname.as_str())
            .collect();

        assert_eq!(
            modules,
            vec![
                "cosmos.distribution.v1beta1.Query",
                "cosmos.gov.v1beta1.Query",
                "cosmos.group.v1beta1.Query",
                "cosmos.staking.v1beta1.Query",
            ]
        );

        let last = descriptor.query_services.last().unwrap();
        assert_eq!(last.fullname, services::REFLECTION_SERVICE.name);
        assert!(!last.is_module);
        assert_eq!(
            last.methods[0].full_query_path,
            "/cosmos.base.reflection.v2alpha1.ReflectionService/GetAuthnDescriptor"
        );
    }

    #[test]
    fn tx_lists_msg_type_urls() {
        let tx = tx_descriptor();
        assert_eq!(tx.fullname, TX);
        assert!(tx
            .msgs
            .iter()
            .all(|m| m.msg_type_url.starts_with("/cosmos.")));
        assert!(tx
            .msgs
            .iter()
            .any(|m| m.msg_type_url == "/cosmos.group.v1beta1.MsgExec"));
    }
}
