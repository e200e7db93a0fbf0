//! Static catalog of every gRPC service carried by this crate.
//!
//! The generated servers dispatch on fully-qualified method paths; the catalog
//! exposes those same paths (and the request/response message names) as data,
//! so callers can enumerate, describe and route the services without going
//! through protobuf descriptors.

/// A unary RPC method together with its request and response message names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    /// Fully-qualified protobuf name of the request message.
    pub request: &'static str,
    /// Fully-qualified protobuf name of the response message.
    pub response: &'static str,
}

impl MethodDescriptor {
    /// The `Any` type URL of the request message.
    pub fn request_type_url(&self) -> String {
        format!("/{}", self.request)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Fully-qualified service name, e.g. `cosmos.staking.v1beta1.Query`.
    pub name: &'static str,
    pub methods: &'static [MethodDescriptor],
}

impl ServiceDescriptor {
    /// The protobuf package the service belongs to.
    pub fn package(&self) -> &'static str {
        self.name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or_default()
    }

    /// The service name without its package.
    pub fn short_name(&self) -> &'static str {
        self.name
            .rsplit_once('.')
            .map(|(_, name)| name)
            .unwrap_or(self.name)
    }

    pub fn is_query(&self) -> bool {
        self.short_name() == "Query"
    }

    pub fn is_msg(&self) -> bool {
        self.short_name() == "Msg"
    }

    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// The HTTP/2 path a gRPC call to `method` is sent to: `/<service>/<method>`.
    pub fn method_path(&self, method: &str) -> String {
        format!("/{}/{}", self.name, method)
    }

    pub fn method_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.methods.iter().map(move |m| self.method_path(m.name))
    }
}

/// Every service in the catalog.
pub const ALL: &[ServiceDescriptor] = &[
    ABCI_APPLICATION,
    REFLECTION_SERVICE,
    DISTRIBUTION_QUERY,
    DISTRIBUTION_MSG,
    GOV_QUERY,
    GOV_MSG,
    GROUP_QUERY,
    GROUP_MSG,
    STAKING_QUERY,
    STAKING_MSG,
];

/// Resolves a `/<service>/<method>` path.
pub fn find(path: &str) -> Option<(&'static ServiceDescriptor, &'static MethodDescriptor)> {
    let (service, method) = path.strip_prefix('/')?.split_once('/')?;

    ALL.iter()
        .find(|s| s.name == service)
        .and_then(|s| s.method(method).map(|m| (s, m)))
}

pub fn queries() -> impl Iterator<Item = &'static ServiceDescriptor> {
    ALL.iter().filter(|s| s.is_query())
}

pub fn msgs() -> impl Iterator<Item = &'static ServiceDescriptor> {
    ALL.iter().filter(|s| s.is_msg())
}

/// `tendermint.abci.ABCIApplication`
pub const ABCI_APPLICATION: ServiceDescriptor = ServiceDescriptor {
    name: "tendermint.abci.ABCIApplication",
    methods: &[
        MethodDescriptor {
            name: "Echo",
            request: "tendermint.abci.RequestEcho",
            response: "tendermint.abci.ResponseEcho",
        },
        MethodDescriptor {
            name: "Flush",
            request: "tendermint.abci.RequestFlush",
            response: "tendermint.abci.ResponseFlush",
        },
        MethodDescriptor {
            name: "Info",
            request: "tendermint.abci.RequestInfo",
            response: "tendermint.abci.ResponseInfo",
        },
        MethodDescriptor {
            name: "SetOption",
            request: "tendermint.abci.RequestSetOption",
            response: "tendermint.abci.ResponseSetOption",
        },
        MethodDescriptor {
            name: "DeliverTx",
            request: "tendermint.abci.RequestDeliverTx",
            response: "tendermint.abci.ResponseDeliverTx",
        },
        MethodDescriptor {
            name: "CheckTx",
            request: "tendermint.abci.RequestCheckTx",
            response: "tendermint.abci.ResponseCheckTx",
        },
        MethodDescriptor {
            name: "Query",
            request: "tendermint.abci.RequestQuery",
            response: "tendermint.abci.ResponseQuery",
        },
        MethodDescriptor {
            name: "Commit",
            request: "tendermint.abci.RequestCommit",
            response: "tendermint.abci.ResponseCommit",
        },
        MethodDescriptor {
            name: "InitChain",
            request: "tendermint.abci.RequestInitChain",
            response: "tendermint.abci.ResponseInitChain",
        },
        MethodDescriptor {
            name: "BeginBlock",
            request: "tendermint.abci.RequestBeginBlock",
            response: "tendermint.abci.ResponseBeginBlock",
        },
        MethodDescriptor {
            name: "EndBlock",
            request: "tendermint.abci.RequestEndBlock",
            response: "tendermint.abci.ResponseEndBlock",
        },
        MethodDescriptor {
            name: "ListSnapshots",
            request: "tendermint.abci.RequestListSnapshots",
            response: "tendermint.abci.ResponseListSnapshots",
        },
        MethodDescriptor {
            name: "OfferSnapshot",
            request: "tendermint.abci.RequestOfferSnapshot",
            response: "tendermint.abci.ResponseOfferSnapshot",
        },
        MethodDescriptor {
            name: "LoadSnapshotChunk",
            request: "tendermint.abci.RequestLoadSnapshotChunk",
            response: "tendermint.abci.ResponseLoadSnapshotChunk",
        },
        MethodDescriptor {
            name: "ApplySnapshotChunk",
            request: "tendermint.abci.RequestApplySnapshotChunk",
            response: "tendermint.abci.ResponseApplySnapshotChunk",
        },
    ],
};

/// `cosmos.base.reflection.v2alpha1.ReflectionService`
pub const REFLECTION_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.base.reflection.v2alpha1.ReflectionService",
    methods: &[
        MethodDescriptor {
            name: "GetAuthnDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetAuthnDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetAuthnDescriptorResponse",
        },
        MethodDescriptor {
            name: "GetChainDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetChainDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetChainDescriptorResponse",
        },
        MethodDescriptor {
            name: "GetCodecDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetCodecDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetCodecDescriptorResponse",
        },
        MethodDescriptor {
            name: "GetConfigurationDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetConfigurationDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetConfigurationDescriptorResponse",
        },
        MethodDescriptor {
            name: "GetQueryServicesDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetQueryServicesDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetQueryServicesDescriptorResponse",
        },
        MethodDescriptor {
            name: "GetTxDescriptor",
            request: "cosmos.base.reflection.v2alpha1.GetTxDescriptorRequest",
            response: "cosmos.base.reflection.v2alpha1.GetTxDescriptorResponse",
        },
    ],
};

/// `cosmos.distribution.v1beta1.Query`
pub const DISTRIBUTION_QUERY: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.distribution.v1beta1.Query",
    methods: &[
        MethodDescriptor {
            name: "Params",
            request: "cosmos.distribution.v1beta1.QueryParamsRequest",
            response: "cosmos.distribution.v1beta1.QueryParamsResponse",
        },
        MethodDescriptor {
            name: "ValidatorOutstandingRewards",
            request: "cosmos.distribution.v1beta1.QueryValidatorOutstandingRewardsRequest",
            response: "cosmos.distribution.v1beta1.QueryValidatorOutstandingRewardsResponse",
        },
        MethodDescriptor {
            name: "ValidatorCommission",
            request: "cosmos.distribution.v1beta1.QueryValidatorCommissionRequest",
            response: "cosmos.distribution.v1beta1.QueryValidatorCommissionResponse",
        },
        MethodDescriptor {
            name: "ValidatorSlashes",
            request: "cosmos.distribution.v1beta1.QueryValidatorSlashesRequest",
            response: "cosmos.distribution.v1beta1.QueryValidatorSlashesResponse",
        },
        MethodDescriptor {
            name: "DelegationRewards",
            request: "cosmos.distribution.v1beta1.QueryDelegationRewardsRequest",
            response: "cosmos.distribution.v1beta1.QueryDelegationRewardsResponse",
        },
        MethodDescriptor {
            name: "DelegationTotalRewards",
            request: "cosmos.distribution.v1beta1.QueryDelegationTotalRewardsRequest",
            response: "cosmos.distribution.v1beta1.QueryDelegationTotalRewardsResponse",
        },
        MethodDescriptor {
            name: "DelegatorValidators",
            request: "cosmos.distribution.v1beta1.QueryDelegatorValidatorsRequest",
            response: "cosmos.distribution.v1beta1.QueryDelegatorValidatorsResponse",
        },
        MethodDescriptor {
            name: "DelegatorWithdrawAddress",
            request: "cosmos.distribution.v1beta1.QueryDelegatorWithdrawAddressRequest",
            response: "cosmos.distribution.v1beta1.QueryDelegatorWithdrawAddressResponse",
        },
        MethodDescriptor {
            name: "CommunityPool",
            request: "cosmos.distribution.v1beta1.QueryCommunityPoolRequest",
            response: "cosmos.distribution.v1beta1.QueryCommunityPoolResponse",
        },
    ],
};

/// `cosmos.distribution.v1beta1.Msg`
pub const DISTRIBUTION_MSG: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.distribution.v1beta1.Msg",
    methods: &[
        MethodDescriptor {
            name: "SetWithdrawAddress",
            request: "cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
            response: "cosmos.distribution.v1beta1.MsgSetWithdrawAddressResponse",
        },
        MethodDescriptor {
            name: "WithdrawDelegatorReward",
            request: "cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
            response: "cosmos.distribution.v1beta1.MsgWithdrawDelegatorRewardResponse",
        },
        MethodDescriptor {
            name: "WithdrawValidatorCommission",
            request: "cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
            response: "cosmos.distribution.v1beta1.MsgWithdrawValidatorCommissionResponse",
        },
        MethodDescriptor {
            name: "FundCommunityPool",
            request: "cosmos.distribution.v1beta1.MsgFundCommunityPool",
            response: "cosmos.distribution.v1beta1.MsgFundCommunityPoolResponse",
        },
    ],
};

/// `cosmos.gov.v1beta1.Query`
pub const GOV_QUERY: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.gov.v1beta1.Query",
    methods: &[
        MethodDescriptor {
            name: "Proposal",
            request: "cosmos.gov.v1beta1.QueryProposalRequest",
            response: "cosmos.gov.v1beta1.QueryProposalResponse",
        },
        MethodDescriptor {
            name: "Proposals",
            request: "cosmos.gov.v1beta1.QueryProposalsRequest",
            response: "cosmos.gov.v1beta1.QueryProposalsResponse",
        },
        MethodDescriptor {
            name: "Vote",
            request: "cosmos.gov.v1beta1.QueryVoteRequest",
            response: "cosmos.gov.v1beta1.QueryVoteResponse",
        },
        MethodDescriptor {
            name: "Votes",
            request: "cosmos.gov.v1beta1.QueryVotesRequest",
            response: "cosmos.gov.v1beta1.QueryVotesResponse",
        },
        MethodDescriptor {
            name: "Params",
            request: "cosmos.gov.v1beta1.QueryParamsRequest",
            response: "cosmos.gov.v1beta1.QueryParamsResponse",
        },
        MethodDescriptor {
            name: "Deposit",
            request: "cosmos.gov.v1beta1.QueryDepositRequest",
            response: "cosmos.gov.v1beta1.QueryDepositResponse",
        },
        MethodDescriptor {
            name: "Deposits",
            request: "cosmos.gov.v1beta1.QueryDepositsRequest",
            response: "cosmos.gov.v1beta1.QueryDepositsResponse",
        },
        MethodDescriptor {
            name: "TallyResult",
            request: "cosmos.gov.v1beta1.QueryTallyResultRequest",
            response: "cosmos.gov.v1beta1.QueryTallyResultResponse",
        },
    ],
};

/// `cosmos.gov.v1beta1.Msg`
pub const GOV_MSG: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.gov.v1beta1.Msg",
    methods: &[
        MethodDescriptor {
            name: "SubmitProposal",
            request: "cosmos.gov.v1beta1.MsgSubmitProposal",
            response: "cosmos.gov.v1beta1.MsgSubmitProposalResponse",
        },
        MethodDescriptor {
            name: "Vote",
            request: "cosmos.gov.v1beta1.MsgVote",
            response: "cosmos.gov.v1beta1.MsgVoteResponse",
        },
        MethodDescriptor {
            name: "VoteWeighted",
            request: "cosmos.gov.v1beta1.MsgVoteWeighted",
            response: "cosmos.gov.v1beta1.MsgVoteWeightedResponse",
        },
        MethodDescriptor {
            name: "Deposit",
            request: "cosmos.gov.v1beta1.MsgDeposit",
            response: "cosmos.gov.v1beta1.MsgDepositResponse",
        },
    ],
};

/// `cosmos.group.v1beta1.Query`
pub const GROUP_QUERY: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.group.v1beta1.Query",
    methods: &[
        MethodDescriptor {
            name: "GroupInfo",
            request: "cosmos.group.v1beta1.QueryGroupInfoRequest",
            response: "cosmos.group.v1beta1.QueryGroupInfoResponse",
        },
        MethodDescriptor {
            name: "GroupPolicyInfo",
            request: "cosmos.group.v1beta1.QueryGroupPolicyInfoRequest",
            response: "cosmos.group.v1beta1.QueryGroupPolicyInfoResponse",
        },
        MethodDescriptor {
            name: "GroupMembers",
            request: "cosmos.group.v1beta1.QueryGroupMembersRequest",
            response: "cosmos.group.v1beta1.QueryGroupMembersResponse",
        },
        MethodDescriptor {
            name: "GroupsByAdmin",
            request: "cosmos.group.v1beta1.QueryGroupsByAdminRequest",
            response: "cosmos.group.v1beta1.QueryGroupsByAdminResponse",
        },
        MethodDescriptor {
            name: "GroupPoliciesByGroup",
            request: "cosmos.group.v1beta1.QueryGroupPoliciesByGroupRequest",
            response: "cosmos.group.v1beta1.QueryGroupPoliciesByGroupResponse",
        },
        MethodDescriptor {
            name: "GroupPoliciesByAdmin",
            request: "cosmos.group.v1beta1.QueryGroupPoliciesByAdminRequest",
            response: "cosmos.group.v1beta1.QueryGroupPoliciesByAdminResponse",
        },
        MethodDescriptor {
            name: "Proposal",
            request: "cosmos.group.v1beta1.QueryProposalRequest",
            response: "cosmos.group.v1beta1.QueryProposalResponse",
        },
        MethodDescriptor {
            name: "ProposalsByGroupPolicy",
            request: "cosmos.group.v1beta1.QueryProposalsByGroupPolicyRequest",
            response: "cosmos.group.v1beta1.QueryProposalsByGroupPolicyResponse",
        },
        MethodDescriptor {
            name: "VoteByProposalVoter",
            request: "cosmos.group.v1beta1.QueryVoteByProposalVoterRequest",
            response: "cosmos.group.v1beta1.QueryVoteByProposalVoterResponse",
        },
        MethodDescriptor {
            name: "VotesByProposal",
            request: "cosmos.group.v1beta1.QueryVotesByProposalRequest",
            response: "cosmos.group.v1beta1.QueryVotesByProposalResponse",
        },
        MethodDescriptor {
            name: "VotesByVoter",
            request: "cosmos.group.v1beta1.QueryVotesByVoterRequest",
            response: "cosmos.group.v1beta1.QueryVotesByVoterResponse",
        },
        MethodDescriptor {
            name: "GroupsByMember",
            request: "cosmos.group.v1beta1.QueryGroupsByMemberRequest",
            response: "cosmos.group.v1beta1.QueryGroupsByMemberResponse",
        },
    ],
};

/// `cosmos.group.v1beta1.Msg`
pub const GROUP_MSG: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.group.v1beta1.Msg",
    methods: &[
        MethodDescriptor {
            name: "CreateGroup",
            request: "cosmos.group.v1beta1.MsgCreateGroup",
            response: "cosmos.group.v1beta1.MsgCreateGroupResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupMembers",
            request: "cosmos.group.v1beta1.MsgUpdateGroupMembers",
            response: "cosmos.group.v1beta1.MsgUpdateGroupMembersResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupAdmin",
            request: "cosmos.group.v1beta1.MsgUpdateGroupAdmin",
            response: "cosmos.group.v1beta1.MsgUpdateGroupAdminResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupMetadata",
            request: "cosmos.group.v1beta1.MsgUpdateGroupMetadata",
            response: "cosmos.group.v1beta1.MsgUpdateGroupMetadataResponse",
        },
        MethodDescriptor {
            name: "CreateGroupPolicy",
            request: "cosmos.group.v1beta1.MsgCreateGroupPolicy",
            response: "cosmos.group.v1beta1.MsgCreateGroupPolicyResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupPolicyAdmin",
            request: "cosmos.group.v1beta1.MsgUpdateGroupPolicyAdmin",
            response: "cosmos.group.v1beta1.MsgUpdateGroupPolicyAdminResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupPolicyDecisionPolicy",
            request: "cosmos.group.v1beta1.MsgUpdateGroupPolicyDecisionPolicy",
            response: "cosmos.group.v1beta1.MsgUpdateGroupPolicyDecisionPolicyResponse",
        },
        MethodDescriptor {
            name: "UpdateGroupPolicyMetadata",
            request: "cosmos.group.v1beta1.MsgUpdateGroupPolicyMetadata",
            response: "cosmos.group.v1beta1.MsgUpdateGroupPolicyMetadataResponse",
        },
        MethodDescriptor {
            name: "CreateProposal",
            request: "cosmos.group.v1beta1.MsgCreateProposal",
            response: "cosmos.group.v1beta1.MsgCreateProposalResponse",
        },
        MethodDescriptor {
            name: "Vote",
            request: "cosmos.group.v1beta1.MsgVote",
            response: "cosmos.group.v1beta1.MsgVoteResponse",
        },
        MethodDescriptor {
            name: "Exec",
            request: "cosmos.group.v1beta1.MsgExec",
            response: "cosmos.group.v1beta1.MsgExecResponse",
        },
    ],
};

/// `cosmos.staking.v1beta1.Query`
pub const STAKING_QUERY: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.staking.v1beta1.Query",
    methods: &[
        MethodDescriptor {
            name: "Validators",
            request: "cosmos.staking.v1beta1.QueryValidatorsRequest",
            response: "cosmos.staking.v1beta1.QueryValidatorsResponse",
        },
        MethodDescriptor {
            name: "Validator",
            request: "cosmos.staking.v1beta1.QueryValidatorRequest",
            response: "cosmos.staking.v1beta1.QueryValidatorResponse",
        },
        MethodDescriptor {
            name: "ValidatorDelegations",
            request: "cosmos.staking.v1beta1.QueryValidatorDelegationsRequest",
            response: "cosmos.staking.v1beta1.QueryValidatorDelegationsResponse",
        },
        MethodDescriptor {
            name: "ValidatorUnbondingDelegations",
            request: "cosmos.staking.v1beta1.QueryValidatorUnbondingDelegationsRequest",
            response: "cosmos.staking.v1beta1.QueryValidatorUnbondingDelegationsResponse",
        },
        MethodDescriptor {
            name: "Delegation",
            request: "cosmos.staking.v1beta1.QueryDelegationRequest",
            response: "cosmos.staking.v1beta1.QueryDelegationResponse",
        },
        MethodDescriptor {
            name: "UnbondingDelegation",
            request: "cosmos.staking.v1beta1.QueryUnbondingDelegationRequest",
            response: "cosmos.staking.v1beta1.QueryUnbondingDelegationResponse",
        },
        MethodDescriptor {
            name: "DelegatorDelegations",
            request: "cosmos.staking.v1beta1.QueryDelegatorDelegationsRequest",
            response: "cosmos.staking.v1beta1.QueryDelegatorDelegationsResponse",
        },
        MethodDescriptor {
            name: "DelegatorUnbondingDelegations",
            request: "cosmos.staking.v1beta1.QueryDelegatorUnbondingDelegationsRequest",
            response: "cosmos.staking.v1beta1.QueryDelegatorUnbondingDelegationsResponse",
        },
        MethodDescriptor {
            name: "Redelegations",
            request: "cosmos.staking.v1beta1.QueryRedelegationsRequest",
            response: "cosmos.staking.v1beta1.QueryRedelegationsResponse",
        },
        MethodDescriptor {
            name: "DelegatorValidators",
            request: "cosmos.staking.v1beta1.QueryDelegatorValidatorsRequest",
            response: "cosmos.staking.v1beta1.QueryDelegatorValidatorsResponse",
        },
        MethodDescriptor {
            name: "DelegatorValidator",
            request: "cosmos.staking.v1beta1.QueryDelegatorValidatorRequest",
            response: "cosmos.staking.v1beta1.QueryDelegatorValidatorResponse",
        },
        MethodDescriptor {
            name: "HistoricalInfo",
            request: "cosmos.staking.v1beta1.QueryHistoricalInfoRequest",
            response: "cosmos.staking.v1beta1.QueryHistoricalInfoResponse",
        },
        MethodDescriptor {
            name: "Pool",
            request: "cosmos.staking.v1beta1.QueryPoolRequest",
            response: "cosmos.staking.v1beta1.QueryPoolResponse",
        },
        MethodDescriptor {
            name: "Params",
            request: "cosmos.staking.v1beta1.QueryParamsRequest",
            response: "cosmos.staking.v1beta1.QueryParamsResponse",
        },
    ],
};

/// `cosmos.staking.v1beta1.Msg`
pub const STAKING_MSG: ServiceDescriptor = ServiceDescriptor {
    name: "cosmos.staking.v1beta1.Msg",
    methods: &[
        MethodDescriptor {
            name: "CreateValidator",
            request: "cosmos.staking.v1beta1.MsgCreateValidator",
            response: "cosmos.staking.v1beta1.MsgCreateValidatorResponse",
        },
        MethodDescriptor {
            name: "EditValidator",
            request: "cosmos.staking.v1beta1.MsgEditValidator",
            response: "cosmos.staking.v1beta1.MsgEditValidatorResponse",
        },
        MethodDescriptor {
            name: "Delegate",
            request: "cosmos.staking.v1beta1.MsgDelegate",
            response: "cosmos.staking.v1beta1.MsgDelegateResponse",
        },
        MethodDescriptor {
            name: "BeginRedelegate",
            request: "cosmos.staking.v1beta1.MsgBeginRedelegate",
            response: "cosmos.staking.v1beta1.MsgBeginRedelegateResponse",
        },
        MethodDescriptor {
            name: "Undelegate",
            request: "cosmos.staking.v1beta1.MsgUndelegate",
            response: "cosmos.staking.v1beta1.MsgUndelegateResponse",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_counts() {
        struct Test {
            service: ServiceDescriptor,
            methods: usize,
        }

        let tests = [
            Test { service: ABCI_APPLICATION, methods: 15 },
            Test { service: REFLECTION_SERVICE, methods: 6 },
            Test { service: DISTRIBUTION_QUERY, methods: 9 },
            Test { service: DISTRIBUTION_MSG, methods: 4 },
            Test { service: GOV_QUERY, methods: 8 },
            Test { service: GOV_MSG, methods: 4 },
            Test { service: GROUP_QUERY, methods: 12 },
            Test { service: GROUP_MSG, methods: 11 },
            Test { service: STAKING_QUERY, methods: 14 },
            Test { service: STAKING_MSG, methods: 5 },
        ];

        for test in tests {
            assert_eq!(
                test.service.methods.len(),
                test.methods,
                "{}",
                test.service.name
            );
        }

        let total: usize = ALL.iter().map(|s| s.methods.len()).sum();
        assert_eq!(total, 88);
    }

    #[test]
    fn paths_are_fully_qualified() {
        assert_eq!(
            STAKING_MSG.method_path("Delegate"),
            "/cosmos.staking.v1beta1.Msg/Delegate"
        );
        assert_eq!(
            ABCI_APPLICATION.method_path("DeliverTx"),
            "/tendermint.abci.ABCIApplication/DeliverTx"
        );
    }

    #[test]
    fn find_resolves_paths() {
        let (service, method) = find("/cosmos.gov.v1beta1.Query/Params").unwrap();
        assert_eq!(service.name, "cosmos.gov.v1beta1.Query");
        assert_eq!(method.request, "cosmos.gov.v1beta1.QueryParamsRequest");
        assert_eq!(method.response, "cosmos.gov.v1beta1.QueryParamsResponse");

        assert!(find("/cosmos.gov.v1beta1.Query/Nope").is_none());
        assert!(find("cosmos.gov.v1beta1.Query/Params").is_none());
        assert!(find("/cosmos.gov.v1beta1.Query").is_none());
    }

    #[test]
    fn classification() {
        assert_eq!(queries().count(), 4);
        assert_eq!(msgs().count(), 4);
        assert!(!ABCI_APPLICATION.is_query() && !ABCI_APPLICATION.is_msg());
        assert!(!REFLECTION_SERVICE.is_query());
        assert_eq!(GROUP_MSG.package(), "cosmos.group.v1beta1");
        assert_eq!(GROUP_MSG.short_name(), "Msg");
    }

    #[test]
    fn msg_requests_follow_naming() {
        for service in msgs() {
            for method in service.methods {
                assert!(method.request.starts_with(service.package()));
                assert_eq!(
                    method.response,
                    format!("{}Response", method.request),
                    "{}",
                    service.method_path(method.name)
                );
            }
        }
    }
}
