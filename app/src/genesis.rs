//! Module genesis state read by the query services.
//!
//! The state is decoded from the `app_state_bytes` of `InitChain` (the same
//! JSON document a Cosmos SDK chain carries in its `genesis.json`, restricted
//! to the modules served here) and replaced again when a snapshot is restored.
//! Missing modules and fields fall back to the Cosmos SDK defaults.
//!
//! Decimals are read in their human form (`"0.020000000000000000"`) and put
//! on the wire as the SDK's `Dec` marshals them: the integer text of the value
//! scaled by 10^18 (`"20000000000000000"`).

use core::fmt::{Display, Error as FmtError, Formatter};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde_derive::{Deserialize, Serialize};

use cosmos_rpc_proto::cosmos::base::v1beta1 as base;
use cosmos_rpc_proto::cosmos::distribution::v1beta1 as distribution;
use cosmos_rpc_proto::cosmos::gov::v1beta1 as gov;
use cosmos_rpc_proto::cosmos::staking::v1beta1 as staking;

use crate::error::Error;
use crate::util::mutex::RwLockUtil;

const DAY: u64 = 24 * 60 * 60;

/// Number of fractional digits of an SDK `Dec`.
const DEC_PRECISION: usize = 18;
const DEC_ONE: u128 = 1_000_000_000_000_000_000;

/// A non-negative SDK decimal with 18 fractional digits, held as its atomics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dec(u128);

impl Dec {
    pub fn from_atomics(atomics: u128) -> Self {
        Self(atomics)
    }

    /// `n` thousandths.
    pub const fn permille(n: u128) -> Self {
        Self(n * (DEC_ONE / 1000))
    }

    pub fn atomics(&self) -> u128 {
        self.0
    }

    /// The `Dec.Marshal` text of the value, as carried by protobuf fields.
    pub fn to_proto_string(&self) -> String {
        self.0.to_string()
    }

    pub fn parse(value: &str) -> Result<Self, Error> {
        let invalid = || Error::invalid_decimal(value.to_string());

        let (int, frac) = value.split_once('.').unwrap_or((value, ""));

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int.is_empty() || value.ends_with('.') || frac.len() > DEC_PRECISION {
            return Err(invalid());
        }
        if !is_digits(int) || !is_digits(frac) {
            return Err(invalid());
        }

        let int: u128 = int.parse().map_err(|_| invalid())?;
        let frac: u128 = if frac.is_empty() {
            0
        } else {
            let scale = 10u128.pow((DEC_PRECISION - frac.len()) as u32);
            frac.parse::<u128>().map_err(|_| invalid())? * scale
        };

        int.checked_mul(DEC_ONE)
            .and_then(|atomics| atomics.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Display for Dec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / DEC_ONE,
            self.0 % DEC_ONE,
            width = DEC_PRECISION
        )
    }
}

impl TryFrom<String> for Dec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Dec> for String {
    fn from(dec: Dec) -> Self {
        dec.to_string()
    }
}


#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genesis {
    pub staking: StakingGenesis,
    pub distribution: DistributionGenesis,
    pub gov: GovGenesis,
}

impl Genesis {
    /// Decodes the module genesis from `InitChain.app_state_bytes`.
    /// An empty document yields the defaults.
    pub fn from_app_state(app_state: &[u8]) -> Result<Self, Error> {
        if app_state.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(app_state).map_err(Error::genesis_decode)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingGenesis {
    pub params: StakingParams,
    pub pool: StakingPool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingParams {
    #[serde(with = "humantime_serde")]
    pub unbonding_time: Duration,
    pub max_validators: u32,
    pub max_entries: u32,
    pub historical_entries: u32,
    pub bond_denom: String,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            unbonding_time: Duration::from_secs(21 * DAY),
            max_validators: 100,
            max_entries: 7,
            historical_entries: 10000,
            bond_denom: "stake".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingPool {
    pub not_bonded_tokens: String,
    pub bonded_tokens: String,
}

impl Default for StakingPool {
    fn default() -> Self {
        Self {
            not_bonded_tokens: "0".to_string(),
            bonded_tokens: "0".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionGenesis {
    pub params: DistributionParams,
    pub fee_pool: FeePool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeePool {
    pub community_pool: Vec<DecCoin>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionParams {
    pub community_tax: Dec,
    pub base_proposer_reward: Dec,
    pub bonus_proposer_reward: Dec,
    pub withdraw_addr_enabled: bool,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            community_tax: Dec::permille(20),
            base_proposer_reward: Dec::permille(10),
            bonus_proposer_reward: Dec::permille(40),
            withdraw_addr_enabled: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovGenesis {
    pub deposit_params: DepositParams,
    pub voting_params: VotingParams,
    pub tally_params: TallyParams,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositParams {
    pub min_deposit: Vec<Coin>,
    #[serde(with = "humantime_serde")]
    pub max_deposit_period: Duration,
}

impl Default for DepositParams {
    fn default() -> Self {
        Self {
            min_deposit: vec![Coin::new("stake", "10000000")],
            max_deposit_period: Duration::from_secs(2 * DAY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingParams {
    #[serde(with = "humantime_serde")]
    pub voting_period: Duration,
}

impl Default for VotingParams {
    fn default() -> Self {
        Self {
            voting_period: Duration::from_secs(2 * DAY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyParams {
    pub quorum: Dec,
    pub threshold: Dec,
    pub veto_threshold: Dec,
}

impl Default for TallyParams {
    fn default() -> Self {
        Self {
            quorum: Dec::permille(334),
            threshold: Dec::permille(500),
            veto_threshold: Dec::permille(334),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: &str, amount: &str) -> Self {
        Self {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: &str, amount: Dec) -> Self {
        Self {
            denom: denom.to_string(),
            amount,
        }
    }
}

fn proto_duration(duration: Duration) -> prost_types::Duration {
    prost_types::Duration {
        seconds: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        nanos: duration.subsec_nanos() as i32,
    }
}

impl From<&Coin> for base::Coin {
    fn from(coin: &Coin) -> Self {
        Self {
            denom: coin.denom.clone(),
            amount: coin.amount.clone(),
        }
    }
}

impl From<&DecCoin> for base::DecCoin {
    fn from(coin: &DecCoin) -> Self {
        Self {
            denom: coin.denom.clone(),
            amount: coin.amount.to_proto_string(),
        }
    }
}

impl From<&StakingParams> for staking::Params {
    fn from(params: &StakingParams) -> Self {
        Self {
            unbonding_time: Some(proto_duration(params.unbonding_time)),
            max_validators: params.max_validators,
            max_entries: params.max_entries,
            historical_entries: params.historical_entries,
            bond_denom: params.bond_denom.clone(),
        }
    }
}

impl From<&StakingPool> for staking::Pool {
    fn from(pool: &StakingPool) -> Self {
        Self {
            not_bonded_tokens: pool.not_bonded_tokens.clone(),
            bonded_tokens: pool.bonded_tokens.clone(),
        }
    }
}

impl From<&DistributionParams> for distribution::Params {
    fn from(params: &DistributionParams) -> Self {
        Self {
            community_tax: params.community_tax.to_proto_string(),
            base_proposer_reward: params.base_proposer_reward.to_proto_string(),
            bonus_proposer_reward: params.bonus_proposer_reward.to_proto_string(),
            withdraw_addr_enabled: params.withdraw_addr_enabled,
        }
    }
}

impl From<&DepositParams> for gov::DepositParams {
    fn from(params: &DepositParams) -> Self {
        Self {
            min_deposit: params.min_deposit.iter().map(Into::into).collect(),
            max_deposit_period: Some(proto_duration(params.max_deposit_period)),
        }
    }
}

impl From<&VotingParams> for gov::VotingParams {
    fn from(params: &VotingParams) -> Self {
        Self {
            voting_period: Some(proto_duration(params.voting_period)),
        }
    }
}

// The SDK carries these decimals as bytes holding their marshalled text.
impl From<&TallyParams> for gov::TallyParams {
    fn from(params: &TallyParams) -> Self {
        Self {
            quorum: params.quorum.to_proto_string().into_bytes(),
            threshold: params.threshold.to_proto_string().into_bytes(),
            veto_threshold: params.veto_threshold.to_proto_string().into_bytes(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    pub chain_id: String,
    pub genesis: Genesis,
}

/// Chain state shared between the ABCI application and the gRPC services.
#[derive(Clone, Debug, Default)]
pub struct SharedState(Arc<RwLock<ChainState>>);

impl SharedState {
    pub fn new(chain_id: impl Into<String>, genesis: Genesis) -> Self {
        Self(Arc::new(RwLock::new(ChainState {
            chain_id: chain_id.into(),
            genesis,
        })))
    }

    pub fn read<R>(&self, f: impl FnOnce(&ChainState) -> R) -> R {
        f(&self.0.acquire_read())
    }

    pub fn chain_id(&self) -> String {
        self.read(|state| state.chain_id.clone())
    }

    pub fn snapshot(&self) -> ChainState {
        self.read(|state| state.clone())
    }

    pub fn replace(&self, state: ChainState) {
        *self.0.acquire_write() = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Dec {
        Dec::parse(value).unwrap()
    }

    #[test]
    fn empty_app_state_yields_defaults() {
        assert_eq!(Genesis::from_app_state(b"").unwrap(), Genesis::default());
        assert_eq!(Genesis::from_app_state(b" \n").unwrap(), Genesis::default());
        assert_eq!(Genesis::from_app_state(b"{}").unwrap(), Genesis::default());
    }

    #[test]
    fn partial_app_state_keeps_other_defaults() {
        let app_state = br#"{
            "staking": { "params": { "bond_denom": "uatom", "unbonding_time": "1814400s" } },
            "bank": { "balances": [] }
        }"#;

        let genesis = Genesis::from_app_state(app_state).unwrap();

        assert_eq!(genesis.staking.params.bond_denom, "uatom");
        assert_eq!(
            genesis.staking.params.unbonding_time,
            Duration::from_secs(1814400)
        );
        assert_eq!(genesis.staking.params.max_validators, 100);
        assert_eq!(genesis.gov, GovGenesis::default());
    }

    #[test]
    fn malformed_app_state_is_rejected() {
        assert!(Genesis::from_app_state(b"{\"staking\": 3}").is_err());
        assert!(Genesis::from_app_state(b"not json").is_err());
    }

    #[test]
    fn default_params_match_the_sdk() {
        let genesis = Genesis::default();

        let staking = staking::Params::from(&genesis.staking.params);
        assert_eq!(staking.unbonding_time.unwrap().seconds, 1814400);
        assert_eq!(staking.bond_denom, "stake");

        let tally = gov::TallyParams::from(&genesis.gov.tally_params);
        assert_eq!(tally.quorum, b"334000000000000000".to_vec());
        assert_eq!(tally.threshold, b"500000000000000000".to_vec());

        let distribution = distribution::Params::from(&genesis.distribution.params);
        assert_eq!(distribution.community_tax, "20000000000000000");
        assert_eq!(distribution.base_proposer_reward, "10000000000000000");
        assert_eq!(distribution.bonus_proposer_reward, "40000000000000000");

        let deposit = gov::DepositParams::from(&genesis.gov.deposit_params);
        assert_eq!(deposit.max_deposit_period.unwrap().seconds, 172800);
        assert_eq!(deposit.min_deposit[0].amount, "10000000");
    }

    #[test]
    fn decimals() {
        struct Test {
            input: &'static str,
            atomics: Option<u128>,
        }

        let tests = [
            Test {
                input: "0.020000000000000000",
                atomics: Some(20_000_000_000_000_000),
            },
            Test {
                input: "0.5",
                atomics: Some(500_000_000_000_000_000),
            },
            Test {
                input: "12",
                atomics: Some(12 * DEC_ONE),
            },
            Test {
                input: "1000.000000000000000001",
                atomics: Some(1000 * DEC_ONE + 1),
            },
            Test {
                input: "0.0000000000000000001",
                atomics: None,
            },
            Test {
                input: "-1.0",
                atomics: None,
            },
            Test {
                input: ".5",
                atomics: None,
            },
            Test {
                input: "5.",
                atomics: None,
            },
            Test {
                input: "1e3",
                atomics: None,
            },
            Test {
                input: "",
                atomics: None,
            },
        ];

        for test in tests {
            let parsed = Dec::parse(test.input).ok().map(|d| d.atomics());
            assert_eq!(parsed, test.atomics, "{}", test.input);
        }

        assert_eq!(dec("0.334").to_string(), "0.334000000000000000");
        assert_eq!(dec("0.334").to_proto_string(), "334000000000000000");
    }

    #[test]
    fn sdk_shaped_distribution_genesis() {
        let app_state = br#"{
            "distribution": {
                "params": {
                    "community_tax": "0.030000000000000000",
                    "base_proposer_reward": "0.010000000000000000",
                    "bonus_proposer_reward": "0.040000000000000000",
                    "withdraw_addr_enabled": true
                },
                "fee_pool": {
                    "community_pool": [
                        { "denom": "stake", "amount": "1250.500000000000000000" }
                    ]
                }
            }
        }"#;

        let genesis = Genesis::from_app_state(app_state).unwrap();

        assert_eq!(genesis.distribution.params.community_tax, dec("0.03"));
        assert_eq!(
            genesis.distribution.fee_pool.community_pool,
            vec![DecCoin::new("stake", dec("1250.5"))]
        );

        let pool: Vec<base::DecCoin> = genesis
            .distribution
            .fee_pool
            .community_pool
            .iter()
            .map(Into::into)
            .collect();
        assert_eq!(pool[0].amount, "1250500000000000000000");
    }

    #[test]
    fn invalid_decimals_are_rejected() {
        let app_state = br#"{ "gov": { "tally_params": { "quorum": "a third" } } }"#;
        assert!(Genesis::from_app_state(app_state).is_err());
    }

    #[test]
    fn decimals_round_trip_through_json() {
        let genesis = Genesis::default();
        let json = serde_json::to_string(&genesis).unwrap();

        assert!(json.contains(r#""community_tax":"0.020000000000000000""#));
        assert_eq!(serde_json::from_str::<Genesis>(&json).unwrap(), genesis);
    }

    #[test]
    fn shared_state_replace() {
        let state = SharedState::new("chain-a", Genesis::default());
        assert_eq!(state.chain_id(), "chain-a");

        let mut next = state.snapshot();
        next.chain_id = "chain-b".to_string();
        next.genesis.staking.params.max_validators = 7;
        state.replace(next);

        assert_eq!(state.chain_id(), "chain-b");
        assert_eq!(state.read(|s| s.genesis.staking.params.max_validators), 7);
    }
}
