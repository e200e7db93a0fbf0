//! Node configuration

pub mod error;

use core::fmt::{Display, Error as FmtError, Formatter};
use core::time::Duration;
use std::{fs, fs::File, io::Write, net::SocketAddr, path::Path};

use serde_derive::{Deserialize, Serialize};

pub use error::Error;

/// Defaults for various fields
pub mod default {
    use super::*;

    pub fn abci_listen_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 26658))
    }

    pub fn grpc_listen_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 9090))
    }

    pub fn grpc_timeout() -> Duration {
        Duration::from_secs(10)
    }

    pub fn chain_id() -> String {
        "cosmos-rpc".to_string()
    }

    pub fn bech32_prefix() -> String {
        "cosmos".to_string()
    }

    pub fn sign_modes() -> Vec<SignMode> {
        vec![
            SignMode::new("SIGN_MODE_DIRECT", 1),
            SignMode::new("SIGN_MODE_LEGACY_AMINO_JSON", 127),
        ]
    }

    pub fn snapshot_interval() -> u64 {
        100
    }

    pub fn snapshot_keep_recent() -> usize {
        2
    }

    pub fn snapshot_chunk_size() -> usize {
        64 * 1024
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub abci: AbciConfig,
    #[serde(default)]
    pub grpc: GrpcConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Checks the invariants that the TOML schema alone cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        if self.abci.listen_addr == self.grpc.listen_addr {
            return Err(Error::invalid(format!(
                "the ABCI and gRPC servers cannot both listen on {}",
                self.abci.listen_addr
            )));
        }

        if self.chain.id.trim().is_empty() {
            return Err(Error::invalid("chain id must not be empty".to_string()));
        }

        if self.chain.bech32_prefix.is_empty()
            || !self
                .chain
                .bech32_prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(Error::invalid(format!(
                "invalid bech32 prefix '{}'",
                self.chain.bech32_prefix
            )));
        }

        if self.chain.sign_modes.is_empty() {
            return Err(Error::invalid(
                "at least one sign mode must be configured".to_string(),
            ));
        }

        if self.snapshot.chunk_size == 0 {
            return Err(Error::invalid(
                "snapshot chunk size must be positive".to_string(),
            ));
        }

        if self.snapshot.interval > 0 && self.snapshot.keep_recent == 0 {
            return Err(Error::invalid(
                "snapshot.keep_recent must be positive when snapshots are enabled".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    pub log_level: LogLevel,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AbciConfig {
    #[serde(default = "default::abci_listen_addr")]
    pub listen_addr: SocketAddr,
}

impl Default for AbciConfig {
    fn default() -> Self {
        Self {
            listen_addr: default::abci_listen_addr(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GrpcConfig {
    #[serde(default = "default::grpc_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Per-request timeout applied by both servers.
    #[serde(default = "default::grpc_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            listen_addr: default::grpc_listen_addr(),
            timeout: default::grpc_timeout(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignMode {
    pub name: String,
    pub number: i32,
}

impl SignMode {
    pub fn new(name: &str, number: i32) -> Self {
        Self {
            name: name.to_string(),
            number,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Reported until InitChain provides the real chain id.
    #[serde(default = "default::chain_id")]
    pub id: String,
    #[serde(default = "default::bech32_prefix")]
    pub bech32_prefix: String,
    #[serde(default = "default::sign_modes")]
    pub sign_modes: Vec<SignMode>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            id: default::chain_id(),
            bech32_prefix: default::bech32_prefix(),
            sign_modes: default::sign_modes(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Take a snapshot every `interval` heights; `0` disables snapshots.
    #[serde(default = "default::snapshot_interval")]
    pub interval: u64,
    #[serde(default = "default::snapshot_keep_recent")]
    pub keep_recent: usize,
    /// Size in bytes of the chunks a snapshot is split into.
    #[serde(default = "default::snapshot_chunk_size")]
    pub chunk_size: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            interval: default::snapshot_interval(),
            keep_recent: default::snapshot_keep_recent(),
            chunk_size: default::snapshot_chunk_size(),
        }
    }
}

/// Attempt to load and parse the TOML config file as a `Config`.
pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
    let config_toml = std::fs::read_to_string(&path).map_err(Error::io)?;

    let config = toml::from_str::<Config>(&config_toml[..]).map_err(Error::decode)?;

    Ok(config)
}

/// Serialize the given `Config` as TOML to the given config file.
pub fn store(config: &Config, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut file = if path.as_ref().exists() {
        fs::OpenOptions::new().write(true).truncate(true).open(path)
    } else {
        File::create(path)
    }
    .map_err(Error::io)?;

    store_writer(config, &mut file)
}

/// Serialize the given `Config` as TOML to the given writer.
pub fn store_writer(config: &Config, mut writer: impl Write) -> Result<(), Error> {
    let toml_config = toml::to_string_pretty(&config).map_err(Error::encode)?;

    writeln!(writer, "{}", toml_config).map_err(Error::io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempdir::TempDir;
    use test_log::test;

    use super::{load, store, store_writer, Config, LogLevel};

    #[test]
    fn parse_valid_config() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/config/fixtures/config_example.toml"
        );

        let config = load(path).expect("could not parse config");

        assert_eq!(config.global.log_level, LogLevel::Debug);
        assert_eq!(config.abci.listen_addr.port(), 36658);
        assert_eq!(config.grpc.timeout, Duration::from_secs(5));
        assert_eq!(config.chain.id, "testing-1");
        assert_eq!(config.snapshot.interval, 10);
        config.validate().expect("example config is valid");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");

        assert_eq!(config, Config::default());
        assert_eq!(config.abci.listen_addr.to_string(), "127.0.0.1:26658");
        assert_eq!(config.grpc.listen_addr.to_string(), "127.0.0.1:9090");
        assert_eq!(config.chain.sign_modes.len(), 2);
    }

    #[test]
    fn default_config_round_trips() {
        let config = Config::default();

        let mut buffer = Vec::new();
        store_writer(&config, &mut buffer).unwrap();

        let parsed: Config = toml::from_str(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn store_then_load() {
        let dir = TempDir::new("cosmos-rpc-config").unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.chain.id = "stored-1".to_string();

        store(&config, &path).unwrap();
        assert_eq!(load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_address_is_rejected() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/config/fixtures/config_invalid_address.toml"
        );

        assert!(load(path).is_err());
    }

    #[test]
    fn validation() {
        struct Test {
            name: &'static str,
            mutate: fn(&mut Config),
        }

        let tests = [
            Test {
                name: "same listen address",
                mutate: |c| c.grpc.listen_addr = c.abci.listen_addr,
            },
            Test {
                name: "empty chain id",
                mutate: |c| c.chain.id = " ".to_string(),
            },
            Test {
                name: "uppercase bech32 prefix",
                mutate: |c| c.chain.bech32_prefix = "Cosmos".to_string(),
            },
            Test {
                name: "no sign modes",
                mutate: |c| c.chain.sign_modes.clear(),
            },
            Test {
                name: "zero chunk size",
                mutate: |c| c.snapshot.chunk_size = 0,
            },
            Test {
                name: "snapshots without retention",
                mutate: |c| c.snapshot.keep_recent = 0,
            },
        ];

        assert!(Config::default().validate().is_ok());

        for test in tests {
            let mut config = Config::default();
            (test.mutate)(&mut config);
            assert!(config.validate().is_err(), "{}", test.name);
        }
    }
}
