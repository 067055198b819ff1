use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, U256, utils::parse_ether};
use fairfund_core::{AuctionHouseParams, ContractKind, VaultParams};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "deploy.toml";

#[derive(Debug, Deserialize, PartialEq)]
pub struct DeployConfig {
    pub artifacts: ArtifactsConfig,
    pub auction_house: AuctionHouseConfig,
    pub vault: VaultConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ArtifactsConfig {
    pub auction_house: PathBuf,
    pub vault: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AuctionHouseConfig {
    pub weth_address: String,
    pub nft_address: String,
    pub start_token_id: TokenId,
    pub max_token_id: TokenId,
    /// Reserve price in ether.
    pub reserve_price: String,
    pub fallback_receiver: String,
    pub vault_address: String,
}

/// A `uint256` token id, written as a TOML integer or as a decimal or
/// `0x`-prefixed hex string when it does not fit in one.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TokenId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct VaultConfig {
    pub nft_address: String,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuctionHouseOverrides {
    pub vault_address: Option<String>,
    pub reserve_price: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid address for {field}: {value}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("invalid uint256 for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid ether amount for {field}: {value} ({reason})")]
    InvalidAmount {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl DeployConfig {
    /// Artifact location for `kind`, resolved against `base` when relative.
    pub fn artifact_path(&self, base: &Path, kind: ContractKind) -> PathBuf {
        let path = match kind {
            ContractKind::AuctionHouse => &self.artifacts.auction_house,
            ContractKind::Vault => &self.artifacts.vault,
        };
        base.join(path)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<DeployConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DeployConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

pub fn resolve_auction_house(
    config: &DeployConfig,
    overrides: AuctionHouseOverrides,
) -> Result<AuctionHouseParams, ConfigError> {
    let house = &config.auction_house;
    let vault_address = overrides
        .vault_address
        .unwrap_or_else(|| house.vault_address.clone());
    let reserve_price = overrides
        .reserve_price
        .unwrap_or_else(|| house.reserve_price.clone());

    Ok(AuctionHouseParams {
        weth_address: parse_address("weth_address", &house.weth_address)?,
        nft_address: parse_address("nft_address", &house.nft_address)?,
        start_token_id: parse_token_id("start_token_id", &house.start_token_id)?,
        max_token_id: parse_token_id("max_token_id", &house.max_token_id)?,
        reserve_price: parse_amount("reserve_price", &reserve_price)?,
        fallback_receiver: parse_address("fallback_receiver", &house.fallback_receiver)?,
        vault_address: parse_address("vault_address", &vault_address)?,
    })
}

pub fn resolve_vault(config: &DeployConfig) -> Result<VaultParams, ConfigError> {
    Ok(VaultParams {
        nft_address: parse_address("nft_address", &config.vault.nft_address)?,
    })
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAddress {
            field,
            value: value.to_string(),
        })
}

fn parse_token_id(field: &'static str, value: &TokenId) -> Result<U256, ConfigError> {
    match value {
        TokenId::Number(number) => Ok(U256::from(*number)),
        TokenId::Text(text) => parse_u256(text).ok_or_else(|| ConfigError::InvalidNumber {
            field,
            value: text.clone(),
        }),
    }
}

fn parse_u256(s: &str) -> Option<U256> {
    let s = s.trim();
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        U256::from_str_radix(stripped, 16).ok()
    } else {
        U256::from_str_radix(s, 10).ok()
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<U256, ConfigError> {
    parse_ether(value.trim()).map_err(|err| ConfigError::InvalidAmount {
        field,
        value: value.to_string(),
        reason: err.to_string(),
    })
}
