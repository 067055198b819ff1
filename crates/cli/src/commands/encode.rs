use alloy::primitives::hex;
use fairfund_core::ContractKind;

use crate::config::{
    AuctionHouseOverrides, ConfigError, DeployConfig, resolve_auction_house, resolve_vault,
};

/// Hex-encoded constructor arguments for `kind`, as they would be sent.
pub fn encode(
    config: &DeployConfig,
    kind: ContractKind,
    overrides: AuctionHouseOverrides,
) -> Result<String, ConfigError> {
    let args = match kind {
        ContractKind::AuctionHouse => resolve_auction_house(config, overrides)?.constructor_args(),
        ContractKind::Vault => resolve_vault(config)?.constructor_args(),
    };
    Ok(hex::encode_prefixed(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::path::Path;

    fn example_config() -> DeployConfig {
        load_config(Path::new(env!("CARGO_MANIFEST_DIR")).join("deploy.example.toml"))
            .expect("should parse example config")
    }

    #[test]
    fn encodes_vault_as_one_word() {
        let encoded = encode(
            &example_config(),
            ContractKind::Vault,
            AuctionHouseOverrides::default(),
        )
        .expect("should encode");

        assert_eq!(
            encoded,
            "0x000000000000000000000000c3bea780ab5aeca4f1c73fa83a35b8a54bcccc1a"
        );
    }

    #[test]
    fn encodes_auction_house_as_seven_words() {
        let encoded = encode(
            &example_config(),
            ContractKind::AuctionHouse,
            AuctionHouseOverrides::default(),
        )
        .expect("should encode");

        let words: Vec<&str> = encoded
            .trim_start_matches("0x")
            .as_bytes()
            .chunks(64)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect();

        assert_eq!(words.len(), 7);
        assert!(words[0].ends_with("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
        assert!(words[1].ends_with("c3bea780ab5aeca4f1c73fa83a35b8a54bcccc1a"));
        assert_eq!(words[2], "0".repeat(64));
        assert!(words[3].ends_with("64"));
        assert!(words[4].ends_with("0de0b6b3a7640000"));
        assert!(words[5].ends_with("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(words[6].ends_with("ae9ed85de2670e3112590a2bb17b7283ddf44d9c"));
    }
}
