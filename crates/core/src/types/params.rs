use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolConstructor,
};
use fairfund_abi::{AuctionHouse, Vault};

/// Constructor arguments of the AuctionHouse contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionHouseParams {
    pub weth_address: Address,
    pub nft_address: Address,
    pub start_token_id: U256,
    pub max_token_id: U256,
    /// Reserve price in wei.
    pub reserve_price: U256,
    pub fallback_receiver: Address,
    pub vault_address: Address,
}

impl AuctionHouseParams {
    /// ABI-encoded constructor arguments, in declaration order.
    pub fn constructor_args(&self) -> Bytes {
        AuctionHouse::constructorCall {
            _weth_address: self.weth_address,
            _nft_address: self.nft_address,
            _start_token_id: self.start_token_id,
            _max_token_id: self.max_token_id,
            _reserve_price: self.reserve_price,
            _fallback_receiver: self.fallback_receiver,
            _vault_address: self.vault_address,
        }
        .abi_encode()
        .into()
    }
}

/// Constructor arguments of the Vault contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultParams {
    pub nft_address: Address,
}

impl VaultParams {
    pub fn constructor_args(&self) -> Bytes {
        Vault::constructorCall {
            _nft_address: self.nft_address,
        }
        .abi_encode()
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, utils::parse_ether},
        sol_types::SolValue,
    };

    type AuctionHouseArgs = (Address, Address, U256, U256, U256, Address, Address);

    fn auction_house_params() -> AuctionHouseParams {
        AuctionHouseParams {
            weth_address: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            nft_address: address!("c3BEA780Ab5aECa4F1c73fa83A35b8a54bCCCC1a"),
            start_token_id: U256::ZERO,
            max_token_id: U256::from(100u64),
            reserve_price: parse_ether("1").unwrap(),
            fallback_receiver: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            vault_address: address!("Ae9Ed85dE2670e3112590a2BB17b7283ddF44d9c"),
        }
    }

    #[test]
    fn auction_house_args_are_seven_words_in_order() {
        let params = auction_house_params();
        let args = params.constructor_args();

        assert_eq!(args.len(), 7 * 32);

        let decoded = AuctionHouseArgs::abi_decode_params(&args).expect("should decode");
        assert_eq!(
            decoded,
            (
                params.weth_address,
                params.nft_address,
                params.start_token_id,
                params.max_token_id,
                params.reserve_price,
                params.fallback_receiver,
                params.vault_address,
            )
        );
    }

    #[test]
    fn reserve_price_is_encoded_in_wei() {
        let args = auction_house_params().constructor_args();
        let word = U256::from_be_slice(&args[4 * 32..5 * 32]);
        assert_eq!(word, U256::from(10u64).pow(U256::from(18u64)));
    }

    #[test]
    fn vault_args_are_the_nft_address() {
        let params = VaultParams {
            nft_address: address!("c3BEA780Ab5aECa4F1c73fa83A35b8a54bCCCC1a"),
        };
        let args = params.constructor_args();

        assert_eq!(args.len(), 32);
        assert_eq!(&args[..12], &[0u8; 12]);
        assert_eq!(Address::from_slice(&args[12..]), params.nft_address);
    }
}
