use alloy::sol;

sol! {
    contract Vault {
        constructor(address _nft_address);
    }
}
