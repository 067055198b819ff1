use alloy::sol;

sol! {
    // Only the constructor is needed for deployment; the rest of the
    // AuctionHouse surface lives in the Vyper source.
    contract AuctionHouse {
        constructor(
            address _weth_address,
            address _nft_address,
            uint256 _start_token_id,
            uint256 _max_token_id,
            uint256 _reserve_price,
            address _fallback_receiver,
            address _vault_address
        );
    }
}
