use tracing::info;

use crate::{
    artifact::Artifact,
    deployer::Deployer,
    error::TransactionError,
    types::{AuctionHouseParams, ContractKind, Deployment, VaultParams},
};

pub async fn deploy_auction_house(
    deployer: &dyn Deployer,
    artifact: &Artifact,
    params: &AuctionHouseParams,
) -> Result<Deployment, TransactionError> {
    info!(
        weth = %params.weth_address,
        nft = %params.nft_address,
        start_token_id = %params.start_token_id,
        max_token_id = %params.max_token_id,
        reserve_price = %params.reserve_price,
        fallback_receiver = %params.fallback_receiver,
        vault = %params.vault_address,
        "deploying auction house"
    );

    let init_code = artifact.init_code(&params.constructor_args());
    deploy(deployer, ContractKind::AuctionHouse, init_code).await
}

pub async fn deploy_vault(
    deployer: &dyn Deployer,
    artifact: &Artifact,
    params: &VaultParams,
) -> Result<Deployment, TransactionError> {
    info!(nft = %params.nft_address, "deploying vault");

    let init_code = artifact.init_code(&params.constructor_args());
    deploy(deployer, ContractKind::Vault, init_code).await
}

async fn deploy(
    deployer: &dyn Deployer,
    kind: ContractKind,
    init_code: alloy::primitives::Bytes,
) -> Result<Deployment, TransactionError> {
    let address = deployer.deploy(kind, init_code).await?;
    info!(%kind, %address, "deployed");
    Ok(Deployment { kind, address })
}
