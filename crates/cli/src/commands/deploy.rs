use std::path::Path;

use fairfund_core::{
    Artifact, AuctionHouseParams, ContractKind, DeployError, Deployer, Deployment,
    deploy_auction_house, deploy_vault, record_deployment,
};

use crate::config::{AuctionHouseOverrides, DeployConfig, resolve_auction_house, resolve_vault};

/// Everything a deploy command needs besides the deployer itself.
pub struct DeployTarget<'a> {
    pub config: &'a DeployConfig,
    /// Directory relative artifact paths are resolved against.
    pub config_dir: &'a Path,
    pub deployments: Option<&'a Path>,
}

impl DeployTarget<'_> {
    fn artifact(&self, kind: ContractKind) -> Result<Artifact, DeployError> {
        let artifact = Artifact::load(self.config.artifact_path(self.config_dir, kind))?;
        Ok(artifact)
    }

    fn record(&self, deployment: &Deployment) -> Result<(), DeployError> {
        if let Some(path) = self.deployments {
            record_deployment(path, deployment)?;
        }
        Ok(())
    }
}

pub async fn auction_house(
    deployer: &dyn Deployer,
    target: &DeployTarget<'_>,
    overrides: AuctionHouseOverrides,
) -> eyre::Result<Deployment> {
    let params = resolve_auction_house(target.config, overrides)?;
    let artifact = target.artifact(ContractKind::AuctionHouse)?;

    let deployment = deploy_auction_house(deployer, &artifact, &params)
        .await
        .map_err(DeployError::from)?;
    target.record(&deployment)?;

    println!("{}: {}", deployment.kind, deployment.address);
    Ok(deployment)
}

pub async fn vault(deployer: &dyn Deployer, target: &DeployTarget<'_>) -> eyre::Result<Deployment> {
    let params = resolve_vault(target.config)?;
    let artifact = target.artifact(ContractKind::Vault)?;

    let deployment = deploy_vault(deployer, &artifact, &params)
        .await
        .map_err(DeployError::from)?;
    target.record(&deployment)?;

    println!("{}: {}", deployment.kind, deployment.address);
    println!("with nft: {}", params.nft_address);
    Ok(deployment)
}

/// Deploys a fresh Vault, then an AuctionHouse pointed at it.
///
/// Each deployment is recorded and printed as soon as it lands, so a failed
/// AuctionHouse still leaves the Vault address behind.
pub async fn all(
    deployer: &dyn Deployer,
    target: &DeployTarget<'_>,
    overrides: AuctionHouseOverrides,
) -> eyre::Result<(Deployment, Deployment)> {
    let vault_params = resolve_vault(target.config)?;
    let house_params = resolve_auction_house(target.config, overrides)?;
    let vault_artifact = target.artifact(ContractKind::Vault)?;
    let house_artifact = target.artifact(ContractKind::AuctionHouse)?;

    let vault = deploy_vault(deployer, &vault_artifact, &vault_params)
        .await
        .map_err(DeployError::from)?;
    target.record(&vault)?;
    println!("{}: {}", vault.kind, vault.address);
    println!("with nft: {}", vault_params.nft_address);

    let house_params = AuctionHouseParams {
        vault_address: vault.address,
        ..house_params
    };
    let house = deploy_auction_house(deployer, &house_artifact, &house_params)
        .await
        .map_err(DeployError::from)?;
    target.record(&house)?;
    println!("{}: {}", house.kind, house.address);

    Ok((vault, house))
}
