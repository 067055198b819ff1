use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use fairfund_core::ProviderDeployer;
use tracing::info;

pub type RpcDeployer = ProviderDeployer<DynProvider>;

/// Builds a deployer for `rpc_url`.
///
/// With a private key the transactions are signed locally; without one
/// they are sent from the node's first unlocked account.
pub async fn connect(
    rpc_url: &str,
    private_key: Option<&str>,
    confirmations: u64,
) -> eyre::Result<RpcDeployer> {
    let deployer = match private_key {
        Some(key) => {
            let signer: PrivateKeySigner = key.trim().parse()?;
            let from = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(signer)
                .connect(rpc_url)
                .await?
                .erased();
            ProviderDeployer::new(provider).with_sender(from)
        }
        None => {
            let provider = ProviderBuilder::new().connect(rpc_url).await?.erased();
            ProviderDeployer::new(provider).with_node_account().await?
        }
    };

    info!(rpc_url, sender = ?deployer.sender(), confirmations, "connected");
    Ok(deployer.with_confirmations(confirmations))
}
