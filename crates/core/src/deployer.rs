use alloy::{
    contract::RawCallBuilder,
    network::ReceiptResponse,
    primitives::{Address, Bytes},
    providers::Provider,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{error::TransactionError, types::ContractKind};

/// Confirmations awaited after a deployment lands.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Publishes contract init code and reports where it landed.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, kind: ContractKind, init_code: Bytes)
    -> Result<Address, TransactionError>;
}

/// Deploys through an alloy provider.
///
/// Without an explicit sender the provider's wallet fills `from`; call
/// [`ProviderDeployer::with_node_account`] to deploy from the node's first
/// unlocked account instead.
#[derive(Clone)]
pub struct ProviderDeployer<P>
where
    P: Provider + Clone,
{
    provider: P,
    from: Option<Address>,
    confirmations: u64,
}

impl<P> ProviderDeployer<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            from: None,
            confirmations: DEFAULT_CONFIRMATIONS,
        }
    }

    pub fn with_sender(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub async fn with_node_account(self) -> Result<Self, TransactionError> {
        let accounts = self.provider.get_accounts().await?;
        let from = accounts
            .first()
            .copied()
            .ok_or(TransactionError::NoDeployerAccount)?;
        Ok(self.with_sender(from))
    }

    pub fn sender(&self) -> Option<Address> {
        self.from
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> Deployer for ProviderDeployer<P>
where
    P: Provider + Clone + 'static,
{
    async fn deploy(
        &self,
        kind: ContractKind,
        init_code: Bytes,
    ) -> Result<Address, TransactionError> {
        let mut call = RawCallBuilder::new_raw_deploy(self.provider.clone(), init_code);
        if let Some(from) = self.from {
            call = call.from(from);
        }

        let pending = call
            .send()
            .await
            .map_err(|source| TransactionError::Contract { kind, source })?;
        debug!(%kind, tx_hash = ?pending.tx_hash(), "deployment sent");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|source| TransactionError::Pending { kind, source })?;

        deployed_address(kind, &receipt)
    }
}

/// Address created by a deployment receipt, or why there is none.
pub fn deployed_address<R>(kind: ContractKind, receipt: &R) -> Result<Address, TransactionError>
where
    R: ReceiptResponse,
{
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        return Err(TransactionError::Reverted { kind, tx_hash });
    }

    receipt
        .contract_address()
        .ok_or(TransactionError::MissingContractAddress { kind, tx_hash })
}
