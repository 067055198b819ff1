use std::fmt;

/// A contract this workspace knows how to deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    AuctionHouse,
    Vault,
}

impl ContractKind {
    /// Key used in printed output and in the deployments record.
    pub fn key(&self) -> &'static str {
        match self {
            ContractKind::AuctionHouse => "auction_house",
            ContractKind::Vault => "vault",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
