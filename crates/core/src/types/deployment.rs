use alloy::primitives::Address;

use super::kind::ContractKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub kind: ContractKind,
    pub address: Address,
}
