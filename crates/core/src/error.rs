use std::path::PathBuf;

use alloy::{
    contract,
    primitives::{B256, hex::FromHexError},
    providers::PendingTransactionError,
    transports::TransportError,
};
use thiserror::Error;

use crate::types::ContractKind;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse artifact at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("artifact at {path} has no bytecode")]
    MissingBytecode { path: PathBuf },

    #[error("artifact at {path} has invalid bytecode: {source}")]
    InvalidBytecode { path: PathBuf, source: FromHexError },
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("failed to deploy {kind}: {source}")]
    Contract {
        kind: ContractKind,
        source: contract::Error,
    },

    #[error("failed to deploy {kind}: {source}")]
    Pending {
        kind: ContractKind,
        source: PendingTransactionError,
    },

    #[error("failed to query deployer account: {0}")]
    Transport(#[from] TransportError),

    #[error("node exposes no unlocked account to deploy from; pass a private key")]
    NoDeployerAccount,

    #[error("{kind} deployment reverted: {tx_hash:?}")]
    Reverted { kind: ContractKind, tx_hash: B256 },

    #[error("{kind} deployment receipt has no contract address: {tx_hash:?}")]
    MissingContractAddress { kind: ContractKind, tx_hash: B256 },
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read deployments at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse deployments at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize deployments for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("deployments at {path} is not a json object")]
    NotAnObject { path: PathBuf },

    #[error("invalid {kind} address in {path}: {value}")]
    InvalidAddress {
        path: PathBuf,
        kind: ContractKind,
        value: String,
    },

    #[error("failed to write deployments at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
