use std::{fs, path::Path};

use alloy::primitives::{Bytes, hex};
use serde::Deserialize;

use crate::error::ArtifactError;

/// Compiler output for a single contract.
///
/// Only the creation bytecode is required; hardhat and vyper artifacts
/// both carry it under `bytecode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub contract_name: Option<String>,
    pub bytecode: Bytes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    bytecode: Option<String>,
}

impl Artifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawArtifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let bytecode = raw
            .bytecode
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && *code != "0x")
            .ok_or_else(|| ArtifactError::MissingBytecode {
                path: path.to_path_buf(),
            })?;
        let bytecode = hex::decode(bytecode).map_err(|source| ArtifactError::InvalidBytecode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            contract_name: raw.contract_name,
            bytecode: bytecode.into(),
        })
    }

    /// Creation bytecode followed by the encoded constructor arguments.
    pub fn init_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }
}
