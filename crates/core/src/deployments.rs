use std::{fs, io::ErrorKind, path::Path};

use alloy::primitives::Address;
use serde_json::{Map, Value};

use crate::{
    error::RecordError,
    types::{ContractKind, Deployment},
};

/// Top-level key of the deployments record.
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// Stores `deployment` under `deployments.<key>`, keeping every other entry.
///
/// The file is created when missing.
pub fn record_deployment(
    path: impl AsRef<Path>,
    deployment: &Deployment,
) -> Result<(), RecordError> {
    let path = path.as_ref();
    let mut root = read_record(path)?.unwrap_or_default();

    let entries = root
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(entries) = entries else {
        return Err(RecordError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    entries.insert(
        deployment.kind.key().to_string(),
        Value::String(format!("{:#x}", deployment.address)),
    );

    let contents = serde_json::to_string_pretty(&Value::Object(root)).map_err(|source| {
        RecordError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, contents).map_err(|source| RecordError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Looks up a previously recorded address.
pub fn read_deployment(
    path: impl AsRef<Path>,
    kind: ContractKind,
) -> Result<Option<Address>, RecordError> {
    let path = path.as_ref();
    let Some(root) = read_record(path)? else {
        return Ok(None);
    };

    let Some(value) = root.get(DEPLOYMENTS_KEY).and_then(|entries| entries.get(kind.key())) else {
        return Ok(None);
    };

    value
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .map(Some)
        .ok_or_else(|| RecordError::InvalidAddress {
            path: path.to_path_buf(),
            kind,
            value: value.to_string(),
        })
}

fn read_record(path: &Path) -> Result<Option<Map<String, Value>>, RecordError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(RecordError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str(&contents).map_err(|source| RecordError::Parse {
        path: path.to_path_buf(),
        source,
    })? {
        Value::Object(root) => Ok(Some(root)),
        _ => Err(RecordError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use tempfile::tempdir;

    #[test]
    fn records_into_a_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let vault = Deployment {
            kind: ContractKind::Vault,
            address: address!("Ae9Ed85dE2670e3112590a2BB17b7283ddF44d9c"),
        };

        record_deployment(&path, &vault).expect("should record");

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written["deployments"]["vault"],
            "0xae9ed85de2670e3112590a2bb17b7283ddf44d9c"
        );
        assert_eq!(
            read_deployment(&path, ContractKind::Vault).unwrap(),
            Some(vault.address)
        );
    }

    #[test]
    fn keeps_existing_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(
            &path,
            r#"{
                "network": "sepolia",
                "deployments": { "vault": "0x00000000000000000000000000000000000000aa" }
            }"#,
        )
        .unwrap();

        let house = Deployment {
            kind: ContractKind::AuctionHouse,
            address: address!("00000000000000000000000000000000000000bb"),
        };
        record_deployment(&path, &house).expect("should record");

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["network"], "sepolia");
        assert_eq!(
            read_deployment(&path, ContractKind::Vault).unwrap(),
            Some(address!("00000000000000000000000000000000000000aa"))
        );
        assert_eq!(
            read_deployment(&path, ContractKind::AuctionHouse).unwrap(),
            Some(house.address)
        );
    }

    #[test]
    fn missing_record_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(read_deployment(&path, ContractKind::Vault).unwrap(), None);
    }

    #[test]
    fn rejects_non_object_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "[]").unwrap();

        let err = read_deployment(&path, ContractKind::Vault).unwrap_err();
        assert!(matches!(err, RecordError::NotAnObject { .. }));
    }

    #[test]
    fn serialize_failure_is_not_reported_as_parse() {
        let err = RecordError::Serialize {
            path: "deployments.json".into(),
            source: serde_json::from_str::<Value>("{").unwrap_err(),
        };

        assert!(err.to_string().starts_with("failed to serialize deployments"));
    }

    #[test]
    fn rejects_garbage_address() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, r#"{ "deployments": { "vault": "not-an-address" } }"#).unwrap();

        let err = read_deployment(&path, ContractKind::Vault).unwrap_err();
        assert!(matches!(err, RecordError::InvalidAddress { .. }));
    }
}
