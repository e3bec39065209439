//! Node record files.
//!
//! A record is a flat YAML (or JSON) mapping. Values reach the register
//! command exactly as written in the file: `contract_address: 0xABC` stays
//! `0xABC` and `api_port: 25000` stays `25000`, quoted or not.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml::Value;

use crate::domain::{NodeRegistration, RecordError};

/// Read and validate the record stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a required key
/// is missing.
pub fn load_record(path: &Path) -> Result<NodeRegistration> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let record = parse_record(&content)
        .with_context(|| format!("invalid node record {}", path.display()))?;
    Ok(record)
}

/// Parse a record from YAML or JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a mapping of scalars or lacks a
/// required key.
pub fn parse_record(content: &str) -> Result<NodeRegistration> {
    let mapping: serde_yaml::Mapping =
        serde_yaml::from_str(content).context("node record must be a mapping")?;
    check_flat(&mapping)?;
    // Deserializing scalars as strings keeps their source text; going through
    // `Value` would resolve `0xABC` to 2748 and `1e3` to 1000.0.
    let fields: BTreeMap<String, String> =
        serde_yaml::from_str(content).context("node record values must be scalars")?;
    Ok(NodeRegistration::from_map(&fields)?)
}

fn check_flat(mapping: &serde_yaml::Mapping) -> Result<(), RecordError> {
    for (key, value) in mapping {
        let key = key.as_str().ok_or(RecordError::NonStringKey)?;
        if !matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
            return Err(RecordError::NonScalarValue {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
