//! Node registration record and the `fluence register` command line.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;

use crate::domain::error::RecordError;
use crate::domain::remote::RemoteCommand;

// ── Record keys ──────────────────────────────────────────────────────────────

pub const NODE_IP: &str = "node_ip";
pub const TENDERMINT_KEY: &str = "tendermint_key";
pub const TENDERMINT_NODE_ID: &str = "tendermint_node_id";
pub const CONTRACT_ADDRESS: &str = "contract_address";
pub const ACCOUNT: &str = "account";
pub const API_PORT: &str = "api_port";
pub const CAPACITY: &str = "capacity";
pub const ETHEREUM_ADDRESS: &str = "ethereum_address";

/// Every key a node record must carry.
pub const RECORD_KEYS: [&str; 8] = [
    NODE_IP,
    TENDERMINT_KEY,
    TENDERMINT_NODE_ID,
    CONTRACT_ADDRESS,
    ACCOUNT,
    API_PORT,
    CAPACITY,
    ETHEREUM_ADDRESS,
];

/// Placeholder shown instead of the secret key in logs and error messages.
pub const REDACTED: &str = "<redacted>";

// ── Record ───────────────────────────────────────────────────────────────────

/// Network and account parameters describing a compute node to register.
///
/// Values are kept as the strings they were supplied as; ports and capacity
/// are forwarded to `fluence` unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRegistration {
    pub node_ip: String,
    pub tendermint_key: String,
    pub tendermint_node_id: String,
    pub contract_address: String,
    pub account: String,
    pub api_port: String,
    pub capacity: String,
    pub ethereum_address: String,
}

impl NodeRegistration {
    /// Build a record from a key/value mapping. Extra keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for the first required key that is absent.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, RecordError> {
        let field = |key: &'static str| {
            map.get(key)
                .cloned()
                .ok_or(RecordError::MissingField { key })
        };
        Ok(Self {
            node_ip: field(NODE_IP)?,
            tendermint_key: field(TENDERMINT_KEY)?,
            tendermint_node_id: field(TENDERMINT_NODE_ID)?,
            contract_address: field(CONTRACT_ADDRESS)?,
            account: field(ACCOUNT)?,
            api_port: field(API_PORT)?,
            capacity: field(CAPACITY)?,
            ethereum_address: field(ETHEREUM_ADDRESS)?,
        })
    }
}

// ── Command line ─────────────────────────────────────────────────────────────

/// Format the `./fluence register` invocation for `record`.
///
/// Values are substituted verbatim. Nothing is quoted, so values must not
/// contain shell metacharacters. Any run of whitespace in the result is
/// collapsed to a single space.
#[must_use]
pub fn register_command(record: &NodeRegistration, secret_key: &str) -> String {
    let command = format!(
        "./fluence register \
            --node_ip            {} \
            --tendermint_key     {} \
            --tendermint_node_id {} \
            --contract_address   {} \
            --account            {} \
            --secret_key         {} \
            --api_port           {} \
            --capacity           {} \
            --eth_url            {} \
            --wait_syncing \
            --gas_price 10 \
            --base64_tendermint_key",
        record.node_ip,
        record.tendermint_key,
        record.tendermint_node_id,
        record.contract_address,
        record.account,
        secret_key,
        record.api_port,
        record.capacity,
        record.ethereum_address,
    );
    collapse_whitespace(&command)
}

/// Build the register command straight from a key/value mapping.
///
/// # Errors
///
/// Returns `RecordError::MissingField` if a required key is absent; no
/// partial command is produced.
pub fn register_command_from_map(
    map: &BTreeMap<String, String>,
    secret_key: &str,
) -> Result<String, RecordError> {
    let record = NodeRegistration::from_map(map)?;
    Ok(register_command(&record, secret_key))
}

/// The register command as a `RemoteCommand` whose display form hides the secret.
#[must_use]
pub fn remote_register_command(record: &NodeRegistration, secret_key: &str) -> RemoteCommand {
    RemoteCommand::with_display(
        register_command(record, secret_key),
        register_command(record, REDACTED),
    )
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
