//! Core Kaspa types for block inspection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block hash: 256-bit, displayed and serialized as lowercase hex
pub use kaspa_hashes::Hash;

/// Reference to the output a transaction input spends
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outpoint {
    pub transaction_id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_outpoint: Outpoint,
    /// Hex-encoded, as delivered by the node
    pub signature_script: String,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub amount: u64,
    /// Hex-encoded locking script, as delivered by the node
    pub script_public_key: String,
}

/// A transaction as returned by the node. Byte fields stay hex-encoded;
/// decoding happens in the component that consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub payload: String,
}

/// A block together with its transactions and known children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Canonical hash reported by the node
    pub hash: Hash,
    pub transactions: Vec<Transaction>,
    pub children_hashes: Vec<Hash>,
}

/// Recent additions to and removals from the virtual selected chain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainDelta {
    pub added_hashes: Vec<Hash>,
    pub removed_hashes: Vec<Hash>,
}

/// Raw address payload plus its version tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAddress {
    pub payload: Vec<u8>,
    pub version: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorVerdict {
    /// Blue: merged into the virtual selected chain
    Accepted,
    /// Red: was on the chain and has since been removed
    Orphaned,
    /// None of the block's children was added to the chain
    Undetermined,
}

impl fmt::Display for ColorVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorVerdict::Accepted => f.write_str("blue (accepted)"),
            ColorVerdict::Orphaned => f.write_str("red (orphaned)"),
            ColorVerdict::Undetermined => f.write_str("undetermined"),
        }
    }
}

/// Result of chain-color resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainColor {
    pub verdict: ColorVerdict,
    /// Child extending the virtual selected chain through this block
    pub authoritative_child: Option<Hash>,
}

impl ChainColor {
    pub fn undetermined() -> Self {
        Self {
            verdict: ColorVerdict::Undetermined,
            authoritative_child: None,
        }
    }
}
