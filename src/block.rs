//! Coinbase lookup within a block

use crate::error::{CheckerError, Result};
use crate::types::*;

/// Check if transaction is coinbase: no inputs and a non-empty payload
pub fn is_coinbase(tx: &Transaction) -> bool {
    tx.inputs.is_empty() && !tx.payload.is_empty()
}

/// FindCoinbase: 𝒯𝒳* → 𝒯𝒳
///
/// Linear scan in block order; the first coinbase-shaped transaction wins.
/// Uniqueness is not checked.
pub fn find_coinbase(transactions: &[Transaction]) -> Result<&Transaction> {
    transactions
        .iter()
        .find(|tx| is_coinbase(tx))
        .ok_or_else(|| CheckerError::NotFound("Could not find coinbase".to_string()))
}

impl Block {
    pub fn coinbase(&self) -> Result<&Transaction> {
        find_coinbase(&self.transactions).map_err(|_| {
            CheckerError::NotFound(format!("Could not find coinbase in block {}", self.hash))
        })
    }

    pub fn has_children(&self) -> bool {
        !self.children_hashes.is_empty()
    }
}
