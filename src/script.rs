//! Output script to address payload decoding
//!
//! Only the single-push pattern is understood: the first byte `n < OP_DUP`
//! is an `OP_DATA_n` opcode and the next `n` bytes are the address payload.
//! Anything else is rejected rather than guessed at.

use crate::constants::*;
use crate::error::{CheckerError, Result};
use crate::payload::CoinbasePayload;
use crate::types::ScriptAddress;

/// ExtractAddressPayload: script → payload
///
/// 1. If script is empty: fail (nothing to read)
/// 2. If script[0] ≥ OP_DUP: fail, unsupported opcode pattern
/// 3. Let n = script[0]; if |script| - 1 < n: fail
/// 4. Return script[1 .. 1 + n], ignoring trailing bytes
pub fn extract_address_payload(script: &[u8]) -> Result<&[u8]> {
    let (&opcode, rest) = script.split_first().ok_or(CheckerError::ScriptBounds {
        needed: 1,
        available: 0,
    })?;

    if opcode >= OP_DUP {
        return Err(CheckerError::UnsupportedScript(opcode));
    }
    debug_assert!(opcode <= OP_DATA_MAX);

    let push_len = opcode as usize;
    rest.get(..push_len).ok_or(CheckerError::ScriptBounds {
        needed: push_len,
        available: rest.len(),
    })
}

impl ScriptAddress {
    /// Decode the miner's address from a parsed coinbase payload
    pub fn from_coinbase_payload(payload: &CoinbasePayload) -> Result<Self> {
        let address_payload = extract_address_payload(&payload.output_script)?;
        Ok(Self {
            payload: address_payload.to_vec(),
            version: payload.address_version,
        })
    }
}
