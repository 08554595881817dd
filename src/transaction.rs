//! Address membership in transaction outputs

use crate::types::*;
use tracing::trace;

/// ContainsAddress: 𝔹* × 𝒯* → {true, false}
///
/// True iff some output's locking script, hex-decoded, is byte-for-byte
/// equal to `address_payload`. An output whose script fails to decode is
/// a non-match, never an error.
pub fn outputs_contain_payload(address_payload: &[u8], outputs: &[TransactionOutput]) -> bool {
    outputs.iter().enumerate().any(|(i, output)| {
        match hex::decode(&output.script_public_key) {
            Ok(script) => script == address_payload,
            Err(e) => {
                trace!(index = i, error = %e, "skipping output with undecodable script");
                false
            }
        }
    })
}

impl Transaction {
    pub fn pays_to(&self, address_payload: &[u8]) -> bool {
        outputs_contain_payload(address_payload, &self.outputs)
    }
}
