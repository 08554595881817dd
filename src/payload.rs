//! Coinbase payload decoding
//!
//! Layout of a coinbase payload:
//!
//! | offset     | size | field                                   |
//! |------------|------|-----------------------------------------|
//! | 0          | 8    | blue score, little-endian               |
//! | 8          | 8    | subsidy in sompi, little-endian         |
//! | 16         | 1    | script version (address version byte)   |
//! | 17         | 1    | reserved high byte of the script version |
//! | 18         | 1    | output script length `L`                |
//! | 19         | L    | output script                           |
//! | 19 + L     | ..   | extra data (miner tag)                  |

use crate::constants::*;
use crate::error::{CheckerError, Result};

/// Decoded coinbase payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinbasePayload {
    pub blue_score: u64,
    pub subsidy: u64,
    pub address_version: u8,
    pub output_script: Vec<u8>,
    pub extra_data: Vec<u8>,
}

impl CoinbasePayload {
    /// Miner tag as text, replacing invalid UTF-8
    pub fn extra_data_lossy(&self) -> String {
        String::from_utf8_lossy(&self.extra_data).into_owned()
    }
}

/// Bounds-checked cursor over the payload bytes
struct PayloadReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        let available = self.bytes.len().saturating_sub(self.pos);
        if available < len {
            return Err(CheckerError::Format {
                field,
                offset: self.pos,
                needed: len,
                available,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.read_bytes(1, field)?[0])
    }

    fn read_u64_le(&mut self, field: &'static str) -> Result<u64> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.read_bytes(8, field)?);
        Ok(u64::from_le_bytes(buf))
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

/// Parse a hex-encoded coinbase payload as delivered by the node
pub fn parse_payload_hex(payload_hex: &str) -> Result<CoinbasePayload> {
    let bytes = hex::decode(payload_hex)
        .map_err(|e| CheckerError::Decode(format!("coinbase payload hex: {}", e)))?;
    parse_payload(&bytes)
}

/// Parse raw coinbase payload bytes
pub fn parse_payload(bytes: &[u8]) -> Result<CoinbasePayload> {
    let mut reader = PayloadReader::new(bytes);

    debug_assert_eq!(reader.pos, PAYLOAD_BLUE_SCORE_OFFSET);
    let blue_score = reader.read_u64_le("blue score")?;
    debug_assert_eq!(reader.pos, PAYLOAD_SUBSIDY_OFFSET);
    let subsidy = reader.read_u64_le("subsidy")?;
    debug_assert_eq!(reader.pos, PAYLOAD_VERSION_OFFSET);
    let address_version = reader.read_u8("script version")?;
    reader.read_u8("script version high byte")?;
    debug_assert_eq!(reader.pos, PAYLOAD_SCRIPT_LENGTH_OFFSET);
    let script_len = reader.read_u8("script length")? as usize;
    debug_assert_eq!(reader.pos, PAYLOAD_SCRIPT_OFFSET);
    let output_script = reader.read_bytes(script_len, "output script")?.to_vec();
    let extra_data = reader.remaining().to_vec();

    Ok(CoinbasePayload {
        blue_score,
        subsidy,
        address_version,
        output_script,
        extra_data,
    })
}

/// Extract `(output script, address version)` from a hex-encoded payload
pub fn payload_to_script_and_version(payload_hex: &str) -> Result<(Vec<u8>, u8)> {
    let payload = parse_payload_hex(payload_hex)?;
    Ok((payload.output_script, payload.address_version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_payload(version: u8, script: &[u8], extra: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; 16];
        bytes.push(version);
        bytes.push(0);
        bytes.push(script.len() as u8);
        bytes.extend_from_slice(script);
        bytes.extend_from_slice(extra);
        bytes
    }

    #[test]
    fn test_parse_payload_basic() {
        let bytes = build_payload(0, &[0x20, 0xaa, 0xbb], b"");
        let payload = parse_payload(&bytes).unwrap();
        assert_eq!(payload.output_script, vec![0x20, 0xaa, 0xbb]);
        assert_eq!(payload.address_version, 0);
        assert!(payload.extra_data.is_empty());
    }

    #[test]
    fn test_parse_payload_header_fields() {
        let mut bytes = build_payload(8, &[0x01, 0x02], b"0.12.7/miner");
        bytes[0..8].copy_from_slice(&1_234_567u64.to_le_bytes());
        bytes[8..16].copy_from_slice(&50_000_000_000u64.to_le_bytes());

        let payload = parse_payload(&bytes).unwrap();
        assert_eq!(payload.blue_score, 1_234_567);
        assert_eq!(payload.subsidy, 50_000_000_000);
        assert_eq!(payload.address_version, 8);
        assert_eq!(payload.extra_data_lossy(), "0.12.7/miner");
    }

    #[test]
    fn test_version_high_byte_ignored() {
        let mut bytes = build_payload(1, &[0x00], b"");
        bytes[17] = 0xff;
        let payload = parse_payload(&bytes).unwrap();
        assert_eq!(payload.address_version, 1);
    }

    #[test]
    fn test_parse_payload_truncated_script() {
        let mut bytes = build_payload(0, &[0x20; 10], b"");
        bytes[18] = 11;
        match parse_payload(&bytes) {
            Err(CheckerError::Format { field, offset, needed, available }) => {
                assert_eq!(field, "output script");
                assert_eq!(offset, 19);
                assert_eq!(needed, 11);
                assert_eq!(available, 10);
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_payload_too_short_for_header() {
        let result = parse_payload(&[0u8; 18]);
        assert!(matches!(
            result,
            Err(CheckerError::Format { field: "script length", offset: 18, .. })
        ));
        assert!(parse_payload(&[]).is_err());
    }

    #[test]
    fn test_parse_payload_hex_malformed() {
        assert!(matches!(parse_payload_hex("zz"), Err(CheckerError::Decode(_))));
        assert!(matches!(parse_payload_hex("abc"), Err(CheckerError::Decode(_))));
    }

    #[test]
    fn test_payload_to_script_and_version() {
        let bytes = build_payload(3, &[0x02, 0xde, 0xad], b"tail");
        let (script, version) = payload_to_script_and_version(&hex::encode(bytes)).unwrap();
        assert_eq!(script, vec![0x02, 0xde, 0xad]);
        assert_eq!(version, 3);
    }
}
