//! Checksummed human-readable address encoding
//!
//! The encoding itself lives in `kaspa-addresses`; this module only adapts
//! `(prefix, payload, version)` into it and picks the prefix per network.

use crate::constants::*;
use crate::error::{CheckerError, Result};
use crate::types::ScriptAddress;
use kaspa_addresses::{Address, Prefix, Version};
use std::fmt;
use std::str::FromStr;

/// Turns a raw address payload into its display form
pub trait AddressEncoder {
    fn encode(&self, prefix: &str, payload: &[u8], version: u8) -> Result<String>;

    fn encode_script_address(&self, prefix: &str, address: &ScriptAddress) -> Result<String> {
        self.encode(prefix, &address.payload, address.version)
    }
}

/// Kaspa address encoder backed by `kaspa-addresses`
#[derive(Debug, Clone, Copy, Default)]
pub struct KaspaAddressEncoder;

impl AddressEncoder for KaspaAddressEncoder {
    fn encode(&self, prefix: &str, payload: &[u8], version: u8) -> Result<String> {
        let prefix = Prefix::try_from(prefix)
            .map_err(|e| CheckerError::Decode(format!("address prefix {:?}: {}", prefix, e)))?;
        let version = Version::try_from(version)
            .map_err(|e| CheckerError::Decode(format!("address version {}: {}", version, e)))?;
        if payload.len() != version.public_key_len() {
            return Err(CheckerError::Decode(format!(
                "address payload is {} bytes, version {:?} expects {}",
                payload.len(),
                version,
                version.public_key_len()
            )));
        }
        Ok(Address::new(prefix, version, payload).to_string())
    }
}

/// Network whose address prefix is used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Simnet,
    Devnet,
}

impl Network {
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => PREFIX_MAINNET,
            Network::Testnet => PREFIX_TESTNET,
            Network::Simnet => PREFIX_SIMNET,
            Network::Devnet => PREFIX_DEVNET,
        }
    }
}

impl FromStr for Network {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "kaspa" => Ok(Network::Mainnet),
            "testnet" | "kaspatest" => Ok(Network::Testnet),
            "simnet" | "kaspasim" => Ok(Network::Simnet),
            "devnet" | "kaspadev" => Ok(Network::Devnet),
            other => Err(CheckerError::Decode(format!("unknown network {:?}", other))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Simnet => "simnet",
            Network::Devnet => "devnet",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_encode_known_mainnet_address() {
        let payload = hex!("5fff3c4da18f45adcdd499e44611e9fff148ba69db3c4ea2ddd955fc46a59522");
        assert_eq!(
            KaspaAddressEncoder.encode(PREFIX_MAINNET, &payload, 0).unwrap(),
            "kaspa:qp0l70zd5x85ttwd6jv7g3s3a8llzj96d8dncn4zmhv4tlzx5k2jyqh70xmfj"
        );
    }

    #[test]
    fn test_encode_zero_payload() {
        assert_eq!(
            KaspaAddressEncoder.encode(PREFIX_MAINNET, &[0u8; 32], 0).unwrap(),
            "kaspa:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqkx9awp4e"
        );
        assert_eq!(
            KaspaAddressEncoder.encode(PREFIX_TESTNET, &[0u8; 32], 0).unwrap(),
            "kaspatest:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqhqrxplya"
        );
    }

    #[test]
    fn test_version_selects_leading_character() {
        let pubkey = KaspaAddressEncoder.encode(PREFIX_MAINNET, &[7u8; 32], 0).unwrap();
        let script_hash = KaspaAddressEncoder.encode(PREFIX_MAINNET, &[7u8; 32], 8).unwrap();
        assert!(pubkey.starts_with("kaspa:q"));
        assert!(script_hash.starts_with("kaspa:p"));
        assert!(KaspaAddressEncoder.encode(PREFIX_MAINNET, &[2u8; 33], 1).is_ok());
    }

    #[test]
    fn test_unknown_version_rejected() {
        assert!(matches!(
            KaspaAddressEncoder.encode(PREFIX_MAINNET, &[0u8; 32], 5),
            Err(CheckerError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        assert!(matches!(
            KaspaAddressEncoder.encode("bitcoin", &[0u8; 32], 0),
            Err(CheckerError::Decode(_))
        ));
    }

    #[test]
    fn test_payload_length_must_match_version() {
        assert!(matches!(
            KaspaAddressEncoder.encode(PREFIX_MAINNET, &[1, 2, 3], 0),
            Err(CheckerError::Decode(_))
        ));
        assert!(KaspaAddressEncoder.encode(PREFIX_MAINNET, &[0u8; 32], 1).is_err());
    }

    #[test]
    fn test_encode_script_address() {
        let address = ScriptAddress { payload: vec![0u8; 32], version: 0 };
        assert_eq!(
            KaspaAddressEncoder.encode_script_address(PREFIX_MAINNET, &address).unwrap(),
            KaspaAddressEncoder.encode(PREFIX_MAINNET, &[0u8; 32], 0).unwrap()
        );
    }

    #[test]
    fn test_network_prefixes() {
        assert_eq!("mainnet".parse::<Network>().unwrap().address_prefix(), "kaspa");
        assert_eq!("Testnet".parse::<Network>().unwrap().address_prefix(), "kaspatest");
        assert_eq!("kaspasim".parse::<Network>().unwrap(), Network::Simnet);
        assert_eq!(Network::Devnet.address_prefix(), "kaspadev");
        assert!("bitcoin".parse::<Network>().is_err());
    }

    #[test]
    fn test_every_network_prefix_is_accepted_by_encoder() {
        for network in [Network::Mainnet, Network::Testnet, Network::Simnet, Network::Devnet] {
            let encoded = KaspaAddressEncoder
                .encode(network.address_prefix(), &[0u8; 32], 0)
                .unwrap();
            assert!(encoded.starts_with(&format!("{}:", network.address_prefix())));
        }
    }
}
