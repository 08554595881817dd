//! # Kaspa Block Checker
//!
//! Inspects a single block of a Kaspa node: who mined it according to the
//! coinbase payload, whether it ended up blue (accepted) or red (orphaned)
//! relative to the virtual selected chain, and whether the child that
//! extends the chain through it pays the same address in its coinbase.
//!
//! ## Architecture
//!
//! Pure decoding and resolution steps, leaf-first:
//! - [`payload`]: coinbase payload → (output script, address version)
//! - [`script`]: output script → raw address payload
//! - [`address`]: raw payload → checksummed display address
//! - [`block`]: transaction list → coinbase
//! - [`transaction`]: address payload × outputs → membership
//! - [`chain`]: block × chain delta → color verdict and authoritative child
//!
//! [`inspector`] sequences them against a [`rpc::NodeRpc`] implementation.
//!
//! ## Usage
//!
//! ```rust
//! use kaspa_block_checker::address::{AddressEncoder, KaspaAddressEncoder};
//! use kaspa_block_checker::payload::parse_payload;
//! use kaspa_block_checker::types::ScriptAddress;
//!
//! // blue score, subsidy, version 0, reserved byte, script length 34
//! let mut payload = vec![0u8; 16];
//! payload.extend_from_slice(&[0x00, 0x00, 0x22, 0x20]);
//! payload.extend_from_slice(&[0xab; 32]);
//! payload.push(0xac); // OP_CHECKSIG
//!
//! let parsed = parse_payload(&payload).unwrap();
//! let address = ScriptAddress::from_coinbase_payload(&parsed).unwrap();
//! assert_eq!(address.payload, vec![0xab; 32]);
//!
//! let display = KaspaAddressEncoder.encode_script_address("kaspa", &address).unwrap();
//! assert!(display.starts_with("kaspa:q"));
//! ```

pub mod types;
pub mod constants;
pub mod payload;
pub mod script;
pub mod address;
pub mod block;
pub mod transaction;
pub mod chain;
pub mod rpc;
pub mod inspector;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use error::{CheckerError, Result};
pub use inspector::{BlockInspector, BlockReport, ChildCheck, MinerInfo};
pub use rpc::{JsonRpcClient, NodeRpc};
