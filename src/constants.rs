//! Kaspa wire-format constants

/// Offset of the little-endian blue score in a coinbase payload
pub const PAYLOAD_BLUE_SCORE_OFFSET: usize = 0;

/// Offset of the little-endian subsidy in a coinbase payload
pub const PAYLOAD_SUBSIDY_OFFSET: usize = 8;

/// Offset of the script version. Two bytes are reserved but only the low one is used.
pub const PAYLOAD_VERSION_OFFSET: usize = 16;

/// Offset of the single-byte script length
pub const PAYLOAD_SCRIPT_LENGTH_OFFSET: usize = 18;

/// Offset of the first output script byte
pub const PAYLOAD_SCRIPT_OFFSET: usize = 19;

/// Largest opcode that is a plain "push the next N bytes" (OP_DATA_75)
pub const OP_DATA_MAX: u8 = 0x75;

/// First opcode outside the simple-push range (OP_DUP)
pub const OP_DUP: u8 = 0x76;

/// Address prefix for mainnet
pub const PREFIX_MAINNET: &str = "kaspa";

/// Address prefix for testnet
pub const PREFIX_TESTNET: &str = "kaspatest";

/// Address prefix for simnet
pub const PREFIX_SIMNET: &str = "kaspasim";

/// Address prefix for devnet
pub const PREFIX_DEVNET: &str = "kaspadev";

/// JSON-RPC protocol version sent in every request
pub const JSONRPC_VERSION: &str = "2.0";
