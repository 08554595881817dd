//! Command-line and environment configuration

use crate::address::Network;
use crate::error::{CheckerError, Result};
use crate::types::Hash;
use clap::Parser;

/// Report who mined a Kaspa block and whether it made the selected chain
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Hash of the block to inspect, hex-encoded
    #[clap(value_name = "BLOCK_HASH")]
    pub block_hash: String,

    /// HTTP URL of a JSON-RPC 2.0 gateway in front of the node
    ///
    /// kaspad itself only serves gRPC (16110) and wRPC websockets (17110,
    /// 18110), neither of which accepts plain JSON-RPC POSTs, so there is no
    /// usable default.
    #[clap(long, env = "KASPA_RPC_URL", value_name = "URL")]
    pub rpc_url: String,

    /// Network whose address prefix is used (mainnet, testnet, simnet, devnet)
    #[clap(long, env = "KASPA_NETWORK", default_value = "mainnet")]
    pub network: Network,

    /// Check the coinbase of every child, not only the selected-chain child
    #[clap(long)]
    pub all_children: bool,
}

/// Validated settings for one inspection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub block_hash: Hash,
    pub rpc_url: String,
    pub network: Network,
    pub check_all_children: bool,
}

impl TryFrom<Args> for Config {
    type Error = CheckerError;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Config {
            block_hash: args.block_hash.trim().parse().map_err(|e| {
                CheckerError::Decode(format!("invalid block hash {:?}: {}", args.block_hash, e))
            })?,
            rpc_url: args.rpc_url,
            network: args.network,
            check_all_children: args.all_children,
        })
    }
}
