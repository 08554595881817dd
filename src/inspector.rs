//! Block inspection pipeline
//!
//! block → coinbase → payload → script address → display address, then
//! block + chain delta → color, then the authoritative child's coinbase is
//! checked for the miner's address payload.

use crate::address::{AddressEncoder, KaspaAddressEncoder, Network};
use crate::error::Result;
use crate::payload::{parse_payload_hex, CoinbasePayload};
use crate::rpc::NodeRpc;
use crate::types::*;
use anyhow::Context;
use std::fmt;
use tracing::{debug, info};

/// What the coinbase of a block says about its miner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinerInfo {
    pub coinbase_transaction_id: String,
    pub payload: CoinbasePayload,
    pub script_address: ScriptAddress,
}

/// Outcome of checking one child's coinbase for the miner's address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildCheck {
    pub child_hash: Hash,
    pub coinbase_transaction_id: String,
    pub contains_address: bool,
    /// Whether this child extends the selected chain through the block
    pub authoritative: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    pub requested_hash: Hash,
    pub block_hash: Hash,
    pub miner: MinerInfo,
    pub miner_address: String,
    pub color: ChainColor,
    pub children_count: usize,
    pub child_checks: Vec<ChildCheck>,
}

/// Decode the miner information carried by a block's coinbase
pub fn miner_of(block: &Block) -> Result<MinerInfo> {
    let coinbase = block.coinbase()?;
    let payload = parse_payload_hex(&coinbase.payload)?;
    let script_address = ScriptAddress::from_coinbase_payload(&payload)?;
    Ok(MinerInfo {
        coinbase_transaction_id: coinbase.transaction_id.clone(),
        payload,
        script_address,
    })
}

pub struct BlockInspector<R, E = KaspaAddressEncoder> {
    rpc: R,
    encoder: E,
    network: Network,
    check_all_children: bool,
}

impl<R: NodeRpc> BlockInspector<R> {
    pub fn new(rpc: R, network: Network) -> Self {
        Self::with_encoder(rpc, KaspaAddressEncoder, network)
    }
}

impl<R: NodeRpc, E: AddressEncoder> BlockInspector<R, E> {
    pub fn with_encoder(rpc: R, encoder: E, network: Network) -> Self {
        Self {
            rpc,
            encoder,
            network,
            check_all_children: false,
        }
    }

    /// Check every child's coinbase instead of only the selected-chain child
    pub fn check_all_children(mut self, enabled: bool) -> Self {
        self.check_all_children = enabled;
        self
    }

    pub async fn inspect(&self, hash: &Hash) -> anyhow::Result<BlockReport> {
        let block = self
            .rpc
            .get_block(hash, true)
            .await
            .with_context(|| format!("error fetching block {}", hash))?;
        debug!(block = %block.hash, txs = block.transactions.len(), "fetched block");

        let miner = miner_of(&block)
            .with_context(|| format!("error decoding the coinbase of block {}", block.hash))?;
        let miner_address = self
            .encoder
            .encode_script_address(self.network.address_prefix(), &miner.script_address)
            .with_context(|| format!("error encoding the miner address of block {}", block.hash))?;
        info!(block = %block.hash, address = %miner_address, "decoded miner address");

        let delta = self
            .rpc
            .get_chain_from_block(&block.hash)
            .await
            .with_context(|| format!("error fetching the selected chain from block {}", block.hash))?;
        let color = block.chain_color(&delta);
        if !block.has_children() {
            debug!(block = %block.hash, "block has no children yet");
        }
        debug!(block = %block.hash, verdict = ?color.verdict, child = ?color.authoritative_child, "resolved chain color");

        let targets: Vec<(Hash, bool)> = if self.check_all_children {
            block
                .children_hashes
                .iter()
                .map(|&child| (child, color.authoritative_child == Some(child)))
                .collect()
        } else {
            color.authoritative_child.into_iter().map(|child| (child, true)).collect()
        };

        let mut child_checks = Vec::with_capacity(targets.len());
        for (child, authoritative) in targets {
            child_checks.push(
                self.check_child(&child, &miner.script_address.payload, authoritative)
                    .await?,
            );
        }

        Ok(BlockReport {
            requested_hash: *hash,
            block_hash: block.hash,
            miner,
            miner_address,
            color,
            children_count: block.children_hashes.len(),
            child_checks,
        })
    }

    async fn check_child(
        &self,
        child: &Hash,
        address_payload: &[u8],
        authoritative: bool,
    ) -> anyhow::Result<ChildCheck> {
        let block = self
            .rpc
            .get_block(child, true)
            .await
            .with_context(|| format!("error fetching child block {}", child))?;
        let coinbase = block
            .coinbase()
            .with_context(|| format!("error while searching the coinbase of child {}", child))?;
        let contains_address = coinbase.pays_to(address_payload);
        debug!(child = %child, contains_address, "checked child coinbase");

        Ok(ChildCheck {
            child_hash: *child,
            coinbase_transaction_id: coinbase.transaction_id.clone(),
            contains_address,
            authoritative,
        })
    }
}

impl fmt::Display for BlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block {}.", self.requested_hash)?;
        if self.block_hash != self.requested_hash {
            writeln!(f, "Canonical hash: {}.", self.block_hash)?;
        }
        writeln!(f, "Mined by: {} (according to the payload).", self.miner_address)?;
        writeln!(
            f,
            "Coinbase transaction {}: blue score {}, subsidy {} sompi, extra data {:?}.",
            self.miner.coinbase_transaction_id,
            self.miner.payload.blue_score,
            self.miner.payload.subsidy,
            self.miner.payload.extra_data_lossy()
        )?;
        writeln!(f, "Color: {}.", self.color.verdict)?;

        if self.children_count == 0 {
            return writeln!(
                f,
                "The block does not have children. Perhaps it was not validated yet."
            );
        }
        if self.child_checks.is_empty() {
            return writeln!(
                f,
                "None of the {} children is on the selected chain; no coinbase to compare.",
                self.children_count
            );
        }
        for check in &self.child_checks {
            let (mark, verb) = if check.contains_address {
                ('\u{2714}', "contains")
            } else {
                ('\u{274c}', "does not contain")
            };
            let role = if check.authoritative { " (selected chain)" } else { "" };
            writeln!(
                f,
                "{} Child {}{}: coinbase transaction {} {} the address.",
                mark, check.child_hash, role, check.coinbase_transaction_id, verb
            )?;
        }
        Ok(())
    }
}
