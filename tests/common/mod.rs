//! Shared fixtures: an in-memory node and block builders

#![allow(dead_code)]

use kaspa_block_checker::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Miner public key used across the fixtures
pub const MINER_KEY: [u8; 32] =
    hex_literal::hex!("5fff3c4da18f45adcdd499e44611e9fff148ba69db3c4ea2ddd955fc46a59522");

/// Display form of `MINER_KEY` with version 0 on mainnet
pub const MINER_ADDRESS: &str =
    "kaspa:qp0l70zd5x85ttwd6jv7g3s3a8llzj96d8dncn4zmhv4tlzx5k2jyqh70xmfj";

pub fn h(n: u8) -> Hash {
    Hash::from_bytes([n; 32])
}

/// OP_DATA_32 <key> OP_CHECKSIG
pub fn pay_to_pubkey_script(key: &[u8]) -> Vec<u8> {
    let mut script = vec![key.len() as u8];
    script.extend_from_slice(key);
    script.push(0xac);
    script
}

pub fn coinbase_payload_hex(version: u8, script: &[u8], extra: &[u8]) -> String {
    let mut bytes = vec![0u8; 16];
    bytes.push(version);
    bytes.push(0);
    bytes.push(script.len() as u8);
    bytes.extend_from_slice(script);
    bytes.extend_from_slice(extra);
    hex::encode(bytes)
}

pub fn coinbase(id: &str, payload_hex: String, output_scripts: &[&[u8]]) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        inputs: vec![],
        outputs: output_scripts
            .iter()
            .map(|script| TransactionOutput {
                amount: 50_000_000_000,
                script_public_key: hex::encode(script),
            })
            .collect(),
        payload: payload_hex,
    }
}

pub fn spend(id: &str) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        inputs: vec![TransactionInput::default()],
        outputs: vec![TransactionOutput::default()],
        payload: String::new(),
    }
}

/// Block mined by `MINER_KEY`
pub fn mined_block(hash: Hash, children: Vec<Hash>) -> Block {
    let payload = coinbase_payload_hex(0, &pay_to_pubkey_script(&MINER_KEY), b"0.12.7/test");
    Block {
        hash,
        transactions: vec![coinbase(&format!("cb-{}", hash), payload, &[]), spend("tx-1")],
        children_hashes: children,
    }
}

/// Child block whose coinbase pays the given output scripts
pub fn child_block(hash: Hash, output_scripts: &[&[u8]]) -> Block {
    let payload = coinbase_payload_hex(0, &pay_to_pubkey_script(&[0x77; 32]), b"");
    Block {
        hash,
        transactions: vec![coinbase(&format!("cb-{}", hash), payload, output_scripts)],
        children_hashes: vec![],
    }
}

/// Hashes passed to `get_block`, in call order
pub type RequestLog = Rc<RefCell<Vec<Hash>>>;

#[derive(Default)]
pub struct FakeNode {
    pub blocks: HashMap<Hash, Block>,
    pub deltas: HashMap<Hash, ChainDelta>,
    /// Shared with the test, which keeps a clone after the node is moved
    pub requested_blocks: RequestLog,
}

impl FakeNode {
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.insert(block.hash, block);
        self
    }

    pub fn with_block_at(mut self, requested: Hash, block: Block) -> Self {
        self.blocks.insert(requested, block);
        self
    }

    pub fn with_delta(mut self, start: Hash, delta: ChainDelta) -> Self {
        self.deltas.insert(start, delta);
        self
    }

    pub fn request_log(&self) -> RequestLog {
        Rc::clone(&self.requested_blocks)
    }
}

impl NodeRpc for FakeNode {
    async fn get_block(&self, hash: &Hash, _include_transactions: bool) -> Result<Block> {
        self.requested_blocks.borrow_mut().push(*hash);
        self.blocks
            .get(hash)
            .cloned()
            .ok_or_else(|| CheckerError::NotFound(format!("Block {} not found", hash)))
    }

    async fn get_chain_from_block(&self, start_hash: &Hash) -> Result<ChainDelta> {
        Ok(self.deltas.get(start_hash).cloned().unwrap_or_default())
    }
}
