//! Node RPC collaborator
//!
//! [`NodeRpc`] is the single contract the inspector depends on.
//! [`JsonRpcClient`] implements it over JSON-RPC 2.0 POSTs; the wire shapes
//! below mirror the node's camelCase messages and are converted into the
//! crate's own types at the boundary.

use crate::constants::JSONRPC_VERSION;
use crate::error::{CheckerError, Result};
use crate::types::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// Requests the inspector issues against a node
#[allow(async_fn_in_trait)]
pub trait NodeRpc {
    /// Fetch a block; a node answering without a block yields `NotFound`
    async fn get_block(&self, hash: &Hash, include_transactions: bool) -> Result<Block>;

    /// Chain additions and removals since `start_hash`
    async fn get_chain_from_block(&self, start_hash: &Hash) -> Result<ChainDelta>;
}

#[derive(Serialize, Debug)]
struct RpcRequest<'a, T> {
    jsonrpc: &'static str,
    method: &'a str,
    params: T,
    id: i64,
}

#[derive(Deserialize, Debug)]
struct RpcResponse<T> {
    #[allow(dead_code)]
    id: Option<i64>,
    result: Option<T>,
    error: Option<RpcError>,
}

/// Error object reported by the node
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

impl From<RpcError> for CheckerError {
    fn from(e: RpcError) -> Self {
        CheckerError::Rpc {
            code: e.code,
            message: e.message,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GetBlockRequest<'a> {
    hash: &'a Hash,
    include_transactions: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GetVirtualChainFromBlockRequest<'a> {
    start_hash: &'a Hash,
    include_accepted_transaction_ids: bool,
}

#[derive(Deserialize, Debug)]
struct GetBlockResponse {
    block: Option<RpcBlock>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GetVirtualChainFromBlockResponse {
    #[serde(default)]
    removed_chain_block_hashes: Vec<Hash>,
    #[serde(default)]
    added_chain_block_hashes: Vec<Hash>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcBlock {
    #[serde(default)]
    transactions: Vec<RpcTransaction>,
    verbose_data: Option<RpcBlockVerboseData>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcBlockVerboseData {
    hash: Option<Hash>,
    #[serde(default)]
    children_hashes: Vec<Hash>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcTransaction {
    #[serde(default)]
    inputs: Vec<RpcTransactionInput>,
    #[serde(default)]
    outputs: Vec<RpcTransactionOutput>,
    #[serde(default)]
    payload: String,
    verbose_data: Option<RpcTransactionVerboseData>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RpcTransactionInput {
    previous_outpoint: RpcOutpoint,
    signature_script: String,
    sequence: u64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RpcOutpoint {
    transaction_id: String,
    index: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcTransactionOutput {
    #[serde(default)]
    amount: u64,
    #[serde(default)]
    script_public_key: RpcScriptPublicKey,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RpcScriptPublicKey {
    #[allow(dead_code)]
    version: u16,
    script_public_key: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RpcTransactionVerboseData {
    #[serde(default)]
    transaction_id: String,
}

impl RpcBlock {
    fn into_block(self, requested: &Hash) -> Block {
        let (hash, children_hashes) = match self.verbose_data {
            Some(v) => (v.hash.unwrap_or(*requested), v.children_hashes),
            None => (*requested, Vec::new()),
        };
        Block {
            hash,
            transactions: self.transactions.into_iter().map(Transaction::from).collect(),
            children_hashes,
        }
    }
}

impl From<RpcTransaction> for Transaction {
    fn from(tx: RpcTransaction) -> Self {
        Transaction {
            transaction_id: tx.verbose_data.map(|v| v.transaction_id).unwrap_or_default(),
            inputs: tx
                .inputs
                .into_iter()
                .map(|i| TransactionInput {
                    previous_outpoint: Outpoint {
                        transaction_id: i.previous_outpoint.transaction_id,
                        index: i.previous_outpoint.index,
                    },
                    signature_script: i.signature_script,
                    sequence: i.sequence,
                })
                .collect(),
            outputs: tx
                .outputs
                .into_iter()
                .map(|o| TransactionOutput {
                    amount: o.amount,
                    script_public_key: o.script_public_key.script_public_key,
                })
                .collect(),
            payload: tx.payload,
        }
    }
}

impl From<GetVirtualChainFromBlockResponse> for ChainDelta {
    fn from(r: GetVirtualChainFromBlockResponse) -> Self {
        ChainDelta {
            added_hashes: r.added_chain_block_hashes,
            removed_hashes: r.removed_chain_block_hashes,
        }
    }
}

fn parse_block_response(body: &[u8], requested: &Hash) -> Result<Block> {
    let response: GetBlockResponse = unwrap_response(body)?;
    response
        .block
        .map(|b| b.into_block(requested))
        .ok_or_else(|| CheckerError::NotFound(format!("Block {} not found", requested)))
}

fn parse_chain_response(body: &[u8]) -> Result<ChainDelta> {
    let response: GetVirtualChainFromBlockResponse = unwrap_response(body)?;
    Ok(response.into())
}

fn unwrap_response<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let response: RpcResponse<R> = serde_json::from_slice(body)
        .map_err(|e| CheckerError::Decode(format!("returned json is invalid: {}", e)))?;
    match (response.error, response.result) {
        (Some(error), _) => Err(error.into()),
        (None, Some(result)) => Ok(result),
        (None, None) => Err(CheckerError::Rpc {
            code: 0,
            message: "response has neither result nor error".to_string(),
        }),
    }
}

/// JSON-RPC 2.0 client over HTTP
#[derive(Debug)]
pub struct JsonRpcClient {
    url: String,
    client: Client,
    id_counter: AtomicI64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            url: url.into(),
            client,
            id_counter: AtomicI64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send_request<T: Serialize + std::fmt::Debug>(
        &self,
        method: &str,
        params: T,
    ) -> Result<Vec<u8>> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        };
        debug!(url = %self.url, ?request, "sending RPC request");

        let response = self.client.post(&self.url).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let error = serde_json::from_slice::<RpcResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|r| r.error)
                .map(CheckerError::from)
                .unwrap_or_else(|| CheckerError::Rpc {
                    code: status.as_u16() as i64,
                    message: format!("HTTP status {}", status),
                });
            return Err(error);
        }
        Ok(body.to_vec())
    }
}

impl NodeRpc for JsonRpcClient {
    async fn get_block(&self, hash: &Hash, include_transactions: bool) -> Result<Block> {
        let params = GetBlockRequest {
            hash,
            include_transactions,
        };
        let body = self.send_request("getBlock", params).await?;
        parse_block_response(&body, hash)
    }

    async fn get_chain_from_block(&self, start_hash: &Hash) -> Result<ChainDelta> {
        let params = GetVirtualChainFromBlockRequest {
            start_hash,
            include_accepted_transaction_ids: false,
        };
        let body = self.send_request("getVirtualChainFromBlock", params).await?;
        parse_chain_response(&body)
    }
}
