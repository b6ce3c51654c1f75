//! Wallet JSON-RPC client
//!
//! Talks JSON-RPC 2.0 over HTTP to a wallet endpoint that holds the user's
//! keys (a local signer, or a development node with unlocked accounts).
//! Notifications are produced by polling watchers on background threads.

use alloy_primitives::{Address, B256, Bytes, hex};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use crate::wallet::WalletProvider;
use crate::wallet::error::WalletError;
use crate::wallet::subscription::{CancelToken, Subscription};
use crate::wallet::types::{
    ChainId, Log, LogFilter, LogHandler, NetworkEvent, NetworkHandler, TransactionReceipt,
    TxHash, format_quantity, parse_quantity,
};

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

const RPC_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound for calls that wait on the user in the wallet UI
const PROMPT_TIMEOUT: Duration = Duration::from_secs(600);

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcLog {
    address: String,
    topics: Vec<String>,
    data: String,
    #[serde(default)]
    block_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JsonRpcWallet {
    endpoint: String,
    client: Client,
    poll_interval: Duration,
}

impl JsonRpcWallet {
    pub fn new(endpoint: impl Into<String>, poll_interval: Duration) -> Result<Self, WalletError> {
        let endpoint = endpoint.into();
        let endpoint = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint
        } else {
            format!("http://{endpoint}")
        };

        let client = Client::builder()
            .timeout(RPC_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        tracing::info!("Wallet JSON-RPC endpoint: {}", endpoint);

        Ok(Self {
            endpoint,
            client,
            poll_interval,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn rpc_call(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.send_rpc(method, params, None)
    }

    fn prompt_call(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.send_rpc(method, params, Some(PROMPT_TIMEOUT))
    }

    fn send_rpc(
        &self,
        method: &str,
        params: Value,
        timeout: Option<Duration>,
    ) -> Result<Value, WalletError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        tracing::debug!("rpc -> {} {}", method, request.params);

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let response: JsonRpcResponse = builder.send()?.error_for_status()?.json()?;

        if let Some(error) = response.error {
            tracing::debug!("rpc <- {} error {}: {}", method, error.code, error.message);
            return Err(WalletError::from_rpc(error.code, error.message));
        }
        Ok(response.result.unwrap_or(Value::Null))
    }

    fn block_number(&self) -> Result<u64, WalletError> {
        let value = self.rpc_call("eth_blockNumber", json!([]))?;
        parse_quantity(as_str(&value)?)
    }

    fn get_logs(&self, filter: &LogFilter, from: u64, to: u64) -> Result<Vec<Log>, WalletError> {
        let value = self.rpc_call(
            "eth_getLogs",
            json!([{
                "address": encode_address(&filter.address),
                "topics": [hex::encode_prefixed(filter.topic0.as_slice())],
                "fromBlock": format_quantity(from),
                "toBlock": format_quantity(to),
            }]),
        )?;
        let logs: Vec<RpcLog> = serde_json::from_value(value)
            .map_err(|e| WalletError::InvalidResponse(format!("eth_getLogs: {e}")))?;
        logs.into_iter().map(convert_log).collect()
    }
}

impl WalletProvider for JsonRpcWallet {
    fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        parse_addresses(self.rpc_call("eth_accounts", json!([]))?)
    }

    fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        match self.prompt_call("eth_requestAccounts", json!([])) {
            Ok(value) => parse_addresses(value),
            // Plain nodes have no prompt; their unlocked accounts are the grant
            Err(e) if e.is_method_not_found() => {
                tracing::debug!("eth_requestAccounts unsupported, using eth_accounts");
                self.accounts()
            }
            Err(e) => Err(e),
        }
    }

    fn chain_id(&self) -> Result<ChainId, WalletError> {
        let value = self.rpc_call("eth_chainId", json!([]))?;
        ChainId::from_quantity(as_str(&value)?)
    }

    fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        let value = self.rpc_call(
            "eth_call",
            json!([{ "to": encode_address(&to), "data": hex::encode_prefixed(&data) }, "latest"]),
        )?;
        parse_bytes(as_str(&value)?)
    }

    fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<TxHash, WalletError> {
        let value = self.prompt_call(
            "eth_sendTransaction",
            json!([{
                "from": encode_address(&from),
                "to": encode_address(&to),
                "data": hex::encode_prefixed(&data),
            }]),
        )?;
        Ok(TxHash::new(as_str(&value)?))
    }

    fn wait_for_receipt(&self, hash: &TxHash) -> Result<TransactionReceipt, WalletError> {
        loop {
            let value = match self.rpc_call("eth_getTransactionReceipt", json!([hash.as_str()])) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!("Receipt poll for {} failed: {}", hash, e);
                    thread::sleep(self.poll_interval);
                    continue;
                }
            };
            if value.is_null() {
                thread::sleep(self.poll_interval);
                continue;
            }

            let receipt: RpcReceipt = serde_json::from_value(value)
                .map_err(|e| WalletError::InvalidResponse(format!("receipt: {e}")))?;
            let block_number = receipt
                .block_number
                .as_deref()
                .map(parse_quantity)
                .transpose()?;
            // Receipts without a status field predate Byzantium and only exist for mined txs
            let success = match receipt.status.as_deref() {
                Some(status) => parse_quantity(status)? == 1,
                None => true,
            };
            return Ok(TransactionReceipt {
                hash: hash.clone(),
                block_number,
                success,
            });
        }
    }

    fn watch_network(&self, handler: NetworkHandler) -> Result<Subscription, WalletError> {
        let (subscription, token) = Subscription::new("network");
        let wallet = self.clone();
        thread::Builder::new()
            .name("mintdeck-network-watch".to_string())
            .spawn(move || watch_network_loop(wallet, handler, token))
            .map_err(|e| WalletError::Transport(format!("failed to spawn watcher: {e}")))?;
        Ok(subscription)
    }

    fn watch_logs(
        &self,
        filter: LogFilter,
        handler: LogHandler,
    ) -> Result<Subscription, WalletError> {
        let (subscription, token) = Subscription::new("logs");
        let wallet = self.clone();
        thread::Builder::new()
            .name("mintdeck-log-watch".to_string())
            .spawn(move || watch_logs_loop(wallet, filter, handler, token))
            .map_err(|e| WalletError::Transport(format!("failed to spawn watcher: {e}")))?;
        Ok(subscription)
    }
}

fn watch_network_loop(wallet: JsonRpcWallet, handler: NetworkHandler, token: CancelToken) {
    let mut last_chain: Option<ChainId> = None;
    let mut last_accounts: Option<Vec<Address>> = None;

    while !token.is_cancelled() {
        match wallet.chain_id() {
            Ok(chain) if last_chain != Some(chain) => {
                if token.is_cancelled() {
                    break;
                }
                handler(NetworkEvent::ChainChanged {
                    new: chain,
                    old: last_chain,
                });
                last_chain = Some(chain);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Network watcher: chain id poll failed: {}", e),
        }

        match wallet.accounts() {
            Ok(accounts) => {
                let changed = last_accounts
                    .as_ref()
                    .is_some_and(|previous| *previous != accounts);
                if changed {
                    if token.is_cancelled() {
                        break;
                    }
                    handler(NetworkEvent::AccountsChanged(accounts.clone()));
                }
                last_accounts = Some(accounts);
            }
            Err(e) => tracing::debug!("Network watcher: accounts poll failed: {}", e),
        }

        thread::sleep(wallet.poll_interval);
    }
}

fn watch_logs_loop(
    wallet: JsonRpcWallet,
    filter: LogFilter,
    handler: LogHandler,
    token: CancelToken,
) {
    // Only blocks after the one current at subscription time
    let mut next_block = loop {
        if token.is_cancelled() {
            return;
        }
        match wallet.block_number() {
            Ok(head) => break head + 1,
            Err(e) => {
                tracing::debug!("Log watcher: initial block number failed: {}", e);
                thread::sleep(wallet.poll_interval);
            }
        }
    };

    while !token.is_cancelled() {
        thread::sleep(wallet.poll_interval);
        if token.is_cancelled() {
            break;
        }

        let head = match wallet.block_number() {
            Ok(head) => head,
            Err(e) => {
                tracing::debug!("Log watcher: block number poll failed: {}", e);
                continue;
            }
        };
        if head < next_block {
            continue;
        }

        match wallet.get_logs(&filter, next_block, head) {
            Ok(logs) => {
                for log in logs {
                    if token.is_cancelled() {
                        return;
                    }
                    handler(log);
                }
                next_block = head + 1;
            }
            Err(e) => tracing::debug!("Log watcher: eth_getLogs failed: {}", e),
        }
    }
}

fn as_str(value: &Value) -> Result<&str, WalletError> {
    value
        .as_str()
        .ok_or_else(|| WalletError::InvalidResponse(format!("expected a string, got {value}")))
}

fn encode_address(address: &Address) -> String {
    hex::encode_prefixed(address.as_slice())
}

fn parse_address(text: &str) -> Result<Address, WalletError> {
    Address::from_str(text)
        .map_err(|e| WalletError::InvalidResponse(format!("bad address {text}: {e}")))
}

fn parse_addresses(value: Value) -> Result<Vec<Address>, WalletError> {
    let raw: Vec<String> = serde_json::from_value(value)
        .map_err(|e| WalletError::InvalidResponse(format!("account list: {e}")))?;
    raw.iter().map(|text| parse_address(text)).collect()
}

fn parse_bytes(text: &str) -> Result<Bytes, WalletError> {
    hex::decode(text)
        .map(Bytes::from)
        .map_err(|e| WalletError::InvalidResponse(format!("bad hex data: {e}")))
}

fn convert_log(raw: RpcLog) -> Result<Log, WalletError> {
    let topics = raw
        .topics
        .iter()
        .map(|topic| {
            B256::from_str(topic)
                .map_err(|e| WalletError::InvalidResponse(format!("bad topic {topic}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Log {
        address: parse_address(&raw.address)?,
        topics,
        data: parse_bytes(&raw.data)?,
        block_number: raw.block_number.as_deref().map(parse_quantity).transpose()?,
    })
}
