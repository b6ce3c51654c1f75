//! In-memory wallet used by the view and service tests.

use alloy_primitives::{Address, Bytes, U256};
use std::str::FromStr;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use crate::wallet::WalletProvider;
use crate::wallet::abi;
use crate::wallet::error::WalletError;
use crate::wallet::subscription::{CancelToken, Subscription};
use crate::wallet::types::{
    ChainId, Log, LogFilter, LogHandler, NetworkEvent, NetworkHandler, TransactionReceipt, TxHash,
};

pub fn test_account() -> Address {
    Address::from_str("0x5B38Da6a701c568545dCfcB03FcB875f56beddC4").unwrap()
}

pub fn other_account() -> Address {
    Address::from_str("0xAb8483F64d9C6d1EcF9b849Ae677dD3315835cb2").unwrap()
}

pub fn test_contract() -> Address {
    Address::from_str("0xe424f6E47365732bFBBbF38F529f45B308b80D30").unwrap()
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CallCounts {
    pub accounts: usize,
    pub request_accounts: usize,
    pub reads: usize,
    pub sends: usize,
    pub receipts: usize,
    pub network_watches: usize,
    pub log_watches: usize,
}

struct MockInner {
    authorized: Vec<Address>,
    grant: Result<Vec<Address>, WalletError>,
    chain_id: ChainId,
    minted: Result<U256, WalletError>,
    total: Result<U256, WalletError>,
    send_result: Result<TxHash, WalletError>,
    receipt_result: Result<bool, WalletError>,
    receipt_gate: Option<Receiver<()>>,
    network_watchers: Vec<(NetworkHandler, CancelToken)>,
    log_watchers: Vec<(LogFilter, LogHandler, CancelToken)>,
    last_send: Option<(Address, Address, Bytes)>,
    counts: CallCounts,
}

pub struct MockWallet {
    inner: Mutex<MockInner>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MockInner {
                authorized: Vec::new(),
                grant: Ok(vec![test_account()]),
                chain_id: ChainId(4),
                minted: Ok(U256::from(3u64)),
                total: Ok(U256::from(50u64)),
                send_result: Ok(TxHash::new("0xabc")),
                receipt_result: Ok(true),
                receipt_gate: None,
                network_watchers: Vec::new(),
                log_watchers: Vec::new(),
                last_send: None,
                counts: CallCounts::default(),
            }),
        }
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn with_authorized(self, accounts: Vec<Address>) -> Self {
        self.inner.lock().unwrap().authorized = accounts;
        self
    }

    pub fn with_grant(self, grant: Result<Vec<Address>, WalletError>) -> Self {
        self.inner.lock().unwrap().grant = grant;
        self
    }

    pub fn with_supply(self, minted: u64, total: u64) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.minted = Ok(U256::from(minted));
            inner.total = Ok(U256::from(total));
        }
        self
    }

    pub fn with_total_supply_error(self, error: WalletError) -> Self {
        self.inner.lock().unwrap().total = Err(error);
        self
    }

    pub fn with_send_result(self, result: Result<TxHash, WalletError>) -> Self {
        self.inner.lock().unwrap().send_result = result;
        self
    }

    pub fn with_receipt(self, result: Result<bool, WalletError>) -> Self {
        self.inner.lock().unwrap().receipt_result = result;
        self
    }

    /// `wait_for_receipt` blocks until the paired sender fires or is dropped
    pub fn with_receipt_gate(self, gate: Receiver<()>) -> Self {
        self.inner.lock().unwrap().receipt_gate = Some(gate);
        self
    }

    pub fn set_supply(&self, minted: u64, total: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.minted = Ok(U256::from(minted));
        inner.total = Ok(U256::from(total));
    }

    pub fn counts(&self) -> CallCounts {
        self.inner.lock().unwrap().counts
    }

    pub fn last_send(&self) -> Option<(Address, Address, Bytes)> {
        self.inner.lock().unwrap().last_send.clone()
    }

    pub fn active_network_watchers(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .network_watchers
            .iter()
            .filter(|(_, token)| !token.is_cancelled())
            .count()
    }

    pub fn active_log_watchers(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .log_watchers
            .iter()
            .filter(|(_, _, token)| !token.is_cancelled())
            .count()
    }

    /// Deliver a network notification to every live watcher
    pub fn emit_network(&self, event: NetworkEvent) {
        let handlers: Vec<NetworkHandler> = {
            let inner = self.inner.lock().unwrap();
            inner
                .network_watchers
                .iter()
                .filter(|(_, token)| !token.is_cancelled())
                .map(|(handler, _)| handler.clone())
                .collect()
        };
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Deliver a mint-completed log to every live watcher of the contract
    pub fn emit_minted(&self, contract: Address, sender: Address, token_id: u64) {
        let log = abi::encode_minted_event(contract, sender, U256::from(token_id));
        self.emit_log(log);
    }

    pub fn emit_log(&self, log: Log) {
        let handlers: Vec<LogHandler> = {
            let inner = self.inner.lock().unwrap();
            inner
                .log_watchers
                .iter()
                .filter(|(filter, _, token)| {
                    !token.is_cancelled()
                        && filter.address == log.address
                        && log.topics.first() == Some(&filter.topic0)
                })
                .map(|(_, handler, _)| handler.clone())
                .collect()
        };
        for handler in handlers {
            handler(log.clone());
        }
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletProvider for MockWallet {
    fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut inner = self.inner.lock().unwrap();
        inner.counts.accounts += 1;
        Ok(inner.authorized.clone())
    }

    fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut inner = self.inner.lock().unwrap();
        inner.counts.request_accounts += 1;
        let grant = inner.grant.clone();
        if let Ok(accounts) = &grant {
            inner.authorized = accounts.clone();
        }
        grant
    }

    fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.inner.lock().unwrap().chain_id)
    }

    fn call(&self, _to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        let mut inner = self.inner.lock().unwrap();
        inner.counts.reads += 1;
        if data == abi::encode_call(abi::MINTED_COUNT_SIGNATURE) {
            inner.minted.clone().map(abi::encode_uint256)
        } else if data == abi::encode_call(abi::TOTAL_SUPPLY_SIGNATURE) {
            inner.total.clone().map(abi::encode_uint256)
        } else {
            Err(WalletError::Rpc {
                code: -32000,
                message: "execution reverted".to_string(),
            })
        }
    }

    fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<TxHash, WalletError> {
        let mut inner = self.inner.lock().unwrap();
        inner.counts.sends += 1;
        inner.last_send = Some((from, to, data));
        inner.send_result.clone()
    }

    fn wait_for_receipt(&self, hash: &TxHash) -> Result<TransactionReceipt, WalletError> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.counts.receipts += 1;
            inner.receipt_gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        let result = self.inner.lock().unwrap().receipt_result.clone();
        result.map(|success| TransactionReceipt {
            hash: hash.clone(),
            block_number: Some(1),
            success,
        })
    }

    fn watch_network(&self, handler: NetworkHandler) -> Result<Subscription, WalletError> {
        let (subscription, token) = Subscription::new("network");
        let mut inner = self.inner.lock().unwrap();
        inner.counts.network_watches += 1;
        inner.network_watchers.push((handler, token));
        Ok(subscription)
    }

    fn watch_logs(
        &self,
        filter: LogFilter,
        handler: LogHandler,
    ) -> Result<Subscription, WalletError> {
        let (subscription, token) = Subscription::new("logs");
        let mut inner = self.inner.lock().unwrap();
        inner.counts.log_watches += 1;
        inner.log_watchers.push((filter, handler, token));
        Ok(subscription)
    }
}
