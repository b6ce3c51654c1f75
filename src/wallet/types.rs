use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::wallet::error::WalletError;

/// EIP-155 chain identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Parse a JSON-RPC quantity such as `"0x4"`
    pub fn from_quantity(quantity: &str) -> Result<Self, WalletError> {
        parse_quantity(quantity).map(ChainId)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction hash exactly as the wallet reported it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionReceipt {
    pub hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: Option<u64>,
}

/// Single-address, single-topic log filter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogFilter {
    pub address: Address,
    pub topic0: B256,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NetworkEvent {
    /// `old` is `None` for the first observation after subscribing
    ChainChanged {
        new: ChainId,
        old: Option<ChainId>,
    },
    AccountsChanged(Vec<Address>),
}

/// Decoded `NewEpicNFTMinted(address,uint256)` notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MintCompleted {
    pub sender: Address,
    pub token_id: U256,
}

pub type NetworkHandler = Arc<dyn Fn(NetworkEvent) + Send + Sync>;
pub type LogHandler = Arc<dyn Fn(Log) + Send + Sync>;
pub type MintHandler = Arc<dyn Fn(MintCompleted) + Send + Sync>;

pub fn parse_quantity(quantity: &str) -> Result<u64, WalletError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| WalletError::InvalidResponse(format!("not a hex quantity: {quantity}")))?;
    if digits.is_empty() {
        return Err(WalletError::InvalidResponse(format!(
            "empty hex quantity: {quantity}"
        )));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| WalletError::InvalidResponse(format!("bad quantity {quantity}: {e}")))
}

pub fn format_quantity(value: u64) -> String {
    format!("0x{value:x}")
}
