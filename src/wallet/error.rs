/// Wallet and contract error types
use crate::wallet::types::ChainId;
use thiserror::Error;

/// JSON-RPC code a wallet returns when the user declines a prompt (EIP-1193)
pub const USER_REJECTED_CODE: i64 = 4001;

/// JSON-RPC code for an unsupported method
pub const METHOD_NOT_FOUND_CODE: i64 = -32601;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("No wallet provider detected")]
    ProviderAbsent,

    #[error("Request rejected in the wallet")]
    UserRejected,

    #[error("Transaction failed: {0}")]
    TransactionFailure(String),

    #[error("Wrong network: expected chain {expected}, connected to {actual}")]
    WrongNetwork { expected: ChainId, actual: ChainId },

    #[error("Wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl WalletError {
    /// Map a JSON-RPC error object onto the taxonomy
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            WalletError::UserRejected
        } else {
            WalletError::Rpc {
                code,
                message: message.into(),
            }
        }
    }

    pub fn is_method_not_found(&self) -> bool {
        matches!(self, WalletError::Rpc { code, .. } if *code == METHOD_NOT_FOUND_CODE)
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Transport(err.to_string())
    }
}
