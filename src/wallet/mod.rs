//! Wallet provider capability.
//!
//! The view never reaches for a global wallet object. It is handed an
//! `Arc<dyn WalletProvider>` (or nothing, when no wallet is configured) and
//! talks to the contract through [`MintContract`].

pub mod abi;
pub mod contract;
pub mod error;
pub mod rpc;
pub mod subscription;
pub mod types;

#[cfg(test)]
pub mod mock;


use alloy_primitives::{Address, Bytes};

pub use contract::MintContract;
pub use error::WalletError;
pub use rpc::JsonRpcWallet;
pub use subscription::{CancelToken, Subscription};
pub use types::{
    ChainId, Log, LogFilter, LogHandler, MintCompleted, MintHandler, NetworkEvent,
    NetworkHandler, TransactionReceipt, TxHash,
};

pub trait WalletProvider: Send + Sync {
    /// Accounts already authorized for this client. Never prompts.
    fn accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Prompt the user for account access
    fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    fn chain_id(&self) -> Result<ChainId, WalletError>;

    /// Read-only contract call
    fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError>;

    /// Sign and submit a transaction, returning its hash
    fn send_transaction(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<TxHash, WalletError>;

    /// Block until the transaction is mined. No timeout; failed polls are retried.
    fn wait_for_receipt(&self, hash: &TxHash) -> Result<TransactionReceipt, WalletError>;

    /// Network and account change notifications. The first chain
    /// observation is reported with `old: None`.
    ///
    /// Watchers are armed from the UI thread and must return without
    /// waiting on the wallet endpoint.
    fn watch_network(&self, handler: NetworkHandler) -> Result<Subscription, WalletError>;

    /// Logs matching `filter`, from the next block on
    fn watch_logs(
        &self,
        filter: LogFilter,
        handler: LogHandler,
    ) -> Result<Subscription, WalletError>;
}
