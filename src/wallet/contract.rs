use alloy_primitives::{Address, U256};
use std::sync::Arc;

use crate::wallet::abi;
use crate::wallet::error::WalletError;
use crate::wallet::subscription::Subscription;
use crate::wallet::types::{Log, LogFilter, MintHandler, TxHash};
use crate::wallet::WalletProvider;

/// Binding of the deployed mint contract to a wallet provider
#[derive(Clone)]
pub struct MintContract {
    provider: Arc<dyn WalletProvider>,
    address: Address,
}

impl MintContract {
    pub fn new(provider: Arc<dyn WalletProvider>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn minted_count(&self) -> Result<U256, WalletError> {
        self.read_uint(abi::MINTED_COUNT_SIGNATURE)
    }

    pub fn total_supply(&self) -> Result<U256, WalletError> {
        self.read_uint(abi::TOTAL_SUPPLY_SIGNATURE)
    }

    /// Ask the wallet to sign and send the mint call. Returns once the
    /// transaction is submitted, not mined.
    pub fn mint(&self, from: Address) -> Result<TxHash, WalletError> {
        self.provider
            .send_transaction(from, self.address, abi::encode_call(abi::MINT_SIGNATURE))
    }

    pub fn on_minted(&self, handler: MintHandler) -> Result<Subscription, WalletError> {
        let filter = LogFilter {
            address: self.address,
            topic0: abi::event_topic(abi::MINTED_EVENT_SIGNATURE),
        };
        self.provider.watch_logs(
            filter,
            Arc::new(move |log: Log| match abi::decode_minted_event(&log) {
                Ok(event) => handler(event),
                Err(e) => tracing::warn!("Ignoring undecodable mint event: {}", e),
            }),
        )
    }

    fn read_uint(&self, signature: &str) -> Result<U256, WalletError> {
        let output = self.provider.call(self.address, abi::encode_call(signature))?;
        abi::decode_uint256(&output)
    }
}
