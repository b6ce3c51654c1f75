use alloy_primitives::Address;
use chrono::Local;
use std::sync::Arc;

use crate::mint_view::ui::events::Message;
use crate::wallet::{
    MintCompleted, MintContract, NetworkEvent, Subscription, WalletError, WalletProvider,
};

/// Where watcher threads deliver their notifications
pub type MessageSink = Arc<dyn Fn(Message) + Send + Sync>;

/// Wallet and contract operations behind the mint view. Every outcome is
/// reported as a [`Message`]; nothing here touches view state.
pub struct MintService {
    provider: Option<Arc<dyn WalletProvider>>,
    contract: Option<MintContract>,
}

impl MintService {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, contract_address: Address) -> Self {
        let contract = provider
            .as_ref()
            .map(|provider| MintContract::new(provider.clone(), contract_address));
        Self { provider, contract }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Accounts the wallet already authorized, without prompting.
    /// `None` when there is no provider.
    pub fn check_existing_connection(&self) -> Option<Message> {
        let Some(provider) = &self.provider else {
            tracing::info!("No wallet provider configured");
            return None;
        };
        match provider.accounts() {
            Ok(accounts) => Some(Message::ExistingAccounts(accounts)),
            Err(e) => {
                tracing::warn!("Failed to query authorized accounts: {}", e);
                None
            }
        }
    }

    /// Prompt the wallet for account access
    pub fn connect(&self) -> Message {
        let Some(provider) = &self.provider else {
            return Message::ConnectFailed(WalletError::ProviderAbsent);
        };
        match provider.request_accounts() {
            Ok(accounts) => Message::AccountsGranted(accounts),
            Err(e) => Message::ConnectFailed(e),
        }
    }

    /// Read both counters. Either read failing fails the refresh, so the
    /// view never holds one counter without the other.
    pub fn refresh_supply_counters(&self) -> Option<Message> {
        let Some(contract) = &self.contract else {
            tracing::debug!("Skipping supply refresh: no wallet provider");
            return None;
        };
        let counters = contract
            .minted_count()
            .and_then(|minted| contract.total_supply().map(|total| (minted, total)));
        Some(match counters {
            Ok((minted, total)) => Message::SupplyLoaded { minted, total },
            Err(e) => Message::SupplyFailed(e),
        })
    }

    /// Submit the mint and wait for it to be mined. Reports
    /// `MintSubmitted` once the wallet accepts, then exactly one of
    /// `MintConfirmed` or `MintFailed`.
    pub fn request_mint(&self, account: Address, progress: &dyn Fn(Message)) {
        let (Some(provider), Some(contract)) = (&self.provider, &self.contract) else {
            progress(Message::MintFailed(WalletError::ProviderAbsent));
            return;
        };

        let hash = match contract.mint(account) {
            Ok(hash) => hash,
            Err(e) => {
                progress(Message::MintFailed(e));
                return;
            }
        };
        progress(Message::MintSubmitted(hash.clone()));

        tracing::info!("Mining {}", hash);
        match provider.wait_for_receipt(&hash) {
            Ok(receipt) if receipt.success => progress(Message::MintConfirmed {
                hash,
                confirmed_at: Local::now(),
            }),
            Ok(receipt) => progress(Message::MintFailed(WalletError::TransactionFailure(
                format!("transaction {} reverted", receipt.hash),
            ))),
            Err(e) => progress(Message::MintFailed(e)),
        }
    }

    pub fn subscribe_to_mint_events(&self, sink: MessageSink) -> Result<Subscription, WalletError> {
        let contract = self.contract.as_ref().ok_or(WalletError::ProviderAbsent)?;
        let subscription = contract.on_minted(Arc::new(move |event: MintCompleted| {
            sink(Message::MintCompleted {
                sender: event.sender,
                token_id: event.token_id,
            })
        }))?;
        tracing::info!("Listening for mint events on {}", contract.address());
        Ok(subscription)
    }

    pub fn subscribe_to_network_changes(
        &self,
        sink: MessageSink,
    ) -> Result<Subscription, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderAbsent)?;
        let subscription = provider.watch_network(Arc::new(move |event: NetworkEvent| {
            let message = match event {
                NetworkEvent::ChainChanged { new, old } => Message::NetworkChanged { new, old },
                NetworkEvent::AccountsChanged(accounts) => Message::AccountsChanged(accounts),
            };
            sink(message)
        }))?;
        tracing::info!("Listening for network changes");
        Ok(subscription)
    }
}
