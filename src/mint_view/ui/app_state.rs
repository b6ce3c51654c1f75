use alloy_primitives::{Address, U256};
use chrono::{DateTime, Local};

use crate::config::MintConfig;
use crate::mint_view::constants::*;
use crate::mint_view::domain::links::{explorer_tx_url, marketplace_asset_url};
use crate::mint_view::domain::models::{
    LinkKind, MintStatus, Notice, Severity, SupplyCounters, Toast,
};
use crate::mint_view::ui::commands::Command;
use crate::mint_view::ui::events::Message;
use crate::wallet::{ChainId, TxHash, WalletError};

// Re-export Mode
pub use crate::mint_view::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub config: MintConfig,
    pub wallet: WalletState,
    pub mint: MintState,
    /// Minted count and total supply, present or absent together
    pub supply: Option<SupplyCounters>,
    pub ui: UiState,
}

pub struct WalletState {
    pub account: Option<Address>,
    /// Last chain reported by the network watcher
    pub chain_id: Option<ChainId>,
    /// Set once per connection; cleared only by a reload
    pub subscriptions_armed: bool,
    pub connecting: bool,
}

pub struct MintState {
    pub status: MintStatus,
    /// Mint submitted to the wallet, waiting for the signature
    pub awaiting_wallet: bool,
    pub explorer_link: Option<String>,
    pub marketplace_link: Option<String>,
    /// Token id reported before the receipt arrived
    pub pending_token_id: Option<U256>,
    pub confirmed_at: Option<DateTime<Local>>,
    pub last_tx: Option<TxHash>,
}

pub struct UiState {
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
    /// Transient status-bar text (exit prompt)
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: MintConfig) -> Self {
        Self {
            mode: Mode::Main,
            config,
            wallet: WalletState {
                account: None,
                chain_id: None,
                subscriptions_armed: false,
                connecting: false,
            },
            mint: MintState {
                status: MintStatus::Idle,
                awaiting_wallet: false,
                explorer_link: None,
                marketplace_link: None,
                pending_token_id: None,
                confirmed_at: None,
                last_tx: None,
            },
            supply: None,
            ui: UiState {
                toasts: Vec::new(),
                next_toast_id: 0,
                message: None,
            },
        }
    }

    /// Fresh state for a reloaded view. Nothing carries over.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn is_wrong_network(&self) -> bool {
        self.wallet
            .chain_id
            .is_some_and(|chain| chain != self.config.required_chain_id)
    }

    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Explorer => self.mint.explorer_link.as_deref(),
            LinkKind::Marketplace => self.mint.marketplace_link.as_deref(),
            LinkKind::Collection => self.config.collection_url.as_deref(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::ConnectRequested => {
                if self.wallet.account.is_some() || self.wallet.connecting {
                    return Command::None;
                }
                self.wallet.connecting = true;
                Command::RequestAccounts
            }
            Message::ExistingAccounts(accounts) => match accounts.first() {
                Some(&account) if self.wallet.account.is_none() => {
                    tracing::info!("Found an authorized account: {}", account);
                    self.wallet.account = Some(account);
                    self.arm_subscriptions(account)
                }
                Some(_) => Command::None,
                None => {
                    tracing::info!("No authorized account found");
                    Command::None
                }
            },
            Message::AccountsGranted(accounts) => {
                self.wallet.connecting = false;
                match accounts.first() {
                    Some(&account) => {
                        tracing::info!("Connected {}", account);
                        self.wallet.account = Some(account);
                        self.arm_subscriptions(account)
                    }
                    None => self.connect_failed(WalletError::UserRejected),
                }
            }
            Message::ConnectFailed(err) => {
                self.wallet.connecting = false;
                self.connect_failed(err)
            }
            Message::SupplyLoaded { minted, total } => {
                self.supply = Some(SupplyCounters::from_values(minted, total));
                Command::None
            }
            Message::SupplyFailed(err) => {
                tracing::warn!("Failed to read supply counters: {}", err);
                Command::None
            }
            Message::MintRequested => {
                let Some(account) = self.wallet.account else {
                    return Command::None;
                };
                if self.mint.awaiting_wallet
                    || self.mint.status == MintStatus::Pending
                    || self.mint.explorer_link.is_some()
                {
                    return Command::None;
                }
                tracing::info!("Going to ask the wallet to pay gas");
                self.mint.awaiting_wallet = true;
                Command::SubmitMint(account)
            }
            Message::MintSubmitted(hash) => {
                if self.wallet.account.is_none() {
                    return Command::None;
                }
                tracing::info!("Mint submitted: {}", hash);
                self.mint.awaiting_wallet = false;
                self.mint.status = MintStatus::Pending;
                self.mint.last_tx = Some(hash);
                self.push_toast(Notice::new(
                    "Mining... please wait.",
                    "This could take a couple of minutes",
                ))
            }
            Message::MintConfirmed { hash, confirmed_at } => {
                if self.wallet.account.is_none() {
                    return Command::None;
                }
                tracing::info!("Mint confirmed: {}", hash);
                self.mint.awaiting_wallet = false;
                self.mint.status = MintStatus::Confirmed;
                self.mint.confirmed_at = Some(confirmed_at);
                self.mint.explorer_link = Some(explorer_tx_url(&self.config.explorer_base_url, &hash));
                if let Some(token_id) = self.mint.pending_token_id.take() {
                    self.set_marketplace_link(token_id);
                }
                let description = hash.to_string();
                self.mint.last_tx = Some(hash);
                self.push_toast(
                    Notice::new("NFT Minted!", description)
                        .severity(Severity::Success)
                        .persistent(),
                )
                .and(Command::RefreshSupply)
            }
            Message::MintFailed(err) => {
                tracing::warn!("Mint failed: {}", err);
                self.mint.awaiting_wallet = false;
                self.mint.status = MintStatus::Idle;
                self.mint.pending_token_id = None;
                let notice = match err {
                    WalletError::UserRejected => {
                        Notice::new("Mint cancelled", "The transaction was rejected in the wallet")
                            .severity(Severity::Warning)
                    }
                    other => Notice::new("Mint failed", other.to_string())
                        .severity(Severity::Error)
                        .persistent(),
                };
                self.push_toast(notice)
            }
            Message::SubscriptionFailed(err) => {
                tracing::warn!("Failed to subscribe to wallet notifications: {}", err);
                Command::None
            }
            Message::NetworkChanged { new, old } => {
                tracing::info!("Network changed: new={} old={:?}", new, old);
                if old.is_some() {
                    // A switch invalidates everything read through the old network
                    return Command::Reload;
                }
                self.wallet.chain_id = Some(new);
                if new != self.config.required_chain_id {
                    let err = WalletError::WrongNetwork {
                        expected: self.config.required_chain_id,
                        actual: new,
                    };
                    tracing::warn!("{}", err);
                    return self.push_toast(
                        Notice::new(
                            "Wrong Network!",
                            format!(
                                "Please switch to chain {}",
                                self.config.required_chain_id
                            ),
                        )
                        .severity(Severity::Warning)
                        .persistent(),
                    );
                }
                Command::None
            }
            Message::AccountsChanged(accounts) => {
                let Some(current) = self.wallet.account else {
                    return Command::None;
                };
                match accounts.first() {
                    Some(&account) if account == current => Command::None,
                    Some(account) => {
                        tracing::info!("Account switched to {}", account);
                        Command::Reload
                    }
                    None => {
                        tracing::info!("Wallet disconnected");
                        Command::Reload
                    }
                }
            }
            Message::MintCompleted { sender, token_id } => {
                if self.wallet.account != Some(sender) {
                    tracing::debug!("Ignoring mint by {} (token {})", sender, token_id);
                    return Command::None;
                }
                tracing::info!("Mint completed: token {}", token_id);
                if self.mint.explorer_link.is_some() {
                    if self.mint.marketplace_link.is_none() {
                        self.set_marketplace_link(token_id);
                    }
                } else if self.mint.awaiting_wallet || self.mint.status == MintStatus::Pending {
                    self.mint.pending_token_id = Some(token_id);
                }
                Command::None
            }
            Message::CopyLink(kind) => match self.link(kind) {
                Some(url) => Command::CopyToClipboard(url.to_string()),
                None => self.push_toast(Notice::new(
                    format!("No {}", kind.label()),
                    "Nothing to copy yet",
                )),
            },
            Message::ReloadRequested => Command::Reload,
            Message::Notify(notice) => self.push_toast(notice),
            Message::DismissToast(id) => {
                self.ui.toasts.retain(|toast| toast.id != id);
                Command::None
            }
            Message::DismissNewestToast => {
                self.ui.toasts.pop();
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Main;
                Command::None
            }
        }
    }

    fn arm_subscriptions(&mut self, account: Address) -> Command {
        if self.wallet.subscriptions_armed {
            return Command::None;
        }
        self.wallet.subscriptions_armed = true;
        Command::ArmSubscriptions(account)
    }

    fn connect_failed(&mut self, err: WalletError) -> Command {
        tracing::warn!("Connect failed: {}", err);
        let notice = match err {
            WalletError::ProviderAbsent => Notice::new(
                "Get a wallet!",
                "No wallet endpoint configured (set --rpc-url)",
            )
            .severity(Severity::Warning),
            WalletError::UserRejected => {
                Notice::new("Connection rejected", "Account access was not granted")
                    .severity(Severity::Warning)
            }
            other => Notice::new("Connection failed", other.to_string()).severity(Severity::Error),
        };
        self.push_toast(notice)
    }

    fn set_marketplace_link(&mut self, token_id: U256) {
        self.mint.marketplace_link = Some(marketplace_asset_url(
            &self.config.marketplace_base_url,
            &self.config.contract_address,
            &token_id,
        ));
    }

    fn push_toast(&mut self, notice: Notice) -> Command {
        let id = self.ui.next_toast_id;
        self.ui.next_toast_id += 1;
        let auto_close = notice.auto_close;
        self.ui.toasts.push(Toast {
            id,
            title: notice.title,
            description: notice.description,
            severity: notice.severity,
            auto_close,
        });
        if auto_close {
            Command::ScheduleDismissToast {
                id,
                delay_ms: TOAST_DISMISS_DELAY_MS,
            }
        } else {
            Command::None
        }
    }
}
