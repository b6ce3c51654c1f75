use alloy_primitives::{Address, U256};
use chrono::{DateTime, Local};

use crate::mint_view::domain::models::{LinkKind, Notice};
use crate::wallet::{ChainId, TxHash, WalletError};

#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    ConnectRequested,
    MintRequested,
    CopyLink(LinkKind),
    ReloadRequested,
    DismissNewestToast,
    ShowHelp,
    CloseHelp,

    // Wallet results
    ExistingAccounts(Vec<Address>),
    AccountsGranted(Vec<Address>),
    ConnectFailed(WalletError),
    SupplyLoaded { minted: U256, total: U256 },
    SupplyFailed(WalletError),
    MintSubmitted(TxHash),
    MintConfirmed {
        hash: TxHash,
        confirmed_at: DateTime<Local>,
    },
    MintFailed(WalletError),
    SubscriptionFailed(WalletError),

    // Wallet notifications
    NetworkChanged {
        new: ChainId,
        old: Option<ChainId>,
    },
    AccountsChanged(Vec<Address>),
    MintCompleted { sender: Address, token_id: U256 },

    // UI events
    Notify(Notice),
    DismissToast(u64),
}
