pub mod config;
pub mod logging;
pub mod mint_view;
pub mod wallet;

pub use config::{ConfigError, ConfigFile, MintConfig};
pub use mint_view::MintView;
pub use wallet::{JsonRpcWallet, WalletError, WalletProvider};
