use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use mintdeck::{ConfigFile, JsonRpcWallet, MintConfig, MintView, WalletProvider, logging};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "mintdeck",
    version,
    about = "Connect a wallet, watch the supply and mint an NFT from the terminal",
    long_about = None
)]
struct Cli {
    /// Config file (default: <config dir>/mintdeck/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint. Without one, no wallet is available.
    #[arg(long, env = "MINTDECK_RPC_URL")]
    rpc_url: Option<String>,

    /// Address of the deployed mint contract
    #[arg(long = "contract", env = "MINTDECK_CONTRACT")]
    contract_address: Option<String>,

    /// Chain the contract lives on
    #[arg(long = "chain-id", env = "MINTDECK_CHAIN_ID")]
    required_chain_id: Option<u64>,

    /// Block explorer base URL
    #[arg(long = "explorer-url", env = "MINTDECK_EXPLORER_URL")]
    explorer_base_url: Option<String>,

    /// NFT marketplace base URL
    #[arg(long = "marketplace-url", env = "MINTDECK_MARKETPLACE_URL")]
    marketplace_base_url: Option<String>,

    /// Collection page shown in the footer
    #[arg(long, env = "MINTDECK_COLLECTION_URL")]
    collection_url: Option<String>,

    /// Collection name shown in the title
    #[arg(long, env = "MINTDECK_COLLECTION_NAME")]
    collection_name: Option<String>,

    /// Wallet polling interval in milliseconds
    #[arg(long, env = "MINTDECK_POLL_INTERVAL_MS")]
    poll_interval_ms: Option<u64>,

    /// Log file (default: <data dir>/mintdeck/mintdeck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

impl Cli {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            contract_address: self.contract_address.clone(),
            required_chain_id: self.required_chain_id,
            explorer_base_url: self.explorer_base_url.clone(),
            marketplace_base_url: self.marketplace_base_url.clone(),
            rpc_url: self.rpc_url.clone(),
            collection_url: self.collection_url.clone(),
            collection_name: self.collection_name.clone(),
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "mintdeck", &mut io::stdout());
        return Ok(());
    }

    let file = ConfigFile::discover(cli.config.as_deref())?.unwrap_or_default();
    let config = MintConfig::resolve(file.merge(cli.overrides()))?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path, cli.log_json)?;
    tracing::info!(
        "Starting mintdeck: contract {} on chain {}",
        config.contract_address,
        config.required_chain_id
    );

    let provider: Option<Arc<dyn WalletProvider>> = match &config.rpc_url {
        Some(url) => {
            let wallet = JsonRpcWallet::new(url, config.poll_interval())
                .with_context(|| format!("Failed to create wallet client for {url}"))?;
            Some(Arc::new(wallet))
        }
        None => {
            tracing::info!("No wallet endpoint configured");
            None
        }
    };

    let mut view = MintView::new(config, provider);
    view.run()
}
