//! Outbound link templates.

use alloy_primitives::{Address, U256};

use crate::wallet::TxHash;

/// `<explorer-base>/tx/<txHash>`
pub fn explorer_tx_url(explorer_base: &str, hash: &TxHash) -> String {
    format!("{}/tx/{}", explorer_base.trim_end_matches('/'), hash)
}

/// `<marketplace-base>/assets/<contractAddress>/<tokenId>`
pub fn marketplace_asset_url(marketplace_base: &str, contract: &Address, token_id: &U256) -> String {
    format!(
        "{}/assets/{}/{}",
        marketplace_base.trim_end_matches('/'),
        contract,
        token_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_explorer_tx_url() {
        let url = explorer_tx_url("https://rinkeby.etherscan.io", &TxHash::new("0xabc"));
        assert_eq!(url, "https://rinkeby.etherscan.io/tx/0xabc");
    }

    #[test]
    fn test_explorer_tx_url_tolerates_trailing_slash() {
        let url = explorer_tx_url("https://rinkeby.etherscan.io/", &TxHash::new("0xabc"));
        assert_eq!(url, "https://rinkeby.etherscan.io/tx/0xabc");
    }

    #[test]
    fn test_marketplace_asset_url_uses_checksummed_contract() {
        let contract = Address::from_str("0xe424f6e47365732bfbbbf38f529f45b308b80d30").unwrap();
        let url = marketplace_asset_url("https://testnets.opensea.io", &contract, &U256::from(42u64));
        assert_eq!(
            url,
            format!("https://testnets.opensea.io/assets/{}/42", contract.to_checksum(None))
        );
    }
}
