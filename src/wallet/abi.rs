//! Minimal ABI helpers for the mint contract.
//!
//! The contract surface is fixed: two `uint256` getters, one argument-less
//! mint call and one event. Only what those need is encoded or decoded here.

use alloy_primitives::{Address, B256, Bytes, U256, keccak256};

use crate::wallet::error::WalletError;
use crate::wallet::types::{Log, MintCompleted};

pub const MINT_SIGNATURE: &str = "makeAnEpicNFT()";
pub const MINTED_COUNT_SIGNATURE: &str = "getTotalNFTsMintedSoFar()";
pub const TOTAL_SUPPLY_SIGNATURE: &str = "getTotalSupply()";
pub const MINTED_EVENT_SIGNATURE: &str = "NewEpicNFTMinted(address,uint256)";

const WORD: usize = 32;

pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

pub fn event_topic(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}

/// Calldata for a function without arguments
pub fn encode_call(signature: &str) -> Bytes {
    Bytes::copy_from_slice(&selector(signature))
}

pub fn encode_uint256(value: U256) -> Bytes {
    Bytes::copy_from_slice(&value.to_be_bytes::<32>())
}

pub fn decode_uint256(data: &[u8]) -> Result<U256, WalletError> {
    if data.len() < WORD {
        return Err(WalletError::InvalidResponse(format!(
            "expected a 32-byte word, got {} bytes",
            data.len()
        )));
    }
    Ok(U256::from_be_slice(&data[..WORD]))
}

fn address_from_word(word: &[u8]) -> Address {
    Address::from_slice(&word[WORD - 20..WORD])
}

/// Decode a mint-completed log. Handles both the indexed and the
/// data-only layout of `(address sender, uint256 tokenId)`.
pub fn decode_minted_event(log: &Log) -> Result<MintCompleted, WalletError> {
    let expected = event_topic(MINTED_EVENT_SIGNATURE);
    if log.topics.first() != Some(&expected) {
        return Err(WalletError::InvalidResponse(
            "log is not a mint-completed event".to_string(),
        ));
    }

    if log.topics.len() >= 3 {
        return Ok(MintCompleted {
            sender: address_from_word(log.topics[1].as_slice()),
            token_id: U256::from_be_slice(log.topics[2].as_slice()),
        });
    }

    if log.data.len() < 2 * WORD {
        return Err(WalletError::InvalidResponse(format!(
            "mint event data too short: {} bytes",
            log.data.len()
        )));
    }
    Ok(MintCompleted {
        sender: address_from_word(&log.data[..WORD]),
        token_id: decode_uint256(&log.data[WORD..])?,
    })
}

/// Encode a mint-completed log in the data-only layout
pub fn encode_minted_event(contract: Address, sender: Address, token_id: U256) -> Log {
    let mut data = vec![0u8; WORD - 20];
    data.extend_from_slice(sender.as_slice());
    data.extend_from_slice(&token_id.to_be_bytes::<32>());
    Log {
        address: contract,
        topics: vec![event_topic(MINTED_EVENT_SIGNATURE)],
        data: Bytes::from(data),
        block_number: None,
    }
}
