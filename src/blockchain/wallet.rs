//! Signing identities.
//!
//! # Security
//! - The operator key is loaded ONLY from the environment
//! - Keys and phrases are never logged
//! - Only a freshly generated account is serialized, for handing to its owner

use alloy::hex;
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::coins_bip39::{English, Mnemonic};
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use serde::Serialize;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

const MNEMONIC_WORD_COUNT: usize = 12;

/// A private key and its derived address.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex
            .trim()
            .strip_prefix("0x")
            .unwrap_or(private_key_hex.trim());

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Wallet loaded");
        Ok(Self { signer })
    }

    /// Recover the first account (`m/44'/60'/0'/0/0`) of a BIP-39 phrase.
    pub fn from_mnemonic(phrase: &str) -> BlockchainResult<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.trim())
            .build()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid mnemonic: {}", e)))?;

        Ok(Self { signer })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Transaction signer for provider construction.
    pub(crate) fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

/// Generate a fresh account backed by a 12-word English mnemonic.
pub fn generate_account() -> BlockchainResult<GeneratedAccount> {
    let mnemonic = Mnemonic::<English>::new_with_count(&mut rand::thread_rng(), MNEMONIC_WORD_COUNT)
        .map_err(|e| BlockchainError::Wallet(format!("Mnemonic generation failed: {}", e)))?;
    let phrase = mnemonic.to_phrase();
    let wallet = Wallet::from_mnemonic(&phrase)?;

    Ok(GeneratedAccount {
        address: wallet.address(),
        private_key: hex::encode_prefixed(wallet.signer.to_bytes()),
        phrase,
    })
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// A freshly created account.
#[derive(Clone, Serialize)]
pub struct GeneratedAccount {
    pub address: Address,
    pub private_key: String,
    pub phrase: String,
}

impl std::fmt::Debug for GeneratedAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedAccount")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .field("phrase", &"<redacted>")
            .finish()
    }
}
