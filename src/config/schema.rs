//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the registry client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the registry client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Node connection settings.
    pub chain: ChainConfig,

    /// Operator (service) account.
    pub operator: OperatorConfig,

    /// Deployed contract addresses.
    pub contracts: ContractsConfig,

    /// Gas limits, price multiplier and fee amount.
    pub gas: GasConfig,

    /// Off-chain document pinning credentials.
    pub pinning: PinningConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Blockchain node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Number of block confirmations to wait for after submitting a transaction.
    pub confirmations: u64,

    /// Receipt polling interval in milliseconds.
    pub receipt_poll_interval_ms: u64,

    /// Per-request RPC timeout in seconds. `None` leaves requests unbounded.
    pub rpc_timeout_secs: Option<u64>,

    /// Upper bound on the confirmation wait in seconds. `None` waits indefinitely.
    pub confirmation_timeout_secs: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            confirmations: 1,
            receipt_poll_interval_ms: 1000,
            rpc_timeout_secs: None,
            confirmation_timeout_secs: None,
        }
    }
}

/// Operator account configuration.
///
/// The private key is only ever taken from the environment; it is skipped
/// by serde in both directions.
#[derive(Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OperatorConfig {
    /// Public address of the operator. Optional; when set it must match the key.
    pub address: String,

    #[serde(skip)]
    pub private_key: Option<String>,
}

impl std::fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Contract deployment addresses.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContractsConfig {
    /// User-registry contract address.
    pub user_registry: String,

    /// Land-registration contract address.
    pub land_registry: String,
}

/// Gas settings applied to every submitted transaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas limit for contract write calls.
    pub base_gas_limit: u64,

    /// Multiplier applied to the node gas price for approver whitelisting.
    pub priority_price_multiplier: u64,

    /// Gas limit for the native fee transfer.
    pub fee_gas_limit: u64,

    /// Fee sent to land owners before owner-signed calls, in ether.
    pub fee_amount_ether: String,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            base_gas_limit: 1_000_000,
            priority_price_multiplier: 2,
            fee_gas_limit: 100_000,
            fee_amount_ether: "0.001".to_string(),
        }
    }
}

/// Pinning-service credentials used by the host application for document storage.
#[derive(Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PinningConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    #[serde(skip_serializing)]
    pub api_secret: Option<String>,
}

impl std::fmt::Debug for PinningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinningConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
