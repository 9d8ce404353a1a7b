//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check contract and operator addresses
//! - Validate value ranges (gas limits, multipliers, poll intervals)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before a `RegistryClient` is constructed

use alloy::primitives::utils::parse_ether;
use thiserror::Error;

use crate::blockchain::address::is_address;
use crate::config::schema::RegistryConfig;

/// Minimum gas a plain value transfer consumes.
const TRANSFER_GAS: u64 = 21_000;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.chain.rpc_url.parse::<url::Url>() {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "chain.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("chain.rpc_url", e.to_string())),
    }

    if config.chain.confirmations == 0 {
        errors.push(ValidationError::new("chain.confirmations", "must be at least 1"));
    }
    if config.chain.receipt_poll_interval_ms == 0 {
        errors.push(ValidationError::new(
            "chain.receipt_poll_interval_ms",
            "must be greater than 0",
        ));
    }
    if config.chain.rpc_timeout_secs == Some(0) {
        errors.push(ValidationError::new("chain.rpc_timeout_secs", "must be greater than 0"));
    }
    if config.chain.confirmation_timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "chain.confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }

    if !is_address(&config.contracts.user_registry) {
        errors.push(ValidationError::new(
            "contracts.user_registry",
            format!("invalid address '{}'", config.contracts.user_registry),
        ));
    }
    if !is_address(&config.contracts.land_registry) {
        errors.push(ValidationError::new(
            "contracts.land_registry",
            format!("invalid address '{}'", config.contracts.land_registry),
        ));
    }

    if !config.operator.address.is_empty() && !is_address(&config.operator.address) {
        errors.push(ValidationError::new(
            "operator.address",
            format!("invalid address '{}'", config.operator.address),
        ));
    }
    if config.operator.private_key.is_none() {
        errors.push(ValidationError::new("operator.private_key", "not set"));
    }

    if config.gas.base_gas_limit == 0 {
        errors.push(ValidationError::new("gas.base_gas_limit", "must be greater than 0"));
    }
    if config.gas.priority_price_multiplier == 0 {
        errors.push(ValidationError::new(
            "gas.priority_price_multiplier",
            "must be at least 1",
        ));
    }
    if config.gas.fee_gas_limit < TRANSFER_GAS {
        errors.push(ValidationError::new(
            "gas.fee_gas_limit",
            format!("must be at least {}", TRANSFER_GAS),
        ));
    }
    if let Err(e) = parse_ether(&config.gas.fee_amount_ether) {
        errors.push(ValidationError::new("gas.fee_amount_ether", e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
