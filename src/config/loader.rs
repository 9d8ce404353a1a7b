//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::blockchain::types::BlockchainError;
use crate::config::schema::RegistryConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const RPC_URL_ENV_VAR: &str = "LAND_REGISTRY_RPC_URL";
pub const OPERATOR_ADDRESS_ENV_VAR: &str = "LAND_REGISTRY_OPERATOR_ADDRESS";
pub const PRIVATE_KEY_ENV_VAR: &str = "LAND_REGISTRY_PRIVATE_KEY";
pub const USER_CONTRACT_ENV_VAR: &str = "LAND_REGISTRY_USER_CONTRACT";
pub const LAND_CONTRACT_ENV_VAR: &str = "LAND_REGISTRY_LAND_CONTRACT";
pub const PINATA_API_KEY_ENV_VAR: &str = "LAND_REGISTRY_PINATA_API_KEY";
pub const PINATA_API_SECRET_ENV_VAR: &str = "LAND_REGISTRY_PINATA_API_SECRET";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Operator account: {0}")]
    Operator(#[from] BlockchainError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment overrides and validate.
pub fn load_config(path: Option<&Path>) -> Result<RegistryConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RegistryConfig::default(),
    };

    let config = apply_env_overrides(config, |name| std::env::var(name).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        rpc_url = %config.chain.rpc_url,
        user_registry = %config.contracts.user_registry,
        land_registry = %config.contracts.land_registry,
        "Configuration loaded"
    );
    Ok(config)
}

/// Overlay environment values onto a configuration.
///
/// `lookup` resolves a variable name; empty values are treated as unset.
pub fn apply_env_overrides<F>(mut config: RegistryConfig, lookup: F) -> RegistryConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(RPC_URL_ENV_VAR) {
        config.chain.rpc_url = v;
    }
    if let Some(v) = get(OPERATOR_ADDRESS_ENV_VAR) {
        config.operator.address = v;
    }
    if let Some(v) = get(PRIVATE_KEY_ENV_VAR) {
        config.operator.private_key = Some(v);
    }
    if let Some(v) = get(USER_CONTRACT_ENV_VAR) {
        config.contracts.user_registry = v;
    }
    if let Some(v) = get(LAND_CONTRACT_ENV_VAR) {
        config.contracts.land_registry = v;
    }
    if let Some(v) = get(PINATA_API_KEY_ENV_VAR) {
        config.pinning.api_key = Some(v);
    }
    if let Some(v) = get(PINATA_API_SECRET_ENV_VAR) {
        config.pinning.api_secret = Some(v);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (RPC_URL_ENV_VAR, "https://rpc.example.org"),
            (PRIVATE_KEY_ENV_VAR, "0xabc"),
            (USER_CONTRACT_ENV_VAR, "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            (LAND_CONTRACT_ENV_VAR, ""),
            (PINATA_API_KEY_ENV_VAR, "pin-key"),
        ]
        .into_iter()
        .collect();

        let mut base = RegistryConfig::default();
        base.contracts.land_registry = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_string();

        let config = apply_env_overrides(base, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.chain.rpc_url, "https://rpc.example.org");
        assert_eq!(config.operator.private_key.as_deref(), Some("0xabc"));
        assert_eq!(
            config.contracts.user_registry,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        // Empty values leave the file setting in place.
        assert_eq!(
            config.contracts.land_registry,
            "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
        );
        assert_eq!(config.pinning.api_key.as_deref(), Some("pin-key"));
        assert!(config.pinning.api_secret.is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError {
                field: "chain.rpc_url",
                message: "bad".to_string(),
            },
            ValidationError {
                field: "gas.base_gas_limit",
                message: "must be greater than 0".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: chain.rpc_url: bad, gas.base_gas_limit: must be greater than 0"
        );
    }
}
