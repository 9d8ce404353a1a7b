//! Client construction and configuration handling.

use land_registry_client::blockchain::BlockchainError;
use land_registry_client::config::ConfigError;
use land_registry_client::{RegistryClient, Wallet};

mod common;

#[test]
fn test_construction_validates_configuration() {
    let mut config = common::test_config();
    config.contracts.user_registry = "0x1234".to_string();
    config.gas.base_gas_limit = 0;

    let chain = common::MockChain::new(1);
    let err = RegistryClient::with_connector(config, chain.connector()).unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec!["contracts.user_registry", "gas.base_gas_limit"]);
        }
        other => panic!("expected validation error, got {}", other),
    }
    assert!(chain.events().is_empty());
}

#[test]
fn test_operator_address_must_match_key() {
    let mut config = common::test_config();
    config.operator.address = common::SOME_ADDRESS.to_string();

    let chain = common::MockChain::new(1);
    let err = RegistryClient::with_connector(config, chain.connector()).unwrap_err();
    assert!(matches!(err, ConfigError::Operator(BlockchainError::Wallet(_))));
}

#[test]
fn test_operator_address_derived_from_key() {
    let mut config = common::test_config();
    config.operator.address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string();

    let chain = common::MockChain::new(1);
    let client = RegistryClient::with_connector(config, chain.connector()).unwrap();
    let expected = Wallet::from_private_key(common::OPERATOR_KEY).unwrap().address();
    assert_eq!(client.operator_address(), expected);
}

#[test]
fn test_invalid_operator_key() {
    let mut config = common::test_config();
    config.operator.private_key = Some("zz".to_string());

    let chain = common::MockChain::new(1);
    let err = RegistryClient::with_connector(config, chain.connector()).unwrap_err();
    assert!(err.to_string().contains("Invalid private key"));
}

#[tokio::test]
async fn test_http_client_is_lazy() {
    // No node is listening; construction must still succeed.
    let mut config = common::test_config();
    config.chain.rpc_url = "http://127.0.0.1:1".to_string();
    assert!(RegistryClient::new(config).is_ok());
}

#[test]
fn test_create_address() {
    let first = RegistryClient::create_address().unwrap();
    let second = RegistryClient::create_address().unwrap();
    assert_ne!(first.address, second.address);
    assert_ne!(first.phrase, second.phrase);

    let restored = Wallet::from_private_key(&first.private_key).unwrap();
    assert_eq!(restored.address(), first.address);
    let recovered = Wallet::from_mnemonic(&first.phrase).unwrap();
    assert_eq!(recovered.address(), first.address);
}

#[test]
fn test_is_address() {
    assert!(RegistryClient::is_address(common::SOME_ADDRESS));
    assert!(RegistryClient::is_address("70997970c51812dc3a010c7d01b50e0d17dc79c8"));
    assert!(!RegistryClient::is_address("0x70997970c51812dc3a010c7d01b50e0d17dc79c"));
    assert!(!RegistryClient::is_address(""));
}
