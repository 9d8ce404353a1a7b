//! Client for the land-registration and user-registry contracts.

pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod observability;
pub mod registry;

pub use blockchain::{BlockchainError, BlockchainResult, TxReceipt, Wallet};
pub use config::RegistryConfig;
pub use contracts::{LandApproval, RequesterStatus};
pub use registry::RegistryClient;
