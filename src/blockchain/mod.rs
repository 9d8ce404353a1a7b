//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! RegistryConfig (RPC URL, operator key)
//!     → wallet.rs (key loading)
//!     → client.rs (connection per operation, read-only or signer-bound)
//!     → transaction.rs (build, broadcast, confirm)
//!     → fee.rs (operator-funded fee before owner-signed calls)
//!     → query.rs (eth_call + result normalization)
//! ```
//!
//! # Security Constraints
//! - Operator key ONLY from environment variables
//! - Never log private keys
//! - Address arguments validated before any network call

pub mod address;
pub mod client;
pub mod fee;
pub mod query;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use address::{is_address, parse_address};
pub use client::{ChainBackend, Connector, HttpConnector, RpcConnection};
pub use fee::FeeTransfer;
pub use transaction::TxExecutor;
pub use types::{BlockchainError, BlockchainResult, GasPricing, TxReceipt};
pub use wallet::{generate_account, GeneratedAccount, Wallet};
