//! Typed proxies for the user-registry and land-registration contracts.

pub mod abi;
pub mod land_registry;
pub mod user_registry;

pub use land_registry::{LandApproval, LandRegistry, RequesterStatus};
pub use user_registry::UserRegistry;
