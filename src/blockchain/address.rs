//! Address validation.
//!
//! Accepts 40 hex digits with or without a `0x` prefix. All-lowercase and
//! all-uppercase inputs are taken as-is; mixed-case inputs must carry a valid
//! EIP-55 checksum.

use alloy::primitives::Address;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Parse an address string, rejecting malformed or badly checksummed input.
pub fn parse_address(input: &str) -> BlockchainResult<Address> {
    let invalid = || BlockchainError::InvalidAddress(input.to_string());

    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{}", digits), None).map_err(|_| invalid());
    }

    digits.parse().map_err(|_| invalid())
}

/// Whether `input` is a well-formed address.
pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}

/// Parse a list of addresses, failing on the first malformed entry.
pub fn parse_addresses<S: AsRef<str>>(inputs: &[S]) -> BlockchainResult<Vec<Address>> {
    inputs.iter().map(|s| parse_address(s.as_ref())).collect()
}
