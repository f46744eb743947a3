// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet address validation and EIP-55 normalization.
//!
//! Accepted input is an optional `0x` prefix followed by exactly 40 hex
//! digits. Single-case input carries no checksum and is accepted as is;
//! mixed-case input must match its EIP-55 checksum. The canonical form
//! returned to callers is always the checksummed `0x` string.

use std::str::FromStr;

use alloy::primitives::Address;

/// EIP-55 checksums are not chain-specific here.
const NO_CHAIN_ID: Option<u64> = None;

/// Number of hex digits in a 20-byte address.
const ADDRESS_HEX_LEN: usize = 40;

/// Errors returned by [`normalize_address`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address must be 40 hex digits with an optional 0x prefix")]
    Malformed,

    #[error("address checksum does not match")]
    BadChecksum,
}

/// Validate `raw` and return the parsed address.
pub fn normalize_address(raw: &str) -> Result<Address, AddressError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);

    if digits.len() != ADDRESS_HEX_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::Malformed);
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());

    if has_lower && has_upper {
        Address::parse_checksummed(format!("0x{digits}"), NO_CHAIN_ID)
            .map_err(|_| AddressError::BadChecksum)
    } else {
        Address::from_str(digits).map_err(|_| AddressError::Malformed)
    }
}

/// Checksummed `0x` form of `address`.
pub fn checksummed(address: &Address) -> String {
    address.to_checksum(NO_CHAIN_ID)
}
