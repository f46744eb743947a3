// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module.
//!
//! This module provides functionality for:
//! - Validating and checksumming wallet addresses
//! - Querying the configured ERC-20 token balance over JSON-RPC
//! - Formatting raw balances with the token's decimals

pub mod address;
pub mod client;
pub mod erc20;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use address::{checksummed, normalize_address, AddressError};
pub use client::{BalanceQuerier, ClientError, TokenClient};
pub use types::*;
