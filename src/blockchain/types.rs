// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token metadata and balance formatting.

use alloy::primitives::U256;

/// Display metadata for the configured token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    /// Token symbol (e.g., "USDT")
    pub symbol: String,
    /// Number of decimals used to scale raw balances
    pub decimals: u8,
}

impl TokenConfig {
    /// JSON key under which the display balance is reported.
    pub fn balance_key(&self) -> String {
        format!("{} balance", self.symbol)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            symbol: "USDT".to_string(),
            decimals: 6,
        }
    }
}

/// Format a raw token balance with the specified decimals.
///
/// The result is exact: trailing fractional zeros are dropped, nothing
/// else is rounded away.
pub fn format_token_balance(balance: U256, decimals: u8) -> String {
    if balance.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = balance / divisor;
    let remainder = balance % divisor;

    if remainder.is_zero() {
        return whole.to_string();
    }

    let decimal_str = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
    format!("{}.{}", whole, decimal_str.trim_end_matches('0'))
}
