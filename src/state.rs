// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::{BalanceQuerier, TokenConfig};

/// Shared handler state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub balances: Arc<dyn BalanceQuerier>,
    pub token: Arc<TokenConfig>,
}

impl AppState {
    pub fn new(balances: Arc<dyn BalanceQuerier>, token: TokenConfig) -> Self {
        Self {
            balances,
            token: Arc::new(token),
        }
    }
}
