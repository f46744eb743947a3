// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`BalanceQuerier`] for handler tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use tokio::sync::Notify;

use super::client::{BalanceQuerier, ClientError};

#[derive(Default)]
pub struct MockBalanceQuerier {
    balances: HashMap<Address, U256>,
    fail: bool,
    node_down: bool,
    gate: Option<(Address, Arc<Notify>)>,
    resolved: Mutex<Vec<Address>>,
    pub calls: AtomicUsize,
}

impl MockBalanceQuerier {
    pub fn with_balances(balances: impl IntoIterator<Item = (Address, U256)>) -> Self {
        Self {
            balances: balances.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Every balance call fails as if the contract reverted.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The node does not answer block number requests.
    pub fn node_down() -> Self {
        Self {
            node_down: true,
            ..Self::default()
        }
    }

    /// Calls for `held` wait until a call for any other address resolves.
    pub fn hold_until_other_resolves(mut self, held: Address, gate: Arc<Notify>) -> Self {
        self.gate = Some((held, gate));
        self
    }

    /// Addresses in the order their balance calls resolved.
    pub fn resolved_order(&self) -> Vec<Address> {
        self.resolved.lock().unwrap().clone()
    }
}

#[async_trait]
impl BalanceQuerier for MockBalanceQuerier {
    async fn balance_of(&self, owner: Address) -> Result<U256, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some((held, gate)) = &self.gate {
            if *held == owner {
                gate.notified().await;
            }
        }

        self.resolved.lock().unwrap().push(owner);

        if let Some((held, gate)) = &self.gate {
            if *held != owner {
                gate.notify_one();
            }
        }

        if self.fail {
            return Err(ClientError::ContractError("execution reverted".into()));
        }
        Ok(self.balances.get(&owner).copied().unwrap_or_default())
    }

    async fn block_number(&self) -> Result<u64, ClientError> {
        if self.node_down {
            Err(ClientError::RpcError("connection refused".into()))
        } else {
            Ok(21_000_000)
        }
    }
}
