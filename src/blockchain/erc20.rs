// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::ClientError;

// Read-only subset of the ERC-20 interface.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// ERC-20 contract wrapper.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Bind the contract at `address` to `provider`.
    pub fn new(provider: &P, address: Address) -> Self {
        Self {
            contract: IERC20::new(address, provider.clone()),
        }
    }

    /// Contract address this wrapper is bound to.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// Get the token symbol.
    pub async fn symbol(&self) -> Result<String, ClientError> {
        self.contract
            .symbol()
            .call()
            .await
            .map_err(|e| ClientError::ContractError(e.to_string()))
    }

    /// Get the token decimals.
    pub async fn decimals(&self) -> Result<u8, ClientError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| ClientError::ContractError(e.to_string()))
    }

    /// Get the raw balance of `owner`, in the token's smallest unit.
    pub async fn balance_of(&self, owner: Address) -> Result<U256, ClientError> {
        self.contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ClientError::ContractError(e.to_string()))
    }
}
