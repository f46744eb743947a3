// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON-RPC client bound to the configured ERC-20 token.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use url::Url;

use super::erc20::Erc20Contract;
use super::types::TokenConfig;

/// Source of token balances.
///
/// Handlers depend on this trait rather than on [`TokenClient`] so the RPC
/// node can be replaced in tests.
#[async_trait]
pub trait BalanceQuerier: Send + Sync {
    /// Raw balance of `owner`, in the token's smallest unit.
    async fn balance_of(&self, owner: Address) -> Result<U256, ClientError>;

    /// Latest block number seen by the node.
    async fn block_number(&self) -> Result<u64, ClientError>;
}

/// Client holding the RPC connection, the signing wallet and the bound
/// token contract. Built once at startup and shared by all requests.
pub struct TokenClient {
    provider: DynProvider,
    token: Erc20Contract<DynProvider>,
    signer_address: Address,
}

impl TokenClient {
    /// Connect to `rpc_url` with the wallet derived from `private_key_hex`
    /// and bind the token contract at `token_address`.
    ///
    /// No request is sent to the node here.
    pub fn new(
        rpc_url: Url,
        private_key_hex: &str,
        token_address: Address,
    ) -> Result<Self, ClientError> {
        let signer = Self::create_signer(private_key_hex)?;
        let signer_address = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(Self::create_wallet(signer))
            .connect_http(rpc_url)
            .erased();

        let token = Erc20Contract::new(&provider, token_address);

        Ok(Self {
            provider,
            token,
            signer_address,
        })
    }

    /// Address of the signing wallet.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Address of the bound token contract.
    pub fn token_address(&self) -> Address {
        self.token.address()
    }

    /// Compare the configured token metadata with what the contract reports.
    ///
    /// Mismatches are logged; they never stop the service.
    pub async fn verify_token_metadata(&self, expected: &TokenConfig) {
        match self.token.decimals().await {
            Ok(decimals) if decimals != expected.decimals => tracing::warn!(
                configured = expected.decimals,
                on_chain = decimals,
                "Token decimals differ from configuration; balances will be scaled with the configured value"
            ),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not read token decimals"),
        }

        match self.token.symbol().await {
            Ok(symbol) if symbol != expected.symbol => tracing::warn!(
                configured = %expected.symbol,
                on_chain = %symbol,
                "Token symbol differs from configuration"
            ),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not read token symbol"),
        }
    }

    /// Create a signer from a hex private key (with or without `0x`).
    pub fn create_signer(private_key_hex: &str) -> Result<PrivateKeySigner, ClientError> {
        let key_bytes = alloy::hex::decode(private_key_hex.trim())
            .map_err(|e| ClientError::InvalidPrivateKey(e.to_string()))?;

        PrivateKeySigner::from_slice(&key_bytes)
            .map_err(|e| ClientError::InvalidPrivateKey(e.to_string()))
    }

    /// Create an Ethereum wallet from a signer.
    pub fn create_wallet(signer: PrivateKeySigner) -> EthereumWallet {
        EthereumWallet::from(signer)
    }
}

#[async_trait]
impl BalanceQuerier for TokenClient {
    async fn balance_of(&self, owner: Address) -> Result<U256, ClientError> {
        self.token.balance_of(owner).await
    }

    async fn block_number(&self) -> Result<u64, ClientError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ClientError::RpcError(e.to_string()))
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract error: {0}")]
    ContractError(String),
}
