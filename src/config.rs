// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup; a missing or malformed required value stops the process
//! before the listener is bound.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PK` | Hex private key of the signing wallet | Required |
//! | `USDT_ADDRESS` | ERC-20 token contract address | Required |
//! | `ETH_RPC` | JSON-RPC endpoint URL | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3001` |
//! | `TOKEN_SYMBOL` | Symbol used in the response balance key | `USDT` |
//! | `TOKEN_DECIMALS` | Decimal places of the token | `6` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::fmt;

use alloy::primitives::Address;
use url::Url;

use crate::blockchain::{normalize_address, TokenConfig};
use crate::telemetry::LogFormat;

/// Environment variable holding the signing private key.
pub const PRIVATE_KEY_ENV: &str = "PK";
/// Environment variable holding the token contract address.
pub const TOKEN_ADDRESS_ENV: &str = "USDT_ADDRESS";
/// Environment variable holding the RPC endpoint URL.
pub const RPC_URL_ENV: &str = "ETH_RPC";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const TOKEN_SYMBOL_ENV: &str = "TOKEN_SYMBOL";
pub const TOKEN_DECIMALS_ENV: &str = "TOKEN_DECIMALS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TOKEN_SYMBOL: &str = "USDT";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 6;

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Process-wide configuration, built once in `main`.
#[derive(Clone)]
pub struct Config {
    pub private_key: String,
    pub token_address: Address,
    pub rpc_url: Url,
    pub host: String,
    pub port: u16,
    pub token: TokenConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let private_key = require(PRIVATE_KEY_ENV)?.trim().to_string();

        let token_address = normalize_address(require(TOKEN_ADDRESS_ENV)?.trim())
            .map_err(|e| ConfigError::invalid(TOKEN_ADDRESS_ENV, e))?;

        let rpc_url = require(RPC_URL_ENV)?
            .trim()
            .parse::<Url>()
            .map_err(|e| ConfigError::invalid(RPC_URL_ENV, e))?;

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(PORT_ENV, e))?,
            None => DEFAULT_PORT,
        };

        let symbol = get(TOKEN_SYMBOL_ENV)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TOKEN_SYMBOL.to_string());

        let decimals = match get(TOKEN_DECIMALS_ENV) {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| ConfigError::invalid(TOKEN_DECIMALS_ENV, e))?;
                // 10^77 is the largest power of ten that fits in a U256.
                if value > 77 {
                    return Err(ConfigError::invalid(TOKEN_DECIMALS_ENV, "must be at most 77"));
                }
                value
            }
            None => DEFAULT_TOKEN_DECIMALS,
        };

        let log_format = match get(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::invalid(LOG_FORMAT_ENV, e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            private_key,
            token_address,
            rpc_url,
            host,
            port,
            token: TokenConfig { symbol, decimals },
            log_format,
        })
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key", &"<redacted>")
            .field("token_address", &self.token_address)
            .field("rpc_url", &self.rpc_url.as_str())
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token", &self.token)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("Invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl fmt::Display) -> Self {
        Self::Invalid {
            name,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOKEN: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            (PRIVATE_KEY_ENV, "0x0000000000000000000000000000000000000000000000000000000000000001"),
            (TOKEN_ADDRESS_ENV, TOKEN),
            (RPC_URL_ENV, "http://localhost:8545"),
        ]
    }

    #[test]
    fn loads_defaults_when_only_required_vars_set() {
        let config = Config::from_lookup(lookup(&required())).expect("config loads");

        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.token.symbol, "USDT");
        assert_eq!(config.token.decimals, 6);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.token_address.to_checksum(None), TOKEN);
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
    }

    #[test]
    fn each_required_var_is_enforced() {
        for missing in [PRIVATE_KEY_ENV, TOKEN_ADDRESS_ENV, RPC_URL_ENV] {
            let vars: Vec<_> = required()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();
            let err = Config::from_lookup(lookup(&vars)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Missing(name) if name == missing),
                "expected missing {missing}, got {err:?}"
            );
        }
    }

    #[test]
    fn blank_required_var_counts_as_missing() {
        let mut vars = required();
        vars.retain(|(k, _)| *k != RPC_URL_ENV);
        vars.push((RPC_URL_ENV, "   "));
        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(RPC_URL_ENV)));
    }

    #[test]
    fn rejects_malformed_values() {
        let cases = [
            (TOKEN_ADDRESS_ENV, "0x1234"),
            (RPC_URL_ENV, "not a url"),
            (PORT_ENV, "70000"),
            (TOKEN_DECIMALS_ENV, "78"),
            (LOG_FORMAT_ENV, "xml"),
        ];
        for (name, value) in cases {
            let mut vars = required();
            vars.retain(|(k, _)| *k != name);
            vars.push((name, value));
            let err = Config::from_lookup(lookup(&vars)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: n, .. } if n == name),
                "expected invalid {name}, got {err:?}"
            );
        }
    }

    #[test]
    fn optional_overrides_apply() {
        let mut vars = required();
        vars.extend([
            (HOST_ENV, "127.0.0.1"),
            (PORT_ENV, "8080"),
            (TOKEN_SYMBOL_ENV, "USDC"),
            (TOKEN_DECIMALS_ENV, "18"),
            (LOG_FORMAT_ENV, "json"),
        ]);
        let config = Config::from_lookup(lookup(&vars)).expect("config loads");

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.token.symbol, "USDC");
        assert_eq!(config.token.decimals, 18);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let config = Config::from_lookup(lookup(&required())).expect("config loads");
        let printed = format!("{config:?}");
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("0000000000000000000000000000000000000000000000000000000000000001"));
    }
}
