// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 Balance Server
//!
//! A single-endpoint HTTP service that reports the balance of one configured
//! ERC-20 token for a wallet address, read from a JSON-RPC node.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - address checksums, ERC-20 binding, RPC client
//! - `config` - environment configuration
//! - `telemetry` - logging setup

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;
