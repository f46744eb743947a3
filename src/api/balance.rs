// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token balance lookup endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    blockchain::{checksummed, format_token_balance, normalize_address},
    error::{ApiError, ErrorBody},
    state::AppState,
};

pub const MISSING_ADDRESS: &str = "get_balance request: Missing address.";
pub const BAD_ADDRESS: &str = "Bad address checksum.";

/// Request body for `POST /get_balance`.
#[derive(Debug, Default, ToSchema)]
pub struct BalanceRequest {
    /// Wallet address, `0x` followed by 40 hex digits.
    #[schema(value_type = Option<String>, example = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    pub address: Option<Value>,
}

impl BalanceRequest {
    /// Parse a raw request body.
    ///
    /// Anything that is not a JSON object yields an empty request, so it is
    /// reported as a missing address. Duplicate keys keep the last value.
    pub fn from_body(body: &[u8]) -> Self {
        let address = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => fields.remove("address"),
            _ => None,
        };
        Self { address }
    }

    /// Parse the body only when it is declared as JSON.
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Self {
        if is_json_content_type(headers) {
            Self::from_body(body)
        } else {
            Self::default()
        }
    }

    /// The address field if it is present and truthy.
    fn provided_address(&self) -> Option<&Value> {
        self.address.as_ref().filter(|value| is_truthy(value))
    }
}

/// `application/json`, with or without parameters such as `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// JSON truthiness: `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Balance response.
///
/// Serialized as `{"address": "...", "<SYMBOL> balance": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResponse {
    /// Checksummed wallet address
    pub address: String,
    /// JSON key for the balance, e.g. "USDT balance"
    pub balance_key: String,
    /// Balance scaled by the token decimals
    pub balance: String,
}

impl Serialize for BalanceResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("address", &self.address)?;
        map.serialize_entry(&self.balance_key, &self.balance)?;
        map.end()
    }
}

/// Get the token balance of a wallet address.
///
/// The response balance key is `"<SYMBOL> balance"` and its value is the
/// raw balance divided by `10^decimals`, as an exact decimal string.
#[utoipa::path(
    post,
    path = "/get_balance",
    tag = "Balance",
    request_body = BalanceRequest,
    responses(
        (status = 200, description = "Balance retrieved, e.g. {\"address\": \"0x...\", \"USDT balance\": \"1.5\"}"),
        (status = 400, description = "Missing or invalid address", body = ErrorBody),
        (status = 502, description = "RPC node or token contract call failed", body = ErrorBody)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BalanceResponse>, ApiError> {
    let request = BalanceRequest::from_request(&headers, &body);

    let Some(raw) = request.provided_address() else {
        tracing::warn!("{MISSING_ADDRESS}");
        return Err(ApiError::bad_request(MISSING_ADDRESS));
    };

    let address = raw
        .as_str()
        .ok_or_else(|| "address is not a string".to_string())
        .and_then(|s| normalize_address(s).map_err(|e| e.to_string()))
        .map_err(|reason| {
            tracing::warn!(address = %raw, %reason, "Error: {BAD_ADDRESS}");
            ApiError::bad_request(BAD_ADDRESS)
        })?;

    let raw_balance = state.balances.balance_of(address).await.map_err(|e| {
        tracing::error!(
            address = %checksummed(&address),
            error = %e,
            "Error getting {} token balance.",
            state.token.symbol
        );
        ApiError::bad_gateway(format!("Error getting {} token balance.", state.token.symbol))
    })?;

    let response = BalanceResponse {
        address: checksummed(&address),
        balance_key: state.token.balance_key(),
        balance: format_token_balance(raw_balance, state.token.decimals),
    };

    tracing::info!(
        address = %response.address,
        balance = %response.balance,
        "Balance of {} ({}) sent.",
        response.address,
        response.balance
    );

    Ok(Json(response))
}
