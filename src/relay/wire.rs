//! Standard relayer API wire structures
//!
//! Big numbers travel as base-unit decimal strings; field names are camelCase.

use serde::{Deserialize, Serialize};

pub use crate::model::EcSignature;

/// Address used as the taker of orders open to anyone.
pub const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// A signed order as stored by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub exchange_contract_address: String,
    pub maker: String,
    pub taker: String,
    pub maker_token_address: String,
    pub taker_token_address: String,
    pub fee_recipient: String,
    pub maker_token_amount: String,
    pub taker_token_amount: String,
    pub maker_fee: String,
    pub taker_fee: String,
    pub expiration_unix_timestamp_sec: String,
    pub salt: String,
    pub ec_signature: EcSignature,
}

/// One side of a relay token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTradeInfo {
    pub address: String,
    pub min_amount: String,
    pub max_amount: String,
    #[serde(default)]
    pub precision: u32,
}

/// Entry of `GET /token_pairs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairsItem {
    pub token_a: TokenTradeInfo,
    pub token_b: TokenTradeInfo,
}

/// Query filters of `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_token_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
}

/// Body of `POST /fees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeesRequest {
    pub exchange_contract_address: String,
    pub expiration_unix_timestamp_sec: String,
    pub maker: String,
    pub taker: String,
    pub maker_token_address: String,
    pub maker_token_amount: String,
    pub taker_token_address: String,
    pub taker_token_amount: String,
    pub salt: String,
}

/// Response of `POST /fees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeesResponse {
    pub fee_recipient: String,
    pub maker_fee: String,
    pub taker_fee: String,
}

/// Query parameters of `GET /prices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader: Option<String>,
}
