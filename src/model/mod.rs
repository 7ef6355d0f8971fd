//! Application Models
//!
//! Simplified order, token pair and price records handed to callers of the
//! order service. Amounts are human-readable decimal strings.

use serde::{Deserialize, Serialize};

pub mod amount;

/// Elliptic-curve signature components of a signed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcSignature {
    pub v: u8,
    pub r: String,
    pub s: String,
}

/// An order as presented to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub maker: String,
    pub taker: String,
    /// Fee paid by the maker, in fee-token units
    pub maker_fee: String,
    /// Fee paid by the taker, in fee-token units
    pub taker_fee: String,
    pub maker_token_amount: String,
    pub taker_token_amount: String,
    pub maker_token_address: String,
    pub taker_token_address: String,
    /// Absent until the order has been signed
    pub ec_signature: Option<EcSignature>,
    pub exchange_contract_address: String,
    pub expiration_unix_timestamp_sec: String,
    pub fee_recipient: String,
    pub salt: String,
    /// Always empty; the amount a taker must supply is computed elsewhere
    pub value_required: String,
}

/// A tradeable token pair with relay-imposed trade size bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token_a_symbol: String,
    pub token_b_symbol: String,
    pub min_token_a_amount: String,
    pub max_token_a_amount: String,
    pub min_token_b_amount: String,
    pub max_token_b_amount: String,
}

impl TokenPair {
    /// The same pair seen from the other side, with amounts mirrored.
    pub fn reversed(&self) -> TokenPair {
        TokenPair {
            token_a_symbol: self.token_b_symbol.clone(),
            token_b_symbol: self.token_a_symbol.clone(),
            min_token_a_amount: self.min_token_b_amount.clone(),
            max_token_a_amount: self.max_token_b_amount.clone(),
            min_token_b_amount: self.min_token_a_amount.clone(),
            max_token_b_amount: self.max_token_a_amount.clone(),
        }
    }
}

/// Price quote returned by the relay's `/prices` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub token_from: Option<String>,
    #[serde(default)]
    pub token_to: Option<String>,
    #[serde(default)]
    pub trader: Option<String>,
    pub price: f64,
}
