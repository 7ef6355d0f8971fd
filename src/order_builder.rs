//! Order Builder
//!
//! Assembles unsigned application orders from a fee quote.

use num::BigUint;

use crate::model::amount::format_base_units;
use crate::model::Order;
use crate::relay::{FeesResponse, RelayError};
use crate::translator::Translator;

/// Inputs of a new order, amounts already in base units.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub exchange_contract_address: String,
    pub maker_token_address: String,
    pub maker_token_amount: BigUint,
    pub maker_token_decimals: u32,
    pub taker_token_address: String,
    pub taker_token_amount: BigUint,
    pub taker_token_decimals: u32,
    pub maker: String,
    pub taker: String,
    pub expiration_unix_timestamp_sec: u64,
}

/// Generates a random 256-bit order salt as a decimal string.
pub fn generate_salt() -> String {
    let bytes: [u8; 32] = rand::random();
    BigUint::from_bytes_be(&bytes).to_string()
}

/// Builds unsigned orders.
#[derive(Clone)]
pub struct OrderBuilder {
    translator: Translator,
}

impl OrderBuilder {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Creates an unsigned order carrying the quoted fees and a fresh salt.
    pub fn create_order(&self, params: &OrderParams, fees: &FeesResponse) -> Result<Order, RelayError> {
        Ok(Order {
            maker: params.maker.clone(),
            taker: params.taker.clone(),
            maker_fee: self.translator.render_fee(&fees.maker_fee),
            taker_fee: self.translator.render_fee(&fees.taker_fee),
            maker_token_amount: format_base_units(&params.maker_token_amount, params.maker_token_decimals),
            taker_token_amount: format_base_units(&params.taker_token_amount, params.taker_token_decimals),
            maker_token_address: params.maker_token_address.clone(),
            taker_token_address: params.taker_token_address.clone(),
            ec_signature: None,
            exchange_contract_address: params.exchange_contract_address.clone(),
            expiration_unix_timestamp_sec: params.expiration_unix_timestamp_sec.to_string(),
            fee_recipient: fees.fee_recipient.clone(),
            salt: generate_salt(),
            value_required: String::new(),
        })
    }
}
