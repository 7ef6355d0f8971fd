//! Relay Client Module
//!
//! HTTP access to a 0x standard relayer API, its wire structures and the
//! structured error channel.

mod client;
pub mod error;
pub mod wire;

pub use client::RelayClient;
pub use error::{RelayError, RelayErrorBody, ValidationError};
pub use wire::{
    FeesRequest, FeesResponse, OrdersRequest, PriceRequest, SignedOrder, TokenPairsItem,
    TokenTradeInfo, NULL_ADDRESS,
};
