//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{
    build_test_config, build_test_config_with_relay, create_default_signed_order,
    create_token_pair_item, DUMMY_EXCHANGE_ADDR, DUMMY_EXPIRY, DUMMY_FEE_RECIPIENT,
    DUMMY_MAKER_ADDR, DUMMY_SIG_R, DUMMY_SIG_S, DUMMY_TAKER_ADDR, DUMMY_UNKNOWN_TOKEN_ADDR,
    DUMMY_USDC_ADDR, DUMMY_WETH_ADDR, DUMMY_ZRX_ADDR,
};
