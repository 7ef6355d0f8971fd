//! Shared test helpers for unit tests
//!
//! The module is organized into several categories:
//! - **Constants**: dummy addresses and signature parts
//! - **Configuration Builders**: test configurations with and without a relay
//! - **Default Record Creators**: relay wire records used across tests

use relay_frontend::config::{
    BuildConfig, Config, DnsValidatorConfig, ListenerConfig, NetworkConfig, PairEmission,
    TlsConfig, TokenConfig, TranslatorConfig,
};
use relay_frontend::model::EcSignature;
use relay_frontend::relay::{SignedOrder, TokenPairsItem, TokenTradeInfo};

// ============================================================================
// CONSTANTS
// ============================================================================

// ------------------------------ CONTRACTS -------------------------------

/// Dummy exchange contract address
pub const DUMMY_EXCHANGE_ADDR: &str = "0x0000000000000000000000000000000000000001";

/// Dummy WETH token address (18 decimals)
pub const DUMMY_WETH_ADDR: &str = "0x0000000000000000000000000000000000000002";

/// Dummy ZRX token address (18 decimals)
pub const DUMMY_ZRX_ADDR: &str = "0x0000000000000000000000000000000000000003";

/// Dummy USDC token address (6 decimals)
pub const DUMMY_USDC_ADDR: &str = "0x0000000000000000000000000000000000000004";

/// Token address missing from the test token list
pub const DUMMY_UNKNOWN_TOKEN_ADDR: &str = "0x00000000000000000000000000000000000000ff";

// -------------------------------- USERS ---------------------------------

/// Dummy maker address
pub const DUMMY_MAKER_ADDR: &str = "0x0000000000000000000000000000000000000005";

/// Dummy taker address
pub const DUMMY_TAKER_ADDR: &str = "0x0000000000000000000000000000000000000006";

/// Dummy fee recipient address
pub const DUMMY_FEE_RECIPIENT: &str = "0x0000000000000000000000000000000000000007";

// ------------------------------ SIGNATURE -------------------------------

/// Dummy signature r component (32 bytes)
pub const DUMMY_SIG_R: &str =
    "0x00000000000000000000000000000000000000000000000000000000000000aa";

/// Dummy signature s component (32 bytes)
pub const DUMMY_SIG_S: &str =
    "0x00000000000000000000000000000000000000000000000000000000000000bb";

/// Dummy expiry timestamp
pub const DUMMY_EXPIRY: u64 = 1_700_000_000;

// ============================================================================
// CONFIGURATION BUILDERS
// ============================================================================

/// Build a test configuration with three known tokens (WETH, ZRX, USDC).
/// The relay URL points at a closed local port.
#[allow(dead_code)]
pub fn build_test_config() -> Config {
    Config {
        build: BuildConfig {
            index: "dist/index.html".to_string(),
            assets_root: "dist".to_string(),
            assets_sub_directory: "static".to_string(),
            host: "127.0.0.1".to_string(),
            http: ListenerConfig {
                enabled: true,
                port: 8080,
            },
            https: ListenerConfig {
                enabled: false,
                port: 8443,
            },
            dns_validator: DnsValidatorConfig::default(),
            tls: TlsConfig::default(),
        },
        network: NetworkConfig {
            url: "http://127.0.0.1:18999".to_string(),
            exchange_contract_address: DUMMY_EXCHANGE_ADDR.to_string(),
            fee_token_decimals: 18,
            request_timeout_secs: 5,
        },
        translator: TranslatorConfig {
            pair_emission: PairEmission::Symmetric,
        },
        tokens: vec![
            TokenConfig {
                symbol: "WETH".to_string(),
                address: DUMMY_WETH_ADDR.to_string(),
                decimals: 18,
            },
            TokenConfig {
                symbol: "ZRX".to_string(),
                address: DUMMY_ZRX_ADDR.to_string(),
                decimals: 18,
            },
            TokenConfig {
                symbol: "USDC".to_string(),
                address: DUMMY_USDC_ADDR.to_string(),
                decimals: 6,
            },
        ],
    }
}

/// Build a test configuration whose relay is the given mock server URL.
#[allow(dead_code)]
pub fn build_test_config_with_relay(url: &str) -> Config {
    let mut config = build_test_config();
    config.network.url = url.to_string();
    config
}

// ============================================================================
// DEFAULT RECORD CREATORS
// ============================================================================

/// Create a signed WETH -> ZRX order: 1 WETH for 250.5 ZRX, 0.5 ZRX maker fee.
#[allow(dead_code)]
pub fn create_default_signed_order() -> SignedOrder {
    SignedOrder {
        exchange_contract_address: DUMMY_EXCHANGE_ADDR.to_string(),
        maker: DUMMY_MAKER_ADDR.to_string(),
        taker: DUMMY_TAKER_ADDR.to_string(),
        maker_token_address: DUMMY_WETH_ADDR.to_string(),
        taker_token_address: DUMMY_ZRX_ADDR.to_string(),
        fee_recipient: DUMMY_FEE_RECIPIENT.to_string(),
        maker_token_amount: "1000000000000000000".to_string(),
        taker_token_amount: "250500000000000000000".to_string(),
        maker_fee: "500000000000000000".to_string(),
        taker_fee: "0".to_string(),
        expiration_unix_timestamp_sec: DUMMY_EXPIRY.to_string(),
        salt: "42".to_string(),
        ec_signature: EcSignature {
            v: 27,
            r: DUMMY_SIG_R.to_string(),
            s: DUMMY_SIG_S.to_string(),
        },
    }
}

/// Create a relay token pair entry with the given bounds (base units).
#[allow(dead_code)]
pub fn create_token_pair_item(
    token_a: &str,
    min_a: &str,
    max_a: &str,
    token_b: &str,
    min_b: &str,
    max_b: &str,
) -> TokenPairsItem {
    TokenPairsItem {
        token_a: TokenTradeInfo {
            address: token_a.to_string(),
            min_amount: min_a.to_string(),
            max_amount: max_a.to_string(),
            precision: 5,
        },
        token_b: TokenTradeInfo {
            address: token_b.to_string(),
            min_amount: min_b.to_string(),
            max_amount: max_b.to_string(),
            precision: 5,
        },
    }
}
