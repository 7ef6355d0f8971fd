//! Unit tests for the relay HTTP client
//!
//! These tests run the client against WireMock servers to verify request
//! shapes, response decoding and the structured error channel.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relay_frontend::relay::{
    FeesRequest, OrdersRequest, PriceRequest, RelayClient, RelayError, NULL_ADDRESS,
};

#[path = "mod.rs"]
mod test_helpers;
use test_helpers::{
    create_default_signed_order, create_token_pair_item, DUMMY_EXCHANGE_ADDR,
    DUMMY_FEE_RECIPIENT, DUMMY_MAKER_ADDR, DUMMY_WETH_ADDR, DUMMY_ZRX_ADDR,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn create_client(server: &MockServer) -> RelayClient {
    RelayClient::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap()
}

fn relay_error_body() -> serde_json::Value {
    json!({
        "code": 100,
        "reason": "Validation failed",
        "validationErrors": [
            { "field": "makerTokenAmount", "code": 1002, "reason": "Incorrect format" }
        ]
    })
}

fn fees_request() -> FeesRequest {
    FeesRequest {
        exchange_contract_address: DUMMY_EXCHANGE_ADDR.to_string(),
        expiration_unix_timestamp_sec: "1700000000".to_string(),
        maker: DUMMY_MAKER_ADDR.to_string(),
        taker: NULL_ADDRESS.to_string(),
        maker_token_address: DUMMY_WETH_ADDR.to_string(),
        maker_token_amount: "1000000000000000000".to_string(),
        taker_token_address: DUMMY_ZRX_ADDR.to_string(),
        taker_token_amount: "2000000000000000000".to_string(),
        salt: "0".to_string(),
    }
}

// ============================================================================
// ORDERS
// ============================================================================

/// What is tested: get_orders sends filters as camelCase query parameters
/// Why: The relay filters orders by token addresses and taker
#[tokio::test]
async fn test_get_orders_with_filters() {
    let server = MockServer::start().await;
    let order = create_default_signed_order();

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("makerTokenAddress", DUMMY_WETH_ADDR))
        .and(query_param("takerTokenAddress", DUMMY_ZRX_ADDR))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([order])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let orders = client
        .get_orders(&OrdersRequest {
            maker_token_address: Some(DUMMY_WETH_ADDR.to_string()),
            taker_token_address: Some(DUMMY_ZRX_ADDR.to_string()),
            taker: None,
        })
        .await
        .unwrap();

    assert_eq!(orders, vec![order]);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("taker="), "Absent filters are omitted: {}", query);
}

/// What is tested: relay orders decode from the v0 JSON layout
/// Why: Field names on the wire are camelCase with string amounts
#[tokio::test]
async fn test_get_orders_decodes_wire_format() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "exchangeContractAddress": DUMMY_EXCHANGE_ADDR,
            "maker": DUMMY_MAKER_ADDR,
            "taker": NULL_ADDRESS,
            "makerTokenAddress": DUMMY_WETH_ADDR,
            "takerTokenAddress": DUMMY_ZRX_ADDR,
            "feeRecipient": DUMMY_FEE_RECIPIENT,
            "makerTokenAmount": "10000000000000000",
            "takerTokenAmount": "20000000000000000",
            "makerFee": "0",
            "takerFee": "0",
            "expirationUnixTimestampSec": "42",
            "salt": "67006738228878699843088602623665307406148487219438534730168799356281242528500",
            "ecSignature": { "v": 27, "r": "0x01", "s": "0x02" }
        }])))
        .mount(&server)
        .await;

    let orders = create_client(&server)
        .get_orders(&OrdersRequest::default())
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].maker_token_amount, "10000000000000000");
    assert_eq!(orders[0].ec_signature.v, 27);
}

// ============================================================================
// TOKEN PAIRS
// ============================================================================

/// What is tested: get_token_pairs decodes tokenA/tokenB entries
#[tokio::test]
async fn test_get_token_pairs() {
    let server = MockServer::start().await;
    let pair = create_token_pair_item(DUMMY_WETH_ADDR, "1", "2", DUMMY_ZRX_ADDR, "3", "4");

    Mock::given(method("GET"))
        .and(path("/token_pairs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "tokenA": { "address": DUMMY_WETH_ADDR, "minAmount": "1", "maxAmount": "2", "precision": 5 },
            "tokenB": { "address": DUMMY_ZRX_ADDR, "minAmount": "3", "maxAmount": "4", "precision": 5 }
        }])))
        .mount(&server)
        .await;

    let pairs = create_client(&server).get_token_pairs().await.unwrap();
    assert_eq!(pairs, vec![pair]);
}

/// What is tested: a 2xx body of the wrong shape is a decode error
/// Why: Unexpected payloads must not be mistaken for relay errors
#[tokio::test]
async fn test_get_token_pairs_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/token_pairs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = create_client(&server).get_token_pairs().await.unwrap_err();
    assert!(matches!(err, RelayError::Decode(_)), "Unexpected error: {:?}", err);
}

// ============================================================================
// FEES AND ORDER SUBMISSION
// ============================================================================

/// What is tested: get_fees posts the request as JSON and decodes the quote
#[tokio::test]
async fn test_get_fees() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fees"))
        .and(body_json(json!({
            "exchangeContractAddress": DUMMY_EXCHANGE_ADDR,
            "expirationUnixTimestampSec": "1700000000",
            "maker": DUMMY_MAKER_ADDR,
            "taker": NULL_ADDRESS,
            "makerTokenAddress": DUMMY_WETH_ADDR,
            "makerTokenAmount": "1000000000000000000",
            "takerTokenAddress": DUMMY_ZRX_ADDR,
            "takerTokenAmount": "2000000000000000000",
            "salt": "0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feeRecipient": DUMMY_FEE_RECIPIENT,
            "makerFee": "100",
            "takerFee": "200"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fees = create_client(&server).get_fees(&fees_request()).await.unwrap();
    assert_eq!(fees.fee_recipient, DUMMY_FEE_RECIPIENT);
    assert_eq!(fees.maker_fee, "100");
    assert_eq!(fees.taker_fee, "200");
}

/// What is tested: a relay error body surfaces as RelayError::Api
/// Why: Callers need the relay's structured error, not a transport string
#[tokio::test]
async fn test_get_fees_structured_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fees"))
        .respond_with(ResponseTemplate::new(400).set_body_json(relay_error_body()))
        .mount(&server)
        .await;

    let err = create_client(&server).get_fees(&fees_request()).await.unwrap_err();
    match err {
        RelayError::Api { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body.code, 100);
            assert_eq!(body.reason, "Validation failed");
            assert_eq!(body.validation_errors.len(), 1);
            assert_eq!(body.validation_errors[0].field, "makerTokenAmount");
        }
        other => panic!("Expected RelayError::Api, got {:?}", other),
    }
}

/// What is tested: submit_order posts the signed order and accepts 201
#[tokio::test]
async fn test_submit_order() {
    let server = MockServer::start().await;
    let order = create_default_signed_order();

    Mock::given(method("POST"))
        .and(path("/order"))
        .and(body_json(serde_json::to_value(&order).unwrap()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).submit_order(&order).await.unwrap();
}

/// What is tested: a non-JSON error body keeps status and text
/// Why: The original failure must never be masked by a parse error
#[tokio::test]
async fn test_submit_order_plain_text_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = create_client(&server)
        .submit_order(&create_default_signed_order())
        .await
        .unwrap_err();
    match &err {
        RelayError::Status { status, text } => {
            assert_eq!(*status, 502);
            assert_eq!(text, "Bad Gateway");
        }
        other => panic!("Expected RelayError::Status, got {:?}", other),
    }
    assert!(err.body().is_none());
}

// ============================================================================
// PRICES
// ============================================================================

/// What is tested: get_price passes tokenFrom/tokenTo/trader and decodes the price
#[tokio::test]
async fn test_get_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prices"))
        .and(query_param("tokenFrom", DUMMY_WETH_ADDR))
        .and(query_param("tokenTo", DUMMY_ZRX_ADDR))
        .and(query_param("trader", DUMMY_MAKER_ADDR))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokenFrom": DUMMY_WETH_ADDR,
            "tokenTo": DUMMY_ZRX_ADDR,
            "trader": DUMMY_MAKER_ADDR,
            "price": 250.5
        })))
        .mount(&server)
        .await;

    let price = create_client(&server)
        .get_price(&PriceRequest {
            token_from: Some(DUMMY_WETH_ADDR.to_string()),
            token_to: Some(DUMMY_ZRX_ADDR.to_string()),
            trader: Some(DUMMY_MAKER_ADDR.to_string()),
        })
        .await
        .unwrap()
        .expect("Price should be present");
    assert_eq!(price.price, 250.5);
    assert_eq!(price.token_from.as_deref(), Some(DUMMY_WETH_ADDR));
}

/// What is tested: a null price body means no price
#[tokio::test]
async fn test_get_price_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let price = create_client(&server)
        .get_price(&PriceRequest::default())
        .await
        .unwrap();
    assert!(price.is_none());
}

/// What is tested: an unreachable relay is a transport error
#[tokio::test]
async fn test_transport_error() {
    let client = RelayClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let err = client.get_token_pairs().await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)), "Unexpected error: {:?}", err);
}
