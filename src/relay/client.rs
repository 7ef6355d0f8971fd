//! Relay HTTP Client
//!
//! Thin client for the relay's standard relayer API plus its `/prices`
//! extension. Every path is relative to the configured base URL, which
//! carries the API version (e.g. `https://api.relay.example/0x/v0`).
//! Requests and responses use the wire structures unchanged.

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::RelayError;
use super::wire::{
    FeesRequest, FeesResponse, OrdersRequest, PriceRequest, SignedOrder, TokenPairsItem,
};
use crate::config::NetworkConfig;
use crate::model::Price;

/// Client for one relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the relay without trailing slash
    base_url: String,
}

impl RelayClient {
    /// Creates a client for the relay at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Relay URL, e.g. "https://api.relay.example/0x/v0"
    /// * `timeout` - Timeout applied to every request
    ///
    /// # Returns
    ///
    /// * `Ok(RelayClient)` - Successfully created client
    /// * `Err(anyhow::Error)` - Failed to create the HTTP client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the network section of the configuration.
    pub fn from_config(network: &NetworkConfig) -> Result<Self> {
        Self::new(&network.url, Duration::from_secs(network.request_timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Lists orders matching the given filters (`GET /orders`).
    pub async fn get_orders(&self, request: &OrdersRequest) -> Result<Vec<SignedOrder>, RelayError> {
        let url = self.url("/orders");
        debug!("GET {} {:?}", url, request);
        let response = self.client.get(&url).query(request).send().await?;
        read_json(response).await
    }

    /// Lists the token pairs the relay trades (`GET /token_pairs`).
    pub async fn get_token_pairs(&self) -> Result<Vec<TokenPairsItem>, RelayError> {
        let url = self.url("/token_pairs");
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    /// Quotes the fees for an order (`POST /fees`).
    pub async fn get_fees(&self, request: &FeesRequest) -> Result<FeesResponse, RelayError> {
        let url = self.url("/fees");
        debug!("POST {} {:?}", url, request);
        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }

    /// Submits a signed order (`POST /order`).
    pub async fn submit_order(&self, order: &SignedOrder) -> Result<(), RelayError> {
        let url = self.url("/order");
        debug!("POST {} maker={}", url, order.maker);
        let response = self.client.post(&url).json(order).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(RelayError::from_response(status.as_u16(), text));
        }
        Ok(())
    }

    /// Looks up a price (`GET /prices`). A `null` body means no price.
    pub async fn get_price(&self, request: &PriceRequest) -> Result<Option<Price>, RelayError> {
        let url = self.url("/prices");
        debug!("GET {} {:?}", url, request);
        let response = self.client.get(&url).query(request).send().await?;
        read_json(response).await
    }
}

/// Decodes a 2xx JSON body or converts the failure into a [`RelayError`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RelayError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(RelayError::from_response(status.as_u16(), text));
    }
    serde_json::from_str(&text).map_err(|e| RelayError::Decode(format!("{}: {}", e, text)))
}
