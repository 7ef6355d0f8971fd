//! Order Service
//!
//! Entry point for callers that need relay data in application form. Symbols
//! are resolved through the token registry, requests go through the relay
//! client, and responses come back through the translator.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::model::amount::to_base_units;
use crate::model::{Order, Price, TokenPair};
use crate::order_builder::{OrderBuilder, OrderParams};
use crate::relay::{
    FeesRequest, OrdersRequest, PriceRequest, RelayClient, RelayError, SignedOrder, NULL_ADDRESS,
};
use crate::tokens::{ConfigTokenRegistry, TokenRegistry};
use crate::translator::Translator;

/// Order terms a maker wants a fee quote for. Amounts are human-readable.
#[derive(Debug, Clone)]
pub struct FeeQuoteRequest {
    pub maker_token_address: String,
    pub maker_token_amount: String,
    pub taker_token_address: String,
    pub taker_token_amount: String,
    pub maker: String,
    pub expiration_unix_timestamp_sec: u64,
}

/// Relay operations expressed in application models.
#[derive(Clone)]
pub struct OrderService {
    relay: RelayClient,
    registry: Arc<dyn TokenRegistry>,
    translator: Translator,
    builder: OrderBuilder,
}

impl OrderService {
    /// Creates the service from its collaborators.
    pub fn new(config: &Config, relay: RelayClient, registry: Arc<dyn TokenRegistry>) -> Self {
        let translator = Translator::new(
            registry.clone(),
            config.network.fee_token_decimals,
            config.translator.pair_emission,
        );
        Self {
            relay,
            registry,
            builder: OrderBuilder::new(translator.clone()),
            translator,
        }
    }

    /// Creates the service with a relay client and registry built from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let relay = RelayClient::from_config(&config.network)?;
        let registry: Arc<dyn TokenRegistry> = Arc::new(ConfigTokenRegistry::from_config(config));
        info!(
            "Order service using relay {} with {} known tokens",
            relay.base_url(),
            config.tokens.len()
        );
        Ok(Self::new(config, relay, registry))
    }

    /// Resolves an optional symbol; empty strings count as absent.
    async fn resolve_symbol(&self, symbol: Option<&str>) -> Result<Option<String>, RelayError> {
        match symbol.filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(symbol) => self
                .registry
                .token_address(symbol)
                .await?
                .map(Some)
                .ok_or_else(|| RelayError::UnknownToken(symbol.to_string())),
        }
    }

    async fn decimals_of(&self, address: &str) -> Result<u32, RelayError> {
        self.registry
            .token_decimals(address)
            .await?
            .ok_or_else(|| RelayError::UnknownDecimals(address.to_string()))
    }

    /// Lists orders, optionally filtered by taker/maker token symbol and taker.
    pub async fn list_orders(
        &self,
        taker_token: Option<&str>,
        maker_token: Option<&str>,
        taker: Option<&str>,
    ) -> Result<Vec<Order>, RelayError> {
        let taker_token_address = self.resolve_symbol(taker_token).await?;
        let maker_token_address = self.resolve_symbol(maker_token).await?;

        let request = OrdersRequest {
            maker_token_address,
            taker_token_address,
            taker: taker.filter(|t| !t.is_empty()).map(str::to_string),
        };
        let orders = self.relay.get_orders(&request).await?;
        debug!("Relay returned {} orders", orders.len());
        self.translator.convert_orders(&orders).await
    }

    /// Lists the tradeable token pairs the registry can name.
    pub async fn get_token_pairs(&self) -> Result<Vec<TokenPair>, RelayError> {
        let pairs = self.relay.get_token_pairs().await?;
        debug!("Relay returned {} token pairs", pairs.len());
        self.translator.convert_token_pairs(&pairs).await
    }

    /// Quotes fees for the given terms and returns the unsigned order to sign.
    ///
    /// The quote is requested for an open order (null taker) with zero salt.
    pub async fn post_fee(&self, quote: &FeeQuoteRequest) -> Result<Order, RelayError> {
        let exchange_contract_address = self.registry.exchange_contract_address().to_string();
        let maker_decimals = self.decimals_of(&quote.maker_token_address).await?;
        let taker_decimals = self.decimals_of(&quote.taker_token_address).await?;
        let maker_token_amount = to_base_units(&quote.maker_token_amount, maker_decimals)?;
        let taker_token_amount = to_base_units(&quote.taker_token_amount, taker_decimals)?;

        let fees = self
            .relay
            .get_fees(&FeesRequest {
                exchange_contract_address: exchange_contract_address.clone(),
                expiration_unix_timestamp_sec: quote.expiration_unix_timestamp_sec.to_string(),
                maker: quote.maker.clone(),
                taker: NULL_ADDRESS.to_string(),
                maker_token_address: quote.maker_token_address.clone(),
                maker_token_amount: maker_token_amount.to_string(),
                taker_token_address: quote.taker_token_address.clone(),
                taker_token_amount: taker_token_amount.to_string(),
                salt: "0".to_string(),
            })
            .await?;

        self.builder.create_order(
            &OrderParams {
                exchange_contract_address,
                maker_token_address: quote.maker_token_address.clone(),
                maker_token_amount,
                maker_token_decimals: maker_decimals,
                taker_token_address: quote.taker_token_address.clone(),
                taker_token_amount,
                taker_token_decimals: taker_decimals,
                maker: quote.maker.clone(),
                taker: NULL_ADDRESS.to_string(),
                expiration_unix_timestamp_sec: quote.expiration_unix_timestamp_sec,
            },
            &fees,
        )
    }

    /// Submits a signed order to the relay.
    pub async fn post_order(&self, signed_order: &SignedOrder) -> Result<(), RelayError> {
        self.relay.submit_order(signed_order).await
    }

    /// Looks up the price of trading `maker_token` for `taker_token`.
    pub async fn get_price(
        &self,
        taker_token: Option<&str>,
        maker_token: Option<&str>,
        trader: Option<&str>,
    ) -> Result<Option<Price>, RelayError> {
        let token_to = self.resolve_symbol(taker_token).await?;
        let token_from = self.resolve_symbol(maker_token).await?;
        self.relay
            .get_price(&PriceRequest {
                token_from,
                token_to,
                trader: trader.map(str::to_string),
            })
            .await
    }
}
