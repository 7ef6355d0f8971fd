//! Token Registry
//!
//! Resolves token symbols, addresses and decimals. The order service only
//! depends on the [`TokenRegistry`] trait; [`ConfigTokenRegistry`] answers
//! from the token list in the configuration file.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use crate::config::{Config, TokenConfig};

/// Symbol-resolution collaborator of the order service.
#[async_trait]
pub trait TokenRegistry: Send + Sync {
    /// Address of the token with this symbol, if known.
    async fn token_address(&self, symbol: &str) -> Result<Option<String>>;

    /// Symbol of the token at this address, if known.
    async fn token_symbol(&self, address: &str) -> Result<Option<String>>;

    /// Decimals of the token at this address, if known.
    async fn token_decimals(&self, address: &str) -> Result<Option<u32>>;

    /// Exchange contract orders are created for.
    fn exchange_contract_address(&self) -> &str;
}

/// Registry backed by the configured token list.
///
/// Address lookups are case-insensitive; symbol lookups are exact.
#[derive(Debug, Clone)]
pub struct ConfigTokenRegistry {
    exchange_contract_address: String,
    by_symbol: HashMap<String, TokenConfig>,
    by_address: HashMap<String, TokenConfig>,
}

impl ConfigTokenRegistry {
    pub fn new(exchange_contract_address: &str, tokens: &[TokenConfig]) -> Self {
        let by_symbol = tokens
            .iter()
            .map(|t| (t.symbol.clone(), t.clone()))
            .collect();
        let by_address = tokens
            .iter()
            .map(|t| (t.address.to_lowercase(), t.clone()))
            .collect();
        Self {
            exchange_contract_address: exchange_contract_address.to_string(),
            by_symbol,
            by_address,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.network.exchange_contract_address, &config.tokens)
    }
}

#[async_trait]
impl TokenRegistry for ConfigTokenRegistry {
    async fn token_address(&self, symbol: &str) -> Result<Option<String>> {
        Ok(self.by_symbol.get(symbol).map(|t| t.address.clone()))
    }

    async fn token_symbol(&self, address: &str) -> Result<Option<String>> {
        Ok(self
            .by_address
            .get(&address.to_lowercase())
            .map(|t| t.symbol.clone()))
    }

    async fn token_decimals(&self, address: &str) -> Result<Option<u32>> {
        Ok(self.by_address.get(&address.to_lowercase()).map(|t| t.decimals))
    }

    fn exchange_contract_address(&self) -> &str {
        &self.exchange_contract_address
    }
}
