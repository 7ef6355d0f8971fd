//! Model Translator
//!
//! Converts relay-native orders and token pairs into the application models.
//! Token amounts are unit-scaled with each token's decimals; fees with the
//! fee token's decimals.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use crate::config::PairEmission;
use crate::model::amount::from_base_units;
use crate::model::{Order, TokenPair};
use crate::relay::{RelayError, SignedOrder, TokenPairsItem, TokenTradeInfo};
use crate::tokens::TokenRegistry;

/// Relay-to-application model converter.
#[derive(Clone)]
pub struct Translator {
    registry: Arc<dyn TokenRegistry>,
    fee_token_decimals: u32,
    pair_emission: PairEmission,
}

impl Translator {
    pub fn new(
        registry: Arc<dyn TokenRegistry>,
        fee_token_decimals: u32,
        pair_emission: PairEmission,
    ) -> Self {
        Self {
            registry,
            fee_token_decimals,
            pair_emission,
        }
    }

    /// Renders a base-unit amount of the token at `token_address`.
    ///
    /// Tokens with unknown decimals keep their base-unit value and malformed
    /// amounts are passed through verbatim, so every order still converts.
    pub async fn render_token_amount(
        &self,
        token_address: &str,
        raw: &str,
    ) -> Result<String, RelayError> {
        let Some(decimals) = self.registry.token_decimals(token_address).await? else {
            warn!(
                "No decimals known for token {}, keeping base units {}",
                token_address, raw
            );
            return Ok(render_or_keep(raw, 0));
        };
        Ok(render_or_keep(raw, decimals))
    }

    /// Renders a base-unit fee amount.
    pub fn render_fee(&self, raw: &str) -> String {
        render_or_keep(raw, self.fee_token_decimals)
    }

    /// Maps every relay order onto an application [`Order`], in input order.
    pub async fn convert_orders(&self, signed_orders: &[SignedOrder]) -> Result<Vec<Order>, RelayError> {
        let mut orders = Vec::with_capacity(signed_orders.len());
        for signed in signed_orders {
            orders.push(Order {
                maker: signed.maker.clone(),
                taker: signed.taker.clone(),
                maker_fee: self.render_fee(&signed.maker_fee),
                taker_fee: self.render_fee(&signed.taker_fee),
                maker_token_amount: self
                    .render_token_amount(&signed.maker_token_address, &signed.maker_token_amount)
                    .await?,
                taker_token_amount: self
                    .render_token_amount(&signed.taker_token_address, &signed.taker_token_amount)
                    .await?,
                maker_token_address: signed.maker_token_address.clone(),
                taker_token_address: signed.taker_token_address.clone(),
                ec_signature: Some(signed.ec_signature.clone()),
                exchange_contract_address: signed.exchange_contract_address.clone(),
                expiration_unix_timestamp_sec: signed.expiration_unix_timestamp_sec.clone(),
                fee_recipient: signed.fee_recipient.clone(),
                salt: signed.salt.clone(),
                value_required: String::new(),
            });
        }
        Ok(orders)
    }

    /// Maps relay token pairs onto [`TokenPair`]s.
    ///
    /// Pairs with a token the registry cannot name are skipped. Depending on
    /// the emission setting each pair yields (A, B) only or (A, B) and (B, A);
    /// repeated orientations are dropped, first occurrence wins.
    pub async fn convert_token_pairs(&self, pairs: &[TokenPairsItem]) -> Result<Vec<TokenPair>, RelayError> {
        let mut tokens = Vec::new();
        for pair in pairs {
            let token_a_symbol = self.registry.token_symbol(&pair.token_a.address).await?;
            let token_b_symbol = self.registry.token_symbol(&pair.token_b.address).await?;

            let (Some(token_a_symbol), Some(token_b_symbol)) = (token_a_symbol, token_b_symbol) else {
                continue;
            };

            let (min_a, max_a) = self.render_bounds(&pair.token_a).await?;
            let (min_b, max_b) = self.render_bounds(&pair.token_b).await?;

            let forward = TokenPair {
                token_a_symbol,
                token_b_symbol,
                min_token_a_amount: min_a,
                max_token_a_amount: max_a,
                min_token_b_amount: min_b,
                max_token_b_amount: max_b,
            };

            if self.pair_emission == PairEmission::Symmetric {
                let backward = forward.reversed();
                tokens.push(forward);
                tokens.push(backward);
            } else {
                tokens.push(forward);
            }
        }
        Ok(distinct_token_pairs(tokens))
    }

    async fn render_bounds(&self, info: &TokenTradeInfo) -> Result<(String, String), RelayError> {
        let min = self.render_token_amount(&info.address, &info.min_amount).await?;
        let max = self.render_token_amount(&info.address, &info.max_amount).await?;
        Ok((min, max))
    }
}

/// Scales `raw` by `decimals`, or keeps it as sent if it is not an integer.
fn render_or_keep(raw: &str, decimals: u32) -> String {
    match from_base_units(raw, decimals) {
        Ok(rendered) => rendered,
        Err(e) => {
            warn!("Keeping relay amount as sent: {}", e);
            raw.to_string()
        }
    }
}

/// Drops pairs whose (A, B) symbols were already seen, keeping order.
pub fn distinct_token_pairs(pairs: Vec<TokenPair>) -> Vec<TokenPair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert((pair.token_a_symbol.clone(), pair.token_b_symbol.clone())))
        .collect()
}
