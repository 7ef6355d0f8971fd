//! Relay Front End Library
//!
//! This crate provides two independent pieces:
//! - a static web front end that serves a built single-page app over HTTP and
//!   HTTPS, with an HTTP-to-HTTPS redirect mode and a DNS validation endpoint
//! - an order service that talks to a 0x standard relayer and converts its
//!   orders and token pairs into the application's models

pub mod config;
pub mod model;
pub mod order_builder;
pub mod order_service;
pub mod relay;
pub mod tokens;
pub mod translator;
pub mod web;

// Re-export commonly used types
pub use config::{BuildConfig, Config, NetworkConfig, PairEmission, TokenConfig};
pub use model::{EcSignature, Order, Price, TokenPair};
pub use order_service::{FeeQuoteRequest, OrderService};
pub use relay::{RelayClient, RelayError, RelayErrorBody};
pub use tokens::{ConfigTokenRegistry, TokenRegistry};
pub use translator::Translator;
pub use web::FrontendServer;
