//! Configuration Management Module
//!
//! This module handles loading and managing configuration for the relay front end.
//! Configuration includes listener settings, static asset locations, the relay
//! endpoint and the token list used for symbol resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "RELAY_FRONTEND_CONFIG_PATH";

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/relay-frontend.toml";

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Main configuration structure containing all service settings.
///
/// This structure holds configuration for:
/// - The static web front end (listeners, assets, DNS validator, TLS material)
/// - The relay network endpoint
/// - Token pair translation behaviour
/// - The token list used to resolve symbols, addresses and decimals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web front end configuration
    pub build: BuildConfig,
    /// Relay network configuration
    pub network: NetworkConfig,
    /// Token pair translation settings
    #[serde(default)]
    pub translator: TranslatorConfig,
    /// Known tokens (symbol, address, decimals)
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
}

/// Static web front end configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Path of the single-page app index file
    pub index: String,
    /// Root directory of the built assets
    pub assets_root: String,
    /// Subdirectory under `assets_root` served at `/static/`
    pub assets_sub_directory: String,
    /// Host address both listeners bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Plain HTTP listener
    pub http: ListenerConfig,
    /// TLS listener
    pub https: ListenerConfig,
    /// DNS ownership validation endpoint
    #[serde(default)]
    pub dns_validator: DnsValidatorConfig,
    /// Certificate material for the TLS listener
    #[serde(default)]
    pub tls: TlsConfig,
}

/// Listener switch and port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Whether this listener serves the site (`use` in the TOML file)
    #[serde(rename = "use")]
    pub enabled: bool,
    /// Port to listen on
    pub port: u16,
}

/// DNS ownership validation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsValidatorConfig {
    /// Whether the endpoint is registered (`use` in the TOML file)
    #[serde(rename = "use", default)]
    pub enabled: bool,
    /// Exact request path, e.g. `/.well-known/pki-validation/token.txt`
    #[serde(default)]
    pub path: String,
    /// Fixed text body returned for the path
    #[serde(default)]
    pub response: String,
}

/// TLS certificate, key and CA chain file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
    pub ca_path: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: "ssl/frontend.crt".to_string(),
            key_path: "ssl/frontend.key".to_string(),
            ca_path: "ssl/frontendca.crt".to_string(),
        }
    }
}

/// Relay network configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Versioned base URL of the relay, e.g. `https://relay.example.com/0x/v0`
    pub url: String,
    /// Address of the 0x exchange contract orders are created for
    pub exchange_contract_address: String,
    /// Decimals of the token fees are denominated in (ZRX)
    #[serde(default = "default_fee_token_decimals")]
    pub fee_token_decimals: u32,
    /// Timeout for a single relay request in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Orientation of token pairs emitted by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairEmission {
    /// Emit both (A, B) and (B, A) for every relay pair
    #[default]
    Symmetric,
    /// Emit only (A, B) as listed by the relay
    Asymmetric,
}

/// Token pair translation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub pair_emission: PairEmission,
}

/// A token known to the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Human-readable symbol (e.g. "WETH")
    pub symbol: String,
    /// On-chain token contract address
    pub address: String,
    /// Number of decimals of the token's base unit
    pub decimals: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_fee_token_decimals() -> u32 {
    18
}

fn default_request_timeout_secs() -> u64 {
    30
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Validates the configuration.
    ///
    /// This function ensures that:
    /// - The relay URL parses and the exchange address is a 20-byte hex address
    /// - Token symbols and addresses are unique and addresses are well formed
    /// - HTTP and HTTPS listeners do not share a port when HTTPS is used
    /// - The DNS validator path is absolute when the validator is enabled
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Configuration is valid
    /// - `Err(anyhow::Error)` - Validation failed
    pub fn validate(&self) -> anyhow::Result<()> {
        url::Url::parse(&self.network.url).map_err(|e| {
            anyhow::anyhow!("Configuration error: invalid network url '{}': {}", self.network.url, e)
        })?;

        validate_hex_address(&self.network.exchange_contract_address).map_err(|e| {
            anyhow::anyhow!("Configuration error: invalid exchange_contract_address: {}", e)
        })?;

        let mut symbols = HashSet::new();
        let mut addresses = HashSet::new();
        for token in &self.tokens {
            validate_hex_address(&token.address)
                .map_err(|e| anyhow::anyhow!("Invalid address for token {}: {}", token.symbol, e))?;
            if !symbols.insert(token.symbol.as_str()) {
                anyhow::bail!("Configuration error: token symbol {} is listed twice", token.symbol);
            }
            if !addresses.insert(token.address.to_lowercase()) {
                anyhow::bail!("Configuration error: token address {} is listed twice", token.address);
            }
        }

        if self.build.https.enabled && self.build.https.port == self.build.http.port {
            anyhow::bail!(
                "Configuration error: HTTP and HTTPS listeners both use port {}",
                self.build.http.port
            );
        }

        let validator = &self.build.dns_validator;
        if validator.enabled && !validator.path.starts_with('/') {
            anyhow::bail!(
                "Configuration error: DNS validator path '{}' must start with '/'",
                validator.path
            );
        }

        Ok(())
    }

    /// Loads configuration from the TOML file.
    ///
    /// The path is taken from `RELAY_FRONTEND_CONFIG_PATH` if set, otherwise
    /// `config/relay-frontend.toml`.
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Successfully loaded and validated configuration
    /// - `Err(anyhow::Error)` - File missing, unparsable, or invalid
    pub fn load_from(config_path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            // Configuration file doesn't exist - user needs to copy template
            Err(anyhow::anyhow!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/relay-frontend.template.toml config/relay-frontend.toml\n\
                Then edit config/relay-frontend.toml with your actual values.",
                config_path
            ))
        }
    }

    /// Creates a default configuration with placeholder values.
    ///
    /// Suitable for local development: the site is served over plain HTTP on
    /// port 8080, HTTPS is off, and no tokens are known.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self {
            build: BuildConfig {
                index: "dist/index.html".to_string(),
                assets_root: "dist".to_string(),
                assets_sub_directory: "static".to_string(),
                host: default_host(),
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
                url: "http://127.0.0.1:3000".to_string(),
                exchange_contract_address: "0x12459c951127e0c374ff9105dda097662a027093".to_string(),
                fee_token_decimals: default_fee_token_decimals(),
                request_timeout_secs: default_request_timeout_secs(),
            },
            translator: TranslatorConfig::default(),
            tokens: Vec::new(),
        }
    }
}

/// Validates a `0x`-prefixed 20-byte hex address.
///
/// # Returns
///
/// - `Ok(())` - Address is well formed
/// - `Err(anyhow::Error)` - Missing prefix, invalid hex, or wrong length
pub fn validate_hex_address(address: &str) -> anyhow::Result<()> {
    let stripped = address
        .strip_prefix("0x")
        .ok_or_else(|| anyhow::anyhow!("Address must be 0x-prefixed hex string"))?;
    let bytes = hex::decode(stripped).map_err(|_| anyhow::anyhow!("Invalid hex address"))?;
    if bytes.len() != 20 {
        anyhow::bail!("Invalid address length: expected 20 bytes");
    }
    Ok(())
}
