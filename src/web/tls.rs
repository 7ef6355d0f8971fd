//! TLS material for the HTTPS listener

use anyhow::{Context, Result};

use crate::config::TlsConfig;

const CERTIFICATE_MARKER: &str = "-----BEGIN CERTIFICATE-----";
const PRIVATE_KEY_MARKER: &str = "PRIVATE KEY-----";

/// Checks that `bytes` is UTF-8 text holding a PEM block with `marker`.
///
/// The TLS listener cannot report bad material once started, so it is
/// rejected here.
fn ensure_pem(bytes: &[u8], marker: &str) -> Result<()> {
    let text = std::str::from_utf8(bytes).context("File is not PEM text")?;
    if !text.contains(marker) {
        anyhow::bail!("No PEM block containing '{}' found", marker);
    }
    Ok(())
}

/// PEM-encoded certificate chain and private key.
#[derive(Clone)]
pub struct TlsMaterial {
    /// Server certificate followed by the CA chain
    pub cert_chain: Vec<u8>,
    pub key: Vec<u8>,
}

impl TlsMaterial {
    /// Reads certificate, key and CA chain from disk.
    ///
    /// # Returns
    ///
    /// * `Ok(TlsMaterial)` - All three files were read
    /// * `Err(anyhow::Error)` - A file is missing, unreadable, or not PEM
    pub fn load(tls: &TlsConfig) -> Result<Self> {
        let mut cert_chain = std::fs::read(&tls.cert_path)
            .with_context(|| format!("Failed to read TLS certificate '{}'", tls.cert_path))?;
        let key = std::fs::read(&tls.key_path)
            .with_context(|| format!("Failed to read TLS private key '{}'", tls.key_path))?;
        let ca = std::fs::read(&tls.ca_path)
            .with_context(|| format!("Failed to read TLS CA chain '{}'", tls.ca_path))?;

        ensure_pem(&cert_chain, CERTIFICATE_MARKER)
            .with_context(|| format!("Invalid TLS certificate '{}'", tls.cert_path))?;
        ensure_pem(&key, PRIVATE_KEY_MARKER)
            .with_context(|| format!("Invalid TLS private key '{}'", tls.key_path))?;
        ensure_pem(&ca, CERTIFICATE_MARKER)
            .with_context(|| format!("Invalid TLS CA chain '{}'", tls.ca_path))?;

        if !cert_chain.ends_with(b"\n") {
            cert_chain.push(b'\n');
        }
        cert_chain.extend_from_slice(&ca);

        Ok(Self { cert_chain, key })
    }
}
