//! Front end server
//!
//! Wires the site and redirect routes onto the HTTP listener and, when
//! enabled, the TLS listener.

use anyhow::{Context, Result};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use super::redirect::redirect_routes;
use super::site::{site_routes, text_response};
use super::tls::TlsMaterial;
use crate::config::BuildConfig;

// ============================================================================
// REJECTION HANDLER
// ============================================================================

/// Converts unmatched requests into plain-text error responses.
pub async fn handle_rejection(rej: Rejection) -> Result<Response, Infallible> {
    let status = if rej.is_not_found() {
        StatusCode::NOT_FOUND
    } else if rej.find::<warp::reject::MethodNotAllowed>().is_some() {
        StatusCode::METHOD_NOT_ALLOWED
    } else {
        error!("Unhandled rejection: {:?}", rej);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok(text_response(status, status.canonical_reason().unwrap_or("Error")))
}

/// Attaches the rejection handler to a set of routes.
pub fn with_recovery(
    routes: BoxedFilter<(Response,)>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    routes.recover(handle_rejection)
}

// ============================================================================
// SERVER IMPLEMENTATION
// ============================================================================

/// Static front end server.
pub struct FrontendServer {
    build: Arc<BuildConfig>,
}

impl FrontendServer {
    pub fn new(build: BuildConfig) -> Self {
        Self {
            build: Arc::new(build),
        }
    }

    /// Routes of the plain HTTP listener.
    ///
    /// With `http.use` set the listener serves the site and, if enabled, the
    /// DNS validator; otherwise it only redirects to HTTPS.
    pub fn http_routes(&self) -> Result<BoxedFilter<(Response,)>> {
        if self.build.http.enabled {
            site_routes(&self.build, true)
        } else {
            Ok(redirect_routes(self.build.http.port, self.build.https.port))
        }
    }

    /// Routes of the TLS listener.
    pub fn https_routes(&self) -> Result<BoxedFilter<(Response,)>> {
        site_routes(&self.build, false)
    }

    fn socket_addr(&self, port: u16) -> Result<SocketAddr> {
        format!("{}:{}", self.build.host, port)
            .parse()
            .with_context(|| format!("Failed to parse listen address {}:{}", self.build.host, port))
    }

    /// Starts the listeners and serves until the process stops.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Listeners shut down
    /// * `Err(anyhow::Error)` - Invalid address, bind failure, or missing TLS material
    pub async fn run(&self) -> Result<()> {
        let http_addr = self.socket_addr(self.build.http.port)?;
        let http_mode = if self.build.http.enabled { "site" } else { "redirect" };

        let tls = if self.build.https.enabled {
            Some(TlsMaterial::load(&self.build.tls)?)
        } else {
            None
        };

        let (bound, http_server) = warp::serve(with_recovery(self.http_routes()?))
            .try_bind_ephemeral(http_addr)
            .with_context(|| format!("Failed to bind HTTP listener on {}", http_addr))?;
        info!("App running on {} ({})", bound, http_mode);

        let Some(tls) = tls else {
            http_server.await;
            return Ok(());
        };

        let https_addr = self.socket_addr(self.build.https.port)?;
        // warp's TLS server has no fallible bind; a taken port panics here.
        let https_server = warp::serve(with_recovery(self.https_routes()?))
            .tls()
            .cert(tls.cert_chain)
            .key(tls.key)
            .run(https_addr);
        info!("App running on {} (tls)", https_addr);

        tokio::join!(http_server, https_server);
        Ok(())
    }
}
