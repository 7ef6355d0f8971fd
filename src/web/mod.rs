//! Static Web Front End Module
//!
//! Serves the built single-page app over HTTP and HTTPS, rewrites bundle
//! requests to pre-compressed files, answers the DNS validator path, and
//! redirects plain HTTP to HTTPS when configured to.

mod redirect;
mod server;
mod site;
mod tls;

pub use redirect::{redirect_location, redirect_routes};
pub use server::{handle_rejection, with_recovery, FrontendServer};
pub use site::{site_routes, text_response, GzipRules, GZIP_PATTERNS};
pub use tls::TlsMaterial;
