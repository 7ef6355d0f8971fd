//! Static site routes
//!
//! Serves the single-page app: the index file at `/`, assets under
//! `/static/`, pre-compressed bundles for the gzip rules and the optional DNS
//! validator text.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use warp::filters::path::{FullPath, Tail};
use warp::filters::BoxedFilter;
use warp::http::header::{HeaderValue, CONTENT_ENCODING, CONTENT_TYPE};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::config::{BuildConfig, DnsValidatorConfig};

/// Request paths served from a `.gz` sibling (`*/vendor*.js`, `*/app*.js`),
/// matched case-insensitively.
pub const GZIP_PATTERNS: [&str; 2] = [r"(?i)^.*/vendor.*\.js$", r"(?i)^.*/app.*\.js$"];

/// Path patterns whose assets are served pre-compressed.
#[derive(Debug, Clone)]
pub struct GzipRules {
    patterns: Vec<Regex>,
}

impl GzipRules {
    pub fn new() -> Result<Self> {
        let patterns = GZIP_PATTERNS
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("Invalid gzip pattern {}", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }
}

/// Builds a plain-text response.
pub fn text_response(status: StatusCode, body: &str) -> Response {
    warp::reply::with_status(body.to_string(), status).into_response()
}

/// Matches GET and HEAD requests.
pub(super) fn get_or_head() -> BoxedFilter<()> {
    warp::get().or(warp::head()).unify().boxed()
}

fn not_found() -> Response {
    text_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Joins a request tail onto the asset directory, refusing traversal.
fn resolve_asset(dir: &Path, tail: &str) -> Option<PathBuf> {
    if tail.is_empty() || tail.contains('\\') {
        return None;
    }
    if tail.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return None;
    }
    Some(dir.join(tail))
}

/// Serves the `.gz` sibling of a matching asset.
///
/// Paths outside the rules are rejected so the plain asset route can answer.
/// A matching path without a compressed file is a 404.
async fn serve_gzip_asset(
    dir: Arc<PathBuf>,
    rules: Arc<GzipRules>,
    full: FullPath,
    tail: Tail,
) -> Result<Response, Rejection> {
    if !rules.matches(full.as_str()) {
        return Err(warp::reject::not_found());
    }

    let Some(path) = resolve_asset(&dir, &format!("{}.gz", tail.as_str())) else {
        return Ok(not_found());
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!("Serving {} for {}", path.display(), full.as_str());
            let mut response = Response::new(bytes.into());
            let headers = response.headers_mut();
            headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/javascript"));
            Ok(response)
        }
        Err(e) => {
            debug!("No compressed asset {}: {}", path.display(), e);
            Ok(not_found())
        }
    }
}

fn dns_validator_route(validator: DnsValidatorConfig) -> BoxedFilter<(Response,)> {
    let validator = Arc::new(validator);
    get_or_head()
        .and(warp::path::full())
        .and_then(move |full: FullPath| {
            let validator = validator.clone();
            async move {
                if full.as_str() == validator.path {
                    Ok(text_response(StatusCode::OK, &validator.response))
                } else {
                    Err(warp::reject::not_found())
                }
            }
        })
        .boxed()
}

/// Creates the site routes.
///
/// # Arguments
///
/// * `build` - Front end configuration
/// * `with_validator` - Register the DNS validator if it is enabled
///
/// # Returns
///
/// * `Ok(BoxedFilter)` - Combined routes
/// * `Err(anyhow::Error)` - Failed to compile the gzip rules
pub fn site_routes(build: &BuildConfig, with_validator: bool) -> Result<BoxedFilter<(Response,)>> {
    let assets_dir = Arc::new(Path::new(&build.assets_root).join(&build.assets_sub_directory));
    let rules = Arc::new(GzipRules::new()?);

    let gzip_dir = assets_dir.clone();
    let gzip = get_or_head()
        .and(warp::path("static"))
        .and(warp::path::full())
        .and(warp::path::tail())
        .and_then(move |full: FullPath, tail: Tail| {
            let dir = gzip_dir.clone();
            let rules = rules.clone();
            async move { serve_gzip_asset(dir, rules, full, tail).await }
        });

    let index = get_or_head()
        .and(warp::path::end())
        .and(warp::fs::file(build.index.clone()))
        .map(|file: warp::fs::File| file.into_response());

    let assets = get_or_head()
        .and(warp::path("static"))
        .and(warp::fs::dir(assets_dir.as_ref().clone()))
        .map(|file: warp::fs::File| file.into_response());

    let site = gzip.or(index).unify().or(assets).unify().boxed();

    if with_validator && build.dns_validator.enabled {
        Ok(site
            .or(dns_validator_route(build.dns_validator.clone()))
            .unify()
            .boxed())
    } else {
        Ok(site)
    }
}
