//! HTTP to HTTPS redirect routes

use warp::filters::path::FullPath;
use warp::filters::BoxedFilter;
use warp::http::header::{HeaderValue, LOCATION};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Filter;

use super::site::{get_or_head, text_response};

/// Computes the HTTPS location for a request.
///
/// The first `:<http_port>` in the host is replaced by `:<https_port>`; hosts
/// without the HTTP port are kept as sent.
pub fn redirect_location(host: &str, path_and_query: &str, http_port: u16, https_port: u16) -> String {
    let http = format!(":{}", http_port);
    let https = format!(":{}", https_port);
    let host = if host.contains(&http) {
        host.replacen(&http, &https, 1)
    } else {
        host.to_string()
    };
    format!("https://{}{}", host, path_and_query)
}

fn redirect_response(
    host: Option<String>,
    full: FullPath,
    query: String,
    http_port: u16,
    https_port: u16,
) -> Response {
    let Some(host) = host else {
        return text_response(StatusCode::BAD_REQUEST, "Missing Host header");
    };

    let path_and_query = if query.is_empty() {
        full.as_str().to_string()
    } else {
        format!("{}?{}", full.as_str(), query)
    };
    let location = redirect_location(&host, &path_and_query, http_port, https_port);

    match HeaderValue::from_str(&location) {
        Ok(value) => {
            let mut response = Response::new(Default::default());
            *response.status_mut() = StatusCode::FOUND;
            response.headers_mut().insert(LOCATION, value);
            response
        }
        Err(_) => text_response(StatusCode::BAD_REQUEST, "Invalid Host header"),
    }
}

/// Creates the redirect-only routes: every GET or HEAD goes to its HTTPS equivalent.
pub fn redirect_routes(http_port: u16, https_port: u16) -> BoxedFilter<(Response,)> {
    let query = warp::query::raw().or(warp::any().map(String::new)).unify();

    get_or_head()
        .and(warp::header::optional::<String>("host"))
        .and(warp::path::full())
        .and(query)
        .map(move |host: Option<String>, full: FullPath, query: String| {
            redirect_response(host, full, query, http_port, https_port)
        })
        .boxed()
}
