//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: matches the single root route
//! and answers everything else with a 404.

use crate::config::AppState;
use crate::handler::static_page;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Outcome of matching a request against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// `GET /` or `HEAD /` - serve the configured page
    Page { is_head: bool },
    /// Any other method or path
    NotFound,
}

/// Match method and path against the single registered route.
///
/// HEAD is answered alongside GET with the same headers and an empty body.
pub fn route(method: &Method, path: &str) -> RouteMatch {
    match (method, path) {
        (&Method::GET, "/") => RouteMatch::Page { is_head: false },
        (&Method::HEAD, "/") => RouteMatch::Page { is_head: true },
        _ => RouteMatch::NotFound,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();

    let response = match route(method, path) {
        RouteMatch::Page { is_head } => static_page::serve_page(&state, is_head).await,
        RouteMatch::NotFound => http::build_404_response(),
    };

    if state.config.logging.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(method, path, response.status().as_u16(), body_bytes);
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_get_matches_page() {
        assert_eq!(route(&Method::GET, "/"), RouteMatch::Page { is_head: false });
    }

    #[test]
    fn test_root_head_matches_page() {
        assert_eq!(route(&Method::HEAD, "/"), RouteMatch::Page { is_head: true });
    }

    #[test]
    fn test_other_paths_are_not_found() {
        assert_eq!(route(&Method::GET, "/missing"), RouteMatch::NotFound);
        assert_eq!(route(&Method::GET, "/index.html"), RouteMatch::NotFound);
        assert_eq!(route(&Method::HEAD, "/about"), RouteMatch::NotFound);
    }

    #[test]
    fn test_other_methods_are_not_found() {
        assert_eq!(route(&Method::POST, "/"), RouteMatch::NotFound);
        assert_eq!(route(&Method::PUT, "/"), RouteMatch::NotFound);
        assert_eq!(route(&Method::DELETE, "/"), RouteMatch::NotFound);
        assert_eq!(route(&Method::OPTIONS, "/"), RouteMatch::NotFound);
    }
}
