//! Static page serving module
//!
//! Loads the configured HTML page from disk and builds the response.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the configured page.
///
/// The file is read fresh on every request; a missing or unreadable file
/// turns into a 404 for that request only and leaves the server running.
pub async fn serve_page(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match load_page(&state.page_path).await {
        Some((content, content_type)) => {
            http::build_page_response(&content, content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load the page file and determine its content type from the extension
pub async fn load_page(path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read page '{}': {}", path.display(), e));
            return None;
        }
    };

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, PageConfig, ServerConfig};
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    fn write_temp_page(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn state_for(page_file: &Path) -> AppState {
        AppState::new(Config {
            server: ServerConfig {
                host: "localhost".to_string(),
                port: 3000,
            },
            page: PageConfig {
                file: page_file.to_str().unwrap().to_string(),
            },
            logging: LoggingConfig { access_log: false },
        })
    }

    #[tokio::test]
    async fn test_load_page_returns_file_bytes() {
        let path = write_temp_page("pageserver_load_test.html", b"<h1>hello</h1>");
        let (content, content_type) = load_page(&path).await.unwrap();
        assert_eq!(content, b"<h1>hello</h1>");
        assert_eq!(content_type, "text/html; charset=utf-8");
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_load_page_missing_file_is_none() {
        assert!(load_page(Path::new("/no/such/page.html")).await.is_none());
    }

    #[tokio::test]
    async fn test_serve_page_body_matches_file() {
        let path = write_temp_page("pageserver_serve_test.html", b"<html>body</html>");
        let state = state_for(&path);

        let response = serve_page(&state, false).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>body</html>");
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_serve_page_head_has_headers_but_no_body() {
        let path = write_temp_page("pageserver_head_test.html", b"<html>head</html>");
        let state = state_for(&path);

        let response = serve_page(&state, true).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Length"], "17");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_serve_page_deleted_file_is_404() {
        let path = write_temp_page("pageserver_deleted_test.html", b"gone soon");
        let state = state_for(&path);
        std::fs::remove_file(&path).unwrap();

        let response = serve_page(&state, false).await;
        assert_eq!(response.status(), 404);
    }
}
