//! Request handling for the static file server.

use std::net::SocketAddr;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use log::debug;

/// Port the server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 3000;

const NOT_FOUND_BODY: &str = "Not found";

/// Errors that can occur while starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Failed to bind the listen socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Answer one request against the files under `root`.
///
/// Every miss is a 404: unreadable files, directories, and paths that
/// try to step outside the root all take the same branch.
pub async fn handle<B>(root: &Path, req: Request<B>) -> Response<Full<Bytes>> {
    let path = req.uri().path();
    let Some(file) = resolve(root, path) else {
        debug!("404 {}", path);
        return not_found();
    };

    match tokio::fs::read(&file).await {
        Ok(data) => {
            debug!("200 {} -> {}", path, file.display());
            ok(content_type(&file), data)
        }
        Err(e) => {
            debug!("404 {}: {}", path, e);
            not_found()
        }
    }
}

/// Map a request path to a file under `root`.
///
/// `/` serves `index.html`. Paths with non-plain segments resolve to
/// nothing.
fn resolve(root: &Path, path: &str) -> Option<PathBuf> {
    let path = if path == "/" { "/index.html" } else { path };
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

/// Content type by file extension, text/plain when unknown.
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        _ => "text/plain",
    }
}

fn ok(content_type: &'static str, data: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .header("Content-Type", content_type)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(data)))
        .unwrap()
}

fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap()
}
