//! Static file server for local development.
//!
//! Serves a directory over HTTP with permissive CORS so component
//! bundles can be loaded from any origin while developing.

mod server;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use log::{debug, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use tokio::net::TcpListener;

use crate::server::{handle, ServeError, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "joist-serve", version, about = "Development file server")]
struct Args {
    /// Directory to serve
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
    }
}

async fn run(args: Args) -> Result<(), ServeError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    println!("Server running at http://localhost:{}", args.port);
    println!("Press Ctrl+C to stop");

    let root = Arc::new(args.root);
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("accept failed: {}", e);
                continue;
            }
        };
        debug!("connection from {}", peer);

        let io = TokioIo::new(stream);
        let root = Arc::clone(&root);
        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let root = Arc::clone(&root);
                async move { Ok::<_, Infallible>(handle(&root, req).await) }
            });

            // Connection errors are not critical (client may close early)
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                debug!("connection error: {}", e);
            }
        });
    }
}
