use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initializes the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info` when unset or invalid.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// Binds the HTTP listener on all interfaces.
///
/// # Arguments
/// - `port` - TCP port from the command line
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `0.0.0.0:port`
/// - `Err(AppError::IoErr)` - Port unavailable or insufficient permissions
pub async fn bind_listener(port: u16) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening for HTTP requests on {}", addr);

    Ok(listener)
}
