//! hotspot-server: companion backend for the hotspot scene.
//!
//! Serves `GET /sphere-data?id=<id>` with a templated description. Every
//! connection carries a single request and is handled on its own task.

pub mod connection;
pub mod error;
pub mod protocol;
pub mod routes;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};

pub use error::RequestError;
pub use protocol::{SphereData, SphereId};

/// Pause after a failed accept so a persistent error (e.g. out of file
/// descriptors) does not spin.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of incoming connections for [`serve_with`].
pub trait Accept: Send + Sync {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    fn accept(&self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Accept loop over a TCP listener. Runs until the task is dropped.
pub async fn serve(listener: TcpListener) {
    serve_with(listener).await
}

/// Accept loop. Each connection is handled on its own task; accept errors are
/// logged and retried after [`ACCEPT_BACKOFF`].
pub async fn serve_with<A: Accept>(acceptor: A) {
    loop {
        match acceptor.accept().await {
            Ok((stream, addr)) => {
                tokio::spawn(connection::handle_connection(stream, addr));
            }
            Err(e) => {
                log::warn!("TCP accept error: {e}");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}
