//! Server lifecycle
//!
//! The listener is bound once, served until [`ServerHandle::shutdown`] is
//! called, and released exactly once.

use std::net::SocketAddr;

use amuse_common::{Error, Result};
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::{build_router, AppState};

/// A bound, not yet serving, query server
pub struct QueryServer {
    listener: TcpListener,
    state: AppState,
}

impl QueryServer {
    /// Bind the listening socket. A port already in use is an error; there
    /// is no fallback port.
    pub async fn bind(addr: impl ToSocketAddrs, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, state })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Start serving in a background task
    pub fn serve(self) -> Result<ServerHandle> {
        let addr = self.local_addr()?;
        let QueryServer { listener, state } = self;
        let app = build_router(state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    // A dropped sender also stops the server
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!("Amuse server listening at http://{}", addr);
        Ok(ServerHandle {
            addr,
            shutdown_tx,
            task,
        })
    }
}

/// Running server; owns the listening socket until shut down
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections, let in-flight requests finish, and close
    /// the listener.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down server at {}", self.addr);
        // Send fails only if the server already stopped on its own
        let _ = self.shutdown_tx.send(());

        match self.task.await {
            Ok(result) => {
                result?;
                info!("Server shutdown complete");
                Ok(())
            }
            Err(e) => Err(Error::Internal(format!("Server task failed: {}", e))),
        }
    }
}
