use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use chainlog_ledger::{Ledger, LedgerOptions, LedgerStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// A chainlog node: one ledger served over HTTP.
pub struct ChainServer {
    config: ServerConfig,
    ledger: Arc<dyn LedgerStore>,
}

impl ChainServer {
    /// Create a node with a fresh ledger configured from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let ledger = Ledger::with_options(LedgerOptions {
            strict_root: config.strict_root,
        });
        Self::with_ledger(config, Arc::new(ledger))
    }

    /// Create a node serving an existing ledger.
    pub fn with_ledger(config: ServerConfig, ledger: Arc<dyn LedgerStore>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> Arc<dyn LedgerStore> {
        Arc::clone(&self.ledger)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.ledger()), &self.config)
    }

    /// Bind the configured address and serve until the process exits.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(%addr, strict_root = self.config.strict_root, "chainlog node listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
