//! HTTP Server - JSON API over TCP
//!
//! Provides:
//! - Listener configuration (host, port)
//! - Shared request context
//! - Route handlers and router assembly
//! - Serving with graceful shutdown on Ctrl+C / SIGTERM

pub mod context;
pub mod handlers;
pub mod router;

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;

pub use context::AppContext;
pub use router::build_router;

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port; 0 picks a free port
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP server bound to a listener
pub struct HttpServer {
    listener: TcpListener,
}

impl HttpServer {
    /// Bind the listening socket
    pub async fn bind(config: &HttpServerConfig) -> io::Result<Self> {
        let listener = TcpListener::bind(config.bind_address()).await?;
        Ok(Self { listener })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self, ctx: AppContext) -> io::Result<()> {
        self.run_until(ctx, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, ctx: AppContext, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        log::info!("Listening on {}", addr);

        axum::serve(self.listener, build_router(ctx))
            .with_graceful_shutdown(shutdown)
            .await?;

        log::info!("Server on {} stopped", addr);
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C");
        },
        _ = terminate => {
            log::info!("Received SIGTERM");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_config_builders() {
        let config = HttpServerConfig::default().with_host("127.0.0.1").with_port(8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_serves_health_over_tcp_and_shuts_down() {
        let config = HttpServerConfig::default().with_host("127.0.0.1").with_port(0);
        let server = HttpServer::bind(&config).await.unwrap();
        let addr = server.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(AppContext::new(), async {
            let _ = rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200"));
        assert!(raw.contains("\"toolsCount\":5"));
        assert!(raw.contains("\"favoritesCount\":0"));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
