#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod cors;
mod error;
mod extract;
mod routes;
pub mod tls;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use lectern_config::{Config, ServerConfig, TlsConfig};
use lectern_inference::{ChatCompletionClient, HttpImageSource};
use lectern_tasks::{Models, TaskService, TranscriptFilter};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use tls::Transport;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    tls: Option<TlsConfig>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// The upstream credential is handed to the inference client here and
    /// nowhere else.
    pub fn new(config: Config) -> Self {
        let service = TaskService::new(
            Arc::new(ChatCompletionClient::new(&config.upstream)),
            Arc::new(HttpImageSource::new()),
            Models::from_config(&config.upstream),
            TranscriptFilter::from_config(&config.transcript),
        );

        Self::with_service(config.server, Arc::new(service))
    }

    /// Build the server around an existing task service
    pub fn with_service(config: ServerConfig, service: Arc<TaskService>) -> Self {
        let mut app = routes::endpoint_router(config.limits).with_state(service);

        if config.health.enabled {
            app = app.route(&config.health.path, axum::routing::get(routes::health));
        }

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if config.cors.enabled {
            app = app.layer(cors::cors_layer(&config.cors));
        }

        Self {
            router: app,
            listen_address: config.listen_address,
            tls: config.tls,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Listens with TLS when `[server.tls]` is configured and a certificate
    /// can be loaded or generated, in plain HTTP otherwise. Blocks until the
    /// cancellation token is triggered and open connections drain.
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let transport = match &self.tls {
            Some(tls) => tls::prepare(tls).await,
            None => Transport::Plain,
        };

        let scheme = transport.scheme();

        match transport {
            Transport::Plain => {
                let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
                let local_addr = listener.local_addr()?;
                tracing::info!(%local_addr, scheme, "server listening");

                axum::serve(listener, self.router)
                    .with_graceful_shutdown(async move {
                        shutdown.cancelled().await;
                        tracing::info!("graceful shutdown initiated");
                    })
                    .await?;
            }
            Transport::Tls(rustls) => {
                let handle = axum_server::Handle::new();

                let shutdown_handle = handle.clone();
                tokio::spawn(async move {
                    shutdown.cancelled().await;
                    tracing::info!("graceful shutdown initiated");
                    shutdown_handle.graceful_shutdown(None);
                });

                tracing::info!(local_addr = %self.listen_address, scheme, "server listening");

                axum_server::bind_rustls(self.listen_address, rustls)
                    .handle(handle)
                    .serve(self.router.into_make_service())
                    .await?;
            }
        }

        Ok(())
    }
}
