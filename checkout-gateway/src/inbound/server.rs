//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use checkout_types::ProcessorClient;

use super::cors::CorsOptions;
use super::handlers::{self, AppState};
use crate::CheckoutService;
use crate::openapi::ApiDoc;

/// HTTP Server for the checkout gateway.
pub struct HttpServer<P: ProcessorClient> {
    state: Arc<AppState<P>>,
    cors: CorsOptions,
}

impl<P: ProcessorClient> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: CheckoutService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            cors: CorsOptions::default(),
        }
    }

    /// Creates a new HTTP server with an explicit CORS policy.
    pub fn with_cors(service: CheckoutService<P>, cors: CorsOptions) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            cors,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/create-order", post(handlers::create_order::<P>))
            .route("/verify-payment", post(handlers::verify_payment::<P>))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(self.cors.layer())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
