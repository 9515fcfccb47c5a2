//! # Checkout Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment (fail fast on missing credentials)
//! - Initialize the Razorpay processor adapter
//! - Create the checkout service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_gateway::{
    CheckoutService,
    inbound::{CorsOptions, HttpServer},
};
use checkout_razorpay::{RazorpayClient, RazorpayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_app=debug,checkout_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing credentials abort startup by design
    let config = config::Config::from_env()?;

    tracing::info!("Starting checkout server on port {}", config.port);
    tracing::info!("Using processor endpoint: {}", config.razorpay_base_url);

    // Build the processor adapter (credentials are immutable from here on)
    let processor = RazorpayClient::new(
        RazorpayConfig::new(config.razorpay_key_id, config.razorpay_key_secret)
            .with_base_url(config.razorpay_base_url)
            .with_timeout(config.processor_timeout),
    )?;

    // Create the checkout service
    let service = CheckoutService::new(processor);

    // Create and run the HTTP server
    let cors = CorsOptions::new(config.allowed_origins);
    let server = HttpServer::with_cors(service, cors);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
