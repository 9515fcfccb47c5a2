//! Checkout CLI
//!
//! Command-line interface for the checkout gateway API. Useful for poking a
//! deployment with test-mode processor credentials.

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkout_client::CheckoutClient;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Checkout gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the checkout gateway
    #[arg(
        long,
        env = "CHECKOUT_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order operations
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Check gateway health
    Health,
}

#[derive(Subcommand)]
enum OrderCommands {
    /// Create a new payment order
    Create {
        /// Amount in rupees (major units), e.g. 199.99
        #[arg(long)]
        amount: f64,
    },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Verify a completed payment against the processor
    Verify {
        /// Processor order id from the checkout callback
        #[arg(long)]
        order_id: String,
        /// Processor payment id from the checkout callback
        #[arg(long)]
        payment_id: String,
        /// Hex-encoded payment signature from the checkout callback
        #[arg(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = CheckoutClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Gateway is healthy");
            } else {
                println!("✗ Gateway is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Order { action } => match action {
            OrderCommands::Create { amount } => {
                let order = client.create_order(amount).await?;
                println!("{}", serde_json::to_string_pretty(&order)?);
            }
        },

        Commands::Payment { action } => match action {
            PaymentCommands::Verify {
                order_id,
                payment_id,
                signature,
            } => {
                let result = client
                    .verify_payment(&order_id, &payment_id, &signature)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                if !result.success {
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}
