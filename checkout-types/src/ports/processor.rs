//! Payment processor port.
//!
//! This is the primary port in our hexagonal architecture. The real
//! Razorpay adapter implements it; tests inject fakes. The asset store and
//! notifier the storefront also talks to are separate external services and
//! deliberately have no port here.

use serde::{Deserialize, Serialize};

use crate::domain::{Currency, OrderDraft, PaymentStatus};

/// Error type for processor operations.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// Request never completed: connect failure, timeout, malformed body.
    #[error("processor request failed: {0}")]
    Transport(String),

    /// Processor answered with a non-success status. Body is kept verbatim
    /// for diagnosis at the caller.
    #[error("processor returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
}

/// An order as acknowledged by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorOrder {
    /// Processor-assigned order identifier
    pub id: String,
    /// Amount in minor units, echoed back by the processor
    pub amount: i64,
    pub currency: Currency,
    pub receipt: String,
}

/// A payment as fetched from the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorPayment {
    pub id: String,
    pub order_id: Option<String>,
    /// Amount in minor units
    pub amount: i64,
    pub status: PaymentStatus,
}

/// Port trait for the payment processor.
///
/// Implementations hold immutable credentials loaded at startup; every
/// method is safe to call concurrently from independent requests.
#[async_trait::async_trait]
pub trait ProcessorClient: Send + Sync + 'static {
    /// Submits an order draft to the processor's order-creation endpoint.
    async fn create_order(&self, draft: &OrderDraft) -> Result<ProcessorOrder, ProcessorError>;

    /// Fetches a payment's current state by its processor id.
    async fn fetch_payment(&self, payment_id: &str) -> Result<ProcessorPayment, ProcessorError>;

    /// Recomputes the shared-secret signature over `order_id|payment_id`
    /// and compares it to `signature` in constant time.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;

    /// The publishable key id the storefront embeds in its checkout widget.
    fn publishable_key(&self) -> &str;
}
