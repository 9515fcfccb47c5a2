//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Currency;

// ─────────────────────────────────────────────────────────────────────────────
// Order DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Amount in major units (rupees). Required and must be positive;
    /// optional here so absence surfaces as a validation error rather than
    /// a deserialization reject.
    #[schema(example = 199.99)]
    pub amount: Option<f64>,
}

/// Response after creating an order with the processor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub success: bool,
    /// Processor-assigned order identifier
    #[schema(example = "order_MkWq3rLXjZQ1Aa")]
    pub order_id: String,
    /// Amount in minor units (paise), exactly as submitted to the processor
    #[schema(example = 19999)]
    pub amount: i64,
    pub currency: Currency,
    /// Publishable key id the storefront passes to the checkout widget
    #[schema(example = "rzp_test_4RkGh2P9xQ6LmN")]
    pub key: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Verification DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to verify a completed payment.
///
/// Field names follow the processor's checkout callback payload. All three
/// are required together; there is no partial verification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    #[schema(example = "order_MkWq3rLXjZQ1Aa")]
    pub razorpay_order_id: Option<String>,
    #[schema(example = "pay_MkWsN7vZkQ2Bb3")]
    pub razorpay_payment_id: Option<String>,
    /// Hex-encoded HMAC-SHA256 over `order_id|payment_id`
    pub razorpay_signature: Option<String>,
}

/// Response after a verification attempt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    #[schema(example = "Payment verified successfully")]
    pub message: String,
    /// Processor-reported payment status, present when a payment was fetched
    /// but not captured, so the storefront knows whether to keep polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
