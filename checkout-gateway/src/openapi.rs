//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use checkout_types::domain::Currency;
use checkout_types::dto::{
    CreateOrderRequest, CreateOrderResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = inline(serde_json::Value), example = json!({"status": "ok"}))
    )
)]
async fn health() {}

/// Create a payment order
#[utoipa::path(
    post,
    path = "/create-order",
    tag = "checkout",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created with the processor", body = CreateOrderResponse),
        (status = 400, description = "Missing or non-positive amount"),
        (status = 502, description = "Processor unreachable or rejected the order")
    )
)]
async fn create_order() {}

/// Verify a completed payment
#[utoipa::path(
    post,
    path = "/verify-payment",
    tag = "checkout",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Signature authentic and payment captured", body = VerifyPaymentResponse),
        (status = 400, description = "Missing fields, invalid signature, or payment not captured", body = VerifyPaymentResponse),
        (status = 502, description = "Processor unreachable while fetching payment status")
    )
)]
async fn verify_payment() {}

/// OpenAPI documentation for the checkout gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkout Gateway API",
        version = "1.0.0",
        description = "Storefront-facing adapter for the payment processor: creates orders, verifies payment signatures, and gates on captured status.",
    ),
    paths(health, create_order, verify_payment),
    components(
        schemas(
            CreateOrderRequest,
            CreateOrderResponse,
            VerifyPaymentRequest,
            VerifyPaymentResponse,
            Currency,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkout", description = "Order creation and payment verification"),
    )
)]
pub struct ApiDoc;
