//! # Checkout Gateway
//!
//! Application service layer and HTTP adapter for the checkout gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates the checkout flow)
//! - `inbound/` - HTTP adapter (Axum server, CORS configuration)
//!
//! The service is generic over `P: ProcessorClient`, allowing the real
//! Razorpay adapter or a fake processor to be injected.

pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::CheckoutService;
