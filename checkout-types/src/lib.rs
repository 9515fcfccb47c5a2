//! # Checkout Types
//!
//! Domain types and port traits for the checkout gateway.
//! This crate has no IO dependencies beyond the RNG used for receipt
//! tokens - only data structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (money conversion, receipts, payment status)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CaptureMode, Currency, OrderDraft, PaymentStatus, VerificationOutcome, new_receipt,
    to_minor_units,
};
pub use dto::*;
pub use error::AppError;
pub use ports::{ProcessorClient, ProcessorError, ProcessorOrder, ProcessorPayment};
