//! Domain models for the checkout gateway.

pub mod money;
pub mod order;
pub mod payment;
pub mod receipt;

pub use money::{Currency, to_minor_units};
pub use order::{CaptureMode, OrderDraft};
pub use payment::{PaymentStatus, VerificationOutcome};
pub use receipt::new_receipt;
