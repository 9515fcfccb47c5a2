//! Order draft submitted to the payment processor.

use serde::{Deserialize, Serialize};

use super::money::Currency;

/// Whether the processor should capture funds automatically on payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    Automatic,
    Manual,
}

impl CaptureMode {
    /// The processor's wire flag: `1` for automatic capture, `0` for manual.
    pub fn as_flag(&self) -> u8 {
        match self {
            CaptureMode::Automatic => 1,
            CaptureMode::Manual => 0,
        }
    }
}

/// An order as submitted to the processor's order-creation endpoint.
///
/// Built per request and handed to the processor immediately; the gateway
/// retains no copy after the call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Amount in minor units (paise).
    pub amount: i64,
    pub currency: Currency,
    /// Opaque unique reference token, see [`super::receipt::new_receipt`].
    pub receipt: String,
    pub capture: CaptureMode,
}

impl OrderDraft {
    /// Creates a draft with automatic capture, the only mode this gateway uses.
    pub fn auto_capture(amount: i64, currency: Currency, receipt: String) -> Self {
        Self {
            amount,
            currency,
            receipt,
            capture: CaptureMode::Automatic,
        }
    }
}
