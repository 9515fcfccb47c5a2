//! Payment status and verification outcome.

use serde::{Deserialize, Serialize};

/// Processor-reported lifecycle state of a payment.
///
/// Only `Captured` means funds were actually collected; `Authorized` is a
/// hold, everything else is a non-terminal or failed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Created,
    Authorized,
    Captured,
    Refunded,
    Failed,
    /// A status string this gateway does not know about. Kept verbatim so
    /// the storefront sees what the processor reported.
    #[serde(untagged)]
    Other(String),
}

impl PaymentStatus {
    pub fn is_captured(&self) -> bool {
        matches!(self, PaymentStatus::Captured)
    }
}

impl AsRef<str> for PaymentStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Authorized => "authorized",
            Self::Captured => "captured",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "created" => Self::Created,
            "authorized" => Self::Authorized,
            "captured" => Self::Captured,
            "refunded" => Self::Refunded,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Outcome of a payment verification request.
///
/// `Verified` requires both the signature check and the captured-status gate
/// to pass; the two checks are independent and both mandatory. Signature
/// failure and processor failure are distinct on purpose - one implies a
/// forged or tampered request, the other an infrastructure problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    SignatureInvalid,
    NotCaptured { status: PaymentStatus },
    GatewayError { detail: String },
}
