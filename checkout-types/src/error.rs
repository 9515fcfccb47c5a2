//! Error types for the checkout gateway.

use crate::ports::ProcessorError;

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: the first three are client-caused
/// (400), `Gateway` is an upstream processor failure (502). A failed
/// signature must never be reported as a gateway problem - one implies a
/// forged request, the other an infrastructure fault.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid payment signature")]
    SignatureInvalid,

    #[error("Payment not captured (status: {status})")]
    NotCaptured { status: String },

    #[error("Gateway error: {detail}")]
    Gateway { status: Option<u16>, detail: String },
}

impl From<ProcessorError> for AppError {
    fn from(err: ProcessorError) -> Self {
        match err {
            ProcessorError::Transport(detail) => AppError::Gateway {
                status: None,
                detail,
            },
            ProcessorError::Upstream { status, body } => AppError::Gateway {
                status: Some(status),
                detail: body,
            },
        }
    }
}
