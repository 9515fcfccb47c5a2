//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use checkout_types::{
    AppError, CreateOrderRequest, ProcessorClient, VerificationOutcome, VerifyPaymentRequest,
    VerifyPaymentResponse,
};

use crate::CheckoutService;

/// Application state shared across handlers.
pub struct AppState<P: ProcessorClient> {
    pub service: CheckoutService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, payment_status) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::SignatureInvalid => (
                StatusCode::BAD_REQUEST,
                "Invalid payment signature".into(),
                None,
            ),
            AppError::NotCaptured { status } => (
                StatusCode::BAD_REQUEST,
                "Payment not captured".into(),
                Some(status.clone()),
            ),
            AppError::Gateway { status, detail } => {
                tracing::error!(upstream_status = ?status, %detail, "processor call failed");
                (StatusCode::BAD_GATEWAY, "Payment gateway error".into(), None)
            }
        };

        let mut body = serde_json::json!({
            "success": false,
            "message": message,
        });
        if let Some(payment_status) = payment_status {
            body["status"] = payment_status.into();
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create a processor order for the requested amount.
#[tracing::instrument(skip(state, req), fields(amount = ?req.amount))]
pub async fn create_order<P: ProcessorClient>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.service.create_order(req).await?;
    Ok(Json(order))
}

/// Verify a completed payment: signature check, then captured-status gate.
#[tracing::instrument(
    skip(state, req),
    fields(order_id = ?req.razorpay_order_id, payment_id = ?req.razorpay_payment_id)
)]
pub async fn verify_payment<P: ProcessorClient>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.service.verify_payment(req).await?;

    match outcome {
        VerificationOutcome::Verified => Ok(Json(VerifyPaymentResponse {
            success: true,
            message: "Payment verified successfully".into(),
            status: None,
        })),
        VerificationOutcome::SignatureInvalid => Err(AppError::SignatureInvalid.into()),
        VerificationOutcome::NotCaptured { status } => Err(AppError::NotCaptured {
            status: status.to_string(),
        }
        .into()),
        VerificationOutcome::GatewayError { detail } => Err(AppError::Gateway {
            status: None,
            detail,
        }
        .into()),
    }
}
