//! Checkout Application Service
//!
//! Orchestrates order creation and payment verification through the
//! processor port. Contains NO infrastructure logic - pure business
//! orchestration. The service is stateless: every request re-derives its
//! result from caller input and the processor's authoritative state.

use checkout_types::{
    AppError, CreateOrderRequest, CreateOrderResponse, Currency, OrderDraft, ProcessorClient,
    VerificationOutcome, VerifyPaymentRequest, new_receipt, to_minor_units,
};

/// Settlement currency for this deployment.
const CURRENCY: Currency = Currency::INR;

/// Application service for the checkout flow.
///
/// Generic over `P: ProcessorClient` - the adapter is injected at compile
/// time. This enables:
/// - Swapping processors without code changes
/// - Testing with a fake processor
/// - Compile-time checks for port implementation
pub struct CheckoutService<P: ProcessorClient> {
    processor: P,
}

impl<P: ProcessorClient> CheckoutService<P> {
    /// Creates a new checkout service with the given processor.
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Returns a reference to the underlying processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Order Creation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a processor order for the given major-unit amount.
    ///
    /// Validation happens before any outbound call; a processor failure is
    /// surfaced as-is, never retried. On success the returned amount is
    /// exactly the minor-unit value submitted, so the storefront can
    /// cross-check for manipulation.
    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, AppError> {
        let amount_major = match req.amount {
            Some(a) if a.is_finite() && a > 0.0 => a,
            Some(_) => {
                return Err(AppError::BadRequest("Amount must be positive".into()));
            }
            None => {
                return Err(AppError::BadRequest("Amount is required".into()));
            }
        };

        let amount_minor = to_minor_units(amount_major);
        let draft = OrderDraft::auto_capture(amount_minor, CURRENCY, new_receipt());

        let order = self.processor.create_order(&draft).await?;

        Ok(CreateOrderResponse {
            success: true,
            order_id: order.id,
            amount: amount_minor,
            currency: CURRENCY,
            key: self.processor.publishable_key().to_string(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Verification
    // ─────────────────────────────────────────────────────────────────────────────

    /// Verifies a completed payment.
    ///
    /// Two independent checks, both mandatory: the HMAC signature proves the
    /// callback came from the processor, the status fetch proves funds were
    /// actually captured. Passing the signature check alone is never enough.
    pub async fn verify_payment(
        &self,
        req: VerifyPaymentRequest,
    ) -> Result<VerificationOutcome, AppError> {
        let order_id = required_field(&req.razorpay_order_id, "razorpay_order_id")?;
        let payment_id = required_field(&req.razorpay_payment_id, "razorpay_payment_id")?;
        let signature = required_field(&req.razorpay_signature, "razorpay_signature")?;

        if !self
            .processor
            .verify_signature(order_id, payment_id, signature)
        {
            tracing::warn!(order_id, payment_id, "payment signature mismatch");
            return Ok(VerificationOutcome::SignatureInvalid);
        }

        Ok(self.resolve_captured(payment_id).await)
    }

    /// Fetches the payment from the processor and gates on captured status.
    ///
    /// Idempotent: repeated calls for unchanged upstream state yield the
    /// same outcome. Only invoked after the signature check has passed.
    pub async fn resolve_captured(&self, payment_id: &str) -> VerificationOutcome {
        match self.processor.fetch_payment(payment_id).await {
            Ok(payment) if payment.status.is_captured() => VerificationOutcome::Verified,
            Ok(payment) => VerificationOutcome::NotCaptured {
                status: payment.status,
            },
            Err(err) => {
                tracing::error!(payment_id, error = %err, "payment fetch failed");
                VerificationOutcome::GatewayError {
                    detail: err.to_string(),
                }
            }
        }
    }
}

fn required_field<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", name))),
    }
}
