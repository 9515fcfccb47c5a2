//! # Checkout Razorpay
//!
//! Outbound adapter for the Razorpay REST API, implementing the
//! [`ProcessorClient`] port: order creation, payment fetch, and the
//! shared-secret payment-signature verifier.
//!
//! Credentials are immutable after construction; the adapter holds no other
//! state, so a single client is safely shared across concurrent requests.

pub mod signature;

use std::time::Duration;

use serde::Deserialize;

use checkout_types::{
    Currency, OrderDraft, PaymentStatus, ProcessorClient, ProcessorError, ProcessorOrder,
    ProcessorPayment,
};

/// Default Razorpay API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

/// Default bound on outbound calls. A breached timeout surfaces as a
/// gateway error; it is never retried.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Credentials and connection settings for the Razorpay API.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// Publishable key id (`rzp_...`), also used as the basic-auth username.
    pub key_id: String,
    /// Shared secret: basic-auth password and HMAC signing key.
    pub key_secret: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl RazorpayConfig {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Razorpay API client.
pub struct RazorpayClient {
    config: RazorpayConfig,
    http: reqwest::Client,
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types (Razorpay JSON bodies)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderBody {
    id: String,
    amount: i64,
    currency: Currency,
    receipt: String,
}

#[derive(Deserialize)]
struct PaymentBody {
    id: String,
    order_id: Option<String>,
    amount: i64,
    status: PaymentStatus,
}

impl RazorpayClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: RazorpayConfig) -> Result<Self, ProcessorError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;

        Ok(Self { config, http })
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ProcessorError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| ProcessorError::Transport(e.to_string()))?;
            serde_json::from_str(&body).map_err(|e| ProcessorError::Transport(e.to_string()))
        } else {
            // Razorpay wraps errors as {"error": {"code", "description", ...}};
            // fall back to the raw body when the shape is unexpected.
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/description")
                        .and_then(|d| d.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            Err(ProcessorError::Upstream {
                status: status.as_u16(),
                body: message,
            })
        }
    }
}

#[async_trait::async_trait]
impl ProcessorClient for RazorpayClient {
    #[tracing::instrument(skip(self, draft), fields(amount = draft.amount, receipt = %draft.receipt))]
    async fn create_order(&self, draft: &OrderDraft) -> Result<ProcessorOrder, ProcessorError> {
        let body = serde_json::json!({
            "amount": draft.amount,
            "currency": draft.currency,
            "receipt": draft.receipt,
            "payment_capture": draft.capture.as_flag(),
        });

        let resp = self
            .http
            .post(format!("{}/v1/orders", self.config.base_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;

        let order: OrderBody = self.handle_response(resp).await?;
        tracing::info!(order_id = %order.id, "order created");

        Ok(ProcessorOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_payment(&self, payment_id: &str) -> Result<ProcessorPayment, ProcessorError> {
        let resp = self
            .http
            .get(format!(
                "{}/v1/payments/{}",
                self.config.base_url, payment_id
            ))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .send()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;

        let payment: PaymentBody = self.handle_response(resp).await?;

        Ok(ProcessorPayment {
            id: payment.id,
            order_id: payment.order_id,
            amount: payment.amount,
            status: payment.status,
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        signature::verify_payment_signature(order_id, payment_id, signature, &self.config.key_secret)
    }

    fn publishable_key(&self) -> &str {
        &self.config.key_id
    }
}
