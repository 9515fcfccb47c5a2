//! CheckoutService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use checkout_types::{
        AppError, CreateOrderRequest, Currency, OrderDraft, PaymentStatus, ProcessorClient,
        ProcessorError, ProcessorOrder, ProcessorPayment, VerificationOutcome,
        VerifyPaymentRequest,
    };

    use crate::CheckoutService;

    /// Fake processor for testing the service layer.
    ///
    /// Signature validity and the fetched payment are configured up front;
    /// outbound calls are recorded so tests can assert what was (not) sent.
    pub struct MockProcessor {
        pub valid_signature: String,
        pub payment: Result<ProcessorPayment, ProcessorError>,
        pub fail_order_creation: Option<(u16, String)>,
        pub created_orders: Mutex<Vec<OrderDraft>>,
        pub fetched_payments: Mutex<Vec<String>>,
    }

    impl MockProcessor {
        pub fn captured() -> Self {
            Self {
                valid_signature: "valid-signature".into(),
                payment: Ok(payment_with_status(PaymentStatus::Captured)),
                fail_order_creation: None,
                created_orders: Mutex::new(Vec::new()),
                fetched_payments: Mutex::new(Vec::new()),
            }
        }

        pub fn with_status(status: PaymentStatus) -> Self {
            Self {
                payment: Ok(payment_with_status(status)),
                ..Self::captured()
            }
        }

        pub fn with_fetch_error(err: ProcessorError) -> Self {
            Self {
                payment: Err(err),
                ..Self::captured()
            }
        }
    }

    fn payment_with_status(status: PaymentStatus) -> ProcessorPayment {
        ProcessorPayment {
            id: "pay_1".into(),
            order_id: Some("order_1".into()),
            amount: 19999,
            status,
        }
    }

    fn clone_error(err: &ProcessorError) -> ProcessorError {
        match err {
            ProcessorError::Transport(d) => ProcessorError::Transport(d.clone()),
            ProcessorError::Upstream { status, body } => ProcessorError::Upstream {
                status: *status,
                body: body.clone(),
            },
        }
    }

    #[async_trait]
    impl ProcessorClient for MockProcessor {
        async fn create_order(&self, draft: &OrderDraft) -> Result<ProcessorOrder, ProcessorError> {
            self.created_orders.lock().unwrap().push(draft.clone());
            if let Some((status, body)) = &self.fail_order_creation {
                return Err(ProcessorError::Upstream {
                    status: *status,
                    body: body.clone(),
                });
            }
            Ok(ProcessorOrder {
                id: "order_1".into(),
                amount: draft.amount,
                currency: draft.currency,
                receipt: draft.receipt.clone(),
            })
        }

        async fn fetch_payment(
            &self,
            payment_id: &str,
        ) -> Result<ProcessorPayment, ProcessorError> {
            self.fetched_payments
                .lock()
                .unwrap()
                .push(payment_id.to_string());
            match &self.payment {
                Ok(p) => Ok(p.clone()),
                Err(e) => Err(clone_error(e)),
            }
        }

        fn verify_signature(&self, _order_id: &str, _payment_id: &str, signature: &str) -> bool {
            signature == self.valid_signature
        }

        fn publishable_key(&self) -> &str {
            "rzp_test_key"
        }
    }

    fn verify_request(signature: &str) -> VerifyPaymentRequest {
        VerifyPaymentRequest {
            razorpay_order_id: Some("order_1".into()),
            razorpay_payment_id: Some("pay_1".into()),
            razorpay_signature: Some(signature.into()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Order creation
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_order_converts_and_relays_amount() {
        let service = CheckoutService::new(MockProcessor::captured());

        let resp = service
            .create_order(CreateOrderRequest {
                amount: Some(199.99),
            })
            .await
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.order_id, "order_1");
        assert_eq!(resp.amount, 19999);
        assert_eq!(resp.currency, Currency::INR);
        assert_eq!(resp.key, "rzp_test_key");

        let orders = service.processor().created_orders.lock().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].amount, 19999);
        assert!(orders[0].receipt.starts_with("rcpt_"));
    }

    #[tokio::test]
    async fn test_create_order_missing_amount_never_reaches_processor() {
        let service = CheckoutService::new(MockProcessor::captured());

        let err = service
            .create_order(CreateOrderRequest { amount: None })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(service.processor().created_orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_positive_and_non_finite() {
        let service = CheckoutService::new(MockProcessor::captured());

        for amount in [0.0, -10.5, f64::NAN, f64::INFINITY] {
            let err = service
                .create_order(CreateOrderRequest {
                    amount: Some(amount),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "amount {amount}");
        }
        assert!(service.processor().created_orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_distinct_receipts_per_request() {
        let service = CheckoutService::new(MockProcessor::captured());
        let req = || CreateOrderRequest { amount: Some(10.0) };

        service.create_order(req()).await.unwrap();
        service.create_order(req()).await.unwrap();

        let orders = service.processor().created_orders.lock().unwrap();
        assert_ne!(orders[0].receipt, orders[1].receipt);
    }

    #[tokio::test]
    async fn test_create_order_surfaces_upstream_failure() {
        let processor = MockProcessor {
            fail_order_creation: Some((401, "authentication failed".into())),
            ..MockProcessor::captured()
        };
        let service = CheckoutService::new(processor);

        let err = service
            .create_order(CreateOrderRequest { amount: Some(50.0) })
            .await
            .unwrap_err();

        match err {
            AppError::Gateway { status, detail } => {
                assert_eq!(status, Some(401));
                assert_eq!(detail, "authentication failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment verification
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_verify_requires_both_signature_and_capture() {
        let service = CheckoutService::new(MockProcessor::captured());

        let outcome = service
            .verify_payment(verify_request("valid-signature"))
            .await
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::Verified);
        // Signature alone is not enough: the status fetch must have happened.
        assert_eq!(
            service.processor().fetched_payments.lock().unwrap().as_slice(),
            ["pay_1"]
        );
    }

    #[tokio::test]
    async fn test_verify_bad_signature_skips_status_fetch() {
        let service = CheckoutService::new(MockProcessor::captured());

        let outcome = service
            .verify_payment(verify_request("tampered-signature"))
            .await
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::SignatureInvalid);
        assert!(service.processor().fetched_payments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_missing_field_never_reaches_verifier() {
        let service = CheckoutService::new(MockProcessor::captured());

        let requests = [
            VerifyPaymentRequest {
                razorpay_order_id: None,
                ..verify_request("valid-signature")
            },
            VerifyPaymentRequest {
                razorpay_payment_id: None,
                ..verify_request("valid-signature")
            },
            VerifyPaymentRequest {
                razorpay_signature: None,
                ..verify_request("valid-signature")
            },
            VerifyPaymentRequest {
                razorpay_signature: Some(String::new()),
                ..verify_request("valid-signature")
            },
        ];

        for req in requests {
            let err = service.verify_payment(req).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
        assert!(service.processor().fetched_payments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_uncaptured_status_is_not_verified() {
        for status in [
            PaymentStatus::Created,
            PaymentStatus::Authorized,
            PaymentStatus::Refunded,
            PaymentStatus::Failed,
        ] {
            let service = CheckoutService::new(MockProcessor::with_status(status.clone()));

            let outcome = service
                .verify_payment(verify_request("valid-signature"))
                .await
                .unwrap();

            assert_eq!(outcome, VerificationOutcome::NotCaptured { status });
        }
    }

    #[tokio::test]
    async fn test_verify_fetch_failure_is_gateway_error_not_signature_error() {
        let service = CheckoutService::new(MockProcessor::with_fetch_error(
            ProcessorError::Transport("connection refused".into()),
        ));

        let outcome = service
            .verify_payment(verify_request("valid-signature"))
            .await
            .unwrap();

        assert!(matches!(outcome, VerificationOutcome::GatewayError { .. }));
    }

    #[tokio::test]
    async fn test_resolve_captured_is_idempotent() {
        let service = CheckoutService::new(MockProcessor::with_status(PaymentStatus::Authorized));

        let first = service.resolve_captured("pay_1").await;
        let second = service.resolve_captured("pay_1").await;

        assert_eq!(first, second);
        assert_eq!(
            service.processor().fetched_payments.lock().unwrap().len(),
            2
        );
    }
}
