//! Payment signature signing and verification.

use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Signs an order/payment pair using HMAC-SHA256 with the shared secret.
///
/// The message is `order_id|payment_id`, the format the processor's
/// checkout callback signs.
pub fn sign_payment(order_id: &str, payment_id: &str, secret: &str) -> String {
    use hmac::{Hmac, Mac};

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a claimed payment signature using constant-time comparison.
///
/// The timing-safe compare is a correctness requirement: a byte-by-byte
/// early-exit compare would leak signature prefixes through response timing.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let expected = sign_payment(order_id, payment_id, secret);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_9f8e7d";

    #[test]
    fn test_sign_is_deterministic_hex() {
        let sig = sign_payment("order_abc", "pay_xyz", SECRET);
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(sig, sign_payment("order_abc", "pay_xyz", SECRET));
    }

    #[test]
    fn test_round_trip_verification() {
        let sig = sign_payment("order_abc", "pay_xyz", SECRET);
        assert!(verify_payment_signature("order_abc", "pay_xyz", &sig, SECRET));
    }

    #[test]
    fn test_single_character_mutation_fails() {
        let sig = sign_payment("order_abc", "pay_xyz", SECRET);
        let mut tampered: Vec<char> = sig.chars().collect();
        tampered[0] = if tampered[0] == '0' { '1' } else { '0' };
        let tampered: String = tampered.into_iter().collect();

        assert!(!verify_payment_signature(
            "order_abc", "pay_xyz", &tampered, SECRET
        ));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let sig = sign_payment("order_abc", "pay_xyz", SECRET);
        assert!(!verify_payment_signature(
            "order_abc",
            "pay_xyz",
            &sig,
            "other_secret"
        ));
    }

    #[test]
    fn test_swapped_ids_fail() {
        // The separator prevents ("ab", "c") from colliding with ("a", "bc").
        let sig = sign_payment("order_ab", "c_pay", SECRET);
        assert!(!verify_payment_signature("order_a", "bc_pay", &sig, SECRET));
    }

    #[test]
    fn test_truncated_signature_fails() {
        let sig = sign_payment("order_abc", "pay_xyz", SECRET);
        assert!(!verify_payment_signature(
            "order_abc",
            "pay_xyz",
            &sig[..63],
            SECRET
        ));
        assert!(!verify_payment_signature("order_abc", "pay_xyz", "", SECRET));
    }
}
