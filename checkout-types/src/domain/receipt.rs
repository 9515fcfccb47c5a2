//! Receipt token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of random characters after the prefix.
const RECEIPT_TOKEN_LEN: usize = 24;

/// Prefix so operators can recognize receipt tokens in processor dashboards.
pub const RECEIPT_PREFIX: &str = "rcpt_";

/// Generates a fresh receipt token for an order.
///
/// Uniqueness is delegated to the thread-local CSPRNG rather than any shared
/// counter, so concurrent calls need no coordination. 24 alphanumeric chars
/// give ~143 bits of entropy, making collisions negligible at any realistic
/// order volume.
pub fn new_receipt() -> String {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RECEIPT_TOKEN_LEN)
        .map(char::from)
        .collect();

    format!("{}{}", RECEIPT_PREFIX, token)
}
