//! Currency and minor-unit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by this deployment.
///
/// The gateway is pinned to a single settlement currency; the enum exists so
/// the wire format stays an ISO code rather than a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Returns the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
        }
    }

    /// Returns the number of minor units per major unit.
    pub fn minor_units_per_major(&self) -> i64 {
        match self {
            Currency::INR => 100,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Converts a major-unit amount (rupees) to minor units (paise).
///
/// Multiplies by 100 and truncates toward zero. This deliberately reproduces
/// the storefront's historical behavior, including the binary floating-point
/// misrounds near `.xx5` and `.x9` boundaries (`19.99` converts to `1998`,
/// not `1999`). Callers must reject non-positive or non-finite input before
/// calling; the converter itself does not validate.
pub fn to_minor_units(amount_major: f64) -> i64 {
    (amount_major * 100.0) as i64
}
