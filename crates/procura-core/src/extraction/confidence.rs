//! Confidence scoring for extracted quotes.

use rust_decimal::Decimal;

/// Deduction when no usable price was found.
pub const MISSING_PRICE_PENALTY: i32 = 30;
/// Deduction when no delivery time was found.
pub const MISSING_DELIVERY_PENALTY: i32 = 30;
/// Deduction when no payment terms were found.
pub const MISSING_TERMS_PENALTY: i32 = 20;

pub const MISSING_PRICE: &str = "Missing or invalid price";
pub const MISSING_DELIVERY: &str = "Missing or invalid delivery days";
pub const MISSING_TERMS: &str = "Missing payment terms";

/// Score how complete an extraction is, returning the confidence (0 - 100)
/// and the issues in deduction order.
pub fn score(price_usd: Decimal, delivery_days: u32, terms_found: bool) -> (u8, Vec<String>) {
    let mut confidence = 100i32;
    let mut issues = Vec::new();

    if price_usd <= Decimal::ZERO {
        confidence -= MISSING_PRICE_PENALTY;
        issues.push(MISSING_PRICE.to_string());
    }
    if delivery_days == 0 {
        confidence -= MISSING_DELIVERY_PENALTY;
        issues.push(MISSING_DELIVERY.to_string());
    }
    if !terms_found {
        confidence -= MISSING_TERMS_PENALTY;
        issues.push(MISSING_TERMS.to_string());
    }

    (confidence.clamp(0, 100) as u8, issues)
}
