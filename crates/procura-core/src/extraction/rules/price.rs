//! Price extraction for vendor quotes.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::{Decimal, RoundingStrategy};

use super::patterns::{DOLLAR_AMOUNT, LABELED_PRICE};
use super::{apply_all, apply_first, ExtractionMatch, FieldExtractor, FieldRule};

/// Price field extractor.
///
/// Labeled amounts (`Unit Price`, `Unit Rate`, `Total`) win over bare
/// dollar amounts. Only the first labeled match counts.
pub struct PriceExtractor;

impl PriceExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules(&self) -> [FieldRule<Decimal>; 2] {
        [
            FieldRule {
                name: "labeled_price",
                pattern: &LABELED_PRICE,
                parse: parse_amount_capture,
            },
            FieldRule {
                name: "dollar_amount",
                pattern: &DOLLAR_AMOUNT,
                parse: parse_amount_capture,
            },
        ]
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PriceExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        apply_first(&self.rules(), text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        apply_all(&self.rules(), text)
    }
}

fn parse_amount_capture(caps: &Captures<'_>) -> Option<Decimal> {
    parse_amount(&caps[1])
}

/// Extract the quoted price, `0` when none is found.
pub fn extract_price(text: &str) -> Decimal {
    PriceExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(Decimal::ZERO)
}

/// Parse a US-formatted amount (e.g. "22,500.00").
///
/// Amounts outside the `Decimal` range (about 7.9e28) yield `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    Decimal::from_str(&cleaned).ok()
}

/// Format an amount in US style ($22,500.00).
pub fn format_usd(amount: Decimal) -> String {
    let mut rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let s = rounded.to_string();
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, formatted, decimal_part)
}
