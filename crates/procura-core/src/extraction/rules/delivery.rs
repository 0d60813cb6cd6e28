//! Delivery lead time extraction.

use regex::Captures;

use super::patterns::DELIVERY_DAYS;
use super::{apply_all, apply_first, ExtractionMatch, FieldExtractor, FieldRule};

/// Delivery time extractor ("Delivery: 14 days", "Delivery Time 3 day").
pub struct DeliveryExtractor;

impl DeliveryExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules(&self) -> [FieldRule<u32>; 1] {
        [FieldRule {
            name: "delivery_days",
            pattern: &DELIVERY_DAYS,
            parse: parse_days,
        }]
    }
}

impl Default for DeliveryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DeliveryExtractor {
    type Output = ExtractionMatch<u32>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        apply_first(&self.rules(), text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        apply_all(&self.rules(), text)
    }
}

fn parse_days(caps: &Captures<'_>) -> Option<u32> {
    caps[1].parse().ok()
}

/// Extract delivery days, `0` when none are found.
pub fn extract_delivery_days(text: &str) -> u32 {
    DeliveryExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_variants() {
        assert_eq!(extract_delivery_days("Delivery: 5 days"), 5);
        assert_eq!(extract_delivery_days("Delivery Time: 21 days"), 21);
        assert_eq!(extract_delivery_days("delivery 1 day"), 1);
        assert_eq!(extract_delivery_days("DELIVERY TIME:10days"), 10);
    }

    #[test]
    fn test_words_between_number_and_days_do_not_match() {
        assert_eq!(extract_delivery_days("Delivery: 14 business days"), 0);
    }

    #[test]
    fn test_other_labels_do_not_match() {
        assert_eq!(extract_delivery_days("Lead time: 21 days"), 0);
        assert_eq!(extract_delivery_days("NoDataVendor"), 0);
    }

    #[test]
    fn test_overflowing_number_is_missing() {
        assert_eq!(extract_delivery_days("Delivery: 99999999999 days"), 0);
    }
}
