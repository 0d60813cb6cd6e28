//! Vendor name extraction.

use regex::Captures;

use crate::models::quote::UNKNOWN_VENDOR;

use super::patterns::FIRST_LINE;
use super::{apply_all, apply_first, ExtractionMatch, FieldExtractor, FieldRule};

/// Vendor name extractor: quotes conventionally open with the vendor's name.
pub struct VendorExtractor;

impl VendorExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules(&self) -> [FieldRule<String>; 1] {
        [FieldRule {
            name: "first_line",
            pattern: &FIRST_LINE,
            parse: trimmed_nonempty,
        }]
    }
}

impl Default for VendorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VendorExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        apply_first(&self.rules(), text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        apply_all(&self.rules(), text)
    }
}

fn trimmed_nonempty(caps: &Captures<'_>) -> Option<String> {
    let value = caps[1].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Extract the vendor name, falling back to "Unknown Vendor".
pub fn extract_vendor(text: &str) -> String {
    VendorExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| UNKNOWN_VENDOR.to_string())
}
