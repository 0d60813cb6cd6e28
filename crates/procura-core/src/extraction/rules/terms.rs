//! Payment terms extraction.

use regex::Captures;

use crate::models::config::TermsDetection;
use crate::models::quote::UNKNOWN_TERMS;

use super::patterns::{FIRST_NONBLANK_LINE, LABELED_TERMS};
use super::{apply_all, apply_first, ExtractionMatch, FieldExtractor, FieldRule};

/// Payment terms extractor.
///
/// In [`TermsDetection::Lenient`] mode a quote without a terms label still
/// yields terms: the first non-blank line. This keeps unlabeled quotes from
/// losing the terms deduction, at the cost of the value usually being the
/// vendor line. [`TermsDetection::Strict`] only accepts labeled terms.
pub struct TermsExtractor {
    detection: TermsDetection,
}

impl TermsExtractor {
    pub fn new() -> Self {
        Self {
            detection: TermsDetection::default(),
        }
    }

    /// Set the detection mode.
    pub fn with_detection(mut self, detection: TermsDetection) -> Self {
        self.detection = detection;
        self
    }

    fn rules(&self) -> Vec<FieldRule<String>> {
        let mut rules = vec![FieldRule {
            name: "labeled_terms",
            pattern: &LABELED_TERMS,
            parse: trimmed_capture,
        }];

        if self.detection == TermsDetection::Lenient {
            rules.push(FieldRule {
                name: "first_line",
                pattern: &FIRST_NONBLANK_LINE,
                parse: trimmed_capture,
            });
        }

        rules
    }
}

impl Default for TermsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TermsExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        apply_first(&self.rules(), text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        apply_all(&self.rules(), text)
    }
}

fn trimmed_capture(caps: &Captures<'_>) -> Option<String> {
    Some(caps[1].trim().to_string())
}

/// Extract payment terms with lenient detection, "Unknown" when none are found.
pub fn extract_terms(text: &str) -> String {
    TermsExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| UNKNOWN_TERMS.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> TermsExtractor {
        TermsExtractor::new().with_detection(TermsDetection::Strict)
    }

    #[test]
    fn test_labeled_terms() {
        assert_eq!(extract_terms("Acme Co\nTerms: Net 15"), "Net 15");
        assert_eq!(extract_terms("Acme Co\nPayment Terms: 2/10 Net 30 \r\n"), "2/10 Net 30");
        assert_eq!(extract_terms("acme\npayment terms net 45"), "net 45");
    }

    #[test]
    fn test_label_beats_first_line() {
        let m = TermsExtractor::new()
            .extract("Acme Co\nUnit Price: $10.00\nTerms: Net 15")
            .unwrap();
        assert_eq!(m.rule, "labeled_terms");
        assert_eq!(m.value, "Net 15");
    }

    #[test]
    fn test_lenient_falls_back_to_first_line() {
        let m = TermsExtractor::new().extract("\n  NoDataVendor\n").unwrap();
        assert_eq!(m.rule, "first_line");
        assert_eq!(m.value, "NoDataVendor");
    }

    #[test]
    fn test_strict_requires_label() {
        assert!(strict().extract("NoDataVendor").is_none());
        assert_eq!(
            strict().extract("Acme\nTerms: Net 15").map(|m| m.value),
            Some("Net 15".to_string())
        );
    }

    #[test]
    fn test_empty_label_is_not_found_in_strict_mode() {
        assert!(strict().extract("Acme Co\nTerms:\nDelivery: 5 days").is_none());
        assert!(strict().extract("Acme Co\nTerms:   ").is_none());
    }

    #[test]
    fn test_empty_label_skips_to_later_label() {
        let text = "Acme Co\nTerms:\nPayment Terms: Net 60";
        assert_eq!(strict().extract(text).map(|m| m.value), Some("Net 60".to_string()));
    }

    #[test]
    fn test_blank_text_has_no_terms() {
        assert_eq!(extract_terms(""), UNKNOWN_TERMS);
        assert_eq!(extract_terms(" \n\t\n"), UNKNOWN_TERMS);
    }
}
