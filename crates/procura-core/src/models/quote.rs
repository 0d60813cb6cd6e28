//! Vendor quote models: raw submissions and their extracted form.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor name used when the first line of a quote is empty.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Payment terms value used when no terms were found.
pub const UNKNOWN_TERMS: &str = "Unknown";

/// How a raw quote entered the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMethod {
    /// Uploaded as a file.
    Upload,
    /// Pasted as text.
    #[default]
    Paste,
}

/// A vendor quote exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Caller-assigned identifier.
    pub id: String,

    /// Full quote content, untrimmed.
    pub text: String,

    /// Original file name for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Language of the quote.
    #[serde(default = "default_language")]
    pub language: String,

    /// Who submitted the quote.
    pub uploaded_by: String,

    /// Submission time.
    pub timestamp: DateTime<Utc>,

    /// Submission method.
    #[serde(default)]
    pub method: SubmissionMethod,
}

fn default_language() -> String {
    "English".to_string()
}

impl RawQuote {
    /// Create a pasted quote submitted now.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            filename: None,
            language: default_language(),
            uploaded_by: "Demo User".to_string(),
            timestamp: Utc::now(),
            method: SubmissionMethod::Paste,
        }
    }

    /// Mark the quote as uploaded from the given file.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self.method = SubmissionMethod::Upload;
        self
    }

    pub fn with_method(mut self, method: SubmissionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_uploaded_by(mut self, user: impl Into<String>) -> Self {
        self.uploaded_by = user.into();
        self
    }

    /// Human-readable description of where the quote came from.
    pub fn source_label(&self) -> &str {
        self.filename.as_deref().unwrap_or("text input")
    }
}

/// Structured fields extracted from one raw quote.
///
/// Missing data is represented in-band: `0` for price and delivery days,
/// [`UNKNOWN_TERMS`] for terms, and an entry in `issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedQuote {
    /// Same id as the originating [`RawQuote`].
    pub id: String,

    /// Best-effort vendor name.
    pub vendor: String,

    /// Quoted price in USD, `0` when not found.
    #[serde(rename = "priceUSD", with = "rust_decimal::serde::float")]
    pub price_usd: Decimal,

    /// Delivery lead time in days, `0` when not found.
    pub delivery_days: u32,

    /// Payment terms, [`UNKNOWN_TERMS`] when not found.
    pub terms: String,

    /// Extraction confidence (0 - 100).
    pub confidence: u8,

    /// What could not be found. Absent rather than empty when nothing is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

impl ExtractedQuote {
    /// Confidence bucket for display.
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }

    /// Whether this quote is trustworthy enough for the given threshold.
    pub fn meets_threshold(&self, min_confidence: u8) -> bool {
        self.confidence >= min_confidence
    }

    pub fn has_price(&self) -> bool {
        self.price_usd > Decimal::ZERO
    }

    pub fn has_delivery(&self) -> bool {
        self.delivery_days > 0
    }

    /// Issues as a slice, empty when none were recorded.
    pub fn issues(&self) -> &[String] {
        self.issues.as_deref().unwrap_or_default()
    }
}

/// Coarse confidence bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// High at 90 and above, medium at 70 and above, low otherwise.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ConfidenceLevel::High,
            70..=89 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }

    /// Format for display.
    pub fn display(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High Confidence",
            ConfidenceLevel::Medium => "Medium Confidence",
            ConfidenceLevel::Low => "Low Confidence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quote(confidence: u8, issues: Option<Vec<String>>) -> ExtractedQuote {
        ExtractedQuote {
            id: "q1".to_string(),
            vendor: "Acme Co".to_string(),
            price_usd: Decimal::new(1000, 2),
            delivery_days: 5,
            terms: "Net 15".to_string(),
            confidence,
            issues,
        }
    }

    #[test]
    fn test_confidence_level_buckets() {
        assert_eq!(ConfidenceLevel::from_score(100), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(90), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(89), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(70), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(69), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_extracted_quote_serializes_as_plain_record() {
        let json = serde_json::to_value(quote(100, None)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "q1",
                "vendor": "Acme Co",
                "priceUSD": 10.0,
                "deliveryDays": 5,
                "terms": "Net 15",
                "confidence": 100
            })
        );
    }

    #[test]
    fn test_issues_present_when_recorded() {
        let q = quote(70, Some(vec!["Missing payment terms".to_string()]));
        let json = serde_json::to_value(&q).unwrap();

        assert_eq!(json["issues"], serde_json::json!(["Missing payment terms"]));
        assert_eq!(q.issues().len(), 1);
        assert!(quote(100, None).issues().is_empty());
    }

    #[test]
    fn test_raw_quote_with_filename_is_upload() {
        let raw = RawQuote::new("1", "Acme").with_filename("acme.txt");
        assert_eq!(raw.method, SubmissionMethod::Upload);
        assert_eq!(raw.source_label(), "acme.txt");
        assert_eq!(RawQuote::new("2", "x").source_label(), "text input");
    }
}
