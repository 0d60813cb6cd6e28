//! Rule-based quote extractor.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::config::{ExtractionConfig, TermsDetection};
use crate::models::quote::{ExtractedQuote, RawQuote, UNKNOWN_TERMS, UNKNOWN_VENDOR};
use crate::error::ExtractionError;

use super::confidence;
use super::rules::{
    DeliveryExtractor, ExtractionMatch, FieldExtractor, PriceExtractor, TermsExtractor,
    VendorExtractor,
};
use super::{QuoteExtractor, Result};

/// An extracted quote together with the matches each field came from.
#[derive(Debug, Clone)]
pub struct QuoteExtraction {
    /// The extracted quote.
    pub quote: ExtractedQuote,
    /// Vendor match, `None` when the fallback name was used.
    pub vendor: Option<ExtractionMatch<String>>,
    /// Price match.
    pub price: Option<ExtractionMatch<Decimal>>,
    /// Delivery time match.
    pub delivery: Option<ExtractionMatch<u32>>,
    /// Payment terms match.
    pub terms: Option<ExtractionMatch<String>>,
}

/// Extracts quote fields with ordered regex rules.
pub struct RuleBasedExtractor {
    /// How payment terms are located.
    terms_detection: TermsDetection,
}

impl RuleBasedExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self {
            terms_detection: TermsDetection::default(),
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_terms_detection(config.terms_detection)
    }

    /// Set payment terms detection mode.
    pub fn with_terms_detection(mut self, detection: TermsDetection) -> Self {
        self.terms_detection = detection;
        self
    }

    /// Extract a quote and keep the per-field provenance.
    pub fn extract_detailed(&self, raw: &RawQuote) -> Result<QuoteExtraction> {
        if raw.id.trim().is_empty() {
            return Err(ExtractionError::InvalidArgument(
                "quote id must not be empty".to_string(),
            ));
        }

        let text = raw.text.as_str();

        let vendor = VendorExtractor::new().extract(text);
        let price = PriceExtractor::new().extract(text);
        let delivery = DeliveryExtractor::new().extract(text);
        let terms = TermsExtractor::new()
            .with_detection(self.terms_detection)
            .extract(text);

        let price_usd = price.as_ref().map(|m| m.value).unwrap_or(Decimal::ZERO);
        let delivery_days = delivery.as_ref().map(|m| m.value).unwrap_or(0);
        let (confidence, issues) = confidence::score(price_usd, delivery_days, terms.is_some());

        let quote = ExtractedQuote {
            id: raw.id.clone(),
            vendor: vendor
                .as_ref()
                .map(|m| m.value.clone())
                .unwrap_or_else(|| UNKNOWN_VENDOR.to_string()),
            price_usd,
            delivery_days,
            terms: terms
                .as_ref()
                .map(|m| m.value.clone())
                .unwrap_or_else(|| UNKNOWN_TERMS.to_string()),
            confidence,
            issues: (!issues.is_empty()).then_some(issues),
        };

        if let Some(issues) = &quote.issues {
            warn!("Quote {} extracted with issues: {}", quote.id, issues.join(", "));
        }

        debug!(
            "Extracted quote {} ({}): price {}, {} days, terms {:?}, confidence {}",
            quote.id,
            quote.vendor,
            quote.price_usd,
            quote.delivery_days,
            quote.terms,
            quote.confidence
        );

        Ok(QuoteExtraction {
            quote,
            vendor,
            price,
            delivery,
            terms,
        })
    }
}

impl Default for RuleBasedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteExtractor for RuleBasedExtractor {
    fn extract(&self, quote: &RawQuote) -> Result<ExtractedQuote> {
        self.extract_detailed(quote).map(|r| r.quote)
    }

    fn extract_all(&self, quotes: &[RawQuote]) -> Result<Vec<ExtractedQuote>> {
        info!("Extracting fields from {} quotes", quotes.len());

        let mut seen = HashSet::with_capacity(quotes.len());
        for quote in quotes {
            if !seen.insert(quote.id.as_str()) {
                return Err(ExtractionError::InvalidArgument(format!(
                    "duplicate quote id: {}",
                    quote.id
                )));
            }
        }

        quotes.iter().map(|q| self.extract(q)).collect()
    }
}

/// Extract quotes with the default extractor.
pub fn extract_quotes(quotes: &[RawQuote]) -> Result<Vec<ExtractedQuote>> {
    RuleBasedExtractor::new().extract_all(quotes)
}
