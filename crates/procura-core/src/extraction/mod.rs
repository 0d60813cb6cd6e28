//! Vendor quote field extraction module.

pub mod confidence;
mod extractor;
pub mod rules;

pub use extractor::{extract_quotes, QuoteExtraction, RuleBasedExtractor};

use crate::error::ExtractionError;
use crate::models::quote::{ExtractedQuote, RawQuote};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for quote field extractors.
pub trait QuoteExtractor {
    /// Extract structured fields from one raw quote.
    fn extract(&self, quote: &RawQuote) -> Result<ExtractedQuote>;

    /// Extract every quote, preserving order and cardinality.
    fn extract_all(&self, quotes: &[RawQuote]) -> Result<Vec<ExtractedQuote>> {
        quotes.iter().map(|q| self.extract(q)).collect()
    }
}
