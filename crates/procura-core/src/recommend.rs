//! Vendor recommendation: cheapest quote among those extracted with enough confidence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::config::RecommendationConfig;
use crate::models::quote::ExtractedQuote;

/// Price-first recommender gated by a confidence threshold.
#[derive(Debug, Clone)]
pub struct VendorRecommender {
    /// Minimum confidence for a quote to compete on price.
    min_confidence: u8,
}

impl VendorRecommender {
    /// Create a recommender with the default threshold of 70.
    pub fn new() -> Self {
        Self::from_config(&RecommendationConfig::default())
    }

    /// Create a recommender from configuration.
    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self {
            min_confidence: config.min_confidence,
        }
    }

    /// Set the minimum confidence threshold.
    pub fn with_min_confidence(mut self, min_confidence: u8) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn min_confidence(&self) -> u8 {
        self.min_confidence
    }

    /// Pick the cheapest quote meeting the threshold; the first quote wins ties.
    ///
    /// When no quote meets the threshold the first quote is returned regardless
    /// of price. Returns `None` only for an empty slice.
    pub fn recommend<'a>(&self, quotes: &'a [ExtractedQuote]) -> Option<&'a ExtractedQuote> {
        info!(
            "Recommending vendor from {} quotes (min confidence {})",
            quotes.len(),
            self.min_confidence
        );

        let mut best: Option<&ExtractedQuote> = None;
        for quote in quotes.iter().filter(|q| q.meets_threshold(self.min_confidence)) {
            if best.is_none_or(|b| quote.price_usd < b.price_usd) {
                best = Some(quote);
            }
        }

        match best {
            Some(quote) => {
                debug!("Recommended {} ({}) at {}", quote.id, quote.vendor, quote.price_usd);
                Some(quote)
            }
            None => {
                let fallback = quotes.first();
                if let Some(quote) = fallback {
                    debug!("No quote meets confidence threshold, falling back to {}", quote.id);
                }
                fallback
            }
        }
    }
}

impl Default for VendorRecommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend a vendor id with the default threshold; empty when there are no quotes.
pub fn recommend_vendor(quotes: &[ExtractedQuote]) -> String {
    VendorRecommender::new()
        .recommend(quotes)
        .map(|q| q.id.clone())
        .unwrap_or_default()
}

/// Side-by-side summary of a set of extracted quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteComparison {
    /// Lowest price across all quotes.
    #[serde(with = "rust_decimal::serde::float")]
    pub best_price: Decimal,

    /// Shortest delivery across all quotes, missing (zero) values included.
    pub fastest_delivery: u32,

    /// Mean confidence, rounded half up.
    pub average_confidence: u8,

    /// Recommended quote id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_id: Option<String>,
}

impl QuoteComparison {
    /// Summarize quotes. All figures are zero for an empty set.
    pub fn from_quotes(quotes: &[ExtractedQuote], recommender: &VendorRecommender) -> Self {
        let best_price = quotes
            .iter()
            .map(|q| q.price_usd)
            .min()
            .unwrap_or(Decimal::ZERO);
        let fastest_delivery = quotes.iter().map(|q| q.delivery_days).min().unwrap_or(0);

        let average_confidence = if quotes.is_empty() {
            0
        } else {
            let n = quotes.len() as u32;
            let sum: u32 = quotes.iter().map(|q| u32::from(q.confidence)).sum();
            ((2 * sum + n) / (2 * n)) as u8
        };

        Self {
            best_price,
            fastest_delivery,
            average_confidence,
            recommended_id: recommender.recommend(quotes).map(|q| q.id.clone()),
        }
    }
}
