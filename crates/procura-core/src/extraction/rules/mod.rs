//! Rule-based field extractors for vendor quotes.
//!
//! Each field is described by an ordered list of [`FieldRule`]s. The first
//! rule whose pattern matches decides the field; later rules are fallbacks.

pub mod delivery;
pub mod patterns;
pub mod price;
pub mod terms;
pub mod vendor;

pub use delivery::{extract_delivery_days, DeliveryExtractor};
pub use price::{extract_price, format_usd, parse_amount, PriceExtractor};
pub use terms::{extract_terms, TermsExtractor};
pub use vendor::{extract_vendor, VendorExtractor};

use regex::{Captures, Regex};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in rule priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// One way of locating a field: a pattern and how to turn its captures into a value.
pub struct FieldRule<T> {
    /// Rule name, recorded in [`ExtractionMatch::rule`].
    pub name: &'static str,
    /// Pattern to search for.
    pub pattern: &'static Regex,
    /// Converts a match into a value. `None` means the match was unusable.
    pub parse: fn(&Captures<'_>) -> Option<T>,
}

impl<T> FieldRule<T> {
    fn to_match(&self, caps: &Captures<'_>) -> Option<ExtractionMatch<T>> {
        let value = (self.parse)(caps)?;
        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(value, self.name, full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

/// Apply rules in priority order. The first rule whose pattern matches
/// decides the outcome, even if its value then fails to parse.
pub fn apply_first<T>(rules: &[FieldRule<T>], text: &str) -> Option<ExtractionMatch<T>> {
    let (rule, caps) = rules
        .iter()
        .find_map(|rule| rule.pattern.captures(text).map(|caps| (rule, caps)))?;
    rule.to_match(&caps)
}

/// Every parseable match of every rule, grouped by rule priority.
pub fn apply_all<T>(rules: &[FieldRule<T>], text: &str) -> Vec<ExtractionMatch<T>> {
    rules
        .iter()
        .flat_map(|rule| {
            rule.pattern
                .captures_iter(text)
                .filter_map(move |caps| rule.to_match(&caps))
        })
        .collect()
}

/// An extracted value together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that produced the value.
    pub rule: &'static str,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
