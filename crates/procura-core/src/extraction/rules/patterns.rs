//! Common regex patterns for vendor quote extraction.
//!
//! Digits are spelled `[0-9]` because `\d` also matches non-ASCII digits,
//! which `Decimal` and `u32` parsing reject.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor: everything before the first line break
    pub static ref FIRST_LINE: Regex = Regex::new(
        r"\A([^\n]*)"
    ).unwrap();

    // Labeled price (US format: 22,500.00)
    pub static ref LABELED_PRICE: Regex = Regex::new(
        r"(?i)(?:Unit Price|Unit Rate|Total):?\s*\$?([0-9,]+\.[0-9]{2})"
    ).unwrap();

    // Any dollar amount
    pub static ref DOLLAR_AMOUNT: Regex = Regex::new(
        r"\$([0-9,]+\.[0-9]{2})"
    ).unwrap();

    // Delivery lead time in days
    pub static ref DELIVERY_DAYS: Regex = Regex::new(
        r"(?i)Delivery(?: Time)?:?\s*([0-9]+)\s*days?"
    ).unwrap();

    // Payment terms: label plus a non-blank remainder of the line.
    // The value may not start with ':' so an empty "Terms:" never matches.
    pub static ref LABELED_TERMS: Regex = Regex::new(
        r"(?i)(?:Payment Terms|Terms)[ \t]*:?[ \t]*([^\s:][^\n]*)"
    ).unwrap();

    // First line with any visible content
    pub static ref FIRST_NONBLANK_LINE: Regex = Regex::new(
        r"(\S[^\n]*)"
    ).unwrap();
}
