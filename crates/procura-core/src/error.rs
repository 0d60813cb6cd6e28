//! Error types for the procura-core library.

use thiserror::Error;

use crate::models::purchase_order::PoStatus;

/// Main error type for the procura library.
#[derive(Error, Debug)]
pub enum ProcuraError {
    /// Quote extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Purchase order drafting error.
    #[error("draft error: {0}")]
    Draft(#[from] DraftError),

    /// Workflow/session error.
    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to quote extraction.
///
/// A missing field is never an error; it lowers the confidence score instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// The input does not have the shape the extractor expects.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to purchase order drafting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    /// The selected quote carries a price no extraction could have produced.
    #[error("invalid price for quote {id}: {price}")]
    InvalidPrice { id: String, price: String },

    /// The configured line-item quantity cannot carry a unit price.
    #[error("invalid line item quantity: {0}")]
    InvalidQuantity(u32),
}

/// Errors raised by the session workflow and purchase order lifecycle.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkflowError {
    /// Status change not permitted by the purchase order lifecycle.
    #[error("cannot move purchase order from {from} to {to}")]
    InvalidTransition { from: PoStatus, to: PoStatus },

    /// Approved purchase orders are frozen.
    #[error("purchase order {0} is approved and can no longer be edited")]
    Frozen(String),

    /// No quote with the given id exists in the session.
    #[error("unknown quote: {0}")]
    UnknownQuote(String),

    /// The session has no quotes to analyze.
    #[error("no quotes in session")]
    NoQuotes,

    /// A purchase order was requested before a vendor was selected.
    #[error("no vendor selected")]
    NoVendorSelected,

    /// An approval was requested before a purchase order was drafted.
    #[error("no purchase order drafted")]
    NoPurchaseOrder,
}

/// Result type for the procura library.
pub type Result<T> = std::result::Result<T, ProcuraError>;
