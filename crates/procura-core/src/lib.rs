//! Core library for procurement quote processing.
//!
//! This crate provides:
//! - Field extraction from free-text vendor quotes (vendor, price, delivery, terms)
//! - Confidence scoring of extracted quotes
//! - Price-first vendor recommendation gated by confidence
//! - Purchase order drafting from a selected quote
//! - A caller-owned session context tying the workflow together

pub mod error;
pub mod models;
pub mod extraction;
pub mod recommend;
pub mod drafting;
pub mod session;
pub mod demo;

pub use error::{DraftError, ExtractionError, ProcuraError, Result, WorkflowError};
pub use models::config::{ProcuraConfig, TermsDetection};
pub use models::purchase_order::{PoItem, PoStatus, Priority, PurchaseOrder};
pub use models::quote::{ConfidenceLevel, ExtractedQuote, RawQuote, SubmissionMethod};
pub use extraction::{extract_quotes, QuoteExtraction, QuoteExtractor, RuleBasedExtractor};
pub use recommend::{recommend_vendor, QuoteComparison, VendorRecommender};
pub use drafting::{draft_purchase_order, PoDrafter};
pub use session::{ActivityLogEntry, QuoteSession};
