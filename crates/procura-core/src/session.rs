//! Caller-owned workflow context: quotes in, purchase order out, with an activity log.
//!
//! Nothing here is global. Each caller owns a [`QuoteSession`] and passes it around.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::demo::demo_quotes;
use crate::drafting::PoDrafter;
use crate::error::{ExtractionError, Result, WorkflowError};
use crate::extraction::rules::format_usd;
use crate::extraction::{QuoteExtractor, RuleBasedExtractor};
use crate::models::config::ProcuraConfig;
use crate::models::purchase_order::PurchaseOrder;
use crate::models::quote::{ExtractedQuote, RawQuote, SubmissionMethod};
use crate::recommend::VendorRecommender;

/// Attribution for entries the engine itself produces.
const SYSTEM_USER: &str = "System";

/// Number of workflow steps: submit, compare, purchase order.
pub const TOTAL_STEPS: u8 = 3;

/// One line of the session's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Workflow state for one procurement run.
pub struct QuoteSession {
    quotes: Vec<RawQuote>,
    extracted: Vec<ExtractedQuote>,
    recommended_id: Option<String>,
    selected_vendor: Option<ExtractedQuote>,
    purchase_order: Option<PurchaseOrder>,
    activity_log: Vec<ActivityLogEntry>,
    current_step: u8,
    user: String,
    extractor: RuleBasedExtractor,
    recommender: VendorRecommender,
    drafter: PoDrafter,
}

impl QuoteSession {
    /// Create an empty session configured from `config`.
    pub fn new(config: &ProcuraConfig) -> Self {
        Self {
            quotes: Vec::new(),
            extracted: Vec::new(),
            recommended_id: None,
            selected_vendor: None,
            purchase_order: None,
            activity_log: Vec::new(),
            current_step: 1,
            user: config.drafting.created_by.clone(),
            extractor: RuleBasedExtractor::from_config(&config.extraction),
            recommender: VendorRecommender::from_config(&config.recommendation),
            drafter: PoDrafter::from_config(config.drafting.clone()),
        }
    }

    /// Set who user-initiated log entries are attributed to.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn quotes(&self) -> &[RawQuote] {
        &self.quotes
    }

    pub fn extracted(&self) -> &[ExtractedQuote] {
        &self.extracted
    }

    /// The recommended quote from the last analysis.
    pub fn recommended(&self) -> Option<&ExtractedQuote> {
        let id = self.recommended_id.as_deref()?;
        self.extracted.iter().find(|q| q.id == id)
    }

    pub fn selected_vendor(&self) -> Option<&ExtractedQuote> {
        self.selected_vendor.as_ref()
    }

    pub fn purchase_order(&self) -> Option<&PurchaseOrder> {
        self.purchase_order.as_ref()
    }

    pub fn activity_log(&self) -> &[ActivityLogEntry] {
        &self.activity_log
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Move to a workflow step, clamped to `1..=TOTAL_STEPS`.
    pub fn set_current_step(&mut self, step: u8) {
        self.current_step = step.clamp(1, TOTAL_STEPS);
    }

    /// Add a quote. Any earlier analysis is discarded.
    pub fn add_quote(&mut self, quote: RawQuote) -> Result<()> {
        if quote.id.trim().is_empty() {
            return Err(ExtractionError::InvalidArgument(
                "quote id must not be empty".to_string(),
            )
            .into());
        }
        if self.quotes.iter().any(|q| q.id == quote.id) {
            return Err(ExtractionError::InvalidArgument(format!(
                "duplicate quote id: {}",
                quote.id
            ))
            .into());
        }

        let verb = match quote.method {
            SubmissionMethod::Upload => "Uploaded",
            SubmissionMethod::Paste => "Pasted",
        };
        let details = format!("{} quote from {}", verb, quote.source_label());

        self.quotes.push(quote);
        self.clear_analysis();
        self.log("Quote Added", self.user.clone(), Some(details));
        Ok(())
    }

    /// Remove a quote by id.
    pub fn remove_quote(&mut self, id: &str) -> Result<RawQuote> {
        let index = self
            .quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| WorkflowError::UnknownQuote(id.to_string()))?;

        self.clear_analysis();
        Ok(self.quotes.remove(index))
    }

    /// Extract every quote and compute the recommendation.
    pub fn analyze(&mut self) -> Result<&[ExtractedQuote]> {
        if self.quotes.is_empty() {
            return Err(WorkflowError::NoQuotes.into());
        }

        let extracted = self.extractor.extract_all(&self.quotes)?;
        self.recommended_id = self.recommender.recommend(&extracted).map(|q| q.id.clone());
        self.extracted = extracted;
        self.current_step = 2;

        info!(
            "Analyzed {} quotes, recommended {:?}",
            self.extracted.len(),
            self.recommended_id
        );
        self.log(
            "AI Analysis Complete",
            SYSTEM_USER.to_string(),
            Some(format!("Analyzed {} quotes", self.extracted.len())),
        );

        Ok(&self.extracted)
    }

    /// Select an analyzed quote. Drops any purchase order drafted for a previous selection.
    pub fn select_vendor(&mut self, id: &str) -> Result<&ExtractedQuote> {
        let vendor = self
            .extracted
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownQuote(id.to_string()))?;

        let details = format!("Selected {} - {}", vendor.vendor, format_usd(vendor.price_usd));
        self.purchase_order = None;
        self.current_step = 3;
        self.log("Vendor Selected", self.user.clone(), Some(details));

        Ok(&*self.selected_vendor.insert(vendor))
    }

    /// Draft a purchase order for the selected vendor, reusing an existing draft.
    pub fn draft_purchase_order(&mut self) -> Result<&PurchaseOrder> {
        let vendor = self
            .selected_vendor
            .as_ref()
            .ok_or(WorkflowError::NoVendorSelected)?;

        if self.purchase_order.is_none() {
            let po = self.drafter.draft(vendor)?;
            let details = format!("Generated PO #{}", po.po_number);
            self.purchase_order = Some(po);
            self.log("PO Generated", SYSTEM_USER.to_string(), Some(details));
        } else {
            debug!("Reusing existing purchase order draft");
        }

        self.purchase_order
            .as_ref()
            .ok_or_else(|| WorkflowError::NoPurchaseOrder.into())
    }

    /// Approve the drafted purchase order.
    pub fn approve_purchase_order(&mut self) -> Result<&PurchaseOrder> {
        let po = self
            .purchase_order
            .as_mut()
            .ok_or(WorkflowError::NoPurchaseOrder)?;
        po.approve()?;

        let details = format!("Approved PO #{}", po.po_number);
        self.log("PO Approved", self.user.clone(), Some(details));

        self.purchase_order
            .as_ref()
            .ok_or_else(|| WorkflowError::NoPurchaseOrder.into())
    }

    /// Replace the session's quotes with the demonstration quotes.
    pub fn load_demo_data(&mut self) {
        self.quotes = demo_quotes();
        self.clear_analysis();

        let loaded: Vec<String> = self
            .quotes
            .iter()
            .map(|q| format!("Loaded {}", q.source_label()))
            .collect();
        for details in loaded {
            self.log("Demo Quote Loaded", SYSTEM_USER.to_string(), Some(details));
        }
    }

    /// Forget everything, including the activity log.
    pub fn reset(&mut self) {
        self.quotes.clear();
        self.clear_analysis();
        self.activity_log.clear();
        self.current_step = 1;
    }

    fn clear_analysis(&mut self) {
        self.extracted.clear();
        self.recommended_id = None;
        self.selected_vendor = None;
        self.purchase_order = None;
    }

    fn log(&mut self, action: &str, user: String, details: Option<String>) {
        debug!("Activity: {} by {}", action, user);
        self.activity_log.push(ActivityLogEntry {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            timestamp: Utc::now(),
            user,
            details,
        });
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new(&ProcuraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::error::ProcuraError;
    use crate::models::purchase_order::PoStatus;

    fn actions(session: &QuoteSession) -> Vec<&str> {
        session
            .activity_log()
            .iter()
            .map(|e| e.action.as_str())
            .collect()
    }

    #[test]
    fn test_demo_workflow() {
        let mut session = QuoteSession::default();
        session.load_demo_data();

        let extracted = session.analyze().unwrap();
        assert_eq!(extracted.len(), 2);

        let recommended = session.recommended().unwrap().id.clone();
        assert_eq!(recommended, "1");

        session.select_vendor(&recommended).unwrap();
        let po = session.draft_purchase_order().unwrap();
        assert_eq!(po.vendor.vendor, "AlphaTech Solutions");
        assert_eq!(po.status, PoStatus::Draft);

        let po = session.approve_purchase_order().unwrap();
        assert_eq!(po.status, PoStatus::Approved);

        assert_eq!(
            actions(&session),
            vec![
                "Demo Quote Loaded",
                "Demo Quote Loaded",
                "AI Analysis Complete",
                "Vendor Selected",
                "PO Generated",
                "PO Approved",
            ]
        );
        assert_eq!(session.current_step(), 3);
    }

    #[test]
    fn test_log_details() {
        let mut session = QuoteSession::default().with_user("Dana");
        session
            .add_quote(RawQuote::new("a", "Acme Co\nUnit Price: $1,500.00\nDelivery: 5 days\nTerms: Net 15"))
            .unwrap();
        session.analyze().unwrap();
        session.select_vendor("a").unwrap();

        let log = session.activity_log();
        assert_eq!(log[0].user, "Dana");
        assert_eq!(log[0].details.as_deref(), Some("Pasted quote from text input"));
        assert_eq!(log[1].user, "System");
        assert_eq!(log[1].details.as_deref(), Some("Analyzed 1 quotes"));
        assert_eq!(log[2].details.as_deref(), Some("Selected Acme Co - $1,500.00"));
    }

    #[test]
    fn test_draft_is_reused() {
        let mut session = QuoteSession::default();
        session.load_demo_data();
        session.analyze().unwrap();
        session.select_vendor("2").unwrap();

        let first = session.draft_purchase_order().unwrap().id.clone();
        let second = session.draft_purchase_order().unwrap().id.clone();
        assert_eq!(first, second);
        assert_eq!(actions(&session).iter().filter(|a| **a == "PO Generated").count(), 1);
    }

    #[test]
    fn test_new_selection_drops_draft() {
        let mut session = QuoteSession::default();
        session.load_demo_data();
        session.analyze().unwrap();
        session.select_vendor("1").unwrap();
        session.draft_purchase_order().unwrap();

        session.select_vendor("2").unwrap();
        assert!(session.purchase_order().is_none());
        assert_eq!(session.draft_purchase_order().unwrap().vendor.id, "2");
    }

    #[test]
    fn test_out_of_order_calls_fail() {
        let mut session = QuoteSession::default();

        assert!(matches!(
            session.analyze(),
            Err(ProcuraError::Workflow(WorkflowError::NoQuotes))
        ));
        assert!(matches!(
            session.draft_purchase_order(),
            Err(ProcuraError::Workflow(WorkflowError::NoVendorSelected))
        ));
        assert!(matches!(
            session.approve_purchase_order(),
            Err(ProcuraError::Workflow(WorkflowError::NoPurchaseOrder))
        ));
        assert!(matches!(
            session.select_vendor("x"),
            Err(ProcuraError::Workflow(WorkflowError::UnknownQuote(_)))
        ));
    }

    #[test]
    fn test_approving_twice_fails() {
        let mut session = QuoteSession::default();
        session.load_demo_data();
        session.analyze().unwrap();
        session.select_vendor("1").unwrap();
        session.draft_purchase_order().unwrap();
        session.approve_purchase_order().unwrap();

        assert!(matches!(
            session.approve_purchase_order(),
            Err(ProcuraError::Workflow(WorkflowError::InvalidTransition { .. }))
        ));
    }

    #[test]
    fn test_adding_quote_discards_analysis() {
        let mut session = QuoteSession::default();
        session.load_demo_data();
        session.analyze().unwrap();

        session.add_quote(RawQuote::new("3", "Late Vendor")).unwrap();
        assert!(session.extracted().is_empty());
        assert!(session.recommended().is_none());
        assert_eq!(session.quotes().len(), 3);
    }

    #[test]
    fn test_duplicate_quote_rejected() {
        let mut session = QuoteSession::default();
        session.add_quote(RawQuote::new("1", "A")).unwrap();
        assert!(matches!(
            session.add_quote(RawQuote::new("1", "B")),
            Err(ProcuraError::Extraction(ExtractionError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_remove_and_reset() {
        let mut session = QuoteSession::default();
        session.load_demo_data();

        assert_eq!(session.activity_log().len(), 2);

        let removed = session.remove_quote("1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(session.remove_quote("1").is_err());

        session.set_current_step(9);
        assert_eq!(session.current_step(), 3);
        assert_eq!(actions(&session), vec!["Demo Quote Loaded", "Demo Quote Loaded"]);

        session.reset();
        assert!(session.quotes().is_empty());
        assert!(session.activity_log().is_empty());
        assert_eq!(session.current_step(), 1);
    }
}
