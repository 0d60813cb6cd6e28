//! Purchase order models.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;
use super::quote::ExtractedQuote;

/// A drafted purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// Opaque document id.
    pub id: String,

    /// Human-facing number, `PO-` followed by six digits.
    pub po_number: String,

    /// When the order was drafted.
    pub issue_date: DateTime<Utc>,

    /// Requesting department.
    pub department: String,

    /// Order priority.
    pub priority: Priority,

    /// The selected quote, embedded by value.
    pub vendor: ExtractedQuote,

    /// Ordered line items.
    pub items: Vec<PoItem>,

    /// Instructions sent to the vendor.
    pub special_instructions: String,

    /// Notes kept internal to the buyer.
    pub internal_comments: String,

    /// Lifecycle status.
    pub status: PoStatus,

    /// Attribution.
    pub created_by: String,

    /// Edit counter, starts at 1.
    pub version: u32,
}

/// A single purchase order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoItem {
    pub id: String,

    pub description: String,

    pub quantity: u32,

    /// Display price per unit, rounded to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    /// Authoritative line total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Purchase order priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Standard,
    Medium,
    High,
}

/// Purchase order lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoStatus {
    #[default]
    Draft,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
}

impl PoStatus {
    /// Whether the lifecycle permits moving from `self` to `to`.
    pub fn can_transition_to(self, to: PoStatus) -> bool {
        matches!(
            (self, to),
            (PoStatus::Draft, PoStatus::UnderReview)
                | (PoStatus::Draft, PoStatus::Approved)
                | (PoStatus::UnderReview, PoStatus::Approved)
                | (PoStatus::UnderReview, PoStatus::Draft)
        )
    }
}

impl fmt::Display for PoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoStatus::Draft => "Draft",
            PoStatus::UnderReview => "Under Review",
            PoStatus::Approved => "Approved",
        };
        f.write_str(s)
    }
}

/// Caller edits to a purchase order. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct PoRevision {
    pub department: Option<String>,
    pub priority: Option<Priority>,
    pub special_instructions: Option<String>,
    pub internal_comments: Option<String>,
}

impl PurchaseOrder {
    /// Move to a new status. The version is left untouched.
    pub fn transition(&mut self, to: PoStatus) -> Result<(), WorkflowError> {
        if !self.status.can_transition_to(to) {
            return Err(WorkflowError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    pub fn approve(&mut self) -> Result<(), WorkflowError> {
        self.transition(PoStatus::Approved)
    }

    /// Apply an edit and bump the version.
    pub fn revise(&mut self, revision: PoRevision) -> Result<(), WorkflowError> {
        if self.status == PoStatus::Approved {
            return Err(WorkflowError::Frozen(self.po_number.clone()));
        }

        if let Some(department) = revision.department {
            self.department = department;
        }
        if let Some(priority) = revision.priority {
            self.priority = priority;
        }
        if let Some(instructions) = revision.special_instructions {
            self.special_instructions = instructions;
        }
        if let Some(comments) = revision.internal_comments {
            self.internal_comments = comments;
        }

        self.version += 1;
        Ok(())
    }

    /// Sum of line totals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_po() -> PurchaseOrder {
        let vendor = ExtractedQuote {
            id: "2".to_string(),
            vendor: "Thornwell Manufacturing".to_string(),
            price_usd: Decimal::new(22000, 0),
            delivery_days: 21,
            terms: "2/10 Net 30".to_string(),
            confidence: 92,
            issues: None,
        };
        PurchaseOrder {
            id: "po-1".to_string(),
            po_number: "PO-123456".to_string(),
            issue_date: Utc::now(),
            department: "Manufacturing".to_string(),
            priority: Priority::Standard,
            items: vec![PoItem {
                id: "item-1".to_string(),
                description: "Component Package".to_string(),
                quantity: 100,
                unit_price: Decimal::new(22000, 2),
                total: vendor.price_usd,
            }],
            vendor,
            special_instructions: String::new(),
            internal_comments: String::new(),
            status: PoStatus::Draft,
            created_by: "Demo User".to_string(),
            version: 1,
        }
    }

    #[test]
    fn test_status_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&PoStatus::UnderReview).unwrap(),
            "\"Under Review\""
        );
        assert_eq!(PoStatus::UnderReview.to_string(), "Under Review");
    }

    #[test]
    fn test_approve_from_draft() {
        let mut po = sample_po();
        po.approve().unwrap();
        assert_eq!(po.status, PoStatus::Approved);
        assert_eq!(po.version, 1);
    }

    #[test]
    fn test_approved_is_terminal() {
        let mut po = sample_po();
        po.approve().unwrap();

        assert_eq!(
            po.transition(PoStatus::Draft),
            Err(WorkflowError::InvalidTransition {
                from: PoStatus::Approved,
                to: PoStatus::Draft,
            })
        );
        assert!(po.revise(PoRevision::default()).is_err());
    }

    #[test]
    fn test_review_can_return_to_draft() {
        let mut po = sample_po();
        po.transition(PoStatus::UnderReview).unwrap();
        po.transition(PoStatus::Draft).unwrap();
        assert_eq!(po.status, PoStatus::Draft);
    }

    #[test]
    fn test_revise_bumps_version() {
        let mut po = sample_po();
        po.revise(PoRevision {
            priority: Some(Priority::High),
            internal_comments: Some("rush".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(po.version, 2);
        assert_eq!(po.priority, Priority::High);
        assert_eq!(po.internal_comments, "rush");
        assert_eq!(po.department, "Manufacturing");
    }

    #[test]
    fn test_total_sums_items() {
        assert_eq!(sample_po().total(), Decimal::new(22000, 0));
    }
}
