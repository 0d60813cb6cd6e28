//! Purchase order drafting from a selected quote.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;
use uuid::Uuid;

use crate::error::DraftError;
use crate::models::config::DraftConfig;
use crate::models::purchase_order::{PoItem, PoStatus, PurchaseOrder};
use crate::models::quote::ExtractedQuote;

/// Builds draft purchase orders with a single synthesized line item.
#[derive(Debug, Clone, Default)]
pub struct PoDrafter {
    config: DraftConfig,
}

impl PoDrafter {
    /// Create a drafter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drafter from configuration.
    pub fn from_config(config: DraftConfig) -> Self {
        Self { config }
    }

    /// Draft a purchase order dated now.
    pub fn draft(&self, vendor: &ExtractedQuote) -> Result<PurchaseOrder, DraftError> {
        self.draft_at(vendor, Utc::now())
    }

    /// Draft a purchase order dated `now`.
    ///
    /// The line total is the quoted price; the unit price is derived from it and
    /// rounded to cents, so `quantity * unit_price` may be off by a few cents.
    pub fn draft_at(
        &self,
        vendor: &ExtractedQuote,
        now: DateTime<Utc>,
    ) -> Result<PurchaseOrder, DraftError> {
        if vendor.price_usd.is_sign_negative() && !vendor.price_usd.is_zero() {
            return Err(DraftError::InvalidPrice {
                id: vendor.id.clone(),
                price: vendor.price_usd.to_string(),
            });
        }

        let quantity = self.config.quantity;
        let unit_price = vendor
            .price_usd
            .checked_div(Decimal::from(quantity))
            .ok_or(DraftError::InvalidQuantity(quantity))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let po = PurchaseOrder {
            id: Uuid::new_v4().to_string(),
            po_number: po_number(now),
            issue_date: now,
            department: self.config.department.clone(),
            priority: self.config.priority,
            vendor: vendor.clone(),
            items: vec![PoItem {
                id: "item-1".to_string(),
                description: self.config.item_description.clone(),
                quantity,
                unit_price,
                total: vendor.price_usd,
            }],
            special_instructions: self.config.special_instructions.clone(),
            internal_comments: String::new(),
            status: PoStatus::Draft,
            created_by: self.config.created_by.clone(),
            version: 1,
        };

        info!(
            "Drafted {} for {} ({} x {})",
            po.po_number, vendor.vendor, quantity, unit_price
        );

        Ok(po)
    }
}

/// `PO-` followed by the last six digits of the millisecond timestamp.
pub fn po_number(now: DateTime<Utc>) -> String {
    format!("PO-{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}

/// Draft a purchase order with the default drafter.
pub fn draft_purchase_order(vendor: &ExtractedQuote) -> Result<PurchaseOrder, DraftError> {
    PoDrafter::new().draft(vendor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use std::str::FromStr;

    use crate::models::purchase_order::Priority;
    use crate::recommend::recommend_vendor;

    fn vendor(price: &str) -> ExtractedQuote {
        ExtractedQuote {
            id: "2".to_string(),
            vendor: "Thornwell Manufacturing".to_string(),
            price_usd: Decimal::from_str(price).unwrap(),
            delivery_days: 21,
            terms: "2/10 Net 30".to_string(),
            confidence: 92,
            issues: None,
        }
    }

    #[test]
    fn test_single_line_item() {
        let po = draft_purchase_order(&vendor("22000")).unwrap();

        assert_eq!(po.items.len(), 1);
        let item = &po.items[0];
        assert_eq!(item.quantity, 100);
        assert_eq!(item.unit_price, Decimal::from_str("220.00").unwrap());
        assert_eq!(item.total, Decimal::from(22000));
        assert_eq!(po.total(), po.vendor.price_usd);
    }

    #[test]
    fn test_header_defaults() {
        let po = draft_purchase_order(&vendor("10.00")).unwrap();

        assert_eq!(po.department, "Manufacturing");
        assert_eq!(po.priority, Priority::Standard);
        assert_eq!(po.status, PoStatus::Draft);
        assert_eq!(po.version, 1);
        assert_eq!(po.created_by, "Demo User");
        assert_eq!(po.internal_comments, "");
        assert!(po.special_instructions.contains("ISO 9001"));
        assert_eq!(po.vendor, vendor("10.00"));
    }

    #[test]
    fn test_po_number_shape() {
        let pattern = Regex::new(r"^PO-[0-9]{6}$").unwrap();
        let po = draft_purchase_order(&vendor("1.00")).unwrap();
        assert!(pattern.is_match(&po.po_number), "{}", po.po_number);

        let early = Utc.timestamp_millis_opt(42).unwrap();
        assert_eq!(po_number(early), "PO-000042");
    }

    #[test]
    fn test_po_number_uses_last_six_digits() {
        let now = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        let po = PoDrafter::new().draft_at(&vendor("1.00"), now).unwrap();
        assert_eq!(po.po_number, "PO-123456");
        assert_eq!(po.issue_date, now);
    }

    #[test]
    fn test_unit_price_rounds_but_total_is_authoritative() {
        let po = draft_purchase_order(&vendor("1234.56")).unwrap();
        let item = &po.items[0];

        assert_eq!(item.unit_price, Decimal::from_str("12.35").unwrap());
        assert_eq!(item.total, Decimal::from_str("1234.56").unwrap());
        let drift = (item.unit_price * Decimal::from(item.quantity) - item.total).abs();
        assert!(drift <= Decimal::ONE);
    }

    #[test]
    fn test_zero_price_drafts() {
        let po = draft_purchase_order(&vendor("0")).unwrap();
        assert_eq!(po.items[0].unit_price, Decimal::ZERO);
        assert_eq!(po.items[0].total, Decimal::ZERO);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert_eq!(
            draft_purchase_order(&vendor("-5")),
            Err(DraftError::InvalidPrice {
                id: "2".to_string(),
                price: "-5".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let drafter = PoDrafter::from_config(DraftConfig {
            quantity: 0,
            ..Default::default()
        });
        assert_eq!(drafter.draft(&vendor("10")), Err(DraftError::InvalidQuantity(0)));
    }

    #[test]
    fn test_configured_header() {
        let drafter = PoDrafter::from_config(DraftConfig {
            quantity: 8,
            department: "Facilities".to_string(),
            priority: Priority::High,
            ..Default::default()
        });
        let po = drafter.draft(&vendor("100.00")).unwrap();

        assert_eq!(po.department, "Facilities");
        assert_eq!(po.priority, Priority::High);
        assert_eq!(po.items[0].unit_price, Decimal::from_str("12.50").unwrap());
    }

    #[test]
    fn test_drafted_vendor_recommends_itself() {
        let po = draft_purchase_order(&vendor("22000")).unwrap();
        assert_eq!(recommend_vendor(&[po.vendor.clone()]), po.vendor.id);
    }

    #[test]
    fn test_serializes_as_plain_record() {
        let po = draft_purchase_order(&vendor("22000")).unwrap();
        let json = serde_json::to_value(&po).unwrap();

        assert_eq!(json["status"], "Draft");
        assert_eq!(json["priority"], "Standard");
        assert_eq!(json["items"][0]["unitPrice"], 220.0);
        assert_eq!(json["items"][0]["total"], 22000.0);
        assert_eq!(json["vendor"]["priceUSD"], 22000.0);
        assert!(json["poNumber"].as_str().unwrap().starts_with("PO-"));
    }
}
