//! Built-in demonstration quotes.

use crate::models::quote::{RawQuote, SubmissionMethod};

const ALPHATECH: &str = "AlphaTech Solutions\n\
Quote #AT-2024-001\n\
Steel Components Package\n\
Quantity: 500 units\n\
Unit Price: $45.00\n\
Total: $22,500.00\n\
Delivery: 14 business days\n\
Terms: Net 30\n\
Valid until: March 15, 2024";

const THORNWELL: &str = "Thornwell Manufacturing\n\
RFQ Response #TM-2024-156\n\
Steel Components - Premium Grade\n\
Qty: 500 pcs\n\
Price per unit: $42.50\n\
Subtotal: $21,250.00\n\
Shipping: $750.00\n\
Total: $22,000.00\n\
Lead time: 21 days\n\
Payment: 2/10 Net 30";

/// The two demonstration quotes, ids "1" and "2".
pub fn demo_quotes() -> Vec<RawQuote> {
    vec![
        RawQuote::new("1", ALPHATECH)
            .with_filename("alphatech_quote.txt")
            .with_method(SubmissionMethod::Upload),
        RawQuote::new("2", THORNWELL)
            .with_filename("thornwell_quote.txt")
            .with_method(SubmissionMethod::Upload),
    ]
}
