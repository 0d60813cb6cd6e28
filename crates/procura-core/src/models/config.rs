//! Configuration structures for the quote pipeline.

use serde::{Deserialize, Serialize};

use super::purchase_order::Priority;
use crate::error::ProcuraError;

/// Main configuration for the procura pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcuraConfig {
    /// Quote extraction configuration.
    pub extraction: ExtractionConfig,

    /// Vendor recommendation configuration.
    pub recommendation: RecommendationConfig,

    /// Purchase order drafting configuration.
    pub drafting: DraftConfig,
}

/// How payment terms are located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsDetection {
    /// Labeled terms first, then the first non-blank line counts as terms.
    #[default]
    Lenient,
    /// Only an explicit `Terms`/`Payment Terms` label with a value counts.
    Strict,
}

/// Quote extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Payment terms detection mode.
    pub terms_detection: TermsDetection,
}

/// Vendor recommendation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Minimum confidence (0 - 100) for a quote to compete on price.
    pub min_confidence: u8,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { min_confidence: 70 }
    }
}

/// Purchase order drafting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Quantity on the synthesized line item.
    pub quantity: u32,

    /// Requesting department.
    pub department: String,

    /// Initial priority.
    pub priority: Priority,

    /// Attribution for drafted orders.
    pub created_by: String,

    /// Description of the synthesized line item.
    pub item_description: String,

    /// Boilerplate vendor instructions.
    pub special_instructions: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            quantity: 100,
            department: "Manufacturing".to_string(),
            priority: Priority::Standard,
            created_by: "Demo User".to_string(),
            item_description: "Component Package (per extracted quote)".to_string(),
            special_instructions: "Please ensure all components meet ISO 9001 standards. \
                Deliver to warehouse upon receipt."
                .to_string(),
        }
    }
}

impl ProcuraConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Reject settings the pipeline cannot honor.
    pub fn validate(&self) -> crate::Result<()> {
        if self.recommendation.min_confidence > 100 {
            return Err(ProcuraError::Config(format!(
                "recommendation.min_confidence must be at most 100, got {}",
                self.recommendation.min_confidence
            )));
        }
        if self.drafting.quantity == 0 {
            return Err(ProcuraError::Config(
                "drafting.quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
