//! Risk buckets over conjunction events.
//!
//! ```text
//! high    PC > 0.01
//! medium  0.001 < PC <= 0.01
//! low     everything else, including unparsable PC (treated as 0)
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::records::ConjunctionRecord;

/// Collision probabilities strictly above this are high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.01;

/// Collision probabilities strictly above this (and up to the high threshold)
/// are medium risk. Also the floor applied by the conjunction query.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Bucket for a collision probability. `NaN` lands in [`RiskLevel::Low`].
    #[must_use]
    pub fn classify(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            Self::High
        } else if probability > MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Count of conjunction events per risk bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskSummary {
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    /// Number of events summarized.
    pub total: usize,
}

impl RiskSummary {
    #[must_use]
    pub fn from_conjunctions(conjunctions: &[ConjunctionRecord]) -> Self {
        let mut summary = Self {
            total: conjunctions.len(),
            ..Self::default()
        };
        for event in conjunctions {
            match RiskLevel::classify(event.probability()) {
                RiskLevel::High => summary.high_risk_count += 1,
                RiskLevel::Medium => summary.medium_risk_count += 1,
                RiskLevel::Low => summary.low_risk_count += 1,
            }
        }
        summary
    }
}
