//! Aggregation of the three category results into one bundle.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::{ActiveObjectRecord, ConjunctionRecord, DebrisRecord};
use crate::risk::RiskSummary;

/// Counts describing one extraction run. Written as `metadata.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionMetadata {
    pub extraction_timestamp: DateTime<Utc>,
    pub count_active: usize,
    pub count_debris: usize,
    pub count_conjunctions: usize,
    /// Always `count_active + count_debris + count_conjunctions`.
    pub count_total: usize,
}

/// Everything one extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultBundle {
    pub active_objects: Vec<ActiveObjectRecord>,
    pub debris: Vec<DebrisRecord>,
    pub conjunctions: Vec<ConjunctionRecord>,
    pub metadata: ExtractionMetadata,
}

impl ResultBundle {
    /// Combine the category results. Record order is preserved as fetched.
    #[must_use]
    pub fn combine(
        active_objects: Vec<ActiveObjectRecord>,
        debris: Vec<DebrisRecord>,
        conjunctions: Vec<ConjunctionRecord>,
        extraction_timestamp: DateTime<Utc>,
    ) -> Self {
        let count_active = active_objects.len();
        let count_debris = debris.len();
        let count_conjunctions = conjunctions.len();

        Self {
            active_objects,
            debris,
            conjunctions,
            metadata: ExtractionMetadata {
                extraction_timestamp,
                count_active,
                count_debris,
                count_conjunctions,
                count_total: count_active + count_debris + count_conjunctions,
            },
        }
    }

    /// Risk breakdown over this bundle's conjunction events.
    #[must_use]
    pub fn risk_summary(&self) -> RiskSummary {
        RiskSummary::from_conjunctions(&self.conjunctions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.count_total == 0
    }
}
