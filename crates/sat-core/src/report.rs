//! Result of a successful extraction run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bundle::ResultBundle;
use crate::risk::RiskSummary;

/// The bundle plus its risk breakdown, as handed to the HTTP shell and CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionReport {
    pub bundle: ResultBundle,
    pub risk_summary: RiskSummary,
}

impl ExtractionReport {
    /// Attach the risk summary computed from the bundle's conjunctions.
    #[must_use]
    pub fn from_bundle(bundle: ResultBundle) -> Self {
        let risk_summary = bundle.risk_summary();
        Self {
            bundle,
            risk_summary,
        }
    }
}
