//! One extraction run: authenticate, fetch the three categories, aggregate.
//!
//! ```text
//! init → authenticating → fetching(active) → fetching(debris)
//!      → fetching(conjunctions) → aggregating → done
//! ```
//!
//! Any stage may fail. Once login has succeeded the session is closed on
//! every exit path, and a failed category aborts the categories after it.

use std::fmt;

use chrono::Utc;
use sat_core::{
    ActiveObjectRecord, Category, ConjunctionRecord, Credentials, DebrisRecord, ExtractionReport,
    ResultBundle,
};

use crate::error::{FetchError, PipelineError};
use crate::fetch::{fetch_active, fetch_conjunctions, fetch_debris};
use crate::session::RemoteSession;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Init,
    Authenticating,
    Fetching(Category),
    Aggregating,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::Authenticating => f.write_str("authenticating"),
            Self::Fetching(category) => write!(f, "fetching({category})"),
            Self::Aggregating => f.write_str("aggregating"),
            Self::Done => f.write_str("done"),
        }
    }
}

type Fetched = (
    Vec<ActiveObjectRecord>,
    Vec<DebrisRecord>,
    Vec<ConjunctionRecord>,
);

/// Sequential, single-session extraction.
///
/// The pipeline owns its transport and is consumed by [`Self::run`], so a
/// session is never shared between runs.
#[derive(Debug)]
pub struct ExtractionPipeline<T> {
    transport: T,
}

impl<T: Transport> ExtractionPipeline<T> {
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Run one extraction with `credentials`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingCredentials`] if either credential is blank
    /// - [`PipelineError::AuthenticationFailed`] if login fails
    /// - [`PipelineError::ExtractionFailed`] tagged with the first category
    ///   whose fetch failed
    pub async fn run(self, credentials: &Credentials) -> Result<ExtractionReport, PipelineError> {
        enter(PipelineStage::Init);
        if !credentials.is_complete() {
            return Err(fail(PipelineStage::Init, PipelineError::MissingCredentials));
        }

        enter(PipelineStage::Authenticating);
        let mut session = match RemoteSession::open(self.transport, credentials).await {
            Ok(session) => session,
            Err(e) => {
                return Err(fail(
                    PipelineStage::Authenticating,
                    PipelineError::AuthenticationFailed(e),
                ));
            }
        };

        let fetched = fetch_all(&session).await;
        session.close().await;
        tracing::debug!(state = ?session.state(), "Space-Track session released");
        let (active, debris, conjunctions) = fetched?;

        enter(PipelineStage::Aggregating);
        let bundle = ResultBundle::combine(active, debris, conjunctions, Utc::now());
        let report = ExtractionReport::from_bundle(bundle);

        enter(PipelineStage::Done);
        tracing::info!(
            total = report.bundle.metadata.count_total,
            high_risk = report.risk_summary.high_risk_count,
            "extraction complete"
        );
        Ok(report)
    }
}

async fn fetch_all<T: Transport>(session: &RemoteSession<T>) -> Result<Fetched, PipelineError> {
    enter(PipelineStage::Fetching(Category::ActiveObjects));
    let active = fetch_active(session)
        .await
        .map_err(|e| extraction_failed(Category::ActiveObjects, e))?;

    enter(PipelineStage::Fetching(Category::Debris));
    let debris = fetch_debris(session)
        .await
        .map_err(|e| extraction_failed(Category::Debris, e))?;

    enter(PipelineStage::Fetching(Category::Conjunctions));
    let conjunctions = fetch_conjunctions(session)
        .await
        .map_err(|e| extraction_failed(Category::Conjunctions, e))?;

    Ok((active, debris, conjunctions))
}

fn enter(stage: PipelineStage) {
    tracing::debug!(%stage, "extraction stage");
}

fn extraction_failed(category: Category, source: FetchError) -> PipelineError {
    fail(
        PipelineStage::Fetching(category),
        PipelineError::ExtractionFailed { category, source },
    )
}

fn fail(stage: PipelineStage, error: PipelineError) -> PipelineError {
    tracing::warn!(%stage, %error, "extraction failed");
    error
}
