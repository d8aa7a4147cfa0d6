//! # sat-spacetrack
//!
//! Space-Track.org client and extraction pipeline for satwatch.
//!
//! - [`RemoteSession`]: login, cookie-backed session reuse, best-effort logout
//! - [`Transport`]: the request seam; [`HttpTransport`] is the `reqwest` implementation
//! - [`fetch`]: one query per category (active objects, debris, conjunction events)
//! - [`ExtractionPipeline`]: open → fetch all → close, returning an
//!   [`ExtractionReport`](sat_core::ExtractionReport)
//!
//! There is no retry anywhere: every failed request ends the run.

pub mod fetch;
pub mod pipeline;
pub mod query;
pub mod session;
pub mod transport;

mod error;
mod http;

pub use error::{AuthError, FetchError, PipelineError};
pub use pipeline::{ExtractionPipeline, PipelineStage};
pub use session::{RemoteSession, SessionState};
pub use transport::{HttpTransport, Transport};
