//! Category fetchers: query, decode, filter.
//!
//! Records come back in the order the provider sent them; the `orderby`
//! clause of each query is the only ordering applied.

use sat_core::{
    ActiveObjectRecord, Category, ConjunctionRecord, DebrisRecord, RawRecord, filter,
};

use crate::error::FetchError;
use crate::query::path_for;
use crate::session::RemoteSession;
use crate::transport::Transport;

/// Latest element set per object with an epoch in the last 7 days.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-success status, or a
/// body that is not a JSON array of objects.
pub async fn fetch_active<T: Transport>(
    session: &RemoteSession<T>,
) -> Result<Vec<ActiveObjectRecord>, FetchError> {
    fetch_records(session, Category::ActiveObjects, filter::active_object).await
}

/// Latest element set per debris object with an epoch in the last 30 days.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-success status, or a
/// body that is not a JSON array of objects.
pub async fn fetch_debris<T: Transport>(
    session: &RemoteSession<T>,
) -> Result<Vec<DebrisRecord>, FetchError> {
    fetch_records(session, Category::Debris, filter::debris).await
}

/// Conjunction events in the last 7 days with collision probability above 0.001,
/// most recent closest approach first.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, non-success status, or a
/// body that is not a JSON array of objects.
pub async fn fetch_conjunctions<T: Transport>(
    session: &RemoteSession<T>,
) -> Result<Vec<ConjunctionRecord>, FetchError> {
    fetch_records(session, Category::Conjunctions, filter::conjunction).await
}

async fn fetch_records<T, R>(
    session: &RemoteSession<T>,
    category: Category,
    keep_essentials: fn(&RawRecord) -> R,
) -> Result<Vec<R>, FetchError>
where
    T: Transport,
{
    let path = path_for(category);
    tracing::debug!(%category, %path, "querying Space-Track");

    let body = session.get(&path).await?;
    let records: Vec<R> = decode_records(&body)?.iter().map(keep_essentials).collect();

    tracing::info!(%category, count = records.len(), "fetched records");
    Ok(records)
}

/// Decode a query body into raw records.
///
/// An empty (or whitespace-only) body is an empty result.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON, not an array, or
/// contains an element that is not an object.
pub fn decode_records(body: &[u8]) -> Result<Vec<RawRecord>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(body)?)
}
