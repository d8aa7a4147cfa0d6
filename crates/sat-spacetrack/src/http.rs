//! Turning Space-Track responses into bodies or [`FetchError`]s.
//!
//! No request is ever retried. A throttled query (429) is reported as
//! [`FetchError::RateLimited`] and ends the run like any other failure.
//! An expired session shows up as a 401 on the query itself, not as a
//! redirect to the login page, and is reported as [`FetchError::Api`].

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;

use crate::error::FetchError;

/// Space-Track throttles per minute; wait one full window when the provider
/// does not say how long.
const THROTTLE_WINDOW_SECS: u64 = 60;

/// Read the whole body and classify the response by status.
pub(crate) async fn read_body(resp: reqwest::Response) -> Result<Vec<u8>, FetchError> {
    let status = resp.status();
    let retry_after = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp.bytes().await?.to_vec();
    classify(status, retry_after.as_deref(), body)
}

fn classify(
    status: StatusCode,
    retry_after: Option<&str>,
    body: Vec<u8>,
) -> Result<Vec<u8>, FetchError> {
    if status.is_success() {
        return Ok(body);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(THROTTLE_WINDOW_SECS);
        return Err(FetchError::RateLimited { retry_after_secs });
    }
    Err(FetchError::Api {
        status: status.as_u16(),
        message: String::from_utf8_lossy(&body).trim().to_string(),
    })
}
