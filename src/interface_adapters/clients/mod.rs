// Thin reqwest adapters for the external data services. Every call is an
// idempotent GET: retryable statuses and transient transport errors are
// retried with exponential backoff, while timeouts surface immediately so
// the resolver can start its fallback chain.

pub mod elevation;
pub mod neows;
pub mod sbdb;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::domain::params::FetchOutcome;

const RETRYABLE_STATUS: [u16; 5] = [429, 500, 502, 503, 504];
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 700;

fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BACKOFF_BASE_MS * 2u64.pow(attempt.saturating_sub(1)))
}

// GET a JSON resource and decode it, translating every failure mode into a
// tagged outcome.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> FetchOutcome<T> {
    let mut attempt = 1;
    loop {
        match http.get(url).query(query).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return match response.json::<T>().await {
                        Ok(value) => FetchOutcome::Success(value),
                        Err(err) => FetchOutcome::Failed(format!("response decode error: {err}")),
                    };
                }
                if !RETRYABLE_STATUS.contains(&status.as_u16()) || attempt >= MAX_ATTEMPTS {
                    return FetchOutcome::HttpStatus(status.as_u16());
                }
                tracing::warn!(url, %status, attempt, "retrying upstream status");
            }
            Err(err) if err.is_timeout() => return FetchOutcome::Timeout,
            Err(err) => {
                if attempt >= MAX_ATTEMPTS {
                    return FetchOutcome::Failed(format!("transport error: {err}"));
                }
                tracing::warn!(url, error = %err, attempt, "retrying transport error");
            }
        }
        tokio::time::sleep(backoff_delay(attempt)).await;
        attempt += 1;
    }
}

// Coerce a JSON number or numeric string into f64; the NASA/JPL endpoints
// mix both representations.
pub(crate) fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
