use std::{env, time::Duration};

// Runtime/server configuration sourced from the environment (not model
// calibration; that lives in domain::tuning).

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000)
}

// Key for the NeoWs catalog. Empty counts as unset so a blank .env line
// does not masquerade as a credential.
pub fn nasa_api_key() -> Option<String> {
    env::var("NASA_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

pub fn epqs_url() -> String {
    env::var("EPQS_URL").unwrap_or_else(|_| "https://epqs.nationalmap.gov/v1/json".to_string())
}

pub fn neows_url() -> String {
    env::var("NEOWS_URL").unwrap_or_else(|_| "https://api.nasa.gov".to_string())
}

pub fn ssd_api_url() -> String {
    env::var("SSD_API_URL").unwrap_or_else(|_| "https://ssd-api.jpl.nasa.gov".to_string())
}

pub fn provider_timeout() -> Duration {
    let millis = env::var("PROVIDER_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(8000);
    Duration::from_millis(millis)
}
