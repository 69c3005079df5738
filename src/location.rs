//! Best-effort location lookup through an IP geolocation service.
//!
//! Used only by the setup wizard to pre-fill city and country. Any failure
//! (unreachable service, timeout, non-2xx status, a `status` other than
//! `"success"`, missing fields) yields `None` so the wizard falls back to
//! manual entry.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{
    debug,
    error::AwqatError,
    types::{LocationData, RawLocation},
};

/// Validates an ip-api style payload.
pub fn parse_location(payload: Value) -> Result<LocationData, AwqatError> {
    match payload.get("status").and_then(Value::as_str) {
        Some("success") => {}
        other => {
            return Err(AwqatError::Validation(format!(
                "status: expected \"success\", got {:?}",
                other
            )));
        }
    }

    let raw: RawLocation = serde_json::from_value(payload)?;
    Ok(LocationData {
        city: raw.city,
        country: raw.country,
        lat: raw.lat,
        lon: raw.lon,
        timezone: raw.timezone,
    })
}

async fn lookup(url: &str, timeout: Duration) -> Result<LocationData, AwqatError> {
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let json = response.json::<Value>().await?;
    parse_location(json)
}

/// Resolves the caller's approximate location, giving up after `timeout`.
///
/// Never fails: every error is logged at debug level and mapped to `None`.
pub async fn detect_location(url: &str, timeout: Duration) -> Option<LocationData> {
    debug!("GET {} (timeout {:?})", url, timeout);

    match lookup(url, timeout).await {
        Ok(location) => Some(location),
        Err(e) => {
            debug!("location detection failed: {}", e);
            None
        }
    }
}
