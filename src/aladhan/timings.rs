use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde_json::Value;

use crate::{
    aladhan::normalize, debug, error::AwqatError, methods, types::AppConfig, types::DayData,
};

/// Query parameters shared by both timings endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsQuery {
    pub city: String,
    pub country: String,
    pub method: u32,
    pub school: u32,
    pub shafaq: String,
}

impl TimingsQuery {
    pub fn new(city: &str, country: &str, method: u32, school: u32, shafaq: &str) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
            method,
            school,
            shafaq: shafaq.to_string(),
        }
    }

    /// Builds the query from saved preferences; the overrides apply to this
    /// run only.
    pub fn from_config(
        config: &AppConfig,
        city_override: Option<&str>,
        country_override: Option<&str>,
    ) -> Self {
        Self::new(
            city_override.unwrap_or(&config.city),
            country_override.unwrap_or(&config.country),
            config.method,
            config.school,
            &config.shafaq,
        )
    }

    /// `shafaq` is only sent for the moonsighting method.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("city", self.city.clone()),
            ("country", self.country.clone()),
            ("method", self.method.to_string()),
            ("school", self.school.to_string()),
        ];
        if methods::is_moonsighting(self.method) && !self.shafaq.is_empty() {
            params.push(("shafaq", self.shafaq.clone()));
        }
        params
    }
}

async fn get_json(url: &str, params: &[(&'static str, String)]) -> Result<Value, AwqatError> {
    debug!("GET {} {:?}", url, params);

    let client = Client::new();
    let response = client
        .get(url)
        .query(params)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<Value>().await?;
    Ok(json)
}

/// Fetches today's schedule from `{base_url}/timingsByCity`.
///
/// # Errors
///
/// - `Transport` when the request fails or the HTTP status is not 2xx
/// - `Remote` when the payload carries a code other than 200
/// - `Validation` when the payload is not shaped like a day schedule
pub async fn fetch_today(base_url: &str, query: &TimingsQuery) -> Result<DayData, AwqatError> {
    let url = format!("{}/timingsByCity", base_url);
    let json = get_json(&url, &query.params()).await?;
    normalize::parse_day_response(json)
}

/// Fetches the month of `today` from `{base_url}/calendarByCity` and returns
/// the days from `today` onwards, at most seven.
pub async fn fetch_week(
    base_url: &str,
    query: &TimingsQuery,
    today: NaiveDate,
) -> Result<Vec<DayData>, AwqatError> {
    let url = format!("{}/calendarByCity", base_url);
    let mut params = query.params();
    params.push(("month", today.month().to_string()));
    params.push(("year", today.year().to_string()));

    let json = get_json(&url, &params).await?;
    let month = normalize::parse_calendar_response(json)?;
    debug!("calendar returned {} days", month.len());

    Ok(normalize::week_slice(month, today.day()))
}
