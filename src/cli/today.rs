use chrono::{DateTime, Local, TimeZone};

use crate::{
    aladhan::{self, TimingsQuery},
    cli::report_fetch_error,
    config, display,
    error::AwqatError,
    types::AppConfig,
    utils,
};

#[derive(Debug, Clone, Default)]
pub struct TodayOptions {
    pub json: bool,
    pub next: bool,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Fetches today's schedule and renders the view selected by `options`.
pub async fn render_today_view<Tz: TimeZone>(
    base_url: &str,
    config: &AppConfig,
    options: &TodayOptions,
    now: &DateTime<Tz>,
) -> Result<String, AwqatError> {
    let query = TimingsQuery::from_config(config, options.city.as_deref(), options.country.as_deref());
    let data = aladhan::fetch_today(base_url, &query).await?;

    if options.json {
        return display::render_json(&data, config, &query.city, &query.country, now);
    }

    if options.next {
        return Ok(display::render_next(&data, now));
    }

    Ok(display::render_today(&data, &query.city, &query.country, now))
}

pub async fn today(config: &AppConfig, options: &TodayOptions) {
    let pb = (!options.json).then(|| utils::spinner("Fetching prayer times..."));

    let now = Local::now();
    let result = render_today_view(&config::aladhan_api_url(), config, options, &now).await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => report_fetch_error(&e),
    }
}
