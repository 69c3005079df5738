use chrono::{Local, NaiveDate};

use crate::{
    aladhan::{self, TimingsQuery},
    cli::report_fetch_error,
    config, display,
    error::AwqatError,
    types::AppConfig,
    utils,
};

pub async fn render_week_view(
    base_url: &str,
    config: &AppConfig,
    city: Option<&str>,
    country: Option<&str>,
    today: NaiveDate,
) -> Result<String, AwqatError> {
    let query = TimingsQuery::from_config(config, city, country);
    let days = aladhan::fetch_week(base_url, &query, today).await?;
    Ok(display::render_week(&days, &query.city, &query.country))
}

pub async fn week(config: &AppConfig, city: Option<&str>, country: Option<&str>) {
    let pb = utils::spinner("Fetching weekly prayer times...");

    let today = Local::now().date_naive();
    let result = render_week_view(&config::aladhan_api_url(), config, city, country, today).await;
    pb.finish_and_clear();

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => report_fetch_error(&e),
    }
}
