use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serializer;

pub fn parse_hhmm(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

pub fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

/// Parses the API's `DD-MM-YYYY` date.
pub fn parse_gregorian_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d-%m-%Y").ok()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `Sat, 18 Oct 2026`
pub fn format_gregorian_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b %Y").to_string()
}

/// `18 Oct`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// `Sat 18 Oct`
pub fn format_weekday_date(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

pub fn format_to_12_hour(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// Best guess at the machine's zone name, used when location detection
/// did not provide one.
pub fn local_timezone() -> String {
    match std::env::var("TZ") {
        Ok(tz) if !tz.trim().is_empty() => tz,
        _ => Local::now().format("UTC%:z").to_string(),
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
