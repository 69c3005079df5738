use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// The six daily times, Sunrise included, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Chronological order within a day.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's six prayer times as local wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerTimings {
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub fajr: NaiveTime,
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub sunrise: NaiveTime,
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub dhuhr: NaiveTime,
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub asr: NaiveTime,
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub maghrib: NaiveTime,
    #[serde(serialize_with = "utils::serialize_hhmm")]
    pub isha: NaiveTime,
}

impl PrayerTimings {
    pub fn get(&self, name: PrayerName) -> NaiveTime {
        match name {
            PrayerName::Fajr => self.fajr,
            PrayerName::Sunrise => self.sunrise,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, NaiveTime)> + '_ {
        PrayerName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

/// Hijri calendar date, kept as the API spells it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// One normalized day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayData {
    pub timings: PrayerTimings,
    pub hijri: HijriDate,
    /// `DD-MM-YYYY`, as sent by the API.
    pub gregorian_date: String,
}

impl DayData {
    pub fn date(&self) -> Option<NaiveDate> {
        utils::parse_gregorian_date(&self.gregorian_date)
    }
}

/// Where "now" falls within a day's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerStatus {
    /// Latest prayer that has started, `None` before Fajr.
    pub current: Option<PrayerName>,
    pub next: Option<PrayerName>,
    /// Local wall-clock start of `next`; tomorrow's Fajr after Isha.
    pub next_time: Option<NaiveDateTime>,
    /// Time left until `next`, see [`crate::status::format_countdown`].
    pub countdown: String,
}

/// A location guessed from the caller's IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationData {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
}

/// User preferences that drive every timings request.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub city: String,
    pub country: String,
    pub method: u32,
    pub school: u32,
    pub shafaq: String,
    pub detected_lat: f64,
    pub detected_lon: f64,
    pub timezone: String,
}

// Wire format of the timings API.

/// Outer `{code, data}` wrapper of every timings response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub code: i64,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One entry of `data`, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDayData {
    pub timings: RawTimings,
    pub date: RawDate,
}

/// Times as sent, possibly suffixed with a zone annotation like `"05:12 (BST)"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// The `date` object with both calendars.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDate {
    pub hijri: RawHijriDate,
    pub gregorian: RawGregorianDate,
}

/// Hijri part of `date`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHijriDate {
    pub day: String,
    pub month: RawHijriMonth,
    pub year: String,
}

/// Hijri month; only the English name is read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHijriMonth {
    pub en: String,
}

/// Gregorian part of `date`, `DD-MM-YYYY`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGregorianDate {
    pub date: String,
}

// Wire format of the IP geolocation API.

/// Geolocation response; `status` is `"success"` when the lookup worked.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub status: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
}

/// One row of the week table.
#[derive(Tabled)]
pub struct WeekTableRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Fajr")]
    pub fajr: String,
    #[tabled(rename = "Dhuhr")]
    pub dhuhr: String,
    #[tabled(rename = "Asr")]
    pub asr: String,
    #[tabled(rename = "Maghrib")]
    pub maghrib: String,
    #[tabled(rename = "Isha")]
    pub isha: String,
}

/// `--json` output. Field order is the output key order.
#[derive(Debug, Serialize)]
pub struct TodayJson<'a> {
    pub date: String,
    pub hijri: String,
    pub location: JsonLocation<'a>,
    pub method: String,
    pub school: String,
    pub prayers: &'a PrayerTimings,
    pub next: Option<JsonNext>,
}

#[derive(Debug, Serialize)]
pub struct JsonLocation<'a> {
    pub city: &'a str,
    pub country: &'a str,
}

/// The `next` object of `--json` output.
#[derive(Debug, Serialize)]
pub struct JsonNext {
    pub prayer: PrayerName,
    #[serde(rename = "in")]
    pub in_: String,
}
