use serde_json::Value;

use crate::{
    error::AwqatError,
    types::{ApiEnvelope, DayData, HijriDate, PrayerTimings, RawDayData},
    utils,
};

const SUCCESS_CODE: i64 = 200;

/// Removes a trailing parenthesized annotation such as a zone label.
///
/// `"05:12 (+03)"` becomes `"05:12"`; a bare `"05:12"` is returned as is.
pub fn strip_timezone(time: &str) -> &str {
    let without_annotation = match (time.find('('), time.rfind(')')) {
        (Some(open), Some(close)) if close > open => &time[..open],
        _ => time,
    };
    without_annotation.trim()
}

fn parse_timing(field: &str, raw: &str) -> Result<chrono::NaiveTime, AwqatError> {
    let stripped = strip_timezone(raw);
    utils::parse_hhmm(stripped).ok_or_else(|| {
        AwqatError::Validation(format!(
            "timings.{field}: expected HH:MM, got {raw:?}"
        ))
    })
}

pub fn parse_day_data(raw: RawDayData) -> Result<DayData, AwqatError> {
    let timings = PrayerTimings {
        fajr: parse_timing("Fajr", &raw.timings.fajr)?,
        sunrise: parse_timing("Sunrise", &raw.timings.sunrise)?,
        dhuhr: parse_timing("Dhuhr", &raw.timings.dhuhr)?,
        asr: parse_timing("Asr", &raw.timings.asr)?,
        maghrib: parse_timing("Maghrib", &raw.timings.maghrib)?,
        isha: parse_timing("Isha", &raw.timings.isha)?,
    };

    Ok(DayData {
        timings,
        hijri: HijriDate {
            day: raw.date.hijri.day,
            month: raw.date.hijri.month.en,
            year: raw.date.hijri.year,
        },
        gregorian_date: raw.date.gregorian.date,
    })
}

/// Checks the `{code, data}` wrapper and hands back `data`.
fn unwrap_envelope(payload: Value) -> Result<Value, AwqatError> {
    let envelope: ApiEnvelope = serde_json::from_value(payload)?;
    if envelope.code != SUCCESS_CODE {
        return Err(AwqatError::Remote {
            code: envelope.code,
        });
    }
    Ok(envelope.data)
}

/// Normalizes a `timingsByCity` payload.
pub fn parse_day_response(payload: Value) -> Result<DayData, AwqatError> {
    let data = unwrap_envelope(payload)?;
    let raw: RawDayData = serde_json::from_value(data)
        .map_err(|e| AwqatError::Validation(format!("data: {}", e)))?;
    parse_day_data(raw)
}

/// Normalizes a `calendarByCity` payload, keeping the API's day order.
pub fn parse_calendar_response(payload: Value) -> Result<Vec<DayData>, AwqatError> {
    let data = unwrap_envelope(payload)?;
    let raw_days: Vec<RawDayData> = serde_json::from_value(data)
        .map_err(|e| AwqatError::Validation(format!("data: {}", e)))?;
    raw_days.into_iter().map(parse_day_data).collect()
}

/// Today plus the following six days out of a month calendar.
///
/// `day_of_month` is 1-based. The window is cut at the end of the month, so
/// it holds fewer than seven days near month end.
pub fn week_slice(month: Vec<DayData>, day_of_month: u32) -> Vec<DayData> {
    let start = day_of_month.saturating_sub(1) as usize;
    month.into_iter().skip(start).take(7).collect()
}
