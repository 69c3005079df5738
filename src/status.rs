//! Current/next prayer determination.
//!
//! Every prayer time is read as a wall-clock time on the day of `now`, in the
//! time zone `now` carries. A prayer counts as passed from its start instant
//! onwards, so at exactly 15:45 with Asr at 15:45 Asr is current, not next.
//! Once Isha has passed the next prayer is Fajr on the following calendar day.
//!
//! Countdowns are measured between instants, so a wait that spans a
//! daylight-saving change is the real elapsed time, not the wall-clock gap.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};

use crate::types::{PrayerName, PrayerStatus, PrayerTimings};

pub fn prayer_status<Tz: TimeZone>(timings: &PrayerTimings, now: &DateTime<Tz>) -> PrayerStatus {
    let today = now.date_naive();

    let mut current = None;
    let mut next = None;
    let mut next_time = None;

    for (name, time) in timings.iter() {
        let at = resolve(&now.timezone(), today, time);
        if *now >= at {
            current = Some(name);
        } else {
            next = Some(name);
            next_time = Some(at);
            break;
        }
    }

    if next.is_none() {
        next = Some(PrayerName::Fajr);
        next_time = today
            .succ_opt()
            .map(|tomorrow| resolve(&now.timezone(), tomorrow, timings.fajr));
    }

    let countdown = next_time
        .as_ref()
        .map(|at| format_countdown(at.clone().signed_duration_since(now.clone())))
        .unwrap_or_default();

    PrayerStatus {
        current,
        next,
        next_time: next_time.map(|at| at.naive_local()),
        countdown,
    }
}

/// `"2h 05m"`, `"59m"`, or `"now"` once the duration is zero or negative.
pub fn format_countdown(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "now".to_string();
    }

    let total_minutes = remaining.num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Whether the prayer at `time` has started on the day of `now`.
pub fn is_past<Tz: TimeZone>(time: NaiveTime, now: &DateTime<Tz>) -> bool {
    *now >= resolve(&now.timezone(), now.date_naive(), time)
}

/// The instant a wall-clock time names on `date`. An ambiguous time (clocks
/// going back) takes its first occurrence. A time skipped by clocks going
/// forward is read in the offset that applied just before the gap.
fn resolve<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let local: NaiveDateTime = date.and_time(time);
    tz.from_local_datetime(&local).earliest().unwrap_or_else(|| {
        let before = tz.offset_from_utc_datetime(&(local - Duration::hours(3))).fix();
        tz.from_utc_datetime(&(local - Duration::seconds(before.local_minus_utc().into())))
    })
}
