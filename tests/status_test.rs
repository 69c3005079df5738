use awqat::status::{format_countdown, is_past, prayer_status};
use awqat::types::{PrayerName, PrayerTimings};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::London;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// Helper function to build the reference day used across tests
fn sample_timings() -> PrayerTimings {
    PrayerTimings {
        fajr: hm(5, 0),
        sunrise: hm(6, 20),
        dhuhr: hm(12, 15),
        asr: hm(15, 45),
        maghrib: hm(18, 30),
        isha: hm(20, 0),
    }
}

fn wall(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn at(h: u32, m: u32) -> DateTime<Utc> {
    wall(h, m).and_utc()
}

fn london(y: i32, mo: u32, d: u32, h: u32, m: u32) -> DateTime<chrono_tz::Tz> {
    let local = NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    London.from_local_datetime(&local).single().unwrap()
}

#[test]
fn test_afternoon_status() {
    let status = prayer_status(&sample_timings(), &at(16, 0));

    assert_eq!(status.current, Some(PrayerName::Asr));
    assert_eq!(status.next, Some(PrayerName::Maghrib));
    assert_eq!(status.next_time, Some(wall(18, 30)));
    assert_eq!(status.countdown, "2h 30m");
}

#[test]
fn test_before_first_prayer() {
    let status = prayer_status(&sample_timings(), &at(3, 10));

    assert_eq!(status.current, None);
    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert_eq!(status.next_time, Some(wall(5, 0)));
    assert_eq!(status.countdown, "1h 50m");
}

#[test]
fn test_prayer_is_current_at_its_start_instant() {
    let timings = sample_timings();

    for (name, time) in timings.iter() {
        let now = wall(0, 0).date().and_time(time).and_utc();
        let status = prayer_status(&timings, &now);
        assert_eq!(status.current, Some(name), "at {}", time);
        assert_ne!(status.next, Some(name));
    }
}

#[test]
fn test_one_minute_before_prayer_is_next() {
    let status = prayer_status(&sample_timings(), &at(12, 14));

    assert_eq!(status.current, Some(PrayerName::Sunrise));
    assert_eq!(status.next, Some(PrayerName::Dhuhr));
    assert_eq!(status.countdown, "1m");
}

#[test]
fn test_after_isha_rolls_over_to_tomorrows_fajr() {
    let now = at(21, 30);
    let status = prayer_status(&sample_timings(), &now);

    assert_eq!(status.current, Some(PrayerName::Isha));
    assert_eq!(status.next, Some(PrayerName::Fajr));

    let next_time = status.next_time.unwrap();
    assert_eq!(next_time.date(), now.date_naive().succ_opt().unwrap());
    assert_eq!(next_time.time(), hm(5, 0));
    assert_eq!(status.countdown, "7h 30m");
}

#[test]
fn test_exactly_at_isha_rolls_over() {
    let now = at(20, 0);
    let status = prayer_status(&sample_timings(), &now);

    assert_eq!(status.current, Some(PrayerName::Isha));
    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert!(status.next_time.unwrap() > now.naive_utc());
}

#[test]
fn test_rollover_crosses_month_and_year() {
    let now = NaiveDate::from_ymd_opt(2026, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap()
        .and_utc();
    let status = prayer_status(&sample_timings(), &now);

    let next_time = status.next_time.unwrap();
    assert_eq!(next_time.date(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    assert_eq!(status.countdown, "5h 01m");
}

#[test]
fn test_countdown_across_clocks_going_back() {
    // 2026-10-25 02:00 BST becomes 01:00 GMT overnight
    let now = london(2026, 10, 24, 22, 0);
    let status = prayer_status(&sample_timings(), &now);

    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert_eq!(status.next_time.unwrap().time(), hm(5, 0));
    assert_eq!(status.countdown, "8h 00m");
}

#[test]
fn test_countdown_across_clocks_going_forward() {
    // 2026-03-29 01:00 GMT becomes 02:00 BST overnight
    let now = london(2026, 3, 28, 22, 0);
    let status = prayer_status(&sample_timings(), &now);

    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert_eq!(status.countdown, "6h 00m");
}

#[test]
fn test_prayer_inside_skipped_hour_uses_offset_before_the_gap() {
    let mut timings = sample_timings();
    timings.fajr = hm(1, 30);
    let now = london(2026, 3, 29, 0, 30);
    let status = prayer_status(&timings, &now);

    assert_eq!(status.current, None);
    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert_eq!(status.countdown, "1h 00m");
}

#[test]
fn test_ambiguous_prayer_time_takes_first_occurrence() {
    let mut timings = sample_timings();
    timings.fajr = hm(1, 30);
    let now = london(2026, 10, 25, 0, 0);
    let status = prayer_status(&timings, &now);

    assert_eq!(status.next, Some(PrayerName::Fajr));
    assert_eq!(status.countdown, "1h 30m");
    assert!(!is_past(hm(1, 30), &now));
}

#[test]
fn test_format_countdown() {
    assert_eq!(format_countdown(Duration::zero()), "now");
    assert_eq!(format_countdown(Duration::minutes(-5)), "now");
    assert_eq!(format_countdown(Duration::minutes(59)), "59m");
    assert_eq!(format_countdown(Duration::minutes(60)), "1h 00m");
    assert_eq!(format_countdown(Duration::minutes(125)), "2h 05m");
    assert_eq!(format_countdown(Duration::seconds(30)), "0m");
    assert_eq!(format_countdown(Duration::seconds(61 * 60 + 59)), "1h 01m");
}

#[test]
fn test_is_past() {
    assert!(is_past(hm(15, 45), &at(15, 45)));
    assert!(is_past(hm(5, 0), &at(16, 0)));
    assert!(!is_past(hm(18, 30), &at(16, 0)));
}
