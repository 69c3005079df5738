use std::io::Cursor;

use awqat::cli::{
    Prompter, TerminalPrompter, TodayOptions, configure, fetch_error_hint, render_today_view,
    render_week_view,
};
use awqat::management::{ConfigStore, FileConfigStore};
use awqat::types::{AppConfig, LocationData};
use chrono::{DateTime, NaiveDate, Utc};
use mockito::Matcher;
use serde_json::{Value, json};
use tempfile::TempDir;

fn prompter(answers: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
}

fn leeds() -> LocationData {
    LocationData {
        city: "Leeds".to_string(),
        country: "United Kingdom".to_string(),
        lat: 53.7965,
        lon: -1.5478,
        timezone: "Europe/London".to_string(),
    }
}

fn saved_config() -> AppConfig {
    AppConfig {
        city: "London".to_string(),
        country: "United Kingdom".to_string(),
        method: 3,
        school: 1,
        shafaq: "general".to_string(),
        detected_lat: 0.0,
        detected_lon: 0.0,
        timezone: "Europe/London".to_string(),
    }
}

fn raw_day(day: u32) -> Value {
    json!({
        "timings": {
            "Fajr": "05:00 (BST)", "Sunrise": "06:20 (BST)", "Dhuhr": "12:15 (BST)",
            "Asr": "15:45 (BST)", "Maghrib": "18:30 (BST)", "Isha": "20:00 (BST)"
        },
        "date": {
            "hijri": { "day": "26", "month": { "en": "Rabīʿ al-thānī" }, "year": "1448" },
            "gregorian": { "date": format!("{:02}-10-2026", day) }
        }
    })
}

fn at(h: u32, m: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_utc()
}

#[tokio::test]
async fn test_setup_accepts_detected_location() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(dir.path().join("config.json"));
    // confirm (default yes), method (default), school 2 = Shafi
    let mut p = prompter("\n\n2\n");

    let config = configure(&store, &mut p, Some(leeds())).await.unwrap().unwrap();

    assert_eq!(config.city, "Leeds");
    assert_eq!(config.country, "United Kingdom");
    assert_eq!(config.method, 3);
    assert_eq!(config.school, 0);
    assert_eq!(config.shafaq, "general");
    assert_eq!(config.detected_lat, 53.7965);
    assert_eq!(config.detected_lon, -1.5478);
    assert_eq!(config.timezone, "Europe/London");
    assert_eq!(store.load().await.unwrap(), Some(config));
}

#[tokio::test]
async fn test_setup_manual_entry_with_moonsighting() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(dir.path().join("config.json"));
    // decline, empty city is re-asked, method 4 = Moonsighting, school default, shafaq 3 = abyad
    let mut p = prompter("n\n\nCairo\nEgypt\n4\n\n3\n");

    let config = configure(&store, &mut p, Some(leeds())).await.unwrap().unwrap();

    assert_eq!(config.city, "Cairo");
    assert_eq!(config.country, "Egypt");
    assert_eq!(config.method, 15);
    assert_eq!(config.school, 1);
    assert_eq!(config.shafaq, "abyad");
    assert_eq!(config.detected_lat, 0.0);
    assert_eq!(config.detected_lon, 0.0);

    let output = String::from_utf8(p.into_output()).unwrap();
    assert!(output.contains("City is required"));
}

#[tokio::test]
async fn test_setup_without_detection_asks_for_location() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(dir.path().join("config.json"));
    // invalid method choice is re-asked
    let mut p = prompter("Istanbul\nTurkey\n99\n2\n1\n");

    let config = configure(&store, &mut p, None).await.unwrap().unwrap();

    assert_eq!(config.city, "Istanbul");
    assert_eq!(config.method, 2);
    assert_eq!(config.school, 1);
}

#[tokio::test]
async fn test_setup_cancelled_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::new(dir.path().join("config.json"));
    let mut p = prompter("Istanbul\n");

    assert_eq!(configure(&store, &mut p, None).await.unwrap(), None);
    assert!(!store.is_configured().await.unwrap());
}

#[test]
fn test_confirm_re_asks_on_unknown_answer() {
    let mut p = prompter("maybe\nno\n");
    assert_eq!(p.confirm("Is this correct?", true), Some(false));
}

#[tokio::test]
async fn test_today_view_uses_overrides_for_this_run() {
    colored::control::set_override(false);
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/timingsByCity")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("city".into(), "Paris".into()),
            Matcher::UrlEncoded("country".into(), "France".into()),
        ]))
        .with_status(200)
        .with_body(json!({ "code": 200, "data": raw_day(18) }).to_string())
        .create_async()
        .await;

    let options = TodayOptions {
        json: true,
        next: false,
        city: Some("Paris".to_string()),
        country: Some("France".to_string()),
    };
    let output = render_today_view(&server.url(), &saved_config(), &options, &at(16, 0))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["location"]["city"], "Paris");
    assert_eq!(json["next"]["prayer"], "Maghrib");
    assert_eq!(json["next"]["in"], "2h 30m");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_today_view_next_only() {
    colored::control::set_override(false);
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/timingsByCity")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "code": 200, "data": raw_day(18) }).to_string())
        .create_async()
        .await;

    let options = TodayOptions {
        next: true,
        ..TodayOptions::default()
    };
    let output = render_today_view(&server.url(), &saved_config(), &options, &at(12, 0))
        .await
        .unwrap();

    assert!(output.contains("Dhuhr  at  12:15 PM"));
    assert!(output.contains("in 15m"));
}

#[tokio::test]
async fn test_today_view_remote_error_renders_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/timingsByCity")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"code":500,"data":"Internal error"}"#)
        .create_async()
        .await;

    let err = render_today_view(
        &server.url(),
        &saved_config(),
        &TodayOptions::default(),
        &at(12, 0),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, awqat::AwqatError::Remote { code: 500 }));
    assert!(!err.is_connectivity());
    assert!(fetch_error_hint(&err).contains("awqat --setup"));
}

#[test]
fn test_fetch_error_hint_by_kind() {
    use awqat::{AwqatError, TransportFailure};

    let timeout = AwqatError::Transport(TransportFailure::Timeout);
    assert!(fetch_error_hint(&timeout).contains("internet connection"));

    let rejected = AwqatError::Transport(TransportFailure::Status(400));
    assert!(fetch_error_hint(&rejected).contains("awqat --setup"));
}

#[tokio::test]
async fn test_week_view() {
    colored::control::set_override(false);
    let mut server = mockito::Server::new_async().await;
    let data: Vec<Value> = (1..=31).map(raw_day).collect();
    let _mock = server
        .mock("GET", "/calendarByCity")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "code": 200, "data": data }).to_string())
        .create_async()
        .await;

    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let output = render_week_view(&server.url(), &saved_config(), None, None, today)
        .await
        .unwrap();

    assert!(output.contains("Week of 18 Oct – 24 Oct"));
    assert!(output.contains("📍 London, United Kingdom"));
    assert!(output.contains("Sat 24 Oct"));
    assert!(!output.contains("Sun 25 Oct"));
}
