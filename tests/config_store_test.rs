use awqat::management::{ConfigStore, FileConfigStore, StoredConfig};
use awqat::types::AppConfig;
use tempfile::TempDir;

fn sample_config() -> AppConfig {
    AppConfig {
        city: "Cairo".to_string(),
        country: "Egypt".to_string(),
        method: 5,
        school: 0,
        shafaq: "general".to_string(),
        detected_lat: 30.0444,
        detected_lon: 31.2357,
        timezone: "Africa/Cairo".to_string(),
    }
}

fn store_in(dir: &TempDir) -> FileConfigStore {
    FileConfigStore::new(dir.path().join("nested/awqat/config.json"))
}

#[tokio::test]
async fn test_missing_file_is_not_configured() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.load().await.unwrap(), None);
    assert!(!store.is_configured().await.unwrap());
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&sample_config()).await.unwrap();

    assert!(store.path().is_file());
    assert_eq!(store.load().await.unwrap(), Some(sample_config()));
    assert!(store.is_configured().await.unwrap());
}

#[tokio::test]
async fn test_saved_file_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&sample_config()).await.unwrap();

    let json = std::fs::read_to_string(store.path()).unwrap();
    assert!(json.contains("\"detectedLat\""));
    assert!(json.contains("\"detectedLon\""));
    assert!(json.contains("\"timezone\""));
}

#[tokio::test]
async fn test_defaults_fill_missing_keys() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"{"city":"Leeds","country":"United Kingdom","timezone":"Europe/London"}"#,
    )
    .unwrap();

    let config = store.load().await.unwrap().unwrap();
    assert_eq!(config.method, 3);
    assert_eq!(config.school, 1);
    assert_eq!(config.shafaq, "general");
    assert_eq!(config.detected_lat, 0.0);
    assert_eq!(config.detected_lon, 0.0);
}

#[tokio::test]
async fn test_city_without_country_is_not_configured() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"city":"Leeds","method":2}"#).unwrap();

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "not json").unwrap();

    assert!(matches!(
        store.load().await,
        Err(awqat::AwqatError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_clear() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&sample_config()).await.unwrap();

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);

    // Clearing twice is fine
    store.clear().await.unwrap();
}

#[test]
fn test_stored_config_round_trip_through_app_config() {
    let stored = StoredConfig::from(&sample_config());
    assert_eq!(stored.into_app_config(), Some(sample_config()));
}
