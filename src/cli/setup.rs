use crate::{
    cli::prompt::Prompter,
    config,
    error::AwqatError,
    location, methods,
    management::ConfigStore,
    success,
    types::{AppConfig, LocationData},
    utils, warning,
};

/// Runs the setup wizard on the terminal: detects the location, asks the
/// remaining questions and saves the answers.
///
/// Returns `Ok(None)` when the user cancels.
pub async fn setup<S: ConfigStore, P: Prompter>(
    store: &S,
    prompter: &mut P,
) -> Result<Option<AppConfig>, AwqatError> {
    success!("Welcome to awqat, prayer times in your terminal");

    let pb = utils::spinner("Detecting your location...");
    let detected =
        location::detect_location(&config::geolocation_url(), config::geolocation_timeout()).await;
    pb.finish_and_clear();

    configure(store, prompter, detected).await
}

/// The question part of the wizard, given the outcome of location detection.
pub async fn configure<S: ConfigStore, P: Prompter>(
    store: &S,
    prompter: &mut P,
    detected: Option<LocationData>,
) -> Result<Option<AppConfig>, AwqatError> {
    let Some(mut config) = ask_location(prompter, detected) else {
        return Ok(None);
    };

    let method_options: Vec<(String, String)> = methods::CALCULATION_METHODS
        .iter()
        .map(|m| (m.name.to_string(), m.region.to_string()))
        .collect();
    let default_method = methods::CALCULATION_METHODS
        .iter()
        .position(|m| m.id == methods::DEFAULT_METHOD_ID)
        .unwrap_or(0);
    let Some(method) = prompter.select("Select calculation method:", &method_options, default_method)
    else {
        return Ok(None);
    };
    config.method = methods::CALCULATION_METHODS[method].id;

    let school_options: Vec<(String, String)> = methods::SCHOOLS
        .iter()
        .map(|s| (s.name.to_string(), s.description.to_string()))
        .collect();
    let Some(school) = prompter.select("School of thought for Asr prayer:", &school_options, 0)
    else {
        return Ok(None);
    };
    config.school = methods::SCHOOLS[school].id;

    if methods::is_moonsighting(config.method) {
        let shafaq_options: Vec<(String, String)> = methods::SHAFAQ_OPTIONS
            .iter()
            .map(|s| (s.label.to_string(), s.description.to_string()))
            .collect();
        let Some(shafaq) = prompter.select(
            "Shafaq (twilight type) for Isha calculation:",
            &shafaq_options,
            0,
        ) else {
            return Ok(None);
        };
        config.shafaq = methods::SHAFAQ_OPTIONS[shafaq].value.to_string();
    }

    store.save(&config).await?;
    success!("Setup complete!");

    Ok(Some(config))
}

fn ask_location<P: Prompter>(prompter: &mut P, detected: Option<LocationData>) -> Option<AppConfig> {
    let mut config = AppConfig {
        city: String::new(),
        country: String::new(),
        method: methods::DEFAULT_METHOD_ID,
        school: methods::DEFAULT_SCHOOL_ID,
        shafaq: methods::DEFAULT_SHAFAQ.to_string(),
        detected_lat: 0.0,
        detected_lon: 0.0,
        timezone: utils::local_timezone(),
    };

    match detected {
        Some(location) => {
            success!("Detected: {}, {}", location.city, location.country);
            if prompter.confirm("Is this correct?", true)? {
                config.city = location.city;
                config.country = location.country;
                config.detected_lat = location.lat;
                config.detected_lon = location.lon;
                config.timezone = location.timezone;
                return Some(config);
            }
        }
        None => warning!("Could not detect location automatically."),
    }

    config.city = prompter.text("Enter your city:", "e.g. London", "City is required")?;
    config.country = prompter.text(
        "Enter your country:",
        "e.g. United Kingdom",
        "Country is required",
    )?;
    Some(config)
}
