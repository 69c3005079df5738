//! Awqat: prayer times in the terminal
//!
//! This library backs the `awqat` command-line client. It fetches daily and
//! monthly prayer schedules from the Aladhan timings API, normalizes the
//! payloads into a small internal data model, works out which prayer is
//! current and which one comes next, and renders the result as text or JSON.
//!
//! # Modules
//!
//! - `aladhan` - Timings API client and response normalization
//! - `cli` - Command flows (setup wizard, today, week, info)
//! - `config` - Runtime settings from the environment and `.env` files
//! - `display` - Text and JSON renderers
//! - `error` - Error taxonomy shared by every fallible operation
//! - `location` - Best-effort IP geolocation used during setup
//! - `management` - Persisted user preferences
//! - `methods` - Calculation methods, Asr schools and shafaq options
//! - `status` - Current/next prayer and countdown computation
//! - `types` - Data structures and type definitions
//! - `utils` - Date and time formatting helpers
//!
//! # Example
//!
//! ```
//! use awqat::{aladhan, config, status};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), awqat::AwqatError> {
//!     let query = aladhan::TimingsQuery::new("London", "United Kingdom", 3, 1, "general");
//!     let day = aladhan::fetch_today(&config::aladhan_api_url(), &query).await?;
//!     let now = chrono::Local::now();
//!     println!("{:?}", status::prayer_status(&day.timings, &now));
//!     Ok(())
//! }
//! ```

pub mod aladhan;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod location;
pub mod management;
pub mod methods;
pub mod status;
pub mod types;
pub mod utils;

pub use error::{AwqatError, TransportFailure};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Detecting your location...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Setup complete!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The message goes to stderr and the process terminates with exit code 1.
/// Only use this for fatal errors where recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Could not fetch prayer times. Check your internet connection.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// # Example
///
/// ```
/// warning!("Could not detect location automatically.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line to stderr when `AWQAT_DEBUG` is set.
///
/// # Example
///
/// ```
/// debug!("GET {}", url);
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::config::debug_enabled() {
      use colored::Colorize;
      eprintln!("[{}] {}", "~".dimmed(), std::format!($($arg)*).dimmed());
    }
  })
}
