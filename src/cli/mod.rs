//! # CLI Module
//!
//! Command flows behind the `awqat` flags. Each flow loads what it needs,
//! talks to the remote services, and prints through [`crate::display`].
//!
//! ## Commands
//!
//! - [`setup`] - Interactive wizard: location (detected or typed), calculation
//!   method, Asr school and, for the moonsighting method, shafaq
//! - [`today`] - Today's schedule as a table, the next prayer only, or JSON
//! - [`week`] - Today and the following six days of the current month
//! - [`info`] - The saved configuration
//!
//! ## Error Presentation
//!
//! Fetch failures end the process with exit code 1. Connectivity problems
//! (network errors, timeouts) get a "check your internet connection" message;
//! anything else prints the error and suggests re-running setup, since a
//! rejected request usually means an unknown city.
//!
//! ```text
//! awqat                     # today's prayers (runs setup on first use)
//! awqat --next              # next prayer + countdown
//! awqat --week              # the week ahead
//! awqat --json              # machine-readable output
//! awqat --city Cairo --country Egypt   # one-off location override
//! ```

mod info;
mod prompt;
mod setup;
mod today;
mod week;

pub use info::info;
pub use prompt::Prompter;
pub use prompt::TerminalPrompter;
pub use setup::configure;
pub use setup::setup;
pub use today::TodayOptions;
pub use today::render_today_view;
pub use today::today;
pub use week::render_week_view;
pub use week::week;

use crate::{error, error::AwqatError, warning};

/// The closing line printed for a fetch failure.
pub fn fetch_error_hint(err: &AwqatError) -> &'static str {
    if err.is_connectivity() {
        "Could not fetch prayer times. Check your internet connection."
    } else {
        "Try running `awqat --setup` to update your city."
    }
}

/// Prints a fetch failure and exits with code 1.
pub fn report_fetch_error(err: &AwqatError) -> ! {
    if !err.is_connectivity() {
        warning!("{}", err);
    }
    error!("{}", fetch_error_hint(err));
}
