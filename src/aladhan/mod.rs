//! # Aladhan timings API
//!
//! Client and response normalization for the two endpoints the CLI uses:
//!
//! - `GET {base}/timingsByCity` - one day's schedule
//! - `GET {base}/calendarByCity` - the schedule for every day of a month
//!
//! Both endpoints wrap their payload in `{code, data}`. The normalizer checks
//! the code, reshapes each day into a [`DayData`](crate::types::DayData) and
//! strips the zone annotation the API appends to times (`"05:12 (+03)"`).
//!
//! ```text
//! fetch_today / fetch_week
//!          ↓
//!   HTTP (reqwest, JSON)
//!          ↓
//!   normalize (envelope → DayData)
//! ```
//!
//! The week view is cut out of the month calendar with [`week_slice`]. Near
//! the end of a month that window is shorter than seven days; the next
//! month is never fetched.

mod normalize;
mod timings;

pub use normalize::parse_calendar_response;
pub use normalize::parse_day_data;
pub use normalize::parse_day_response;
pub use normalize::strip_timezone;
pub use normalize::week_slice;
pub use timings::TimingsQuery;
pub use timings::fetch_today;
pub use timings::fetch_week;
