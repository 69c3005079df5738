//! Text and JSON renderers.
//!
//! Renderers never fetch or compute schedules themselves. They take the
//! normalized [`DayData`] plus the invocation's "now" and derive the status
//! through [`crate::status`].

use chrono::{DateTime, TimeZone};
use colored::Colorize;
use tabled::Table;

use crate::{
    error::AwqatError,
    methods,
    status::{self, is_past},
    types::{
        AppConfig, DayData, JsonLocation, JsonNext, PrayerName, PrayerStatus, TodayJson,
        WeekTableRow,
    },
    utils,
};

const BANNER: &str = r#"
 █████╗ ██╗    ██╗ ██████╗  █████╗ ████████╗
██╔══██╗██║    ██║██╔═══██╗██╔══██╗╚══██╔══╝
███████║██║ █╗ ██║██║   ██║███████║   ██║
██╔══██║██║███╗██║██║▄▄ ██║██╔══██║   ██║
██║  ██║╚███╔███╔╝╚██████╔╝██║  ██║   ██║
╚═╝  ╚═╝ ╚══╝╚══╝  ╚══▀▀═╝ ╚═╝  ╚═╝   ╚═╝"#;

pub fn render_header() -> String {
    let art = BANNER
        .lines()
        .map(|line| line.bright_green().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let subtitle = "🕌 awqat  •  Prayer times in your terminal".dimmed();

    format!("{}\n\n  {}\n", art, subtitle)
}

fn render_location_line<Tz: TimeZone>(
    data: &DayData,
    city: &str,
    country: &str,
    now: &DateTime<Tz>,
) -> String {
    let gregorian = utils::format_gregorian_date(now.date_naive());
    format!(
        "  📍 {}, {}    {}  {}  {}",
        city,
        country,
        data.hijri.to_string().dimmed(),
        "•".dimmed(),
        gregorian.dimmed()
    )
}

fn render_prayer_row<Tz: TimeZone>(
    name: PrayerName,
    data: &DayData,
    status: &PrayerStatus,
    now: &DateTime<Tz>,
) -> String {
    let time = data.timings.get(name);
    let name_col = format!("{:<12}", name.as_str());
    let time_col = format!("{:<12}", utils::format_to_12_hour(time));

    if status.current == Some(name) {
        format!(
            "  {}{}{}",
            name_col.green().bold(),
            time_col.green().bold(),
            " ⏳ ← current".green()
        )
    } else if is_past(time, now) {
        format!("  {}{}{}", name_col.dimmed(), time_col.dimmed(), " ✅".dimmed())
    } else {
        format!("  {}{}", name_col.white(), time_col.white())
    }
}

fn render_status_lines(status: &PrayerStatus) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(current) = status.current {
        lines.push(format!(
            "  {}",
            format!("Status: {} in progress", current).green()
        ));
    }

    if let Some(next) = status.next {
        if !status.countdown.is_empty() {
            lines.push(format!(
                "  {} {}",
                "Up next:".white(),
                format!("{} in {}", next, status.countdown).yellow().bold()
            ));
        }
    }

    lines
}

/// Full-day view: the six prayers with passed/current/upcoming styling.
pub fn render_today<Tz: TimeZone>(
    data: &DayData,
    city: &str,
    country: &str,
    now: &DateTime<Tz>,
) -> String {
    let status = status::prayer_status(&data.timings, now);
    let mut lines = vec![
        render_header(),
        format!("  {}", "Today's Prayers".white().bold()),
        render_location_line(data, city, country, now),
        String::new(),
        format!("  {}{}", format!("{:<12}", "Prayer").dimmed(), "Adhan".dimmed()),
        format!("  {}", "─".repeat(40).dimmed()),
    ];

    for name in PrayerName::ALL {
        lines.push(render_prayer_row(name, data, &status, now));
    }

    lines.push(String::new());
    lines.extend(render_status_lines(&status));
    lines.push(String::new());
    lines.push(format!(
        "  {}",
        format!("🕐 Current time: {}", utils::format_to_12_hour(now.time())).dimmed()
    ));
    lines.push(String::new());

    lines.join("\n")
}

/// Next prayer with its start time and countdown.
pub fn render_next<Tz: TimeZone>(data: &DayData, now: &DateTime<Tz>) -> String {
    let status = status::prayer_status(&data.timings, now);
    let mut lines = vec![render_header()];

    match status.next {
        Some(next) if !status.countdown.is_empty() => {
            let at = status
                .next_time
                .map(|t| t.time())
                .unwrap_or_else(|| data.timings.get(next));
            lines.push(format!("  {}", "Next Prayer".white().bold()));
            lines.push(String::new());
            lines.push(format!(
                "  {}  {}  {}",
                next.as_str().green().bold(),
                "at".dimmed(),
                utils::format_to_12_hour(at).white().bold()
            ));
            lines.push(format!(
                "  {} {}",
                "in".dimmed(),
                status.countdown.yellow().bold()
            ));
        }
        _ => lines.push(format!(
            "  {}",
            "All prayers for today have passed.".dimmed()
        )),
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Multi-day table for the week window.
pub fn render_week(days: &[DayData], city: &str, country: &str) -> String {
    let mut lines = vec![render_header()];

    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        lines.push(format!("  {}", "No data available.".dimmed()));
        return lines.join("\n");
    };

    let range = match (first.date(), last.date()) {
        (Some(from), Some(to)) => format!(
            "{} – {}",
            utils::format_short_date(from),
            utils::format_short_date(to)
        ),
        _ => format!("{} – {}", first.gregorian_date, last.gregorian_date),
    };

    lines.push(format!("  {}", format!("Week of {}", range).white().bold()));
    lines.push(format!("  📍 {}, {}", city, country));
    lines.push(String::new());

    let rows: Vec<WeekTableRow> = days
        .iter()
        .map(|day| {
            let t = &day.timings;
            WeekTableRow {
                date: day
                    .date()
                    .map(utils::format_weekday_date)
                    .unwrap_or_else(|| day.gregorian_date.clone()),
                fajr: t.fajr.format("%H:%M").to_string(),
                dhuhr: t.dhuhr.format("%H:%M").to_string(),
                asr: t.asr.format("%H:%M").to_string(),
                maghrib: t.maghrib.format("%H:%M").to_string(),
                isha: t.isha.format("%H:%M").to_string(),
            }
        })
        .collect();

    lines.push(Table::new(rows).to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Machine-readable view of today's schedule.
pub fn render_json<Tz: TimeZone>(
    data: &DayData,
    config: &AppConfig,
    city: &str,
    country: &str,
    now: &DateTime<Tz>,
) -> Result<String, AwqatError> {
    let status = status::prayer_status(&data.timings, now);
    let date = data
        .date()
        .map(utils::to_iso_date)
        .unwrap_or_else(|| data.gregorian_date.clone());

    let output = TodayJson {
        date,
        hijri: data.hijri.to_string(),
        location: JsonLocation { city, country },
        method: methods::method_name(config.method),
        school: methods::school_name(config.school),
        prayers: &data.timings,
        next: status.next.map(|prayer| JsonNext {
            prayer,
            in_: status.countdown.clone(),
        }),
    };

    serde_json::to_string_pretty(&output).map_err(|e| AwqatError::Validation(e.to_string()))
}

/// Saved preferences, or a hint when nothing is stored yet.
pub fn render_info(config: Option<&AppConfig>) -> String {
    let Some(config) = config else {
        return format!(
            "\n  {}\n",
            "No config found. Run `awqat --setup` to get started.".yellow()
        );
    };

    let row = |label: &str, value: String| format!("  {}{}", format!("{:<15}", label).dimmed(), value);

    let mut lines = vec![
        String::new(),
        format!("  {}", "awqat config".white().bold()),
        format!("  {}", "─".repeat(35).dimmed()),
        row("City:", config.city.clone()),
        row("Country:", config.country.clone()),
        row("Method:", methods::method_name(config.method)),
        row("School:", methods::school_name(config.school)),
    ];

    if methods::is_moonsighting(config.method) {
        lines.push(row("Shafaq:", config.shafaq.clone()));
    }

    lines.push(row("Timezone:", config.timezone.clone()));

    if config.detected_lat != 0.0 && config.detected_lon != 0.0 {
        lines.push(row(
            "Coordinates:",
            format!("{}, {}", config.detected_lat, config.detected_lon),
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}
