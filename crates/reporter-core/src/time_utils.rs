use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

const HOUR: i64 = 3600;
const HALF_HOUR: i64 = 1800;

// ── Hour rounding ─────────────────────────────────────────────────────────────

/// Round epoch seconds to the nearest hour boundary.
///
/// Ties at exactly 30 minutes round to the even hour (half-to-even on
/// whole hours).
pub fn round_epoch_to_hour(secs: i64) -> i64 {
    let rem = secs.rem_euclid(HOUR);
    let floor = secs - rem;
    if rem > HALF_HOUR {
        floor + HOUR
    } else if rem < HALF_HOUR {
        floor
    } else if (floor / HOUR) % 2 == 0 {
        floor
    } else {
        floor + HOUR
    }
}

/// The hour bucket a submit time falls into, as a UTC timestamp.
pub fn hour_bucket(secs: i64) -> DateTime<Utc> {
    // from_timestamp only fails outside chrono's ±262000-year range;
    // accounting exports never get there.
    DateTime::from_timestamp(round_epoch_to_hour(secs), 0).unwrap_or_default()
}

// ── Timezone handling ─────────────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Falls back to `"UTC"` if detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Resolve a timezone flag value to a concrete [`Tz`].
///
/// `"auto"` detects the system timezone. Unrecognised names fall back
/// to UTC and log a warning.
pub fn resolve_timezone(name: &str) -> Tz {
    let name = if name.eq_ignore_ascii_case("auto") {
        get_system_timezone()
    } else {
        name.to_string()
    };
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("unrecognised timezone \"{}\", falling back to UTC", name);
        Tz::UTC
    })
}

/// Format a bucket timestamp for the spreadsheet in the given timezone.
pub fn format_hour_label(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
