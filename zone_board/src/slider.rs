//! Slider-time codec - mapping [0,24) slider positions to wall-clock text.
//!
//! A position is hours-and-fraction past a zone's own local midnight, not a
//! clock time; each zone's slider is independently adjustable.

use shared::ZoneCatalog;

/// Snap granularity in hours (a 15-minute grid)
pub const SLIDER_STEP: f64 = 0.25;

/// Largest position on the snap grid
pub const MAX_POSITION: f64 = 24.0 - SLIDER_STEP;

/// Fixed mark labels along the 24-hour scale. Presentation constants, not
/// computed; the 24 mark is the next midnight.
pub const MARKS: [(f64, &str); 9] = [
    (0.0, "12AM"),
    (3.0, "3AM"),
    (6.0, "6AM"),
    (9.0, "9AM"),
    (12.0, "12PM"),
    (15.0, "3PM"),
    (18.0, "6PM"),
    (21.0, "9PM"),
    (24.0, "12AM"),
];

/// The zone's current wall clock as a slider position, `hour + minute/60`.
///
/// Sampled fresh on every call; never cache the result, since "now" advances.
pub fn position_for_now(catalog: &dyn ZoneCatalog, id: &str) -> Option<f64> {
    let (hour, minute) = catalog.local_time(id)?;
    Some(hour as f64 + minute as f64 / 60.0)
}

/// Quantize a raw position onto the step grid and clamp it into [0, 24)
pub fn snap(position: f64) -> f64 {
    ((position / SLIDER_STEP).round() * SLIDER_STEP).clamp(0.0, MAX_POSITION)
}

/// Render a position as `H:MM AM/PM`.
///
/// Minutes come from rounding the fractional hour, which can produce 60;
/// that carries into the next hour, and hour 24 wraps back to midnight.
/// Without both guards a position like 11.999 would read "11:60 AM".
pub fn format_position(position: f64) -> String {
    let mut hour = position.floor() as u32;
    let mut minute = ((position - position.floor()) * 60.0).round() as u32;

    if minute == 60 {
        minute = 0;
        hour += 1;
    }
    if hour >= 24 {
        hour -= 24;
    }

    let (hour12, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

/// The wall-clock reading for a zone at the given position, anchored to that
/// zone's own midnight. Degrades to a placeholder when the catalog has no
/// entry for `id`.
pub fn display_time(catalog: &dyn ZoneCatalog, id: &str, position: f64) -> String {
    catalog
        .start_of_day_plus(id, position)
        .unwrap_or_else(|| "--:--".to_string())
}
