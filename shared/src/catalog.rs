//! Zone Catalog Adapter - wraps the time-zone database behind a small trait.
//!
//! The board and the slider codec never touch chrono-tz directly; they go
//! through `ZoneCatalog`, so tests can substitute a fixed in-memory catalog.

use chrono::{Datelike, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Read-only view of the time-zone database.
///
/// All methods are side-effect-free and total for known identifiers;
/// unknown identifiers yield `None`, never a panic. "Now" is sampled at
/// call time, so repeated calls advance with the wall clock.
pub trait ZoneCatalog {
    /// Every zone identifier the catalog knows, in catalog order.
    fn zone_ids(&self) -> Vec<String>;

    /// Current wall clock in the given zone as (hour 0-23, minute 0-59).
    fn local_time(&self, id: &str) -> Option<(u32, u32)>;

    /// Short abbreviation for the zone right now, e.g. "GMT" or "PDT".
    fn abbreviation(&self, id: &str) -> Option<String>;

    /// The zone's own local midnight today plus `hours`, formatted "hh:mm A".
    ///
    /// Anchored to that zone's start of day, so an input of 0.0 always reads
    /// as that zone's midnight regardless of where the caller is.
    fn start_of_day_plus(&self, id: &str, hours: f64) -> Option<String>;
}

/// Production catalog backed by the chrono-tz database.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzCatalog;

impl TzCatalog {
    fn parse(&self, id: &str) -> Option<Tz> {
        id.parse::<Tz>().ok()
    }
}

impl ZoneCatalog for TzCatalog {
    fn zone_ids(&self) -> Vec<String> {
        chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name().to_string())
            .collect()
    }

    fn local_time(&self, id: &str) -> Option<(u32, u32)> {
        let tz = self.parse(id)?;
        let local = Utc::now().with_timezone(&tz);
        Some((local.hour(), local.minute()))
    }

    fn abbreviation(&self, id: &str) -> Option<String> {
        let tz = self.parse(id)?;
        let local = Utc::now().with_timezone(&tz);
        Some(local.format("%Z").to_string())
    }

    fn start_of_day_plus(&self, id: &str, hours: f64) -> Option<String> {
        let tz = self.parse(id)?;
        let local = Utc::now().with_timezone(&tz);

        // Some zones skip midnight on a DST day; take the earliest valid
        // instant for that calendar date.
        let midnight = tz
            .with_ymd_and_hms(local.year(), local.month(), local.day(), 0, 0, 0)
            .earliest()?;

        let minutes = (hours * 60.0).round() as i64;
        let shifted = midnight + Duration::minutes(minutes);
        Some(shifted.format("%I:%M %p").to_string())
    }
}
