//! Test support - a fixed in-memory catalog.
//!
//! Stands in for the tz database so tests control "now" per zone and never
//! depend on the host clock.

use std::cell::Cell;

use shared::ZoneCatalog;

struct FakeZone {
    id: &'static str,
    abbrev: &'static str,
    time: Cell<(u32, u32)>,
}

/// A small catalog with deterministic wall clocks.
///
/// The Etc/GMT entries exist to overflow the suggestion cap: a "gmt" query
/// matches Europe/London by abbreviation plus all six of them.
pub struct FakeCatalog {
    zones: Vec<FakeZone>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        let entries: [(&'static str, &'static str, (u32, u32)); 12] = [
            ("UTC", "UTC", (12, 0)),
            ("Europe/London", "GMT", (12, 0)),
            ("Europe/Paris", "CET", (13, 30)),
            ("America/New_York", "EST", (7, 15)),
            ("Asia/Tokyo", "JST", (21, 45)),
            ("Australia/Sydney", "AEST", (22, 5)),
            ("Etc/GMT-1", "+01", (13, 0)),
            ("Etc/GMT-2", "+02", (14, 0)),
            ("Etc/GMT-3", "+03", (15, 0)),
            ("Etc/GMT-4", "+04", (16, 0)),
            ("Etc/GMT-5", "+05", (17, 0)),
            ("Etc/GMT-6", "+06", (18, 0)),
        ];
        let zones = entries
            .into_iter()
            .map(|(id, abbrev, time)| FakeZone {
                id,
                abbrev,
                time: Cell::new(time),
            })
            .collect();
        Self { zones }
    }

    /// Move a zone's wall clock, as if time had passed
    pub fn set_time(&self, id: &str, hour: u32, minute: u32) {
        if let Some(zone) = self.find(id) {
            zone.time.set((hour, minute));
        }
    }

    fn find(&self, id: &str) -> Option<&FakeZone> {
        self.zones.iter().find(|z| z.id == id)
    }
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneCatalog for FakeCatalog {
    fn zone_ids(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.id.to_string()).collect()
    }

    fn local_time(&self, id: &str) -> Option<(u32, u32)> {
        self.find(id).map(|z| z.time.get())
    }

    fn abbreviation(&self, id: &str) -> Option<String> {
        self.find(id).map(|z| z.abbrev.to_string())
    }

    fn start_of_day_plus(&self, id: &str, hours: f64) -> Option<String> {
        self.find(id)?;
        let total_minutes = (hours * 60.0).round() as i64;
        let hour24 = (total_minutes / 60).rem_euclid(24) as u32;
        let minute = total_minutes.rem_euclid(60) as u32;

        let (hour12, meridiem) = match hour24 {
            0 => (12, "AM"),
            1..=11 => (hour24, "AM"),
            12 => (12, "PM"),
            _ => (hour24 - 12, "PM"),
        };
        Some(format!("{:02}:{:02} {}", hour12, minute, meridiem))
    }
}
