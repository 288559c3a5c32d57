//! Shared support for the zone board.
//!
//! Holds the zone catalog adapter (the only seam to the tz database) and
//! preference persistence utilities.

pub mod catalog;
pub mod config;

pub use catalog::{TzCatalog, ZoneCatalog};
pub use config::{load_prefs, prefs_path, save_prefs, ConfigError};
