//! Zone search - free-text filtering of the catalog.
//!
//! Matches against both the identifier and the zone's current abbreviation,
//! so "gmt" finds Europe/London even though the id never mentions it.

use shared::ZoneCatalog;

/// Maximum number of suggestions surfaced to the UI
pub const MAX_RESULTS: usize = 5;

/// Case-insensitive substring search over the catalog, in catalog order,
/// capped at [`MAX_RESULTS`]. An empty query returns nothing; callers hide
/// the suggestion panel in that case. Zones without an abbreviation still
/// match on their identifier.
pub fn search(query: &str, catalog: &dyn ZoneCatalog) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    catalog
        .zone_ids()
        .into_iter()
        .filter(|id| {
            if id.to_lowercase().contains(&needle) {
                return true;
            }
            catalog
                .abbreviation(id)
                .map(|abbrev| abbrev.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .take(MAX_RESULTS)
        .collect()
}
