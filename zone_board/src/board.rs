//! Board state - the ordered set of selected zones and their overrides.
//!
//! Owns the display order and the per-zone slider overrides. Every mutation
//! of either goes through this module; the drag controller and the UI only
//! read the order and call back in to commit changes.

use std::collections::{HashMap, HashSet};

use shared::ZoneCatalog;

use crate::slider;

/// The sole board member at startup
pub const INITIAL_ZONE: &str = "UTC";

/// Selected zones in display order plus their frozen slider positions.
///
/// Invariants: no identifier appears twice in the order, and every override
/// key is present in the order. Zones without an override track "now" live;
/// zones with one stay frozen at the user's chosen position until removed
/// or reset.
#[derive(Debug, Clone)]
pub struct BoardState {
    order: Vec<String>,
    overrides: HashMap<String, f64>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// A fresh board containing only UTC
    pub fn new() -> Self {
        Self {
            order: vec![INITIAL_ZONE.to_string()],
            overrides: HashMap::new(),
        }
    }

    /// Zones in display order
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `id` is currently on the board (case-sensitive raw identity)
    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|z| z == id)
    }

    /// The frozen position for `id`, if the user has set one
    pub fn override_for(&self, id: &str) -> Option<f64> {
        self.overrides.get(id).copied()
    }

    /// Append a zone and freeze it at "now", captured at add time.
    ///
    /// Empty and already-selected identifiers are ignored. Identifiers the
    /// catalog does not know are still added (catalog membership is the
    /// caller's concern); they simply carry no override and their display
    /// degrades until removed.
    ///
    /// Returns true when the board changed, so the caller can clear the
    /// active search query.
    pub fn add_zone(&mut self, id: &str, catalog: &dyn ZoneCatalog) -> bool {
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.order.push(id.to_string());
        if let Some(position) = slider::position_for_now(catalog, id) {
            self.overrides.insert(id.to_string(), position);
        }
        true
    }

    /// Remove a zone and its override. No-op if absent.
    pub fn remove_zone(&mut self, id: &str) {
        self.order.retain(|z| z != id);
        self.overrides.remove(id);
    }

    /// Freeze a selected zone at the given position.
    ///
    /// Silent no-op when `id` is not on the board; selection is a
    /// usage-contract precondition, not a user-facing error.
    pub fn set_override(&mut self, id: &str, position: f64) {
        if !self.contains(id) {
            return;
        }
        self.overrides.insert(id.to_string(), position);
    }

    /// Drop a zone's override so it tracks "now" again. No-op if none is set.
    pub fn clear_override(&mut self, id: &str) {
        self.overrides.remove(id);
    }

    /// Replace the display order wholesale.
    ///
    /// The new order must contain exactly the current identifier set; any
    /// mismatch (missing, extra, or duplicated id) leaves the board
    /// unchanged. Returns whether the order was accepted.
    pub fn reorder(&mut self, new_order: Vec<String>) -> bool {
        if !self.is_same_set(&new_order) {
            return false;
        }
        self.order = new_order;
        true
    }

    /// The position the view should render for `id`: the override when one
    /// exists, otherwise "now" sampled fresh on this call.
    pub fn effective_position(&self, id: &str, catalog: &dyn ZoneCatalog) -> Option<f64> {
        if !self.contains(id) {
            return None;
        }
        self.overrides
            .get(id)
            .copied()
            .or_else(|| slider::position_for_now(catalog, id))
    }

    fn is_same_set(&self, candidate: &[String]) -> bool {
        if candidate.len() != self.order.len() {
            return false;
        }
        let mut seen = HashSet::new();
        candidate
            .iter()
            .all(|id| self.contains(id) && seen.insert(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeCatalog;

    fn board_with(ids: &[&str], catalog: &FakeCatalog) -> BoardState {
        let mut board = BoardState::new();
        board.remove_zone(INITIAL_ZONE);
        for id in ids {
            board.add_zone(id, catalog);
        }
        board
    }

    #[test]
    fn test_starts_with_utc_only() {
        let board = BoardState::new();
        assert_eq!(board.order(), ["UTC"]);
        assert!(board.override_for("UTC").is_none());
    }

    #[test]
    fn test_add_zone_is_idempotent() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();

        assert!(board.add_zone("Europe/Paris", &catalog));
        let first_override = board.override_for("Europe/Paris");

        assert!(!board.add_zone("Europe/Paris", &catalog));
        assert_eq!(board.order(), ["UTC", "Europe/Paris"]);
        assert_eq!(board.override_for("Europe/Paris"), first_override);
    }

    #[test]
    fn test_add_zone_rejects_empty() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        assert!(!board.add_zone("", &catalog));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_order_never_repeats_an_id() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        for id in ["Asia/Tokyo", "Europe/Paris", "Asia/Tokyo", "UTC", "Europe/Paris"] {
            board.add_zone(id, &catalog);
        }
        let mut sorted: Vec<&str> = board.order().iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), board.len());
    }

    #[test]
    fn test_add_captures_now_as_override() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.add_zone("Europe/Paris", &catalog);

        // FakeCatalog reports 13:30 in Paris
        assert_eq!(board.override_for("Europe/Paris"), Some(13.5));
    }

    #[test]
    fn test_unknown_id_is_added_without_override() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        assert!(board.add_zone("Nowhere/Nothing", &catalog));
        assert!(board.contains("Nowhere/Nothing"));
        assert!(board.override_for("Nowhere/Nothing").is_none());
        assert!(board.effective_position("Nowhere/Nothing", &catalog).is_none());
    }

    #[test]
    fn test_remove_zone_discards_override() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.add_zone("Europe/Paris", &catalog);
        board.remove_zone("Europe/Paris");

        assert!(!board.contains("Europe/Paris"));
        assert!(board.override_for("Europe/Paris").is_none());
        assert!(board.effective_position("Europe/Paris", &catalog).is_none());
    }

    #[test]
    fn test_readd_recomputes_fresh() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.add_zone("Europe/Paris", &catalog);
        board.set_override("Europe/Paris", 2.25);
        board.remove_zone("Europe/Paris");

        catalog.set_time("Europe/Paris", 18, 45);
        board.add_zone("Europe/Paris", &catalog);
        assert_eq!(board.override_for("Europe/Paris"), Some(18.75));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let catalog = FakeCatalog::new();
        let mut board = board_with(&["UTC", "Asia/Tokyo"], &catalog);
        board.remove_zone("Europe/Paris");
        assert_eq!(board.order(), ["UTC", "Asia/Tokyo"]);
    }

    #[test]
    fn test_set_override_requires_selection() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.set_override("Europe/Paris", 5.0);
        assert!(board.override_for("Europe/Paris").is_none());

        board.add_zone("Europe/Paris", &catalog);
        board.set_override("Europe/Paris", 5.0);
        assert_eq!(board.override_for("Europe/Paris"), Some(5.0));
    }

    #[test]
    fn test_clear_override_returns_to_live_tracking() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.add_zone("Europe/Paris", &catalog);
        board.set_override("Europe/Paris", 5.0);

        board.clear_override("Europe/Paris");
        catalog.set_time("Europe/Paris", 9, 0);
        assert_eq!(board.effective_position("Europe/Paris", &catalog), Some(9.0));
    }

    #[test]
    fn test_effective_position_tracks_now_without_override() {
        let catalog = FakeCatalog::new();
        let board = BoardState::new();

        catalog.set_time("UTC", 6, 30);
        assert_eq!(board.effective_position("UTC", &catalog), Some(6.5));

        catalog.set_time("UTC", 7, 0);
        assert_eq!(board.effective_position("UTC", &catalog), Some(7.0));
    }

    #[test]
    fn test_effective_position_frozen_by_override() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        board.set_override("UTC", 3.25);

        catalog.set_time("UTC", 20, 10);
        assert_eq!(board.effective_position("UTC", &catalog), Some(3.25));
    }

    #[test]
    fn test_reorder_accepts_permutation() {
        let catalog = FakeCatalog::new();
        let mut board = board_with(&["UTC", "Europe/Paris", "Asia/Tokyo"], &catalog);

        let permuted = vec![
            "Asia/Tokyo".to_string(),
            "UTC".to_string(),
            "Europe/Paris".to_string(),
        ];
        assert!(board.reorder(permuted.clone()));
        assert_eq!(board.order(), permuted.as_slice());
    }

    #[test]
    fn test_reorder_rejects_mismatched_set() {
        let catalog = FakeCatalog::new();
        let mut board = board_with(&["UTC", "Europe/Paris"], &catalog);
        let before: Vec<String> = board.order().to_vec();

        // Missing id
        assert!(!board.reorder(vec!["UTC".to_string()]));
        // Extra id
        assert!(!board.reorder(vec![
            "UTC".to_string(),
            "Europe/Paris".to_string(),
            "Asia/Tokyo".to_string(),
        ]));
        // Right length, duplicated id
        assert!(!board.reorder(vec!["UTC".to_string(), "UTC".to_string()]));

        assert_eq!(board.order(), before.as_slice());
    }

    #[test]
    fn test_add_then_remove_scenario() {
        let catalog = FakeCatalog::new();
        let mut board = BoardState::new();
        assert_eq!(board.order(), ["UTC"]);

        board.add_zone("Europe/Paris", &catalog);
        assert_eq!(board.order(), ["UTC", "Europe/Paris"]);
        let position = board.override_for("Europe/Paris").unwrap();
        assert!((0.0..24.0).contains(&position));

        board.remove_zone("UTC");
        assert_eq!(board.order(), ["Europe/Paris"]);
    }
}
