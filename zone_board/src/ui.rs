//! UI module - the egui side panel.
//!
//! Provides:
//! - Zone search with a capped suggestion list
//! - The selected-zone roster with remove and reset actions
//! - Display preferences

use nannou_egui::egui;

/// Width of the side panel in points
pub const SIDE_PANEL_WIDTH: f32 = 260.0;

/// One selected zone as the roster shows it
pub struct ZoneEntry {
    /// Raw catalog identifier
    pub id: String,
    /// Shortened display name
    pub name: String,
    /// Whether the zone is frozen at a user-chosen position
    pub frozen: bool,
}

/// Result of side panel interactions
#[derive(Default)]
pub struct PanelResult {
    /// If Some, add this zone to the board
    pub add_zone: Option<String>,
    /// If Some, remove this zone from the board
    pub remove_zone: Option<String>,
    /// If Some, drop this zone's override so it tracks "now" again
    pub reset_zone: Option<String>,
    /// The search query changed; suggestions need recomputing
    pub query_changed: bool,
    /// The mark-label preference was toggled
    pub show_mark_labels_changed: bool,
    /// The reduced-motion preference was toggled
    pub reduced_motion_changed: bool,
}

/// Draw the side panel: search, suggestions, roster, preferences
pub fn draw_side_panel(
    ctx: &egui::Context,
    query: &mut String,
    should_focus_search: &mut bool,
    suggestions: &[String],
    zones: &[ZoneEntry],
    show_mark_labels: &mut bool,
    reduced_motion: &mut bool,
) -> PanelResult {
    let mut result = PanelResult::default();

    egui::SidePanel::left("zone_panel")
        .resizable(false)
        .default_width(SIDE_PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("Zone Board");
            ui.add_space(10.0);

            // Search field plus a button that submits the raw query as an id
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(query);
                if *should_focus_search {
                    response.request_focus();
                    *should_focus_search = false;
                }
                if response.changed() {
                    result.query_changed = true;
                }

                let can_add = !query.is_empty();
                if ui
                    .add_enabled(can_add, egui::Button::new("+"))
                    .on_hover_text("Add this identifier")
                    .clicked()
                {
                    result.add_zone = Some(query.clone());
                }
            });

            // Suggestions stay hidden entirely while the query is empty
            if !query.is_empty() {
                ui.add_space(4.0);
                if suggestions.is_empty() {
                    ui.label(
                        egui::RichText::new("No matches")
                            .size(11.0)
                            .color(egui::Color32::from_rgb(140, 145, 155)),
                    );
                }
                for id in suggestions {
                    let name = display_name(id);
                    if ui
                        .selectable_label(false, &name)
                        .on_hover_text(id)
                        .clicked()
                    {
                        result.add_zone = Some(id.clone());
                    }
                }
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            // Roster of selected zones
            ui.label(
                egui::RichText::new(format!("On the board ({})", zones.len()))
                    .size(12.0)
                    .color(egui::Color32::from_rgb(160, 165, 175)),
            );
            ui.add_space(5.0);

            egui::ScrollArea::vertical()
                .max_height(380.0)
                .show(ui, |ui| {
                    for zone in zones {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&zone.name)
                                        .color(egui::Color32::from_rgb(225, 228, 235)),
                                );
                                let status = if zone.frozen { "frozen" } else { "live" };
                                ui.label(
                                    egui::RichText::new(status)
                                        .size(10.0)
                                        .color(egui::Color32::from_rgb(130, 135, 148)),
                                );
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .small_button("×")
                                        .on_hover_text("Remove zone")
                                        .clicked()
                                    {
                                        result.remove_zone = Some(zone.id.clone());
                                    }
                                    if zone.frozen
                                        && ui
                                            .small_button("↺")
                                            .on_hover_text("Track the clock again")
                                            .clicked()
                                    {
                                        result.reset_zone = Some(zone.id.clone());
                                    }
                                },
                            );
                        });
                        ui.add_space(4.0);
                    }
                });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            // Preferences
            ui.label("Preferences");
            ui.add_space(3.0);
            if ui.checkbox(show_mark_labels, "Mark labels").changed() {
                result.show_mark_labels_changed = true;
            }
            if ui.checkbox(reduced_motion, "Reduced motion").changed() {
                result.reduced_motion_changed = true;
            }

            ui.add_space(15.0);

            // Keyboard hints
            ui.label(
                egui::RichText::new("Keyboard:")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(140, 145, 155)),
            );
            ui.label(
                egui::RichText::new("/ or F  focus search")
                    .size(10.0)
                    .color(egui::Color32::from_rgb(120, 125, 135)),
            );
            ui.label(
                egui::RichText::new("Esc  clear search")
                    .size(10.0)
                    .color(egui::Color32::from_rgb(120, 125, 135)),
            );
        });

    result
}

/// Short display name: the last path segment with underscores as spaces,
/// e.g. "America/New_York" -> "New York"
pub fn display_name(id: &str) -> String {
    id.split('/').last().unwrap_or(id).replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_takes_last_segment() {
        assert_eq!(display_name("Europe/London"), "London");
        assert_eq!(display_name("America/New_York"), "New York");
        assert_eq!(display_name("America/Argentina/Buenos_Aires"), "Buenos Aires");
    }

    #[test]
    fn test_display_name_without_region() {
        assert_eq!(display_name("UTC"), "UTC");
    }
}
