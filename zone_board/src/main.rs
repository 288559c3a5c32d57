//! Zone Board
//!
//! An interactive board of named time zones. Each selected zone gets a row
//! with a 24-hour slider: unedited zones track "now" live, an adjusted
//! slider freezes its zone at the chosen position, and rows reorder by
//! dragging them over each other. Adjusting one zone never shifts the
//! others; every slider is independent.

mod board;
mod drag;
mod drawing;
mod search;
mod slider;
#[cfg(test)]
mod testing;
mod ui;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{TzCatalog, ZoneCatalog};

use crate::board::BoardState;
use crate::drag::DragController;
use crate::drawing::{colors, draw_board, BoardLayout, RowDisplay};
use crate::ui::{display_name, draw_side_panel, PanelResult, ZoneEntry, SIDE_PANEL_WIDTH};

/// Vertical space reserved for the title above the rows
const HEADER_HEIGHT: f32 = 70.0;

fn main() {
    nannou::app(model).update(update).run();
}

/// Display preferences, persisted across sessions. The board itself is not
/// persisted; every session starts from UTC alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Prefs {
    show_mark_labels: bool,
    reduced_motion: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            show_mark_labels: true,
            reduced_motion: false,
        }
    }
}

/// Application state
pub struct Model {
    /// Selected zones and their overrides
    board: BoardState,
    /// Live row-reorder state
    drag: DragController,
    /// Row whose slider thumb is being dragged, if any
    slider_drag: Option<usize>,

    /// Free-text zone query
    search_query: String,
    /// Suggestions for the current query
    suggestions: Vec<String>,
    /// Focus the search field on the next frame
    should_focus_search: bool,

    /// Render data rebuilt every frame, one entry per board row
    rows: Vec<RowDisplay>,

    prefs: Prefs,
    catalog: TzCatalog,

    /// egui integration
    egui: Egui,
}

impl Model {
    /// Rebuild the per-row render data. Positions for unedited zones are
    /// sampled fresh here, so their readouts advance with the wall clock.
    fn rebuild_rows(&mut self) {
        self.rows = self
            .board
            .order()
            .iter()
            .map(|id| {
                let position = self.board.effective_position(id, &self.catalog);
                let frozen = self.board.override_for(id).is_some();
                let time_text = slider::display_time(&self.catalog, id, position.unwrap_or(0.0));
                RowDisplay {
                    name: display_name(id),
                    abbrev: self.catalog.abbreviation(id),
                    time_text,
                    position,
                    frozen,
                }
            })
            .collect();
    }

    fn zone_entries(&self) -> Vec<ZoneEntry> {
        self.board
            .order()
            .iter()
            .map(|id| ZoneEntry {
                id: id.clone(),
                name: display_name(id),
                frozen: self.board.override_for(id).is_some(),
            })
            .collect()
    }

    fn apply_panel_result(&mut self, result: PanelResult) {
        if result.query_changed {
            self.suggestions = search::search(&self.search_query, &self.catalog);
        }

        if let Some(id) = result.add_zone {
            // A successful add clears the query, and with it the suggestions
            if self.board.add_zone(&id, &self.catalog) {
                self.search_query.clear();
                self.suggestions.clear();
            }
        }
        if let Some(id) = result.remove_zone {
            self.board.remove_zone(&id);
        }
        if let Some(id) = result.reset_zone {
            self.board.clear_override(&id);
        }

        if result.show_mark_labels_changed || result.reduced_motion_changed {
            persist_prefs(&self.prefs);
        }
    }
}

fn persist_prefs(prefs: &Prefs) {
    if let Err(e) = shared::save_prefs(prefs) {
        eprintln!("Failed to save preferences: {}", e);
    }
}

fn board_layout(app: &App) -> BoardLayout {
    BoardLayout::calculate(app.window_rect(), SIDE_PANEL_WIDTH, HEADER_HEIGHT)
}

fn model(app: &App) -> Model {
    // Window chrome is set once here, at mount
    let window_id = app
        .new_window()
        .title("Zone Board")
        .size(1200, 800)
        .min_size(900, 560)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let prefs: Prefs = shared::load_prefs().ok().flatten().unwrap_or_default();

    let mut model = Model {
        board: BoardState::new(),
        drag: DragController::new(),
        slider_drag: None,
        search_query: String::new(),
        suggestions: Vec::new(),
        should_focus_search: false,
        rows: Vec::new(),
        prefs,
        catalog: TzCatalog,
        egui,
    };
    model.rebuild_rows();
    model
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.rebuild_rows();

    // Collect roster entries before borrowing egui
    let zones = model.zone_entries();

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let result = draw_side_panel(
        &ctx,
        &mut model.search_query,
        &mut model.should_focus_search,
        &model.suggestions,
        &zones,
        &mut model.prefs.show_mark_labels,
        &mut model.prefs.reduced_motion,
    );

    drop(ctx);

    model.apply_panel_result(result);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let layout = board_layout(app);
    draw_board(
        &draw,
        &layout,
        &model.rows,
        model.drag.drag_index(),
        model.slider_drag,
        model.prefs.show_mark_labels,
        model.prefs.reduced_motion,
    );

    // Title centered over the board area
    draw.text("ZONE BOARD")
        .x_y(layout.area().x(), window_rect.top() - 30.0)
        .font_size(18)
        .color(colors::NAME_TEXT)
        .w(400.0);

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::F | Key::Slash => {
            model.should_focus_search = true;
        }
        Key::Escape => {
            model.search_query.clear();
            model.suggestions.clear();
        }
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let point = app.mouse.position();
    let layout = board_layout(app);
    let count = model.board.len();

    if let Some((index, raw)) = layout.slider_at(point, count) {
        // Grabbing the track freezes the zone at the pointer right away
        if let Some(id) = model.board.order().get(index).cloned() {
            model.board.set_override(&id, slider::snap(raw));
            model.slider_drag = Some(index);
        }
    } else if let Some(index) = layout.row_at(point, count) {
        model.drag.drag_start(index, &model.board);
    }
}

fn mouse_moved(app: &App, model: &mut Model, point: Point2) {
    let layout = board_layout(app);
    let count = model.board.len();

    if let Some(index) = model.slider_drag {
        let raw = layout.position_at(index, point.x);
        if let Some(id) = model.board.order().get(index).cloned() {
            model.board.set_override(&id, slider::snap(raw));
        }
    } else if model.drag.is_dragging() {
        if let Some(index) = layout.row_at(point, count) {
            model.drag.drag_over(index, &mut model.board);
        }
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    model.slider_drag = None;
    model.drag.drag_end();
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
