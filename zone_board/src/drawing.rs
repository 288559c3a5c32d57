//! Drawing module - nannou rendering of the board rows.
//!
//! Each selected zone gets one row: display name, abbreviation, wall-clock
//! readout, and a 24-hour slider track with fixed marks and a draggable
//! thumb. Also owns the layout/hit-testing math the pointer handlers use.

use nannou::prelude::*;

use crate::slider;

/// Color palette for the board theme
#[allow(dead_code)]
pub mod colors {
    use nannou::prelude::*;

    /// Window background
    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 20,
        green: 24,
        blue: 31,
        standard: std::marker::PhantomData,
    };

    /// Row background
    pub const ROW_BG: Srgb<u8> = Srgb {
        red: 34,
        green: 40,
        blue: 51,
        standard: std::marker::PhantomData,
    };

    /// Row background while being dragged
    pub const ROW_BG_DRAGGED: Srgb<u8> = Srgb {
        red: 48,
        green: 58,
        blue: 76,
        standard: std::marker::PhantomData,
    };

    /// Row border
    pub const ROW_BORDER: Srgb<u8> = Srgb {
        red: 70,
        green: 80,
        blue: 100,
        standard: std::marker::PhantomData,
    };

    /// Row border while being dragged
    pub const ROW_BORDER_DRAGGED: Srgb<u8> = Srgb {
        red: 130,
        green: 150,
        blue: 190,
        standard: std::marker::PhantomData,
    };

    /// Slider track
    pub const TRACK: Srgb<u8> = Srgb {
        red: 80,
        green: 88,
        blue: 105,
        standard: std::marker::PhantomData,
    };

    /// Mark ticks along the track
    pub const MARK: Srgb<u8> = Srgb {
        red: 105,
        green: 112,
        blue: 130,
        standard: std::marker::PhantomData,
    };

    /// Mark labels
    pub const MARK_LABEL: Srgb<u8> = Srgb {
        red: 125,
        green: 130,
        blue: 145,
        standard: std::marker::PhantomData,
    };

    /// Slider thumb for a live (unedited) zone
    pub const THUMB_LIVE: Srgb<u8> = Srgb {
        red: 120,
        green: 185,
        blue: 145,
        standard: std::marker::PhantomData,
    };

    /// Slider thumb for a frozen (overridden) zone
    pub const THUMB_FROZEN: Srgb<u8> = Srgb {
        red: 150,
        green: 170,
        blue: 230,
        standard: std::marker::PhantomData,
    };

    /// Zone display name
    pub const NAME_TEXT: Srgb<u8> = Srgb {
        red: 235,
        green: 238,
        blue: 244,
        standard: std::marker::PhantomData,
    };

    /// Abbreviation and secondary text
    pub const SECONDARY_TEXT: Srgb<u8> = Srgb {
        red: 150,
        green: 156,
        blue: 170,
        standard: std::marker::PhantomData,
    };

    /// Wall-clock readout
    pub const TIME_TEXT: Srgb<u8> = Srgb {
        red: 245,
        green: 240,
        blue: 232,
        standard: std::marker::PhantomData,
    };

    /// Drag grip glyph
    pub const GRIP: Srgb<u8> = Srgb {
        red: 95,
        green: 102,
        blue: 118,
        standard: std::marker::PhantomData,
    };
}

/// Row box height
pub const ROW_HEIGHT: f32 = 96.0;

/// Vertical gap between rows
const ROW_GAP: f32 = 14.0;

/// Padding around the board area
const AREA_PADDING: f32 = 24.0;

/// Horizontal inset of the track inside its row
const TRACK_MARGIN: f32 = 40.0;

/// Vertical grab tolerance around the track
const TRACK_GRAB_HALF_HEIGHT: f32 = 16.0;

/// Thumb radius
const THUMB_RADIUS: f32 = 8.0;

/// Pixel lift applied to the dragged row (skipped under reduced motion)
const DRAG_LIFT: f32 = 4.0;

/// Everything one row needs to render
#[derive(Debug, Clone)]
pub struct RowDisplay {
    /// Shortened display name, e.g. "New York"
    pub name: String,
    /// Zone abbreviation, when the catalog knows the zone
    pub abbrev: Option<String>,
    /// Formatted wall-clock readout for the row's position
    pub time_text: String,
    /// Effective slider position in [0, 24), if computable
    pub position: Option<f64>,
    /// Whether the zone is frozen at a user-chosen position
    pub frozen: bool,
}

/// Board area layout and hit-testing
#[derive(Debug, Clone)]
pub struct BoardLayout {
    area: Rect,
}

impl BoardLayout {
    /// Compute the board area: the window minus the side panel and header
    pub fn calculate(window: Rect, side_panel_width: f32, header_height: f32) -> Self {
        let area = Rect::from_corners(
            pt2(
                window.left() + side_panel_width + AREA_PADDING,
                window.bottom() + AREA_PADDING,
            ),
            pt2(window.right() - AREA_PADDING, window.top() - header_height),
        );
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Bounding box of the row at `index`, stacked top-down
    pub fn row_rect(&self, index: usize) -> Rect {
        let top = self.area.top() - index as f32 * (ROW_HEIGHT + ROW_GAP);
        Rect::from_corners(
            pt2(self.area.left(), top - ROW_HEIGHT),
            pt2(self.area.right(), top),
        )
    }

    /// Index of the row under `point`, if any
    pub fn row_at(&self, point: Point2, count: usize) -> Option<usize> {
        (0..count).find(|&i| self.row_rect(i).contains(point))
    }

    /// The slider track segment within the row at `index`
    pub fn track_rect(&self, index: usize) -> Rect {
        let row = self.row_rect(index);
        let y = row.bottom() + ROW_HEIGHT * 0.32;
        Rect::from_corners(
            pt2(row.left() + TRACK_MARGIN, y - 1.0),
            pt2(row.right() - TRACK_MARGIN, y + 1.0),
        )
    }

    /// The grabbable band around a row's track
    pub fn track_band(&self, index: usize) -> Rect {
        let track = self.track_rect(index);
        Rect::from_x_y_w_h(
            track.x(),
            track.y(),
            track.w() + THUMB_RADIUS * 2.0,
            TRACK_GRAB_HALF_HEIGHT * 2.0,
        )
    }

    /// If `point` lands on a row's slider band, the row index and the raw
    /// (unsnapped) position under the pointer
    pub fn slider_at(&self, point: Point2, count: usize) -> Option<(usize, f64)> {
        let index = self.row_at(point, count)?;
        if !self.track_band(index).contains(point) {
            return None;
        }
        Some((index, self.position_at(index, point.x)))
    }

    /// X pixel for a position along the row's track
    pub fn x_for_position(&self, index: usize, position: f64) -> f32 {
        let track = self.track_rect(index);
        track.left() + (position / 24.0) as f32 * track.w()
    }

    /// Raw position in [0, 24] for an x pixel along the row's track
    pub fn position_at(&self, index: usize, x: f32) -> f64 {
        let track = self.track_rect(index);
        let t = ((x - track.left()) / track.w()).clamp(0.0, 1.0);
        t as f64 * 24.0
    }
}

/// Draw every board row
pub fn draw_board(
    draw: &Draw,
    layout: &BoardLayout,
    rows: &[RowDisplay],
    drag_index: Option<usize>,
    active_slider: Option<usize>,
    show_mark_labels: bool,
    reduced_motion: bool,
) {
    if rows.is_empty() {
        let area = layout.area();
        draw.text("Board is empty - search for a zone to add")
            .x_y(area.x(), area.y())
            .w(area.w())
            .font_size(15)
            .color(colors::SECONDARY_TEXT);
        return;
    }

    for (index, row) in rows.iter().enumerate() {
        let dragged = drag_index == Some(index);
        let sliding = active_slider == Some(index);
        draw_row(
            draw,
            layout,
            index,
            row,
            dragged,
            sliding,
            show_mark_labels,
            reduced_motion,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    draw: &Draw,
    layout: &BoardLayout,
    index: usize,
    row: &RowDisplay,
    dragged: bool,
    sliding: bool,
    show_mark_labels: bool,
    reduced_motion: bool,
) {
    let rect = layout.row_rect(index);
    let lift = if dragged && !reduced_motion {
        DRAG_LIFT
    } else {
        0.0
    };

    // Row card
    let (bg, border) = if dragged {
        (colors::ROW_BG_DRAGGED, colors::ROW_BORDER_DRAGGED)
    } else {
        (colors::ROW_BG, colors::ROW_BORDER)
    };
    draw.rect()
        .x_y(rect.x(), rect.y() + lift)
        .w_h(rect.w(), rect.h())
        .color(bg)
        .stroke(border)
        .stroke_weight(if dragged { 2.0 } else { 1.0 });

    // Grip glyph on the left edge marks the row as draggable
    draw.text("≡")
        .x_y(rect.left() + 18.0, rect.y() + lift)
        .font_size(18)
        .color(colors::GRIP);

    // Name, abbreviation, and readout along the top of the row
    let text_w = rect.w() - TRACK_MARGIN * 2.0;
    let text_y = rect.top() + lift - 20.0;
    draw.text(&row.name)
        .x_y(rect.x(), text_y)
        .w(text_w)
        .left_justify()
        .font_size(16)
        .color(colors::NAME_TEXT);

    if let Some(abbrev) = &row.abbrev {
        draw.text(abbrev)
            .x_y(rect.x(), text_y - 17.0)
            .w(text_w)
            .left_justify()
            .font_size(11)
            .color(colors::SECONDARY_TEXT);
    }

    let readout = if row.frozen {
        format!("{}  *", row.time_text)
    } else {
        row.time_text.clone()
    };
    draw.text(&readout)
        .x_y(rect.x(), text_y)
        .w(text_w)
        .right_justify()
        .font_size(16)
        .color(colors::TIME_TEXT);

    draw_track(draw, layout, index, row, lift, sliding, show_mark_labels);
}

fn draw_track(
    draw: &Draw,
    layout: &BoardLayout,
    index: usize,
    row: &RowDisplay,
    lift: f32,
    sliding: bool,
    show_mark_labels: bool,
) {
    let track = layout.track_rect(index);
    let y = track.y() + lift;

    draw.line()
        .start(pt2(track.left(), y))
        .end(pt2(track.right(), y))
        .weight(2.0)
        .color(colors::TRACK);

    // Fixed marks along the 24-hour scale
    for (value, label) in slider::MARKS {
        let x = layout.x_for_position(index, value);
        draw.line()
            .start(pt2(x, y - 4.0))
            .end(pt2(x, y + 4.0))
            .weight(1.0)
            .color(colors::MARK);

        if show_mark_labels {
            draw.text(label)
                .x_y(x, y - 13.0)
                .font_size(9)
                .color(colors::MARK_LABEL);
        }
    }

    // Thumb only when the row has a computable position
    if let Some(position) = row.position {
        let x = layout.x_for_position(index, position);
        let color = if row.frozen {
            colors::THUMB_FROZEN
        } else {
            colors::THUMB_LIVE
        };
        draw.ellipse()
            .x_y(x, y)
            .radius(THUMB_RADIUS)
            .color(color)
            .stroke(colors::BACKGROUND)
            .stroke_weight(1.5);

        // Value bubble above the thumb while it is being dragged
        if sliding {
            draw.text(&slider::format_position(position))
                .x_y(x, y + 18.0)
                .font_size(11)
                .color(colors::TIME_TEXT);
        }
    }
}
