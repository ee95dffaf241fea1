//! Horizontal picker component.
//!
//! The top row of the area holds the selection indicator, the rows below are
//! the picker surface. Every render runs a layout pass on the engine with the
//! surface size before painting its scene.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::Style,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, ClickRegion};
use crate::picker::PickerScene;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

/// Rows used by the picker: one for the indicator plus the surface.
pub const PICKER_HEIGHT: u16 = 6;

const TICK: &str = "│";
const INDICATOR: &str = "▼";

/// Render the picker and register its surface for dragging.
pub fn render_horizontal_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let surface = surface_area(area);
    app.picker
        .on_layout(f32::from(surface.width), f32::from(surface.height));

    paint_picker(&app.picker.scene(), area, frame.buffer_mut());

    if surface.height > 0 {
        app.interactions
            .register(InteractiveRegion::picker(ClickRegion::from(surface)));
    }
}

fn surface_area(area: Rect) -> Rect {
    Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Paint `scene` into `buf`. `area` includes the indicator row.
pub fn paint_picker(scene: &PickerScene<'_>, area: Rect, buf: &mut Buffer) {
    let surface = surface_area(area);
    if scene.is_empty() || surface.is_empty() {
        return;
    }

    let accent = Style::new().fg(ACCENT_MAGENTA);
    let label_style = Style::new().fg(LABEL_WHITE).bold();

    if let Some(col) = column_at(scene.indicator.center_x, area) {
        buf.set_string(col, area.y, INDICATOR, accent);
    }

    let tick_rows = (scene.tick_height.ceil() as u16).clamp(1, surface.height);
    let label_row = surface.y + (scene.middle_y.floor() as u16).min(surface.height - 1);

    for label in &scene.labels {
        if let Some(col) = column_at(label.x, surface) {
            for row in surface.y..surface.y + tick_rows {
                buf.set_string(col, row, TICK, accent);
            }
        }
    }

    // Labels after ticks so a short surface shows text over the marks
    for label in &scene.labels {
        paint_label(label.text, label.x, label_row, surface, buf, label_style);
    }
}

/// Column of the cell that starts at `x`, if it lies inside `area`.
fn column_at(x: f32, area: Rect) -> Option<u16> {
    let col = x.floor();
    if col < 0.0 || col >= f32::from(area.width) {
        return None;
    }
    Some(area.x + col as u16)
}

/// Draw `text` centered on `x`, clipped to the surface edges. Widths are
/// display columns, so wide glyphs center the same as narrow ones.
fn paint_label(text: &str, x: f32, row: u16, surface: Rect, buf: &mut Buffer, style: Style) {
    let width = text.width() as f32;
    let start = (x - width / 2.0 + 0.5).floor();
    if start >= f32::from(surface.width) || start + width <= 0.0 {
        return;
    }

    // Drop glyphs left of the surface; a wide glyph cut by the edge goes too
    let mut col = start as i32;
    let mut chars = text.chars().peekable();
    while col < 0 {
        match chars.next() {
            Some(c) => col += c.width().unwrap_or(0) as i32,
            None => return,
        }
    }
    let visible: String = chars.collect();
    let col = col as u16;
    if col >= surface.width {
        return;
    }
    let max_width = usize::from(surface.width - col);
    buf.set_stringn(surface.x + col, row, visible, max_width, style);
}
