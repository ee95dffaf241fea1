//! Hotkey bar component.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

const QUIT_HINT: &str = "[q] quit";

/// Render the hotkey line and make its quit hint clickable.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &mut App) {
    let spans = vec![
        Span::styled("[drag]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" pick · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" step · ", Style::new().fg(TEXT_DIM)),
        Span::styled(QUIT_HINT, Style::new().fg(TEXT_WHITE)),
    ];
    let line = Line::from(spans);
    let line_width = line.width() as u16;
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);

    // Same offset Paragraph uses for centered lines; the quit hint is the last span
    let start = area.x + (area.width / 2).saturating_sub(line_width / 2);
    let quit_width = QUIT_HINT.len() as u16;
    let quit_x = start + line_width.min(area.width).saturating_sub(quit_width);
    app.interactions.register(
        InteractiveRegion::clickable(
            "quit",
            ClickRegion::new(quit_x, area.y, quit_width, area.height.min(1)),
            Action::Quit,
        )
        .with_priority(1),
    );
}
