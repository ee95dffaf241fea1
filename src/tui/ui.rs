use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use super::components::{render_horizontal_picker, render_hotkeys, PICKER_HEIGHT};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Vertically centered column: selection text, gap, picker
    let main_layout = Layout::vertical([
        Constraint::Fill(1),               // Top padding
        Constraint::Length(1),             // Selected item
        Constraint::Length(2),             // Gap
        Constraint::Length(PICKER_HEIGHT), // Indicator + picker surface
        Constraint::Fill(1),               // Bottom padding
        Constraint::Length(1),             // Hotkeys
    ])
    .split(area);

    let selected = Line::from(vec![
        Span::styled("Selected Item: ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.selected_item.as_str(), Style::new().fg(SELECTION_GOLD).bold()),
    ]);
    frame.render_widget(
        Paragraph::new(selected).alignment(Alignment::Center),
        main_layout[1],
    );

    render_horizontal_picker(frame, main_layout[3], app);
    render_hotkeys(frame, main_layout[5], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::Config;
    use crate::events::Action;

    #[test]
    fn test_render_host_screen() {
        let config = Config {
            visible_items: Some(6),
            ..Default::default()
        };
        let mut app = App::new(&config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert_eq!(app.picker.spacing(), 10.0);
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Selected Item: 5"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_picker_region_registered_after_render() {
        let config = Config {
            visible_items: Some(6),
            ..Default::default()
        };
        let mut app = App::new(&config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        // Layout: 5 rows padding, text, 2 gap, indicator row at 8, surface 9..14
        assert_eq!(app.interactions.drag_target(10, 8), None);
        assert_eq!(app.interactions.drag_target(10, 9), Some("picker"));
        assert_eq!(app.interactions.drag_target(10, 13), Some("picker"));
        assert_eq!(app.interactions.handle_click(40, 19), Action::Quit);
    }
}
