//! Mouse event handling.
//!
//! Press and wheel events are dispatched through the interaction registry,
//! which is populated by UI components during each render. Drag and release
//! events only matter while a drag started on the picker is in progress.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::log;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = app.interactions.drag_target(x, y) {
                log::log_event(&format!("drag start on {} at column {}", id, x));
                Action::BeginDrag(x)
            } else {
                app.interactions.handle_click(x, y)
            }
        }
        // Drags keep tracking outside the picker until the button is released
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => Action::DragTo(x),
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => Action::EndDrag,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            app.interactions.handle_scroll_up(x, y)
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.interactions.handle_scroll_down(x, y)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::app::ClickRegion;
    use crate::config::Config;
    use crate::tui::interaction::InteractiveRegion;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_picker_region() -> App {
        let config = Config {
            visible_items: Some(6),
            ..Default::default()
        };
        let mut app = App::new(&config).unwrap();
        app.interactions.register(InteractiveRegion::picker(
            ClickRegion::new(0, 5, 60, 5),
        ));
        app
    }

    #[test]
    fn test_press_on_picker_begins_drag() {
        let app = app_with_picker_region();
        let press = mouse(MouseEventKind::Down(MouseButton::Left), 12, 6);
        assert_eq!(handle_mouse_event(&app, press), Action::BeginDrag(12));

        let outside = mouse(MouseEventKind::Down(MouseButton::Left), 12, 1);
        assert_eq!(handle_mouse_event(&app, outside), Action::None);
    }

    #[test]
    fn test_drag_requires_active_press() {
        let mut app = app_with_picker_region();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 40, 0);
        assert_eq!(handle_mouse_event(&app, drag), Action::None);

        app.apply(Action::BeginDrag(20));
        assert_eq!(handle_mouse_event(&app, drag), Action::DragTo(40));

        let release = mouse(MouseEventKind::Up(MouseButton::Left), 40, 0);
        assert_eq!(handle_mouse_event(&app, release), Action::EndDrag);
    }

    #[test]
    fn test_wheel_over_picker() {
        let app = app_with_picker_region();
        let up = mouse(MouseEventKind::ScrollUp, 3, 7);
        let right = mouse(MouseEventKind::ScrollRight, 3, 7);
        assert_eq!(handle_mouse_event(&app, up), Action::Wheel(-1));
        assert_eq!(handle_mouse_event(&app, right), Action::Wheel(1));

        let elsewhere = mouse(MouseEventKind::ScrollDown, 3, 0);
        assert_eq!(handle_mouse_event(&app, elsewhere), Action::None);
    }
}
