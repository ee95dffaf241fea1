use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::config::Config;
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::picker::{Picker, PickerEngine, SelectionSender};
use crate::scroll::ScrollHelper;
use crate::tui::interaction::InteractionRegistry;

/// A clickable region on screen, in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Pointer state between a button press on the picker and its release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub last_column: u16,
    /// Set by the first move; a press-release without motion is not a drag
    pub moved: bool,
}

pub struct App {
    pub picker: PickerEngine<SelectionSender>,
    /// Last value reported by the picker
    pub selected_item: String,
    pub drag: Option<DragState>,
    pub interactions: InteractionRegistry,
    pub scroll: ScrollHelper,
    pub should_quit: bool,
    selection_rx: UnboundedReceiver<String>,
}

impl App {
    /// Build the picker from `config`. Invalid item lists or visible counts
    /// are rejected here, before the terminal is touched.
    pub fn new(config: &Config) -> Result<Self> {
        let (tx, selection_rx) = mpsc::unbounded_channel();
        let picker = PickerEngine::new(
            config.items(),
            config.visible_items(),
            SelectionSender::new(tx),
        )?;

        let mut app = Self {
            picker,
            selected_item: String::new(),
            drag: None,
            interactions: InteractionRegistry::new(),
            scroll: ScrollHelper::from_config(&config.wheel),
            should_quit: false,
            selection_rx,
        };
        app.drain_selections();
        Ok(app)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply an action. Returns true if the screen needs a redraw.
    pub fn apply(&mut self, action: Action) -> bool {
        let redraw = match action {
            Action::None => false,
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::BeginDrag(column) => {
                self.scroll.reset();
                self.drag = Some(DragState {
                    last_column: column,
                    moved: false,
                });
                false
            }
            Action::DragTo(column) => match self.drag.as_mut() {
                Some(drag) => {
                    let delta = f32::from(column) - f32::from(drag.last_column);
                    drag.last_column = column;
                    drag.moved = true;
                    self.picker.on_drag_move(delta)
                }
                None => false,
            },
            Action::EndDrag => match self.drag.take() {
                Some(drag) if drag.moved => {
                    let moved = self.picker.on_drag_end();
                    log::log_event(&format!(
                        "drag end: offset {:.1}, item {:?}, settled {}",
                        self.picker.offset(),
                        self.picker.selected_item(),
                        self.picker.is_settled()
                    ));
                    moved
                }
                _ => false,
            },
            Action::Nudge(steps) => self.picker.nudge(steps),
            Action::Wheel(ticks) => match self.scroll.accumulate(ticks) {
                Some(steps) => self.picker.nudge(steps),
                None => false,
            },
        };

        self.drain_selections() || redraw
    }

    /// Mirror every value the picker reported since the last call.
    fn drain_selections(&mut self) -> bool {
        let mut changed = false;
        while let Ok(item) = self.selection_rx.try_recv() {
            log::log_event(&format!("selected {}", item));
            changed |= item != self.selected_item;
            self.selected_item = item;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config {
            visible_items: Some(6),
            ..Default::default()
        };
        let mut app = App::new(&config).unwrap();
        app.picker.on_layout(60.0, 5.0);
        app
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);
        assert!(region.contains(10, 10));
        assert!(region.contains(29, 19));
        assert!(!region.contains(30, 19));
        assert!(!region.contains(9, 10));
    }

    #[test]
    fn test_initial_selection_is_mirrored() {
        assert_eq!(app().selected_item, "5");
    }

    #[test]
    fn test_rejects_zero_visible_items() {
        let config = Config {
            visible_items: Some(0),
            ..Default::default()
        };
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn test_drag_commits_on_release() {
        let mut app = app();
        app.apply(Action::BeginDrag(30));
        assert!(app.apply(Action::DragTo(24)));
        assert!(app.apply(Action::DragTo(18)));
        // Live drag leaves the mirrored value alone
        assert_eq!(app.selected_item, "5");

        assert!(app.apply(Action::EndDrag));
        assert_eq!(app.picker.offset(), 10.0);
        assert_eq!(app.selected_item, "6");
        assert!(!app.is_dragging());
    }

    #[test]
    fn test_press_release_without_motion_is_ignored() {
        let mut app = app();
        app.apply(Action::BeginDrag(5));
        assert!(!app.apply(Action::EndDrag));
        assert_eq!(app.selected_item, "5");
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut app = app();
        assert!(!app.apply(Action::DragTo(12)));
        assert_eq!(app.picker.offset(), 0.0);
    }

    #[test]
    fn test_nudge_and_quit() {
        let mut app = app();
        assert!(app.apply(Action::Nudge(-2)));
        assert_eq!(app.selected_item, "3");

        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_moves_one_item_per_tick() {
        let mut app = app();
        app.apply(Action::Wheel(1));
        assert_eq!(app.selected_item, "6");
    }
}
