//! UI components for the TUI.
//!
//! - `horizontal_picker` - The drag-to-select picker strip and its indicator
//! - `hotkeys` - Bottom line listing the key bindings

mod horizontal_picker;
mod hotkeys;

pub use horizontal_picker::{render_horizontal_picker, PICKER_HEIGHT};
pub use hotkeys::render_hotkeys;
