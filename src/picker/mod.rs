//! Horizontal picker module
//!
//! The engine turns drag motion into a selection among a fixed list of
//! labels. The scene describes one frame of the widget independently of the
//! terminal painter.

mod engine;
mod scene;
mod traits;

pub use engine::PickerEngine;
pub use scene::PickerScene;
pub use traits::{Picker, SelectionSender};
