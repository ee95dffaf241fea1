//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action
    None,
    /// Quit the application
    Quit,

    // === Picker gestures ===
    /// Left button pressed on the picker surface at this column
    BeginDrag(u16),
    /// Pointer dragged to this column
    DragTo(u16),
    /// Left button released
    EndDrag,

    // === Picker stepping ===
    /// Move the selection by whole items (negative = earlier items)
    Nudge(i32),
    /// Raw wheel ticks over the picker, debounced before stepping
    Wheel(i32),
}
