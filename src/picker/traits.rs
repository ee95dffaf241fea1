//! Picker trait definitions
//!
//! `Picker` is a read-only view over a list with one selected entry.
//! `SelectionListener` receives committed selections from the engine.

use tokio::sync::mpsc::UnboundedSender;

/// A read-only view over a list selection
///
/// The selection is owned by the implementor, which may derive it from other
/// state (the horizontal picker derives it from its drag offset).
///
/// # Example
///
/// ```ignore
/// fn describe<P: Picker<Item = String>>(picker: &P) -> String {
///     format!("{} of {}", picker.selected_index() + 1, picker.len())
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }
}

/// Receives the value of the centered item whenever a selection is committed.
///
/// Called once when the picker is created and once per completed gesture,
/// never while a drag is in progress.
pub trait SelectionListener {
    fn on_value_selected(&mut self, item: &str);
}

impl<F> SelectionListener for F
where
    F: FnMut(&str),
{
    fn on_value_selected(&mut self, item: &str) {
        self(item)
    }
}

/// Forwards selections to the event loop over an unbounded channel.
#[derive(Debug, Clone)]
pub struct SelectionSender(UnboundedSender<String>);

impl SelectionSender {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self(tx)
    }
}

impl SelectionListener for SelectionSender {
    fn on_value_selected(&mut self, item: &str) {
        // A closed receiver means the host is shutting down
        let _ = self.0.send(item.to_string());
    }
}
