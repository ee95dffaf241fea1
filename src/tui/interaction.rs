//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region. Regions can be clickable,
//! draggable (the picker surface) and scrollable.
//!
//! # Example
//!
//! ```ignore
//! // During render, register the picker surface:
//! registry.register(InteractiveRegion::picker(ClickRegion::from(surface)));
//!
//! // The mouse handler then asks whether a press starts a drag:
//! if let Some(id) = registry.drag_target(x, y) { /* ... */ }
//! ```

use crate::app::ClickRegion;
use crate::events::Action;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Whether a left press here starts a drag
    pub draggable: bool,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            draggable: false,
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// The picker surface: draggable, and the wheel steps one item per tick
    pub fn picker(bounds: ClickRegion) -> Self {
        Self {
            id: "picker",
            bounds,
            on_click: None,
            draggable: true,
            on_scroll_up: Some(Action::Wheel(-1)),
            on_scroll_down: Some(Action::Wheel(1)),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Highest-priority region at (x, y) accepted by `filter`
    fn top_region<F>(&self, x: u16, y: u16, filter: F) -> Option<&InteractiveRegion>
    where
        F: Fn(&InteractiveRegion) -> bool,
    {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y) && filter(r))
            .max_by_key(|r| r.priority)
    }

    /// Id of the draggable region a press at (x, y) lands on, unless a
    /// clickable region sits above it
    pub fn drag_target(&self, x: u16, y: u16) -> Option<&'static str> {
        self.top_region(x, y, |r| r.draggable || r.on_click.is_some())
            .filter(|r| r.draggable)
            .map(|r| r.id)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.top_region(x, y, |r| r.on_click.is_some())
            .and_then(|r| r.on_click)
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.top_region(x, y, |r| r.on_scroll_up.is_some())
            .and_then(|r| r.on_scroll_up)
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.top_region(x, y, |r| r.on_scroll_down.is_some())
            .and_then(|r| r.on_scroll_down)
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(InteractiveRegion::picker(ClickRegion::new(0, 0, 100, 10)));
        registry.register(
            InteractiveRegion::clickable("quit", ClickRegion::new(90, 5, 10, 1), Action::Quit)
                .with_priority(10),
        );

        // Press on the overlapping button clicks instead of dragging
        assert_eq!(registry.drag_target(95, 5), None);
        assert_eq!(registry.handle_click(95, 5), Action::Quit);

        assert_eq!(registry.drag_target(5, 5), Some("picker"));
        assert_eq!(registry.handle_click(5, 5), Action::None);
    }

    #[test]
    fn test_clear_drops_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::clickable(
            "quit",
            ClickRegion::new(0, 0, 4, 1),
            Action::Quit,
        ));
        registry.clear();
        assert_eq!(registry.handle_click(1, 0), Action::None);
    }
}
