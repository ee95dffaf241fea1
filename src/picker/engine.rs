//! Drag-offset state machine behind the horizontal picker.
//!
//! The engine stores a single horizontal offset. Everything else (spacing,
//! the scrollable span, the selected index, item positions) is derived from
//! it together with the last surface size passed to [`PickerEngine::on_layout`].
//!
//! Positive offsets move the list left, bringing later items toward the
//! center. Drag moves never commit a selection; only [`PickerEngine::on_drag_end`]
//! snaps the offset onto an item and reports it to the listener.

use crate::error::{PickerError, PickerResult};

use super::scene::{Indicator, LabelPlacement, PickerScene, INDICATOR_SIZE, TICK_HEIGHT_RATIO};
use super::traits::{Picker, SelectionListener};

/// Offset kept in item units while the surface has zero width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Parked {
    slots: f32,
    relative: isize,
}

#[derive(Debug)]
pub struct PickerEngine<L> {
    items: Vec<String>,
    visible_items: usize,
    is_even: bool,
    offset: f32,
    spacing: f32,
    total_span: f32,
    width: f32,
    height: f32,
    parked: Option<Parked>,
    listener: L,
}

impl<L: SelectionListener> PickerEngine<L> {
    /// Build a picker and report its default selection to `listener`.
    ///
    /// # Errors
    /// Fails on an empty item list or a zero visible item count.
    pub fn new(items: Vec<String>, visible_items: usize, listener: L) -> PickerResult<Self> {
        if items.is_empty() {
            return Err(PickerError::EmptyItems);
        }
        if visible_items == 0 {
            return Err(PickerError::InvalidVisibleCount(visible_items));
        }

        let mut engine = Self {
            is_even: items.len() % 2 == 0,
            items,
            visible_items,
            offset: 0.0,
            spacing: 0.0,
            total_span: 0.0,
            width: 0.0,
            height: 0.0,
            parked: None,
            listener,
        };
        engine.notify_selection();
        Ok(engine)
    }

    /// Recompute spacing and span for the current surface size.
    ///
    /// When the spacing changes the offset is rescaled so the same item stays
    /// centered. A zero-width surface parks the offset in item units until
    /// the next non-zero layout. Returns true if a redraw is needed.
    pub fn on_layout(&mut self, width: f32, height: f32) -> bool {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let spacing = width / self.visible_items as f32;

        let changed = width != self.width || height != self.height;
        if spacing > 0.0 {
            if let Some(parked) = self.parked.take() {
                self.offset = parked.slots * spacing;
            } else if self.spacing > 0.0 && spacing != self.spacing {
                self.offset *= spacing / self.spacing;
            }
        } else if self.spacing > 0.0 {
            self.parked = Some(Parked {
                slots: self.offset / self.spacing,
                relative: self.relative_index(),
            });
            self.offset = 0.0;
        }

        self.width = width;
        self.height = height;
        self.spacing = spacing;
        self.total_span = (self.items.len() - 1) as f32 * spacing;
        self.offset = self.clamp_offset(self.offset);

        changed
    }

    /// Apply one pointer move. Positive `delta_x` is a drag to the right,
    /// which moves earlier items toward the center.
    pub fn on_drag_move(&mut self, delta_x: f32) -> bool {
        let next = self.clamp_offset(self.offset - delta_x);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Snap to the nearest item and report it to the listener.
    ///
    /// The listener fires exactly once per call, even if the offset was
    /// already settled. Returns true if the offset moved.
    pub fn on_drag_end(&mut self) -> bool {
        let snapped = self.snapped_offset();
        let changed = snapped != self.offset;
        self.offset = snapped;
        self.notify_selection();
        changed
    }

    /// Step by whole items as if the user dragged `steps` slots and let go.
    pub fn nudge(&mut self, steps: i32) -> bool {
        if steps == 0 || self.spacing <= 0.0 {
            return false;
        }
        let moved = self.on_drag_move(-(steps as f32) * self.spacing);
        self.on_drag_end() || moved
    }

    /// Positions of every label, tick and the indicator for the last layout.
    pub fn scene(&self) -> PickerScene<'_> {
        let half_slot = if self.is_even { self.spacing / 2.0 } else { 0.0 };
        let labels = self
            .items
            .iter()
            .enumerate()
            .map(|(index, text)| LabelPlacement {
                index,
                text,
                x: index as f32 * self.spacing - self.total_span / 2.0 + self.width / 2.0
                    - self.offset
                    + half_slot,
            })
            .collect();

        PickerScene {
            width: self.width,
            height: self.height,
            middle_y: self.height / 2.0,
            tick_height: self.height * TICK_HEIGHT_RATIO,
            labels,
            indicator: Indicator {
                center_x: self.width / 2.0,
                size: INDICATOR_SIZE,
            },
            selected: self.selected_index(),
        }
    }

    fn notify_selection(&mut self) {
        let index = self.selected_index();
        self.listener.on_value_selected(&self.items[index]);
    }
}

impl<L> PickerEngine<L> {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[cfg(test)]
    pub fn total_span(&self) -> f32 {
        self.total_span
    }

    pub fn visible_items(&self) -> usize {
        self.visible_items
    }

    /// Index centered at zero offset.
    pub fn middle_index(&self) -> usize {
        if self.is_even {
            self.items.len() / 2 - 1
        } else {
            (self.items.len() - 1) / 2
        }
    }

    /// Inclusive offset range reachable by dragging.
    ///
    /// For an even item count the window is shifted by half a slot, matching
    /// the half-slot shift applied to item positions.
    pub fn bounds(&self) -> (f32, f32) {
        let shift = if self.is_even { -self.spacing / 2.0 } else { 0.0 };
        (
            -self.total_span / 2.0 - shift,
            self.total_span / 2.0 - shift,
        )
    }

    /// True when the offset sits on an item boundary.
    pub fn is_settled(&self) -> bool {
        self.spacing <= 0.0 || self.snapped_offset() == self.offset
    }

    #[cfg(test)]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Items between the middle one and the one under the indicator.
    ///
    /// Settled offsets round to the exact slot. During a live drag the
    /// ratio truncates toward zero, so negative offsets lag one item behind
    /// the nearest label until release.
    fn relative_index(&self) -> isize {
        if self.spacing <= 0.0 {
            return self.parked.map_or(0, |parked| parked.relative);
        }
        let ratio = self.offset / self.spacing;
        if self.is_settled() {
            ratio.round() as isize
        } else {
            ratio.trunc() as isize
        }
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let (lower, upper) = self.bounds();
        offset.clamp(lower, upper)
    }

    fn snapped_offset(&self) -> f32 {
        if self.spacing <= 0.0 {
            return self.offset;
        }
        let magnitude = self.offset.abs();
        let multiples = (magnitude / self.spacing).trunc();
        let diff = (magnitude - multiples * self.spacing).abs();

        let snapped = if diff <= self.spacing / 2.0 {
            multiples * self.spacing
        } else {
            (multiples + 1.0) * self.spacing
        };
        self.clamp_offset(snapped.copysign(self.offset))
    }
}

impl<L> Picker for PickerEngine<L> {
    type Item = String;

    fn items(&self) -> &[String] {
        &self.items
    }

    /// Index under the indicator, clamped into the item range.
    fn selected_index(&self) -> usize {
        let relative = self.relative_index();
        let middle = self.middle_index() as isize;
        (middle + relative).clamp(0, self.items.len() as isize - 1) as usize
    }
}
