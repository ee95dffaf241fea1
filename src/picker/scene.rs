//! Frame description for the horizontal picker.
//!
//! A scene is computed from the engine state after a layout pass and holds
//! everything a painter needs: where each label and tick goes and where the
//! selection indicator sits. Coordinates are surface units with the origin at
//! the top-left of the surface.

/// Fraction of the surface height covered by a tick mark, from the top edge.
pub const TICK_HEIGHT_RATIO: f32 = 0.2;

/// Width of the selection indicator in surface units.
pub const INDICATOR_SIZE: f32 = 1.0;

/// One item label and its tick, centered at `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement<'a> {
    pub index: usize,
    pub text: &'a str,
    pub x: f32,
}

/// The fixed triangle marking the selection slot. It is drawn above the
/// surface and never moves with the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub center_x: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerScene<'a> {
    pub width: f32,
    pub height: f32,
    /// Vertical center of the labels
    pub middle_y: f32,
    /// Ticks span `0..tick_height`
    pub tick_height: f32,
    pub labels: Vec<LabelPlacement<'a>>,
    pub indicator: Indicator,
    /// Index the engine would commit for the current offset
    pub selected: usize,
}

impl<'a> PickerScene<'a> {
    /// True when there is nothing to paint (no layout happened yet, or the
    /// surface collapsed).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Labels whose center falls inside the surface.
    #[cfg(test)]
    pub fn visible_labels(&self) -> impl Iterator<Item = &LabelPlacement<'a>> {
        self.labels
            .iter()
            .filter(move |label| label.x >= 0.0 && label.x < self.width)
    }

    /// Label drawn closest to the indicator.
    #[cfg(test)]
    pub fn centered_label(&self) -> Option<&LabelPlacement<'a>> {
        let center = self.indicator.center_x;
        self.labels.iter().min_by(|a, b| {
            (a.x - center)
                .abs()
                .total_cmp(&(b.x - center).abs())
        })
    }
}
