//! Gesture bookkeeping for pointer and focus interactions.

use notch_core::TextDirection;

use super::normalize::EffectiveBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Pointer press until release or cancel.
    Pointer,
    /// Focus until blur; Escape reverts to its start value.
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionSession {
    pub origin: SessionOrigin,
    pub value_at_start: f64,
    pub last_emitted_value: f64,
}

impl InteractionSession {
    pub fn open(origin: SessionOrigin, value: f64) -> Self {
        Self {
            origin,
            value_at_start: value,
            last_emitted_value: value,
        }
    }

    /// Records `value` as emitted; `false` when observers already saw it.
    pub fn mark_emitted(&mut self, value: f64) -> bool {
        if value == self.last_emitted_value {
            return false;
        }
        self.last_emitted_value = value;
        true
    }

    pub fn changed(&self, value: f64) -> bool {
        value != self.value_at_start
    }
}

/// Maps a pointer offset from the track's left edge to an unstepped value.
///
/// Offsets outside the track saturate at the bounds. Under RTL the fraction
/// is measured from the right edge, so the minimum sits on the right.
pub fn value_from_offset(
    offset_px: f64,
    track_px: f64,
    bounds: &EffectiveBounds,
    direction: TextDirection,
) -> f64 {
    let ratio = if track_px > 0.0 && offset_px.is_finite() {
        (offset_px / track_px).clamp(0.0, 1.0)
    } else {
        0.0
    };
    bounds.value_at(direction.from_start(ratio))
}
