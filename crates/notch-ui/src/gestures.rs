//! Pointer capture and drag tracking relative to a horizontal track.

use notch_core::{PointerEvent, PointerEventKind, PointerId, Rect};

/// What a pointer event means for the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackStep {
    Press { offset_px: f64 },
    Drag { offset_px: f64 },
    /// Release or cancel. `inside` is false when the pointer left the track.
    Release { inside: bool },
}

/// Turns window-space pointer events into track-relative steps.
///
/// Only one pointer is tracked at a time: the first primary press captures
/// and every other pointer is ignored until it is released.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackGesture {
    captured: Option<PointerId>,
}

impl TrackGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// Drops the capture without producing a release.
    pub fn reset(&mut self) {
        self.captured = None;
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, track: &Rect) -> Option<TrackStep> {
        match event.event {
            PointerEventKind::Down(_) => {
                if self.captured.is_some() || !event.is_primary_down() {
                    return None;
                }
                self.captured = Some(event.id);
                Some(TrackStep::Press {
                    offset_px: track.offset_x(event.position),
                })
            }
            PointerEventKind::Move => {
                if self.captured? != event.id {
                    return None;
                }
                Some(TrackStep::Drag {
                    offset_px: track.offset_x(event.position),
                })
            }
            PointerEventKind::Up(_) | PointerEventKind::Cancel => {
                if self.captured? != event.id {
                    return None;
                }
                self.captured = None;
                let inside = !matches!(event.event, PointerEventKind::Cancel)
                    && track.contains(event.position);
                Some(TrackStep::Release { inside })
            }
            PointerEventKind::Enter | PointerEventKind::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notch_core::{PointerButton, PointerKind, Vec2};

    const TRACK: Rect = Rect {
        x: 100.0,
        y: 0.0,
        w: 1000.0,
        h: 20.0,
    };

    fn ev(event: PointerEventKind, x: f64) -> PointerEvent {
        PointerEvent::mouse(event, x, 10.0)
    }

    #[test]
    fn test_press_drag_release() {
        let mut g = TrackGesture::new();
        let down = g.handle_pointer(&ev(PointerEventKind::Down(PointerButton::Primary), 400.0), &TRACK);
        assert_eq!(down, Some(TrackStep::Press { offset_px: 300.0 }));
        assert!(g.is_captured());

        let moved = g.handle_pointer(&ev(PointerEventKind::Move, 600.0), &TRACK);
        assert_eq!(moved, Some(TrackStep::Drag { offset_px: 500.0 }));

        let up = g.handle_pointer(&ev(PointerEventKind::Up(PointerButton::Primary), 600.0), &TRACK);
        assert_eq!(up, Some(TrackStep::Release { inside: true }));
        assert!(!g.is_captured());
    }

    #[test]
    fn test_hover_move_is_ignored() {
        let mut g = TrackGesture::new();
        assert_eq!(g.handle_pointer(&ev(PointerEventKind::Move, 300.0), &TRACK), None);
        assert_eq!(g.handle_pointer(&ev(PointerEventKind::Enter, 300.0), &TRACK), None);
    }

    #[test]
    fn test_secondary_button_does_not_capture() {
        let mut g = TrackGesture::new();
        let down = ev(PointerEventKind::Down(PointerButton::Secondary), 300.0);
        assert_eq!(g.handle_pointer(&down, &TRACK), None);
        assert!(!g.is_captured());
    }

    #[test]
    fn test_release_outside_and_cancel() {
        let mut g = TrackGesture::new();
        g.handle_pointer(&ev(PointerEventKind::Down(PointerButton::Primary), 300.0), &TRACK);
        let up = g.handle_pointer(&ev(PointerEventKind::Up(PointerButton::Primary), 5000.0), &TRACK);
        assert_eq!(up, Some(TrackStep::Release { inside: false }));

        g.handle_pointer(&ev(PointerEventKind::Down(PointerButton::Primary), 300.0), &TRACK);
        let cancel = g.handle_pointer(&ev(PointerEventKind::Cancel, 300.0), &TRACK);
        assert_eq!(cancel, Some(TrackStep::Release { inside: false }));
    }

    #[test]
    fn test_second_pointer_is_ignored() {
        let mut g = TrackGesture::new();
        g.handle_pointer(&ev(PointerEventKind::Down(PointerButton::Primary), 300.0), &TRACK);

        let other = PointerEvent {
            id: PointerId(7),
            kind: PointerKind::Touch,
            event: PointerEventKind::Down(PointerButton::Primary),
            position: Vec2 { x: 900.0, y: 10.0 },
            modifiers: Default::default(),
        };
        assert_eq!(g.handle_pointer(&other, &TRACK), None);
        let other_move = PointerEvent {
            event: PointerEventKind::Move,
            ..other
        };
        assert_eq!(g.handle_pointer(&other_move, &TRACK), None);
        assert!(g.is_captured());
    }
}
