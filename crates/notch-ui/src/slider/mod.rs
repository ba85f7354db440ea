//! # Slider
//!
//! [`Slider`] owns one value and everything derived from it. Hosts feed it
//! property writes and [`InputEvent`]s, subscribe to [`SliderEvent`]s, and
//! read [`SliderView`] back for painting.
//!
//! ```rust
//! use notch_core::{InputEvent, PointerButton, PointerEvent, PointerEventKind, Rect};
//! use notch_ui::{Slider, SliderConfig, SliderEvent};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut slider = Slider::new(SliderConfig::new().min(0.0).max(10.0).step(1.0));
//! slider.handle_input(&InputEvent::Resize(Rect::new(0.0, 0.0, 1000.0, 20.0)));
//!
//! let changes = Rc::new(RefCell::new(Vec::new()));
//! slider.events().subscribe({
//!     let changes = changes.clone();
//!     move |e: &SliderEvent| {
//!         if let SliderEvent::Change { value } = e {
//!             changes.borrow_mut().push(*value);
//!         }
//!     }
//! });
//!
//! let down = PointerEvent::mouse(PointerEventKind::Down(PointerButton::Primary), 300.0, 10.0);
//! let up = PointerEvent::mouse(PointerEventKind::Up(PointerButton::Primary), 300.0, 10.0);
//! slider.handle_input(&InputEvent::Pointer(down));
//! slider.handle_input(&InputEvent::Pointer(up));
//!
//! assert_eq!(slider.value(), 3.0);
//! assert_eq!(*changes.borrow(), vec![3.0]);
//! assert_eq!(slider.render().handle.to_string(), "left: 30%;");
//! ```
//!
//! Listeners run synchronously inside `handle_input` and must not call back
//! into the same slider.

pub mod config;
pub mod keyboard;
pub mod layout;
pub mod normalize;
pub mod render;
pub mod session;
pub mod tooltip;

pub use config::{AttributeWrite, SliderConfig};
pub use keyboard::{KeyAction, StepSize};
pub use layout::{Label, TickLayout};
pub use normalize::EffectiveBounds;
pub use render::{HandleEdge, HandleStyle, SliderView, TooltipView};
pub use session::{InteractionSession, SessionOrigin};
pub use tooltip::{TooltipState, TooltipVisibility};

use notch_core::{
    Emitter, InputEvent, KeyEvent, Memo, PointerEvent, PointerEventKind, PropertyError, Rect, Role,
    Semantics, TextDirection,
};

use crate::gestures::{TrackGesture, TrackStep};

/// Outbound notifications.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SliderEvent {
    /// The value moved during a gesture.
    Input { value: f64 },
    /// A gesture finished with a value different from where it began.
    Change { value: f64 },
}

impl SliderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SliderEvent::Input { .. } => "input",
            SliderEvent::Change { .. } => "change",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            SliderEvent::Input { value } | SliderEvent::Change { value } => value,
        }
    }
}

pub struct Slider {
    config: SliderConfig,
    bounds: EffectiveBounds,
    value: f64,
    track: Rect,
    pointer: Option<InteractionSession>,
    focus: Option<InteractionSession>,
    gesture: TrackGesture,
    tooltip: TooltipState,
    layout: Memo<TickLayout>,
    events: Emitter<SliderEvent>,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Self {
        Self::with_value(config, 0.0)
    }

    pub fn with_value(config: SliderConfig, value: f64) -> Self {
        let bounds = EffectiveBounds::compute(config.min, config.max, config.step);
        Self {
            value: bounds.clamp(value),
            bounds,
            config,
            track: Rect::default(),
            pointer: None,
            focus: None,
            gesture: TrackGesture::new(),
            tooltip: TooltipState::new(),
            layout: Memo::new(),
            events: Emitter::new(),
        }
    }

    // Reads

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn bounds(&self) -> &EffectiveBounds {
        &self.bounds
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    /// Registry for `input`/`change` notifications. Clone it to hand to a
    /// host; clones share listeners.
    pub fn events(&self) -> &Emitter<SliderEvent> {
        &self.events
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn tooltip_visibility(&self) -> TooltipVisibility {
        if self.config.show_tooltip {
            self.tooltip.visibility()
        } else {
            TooltipVisibility::Hidden
        }
    }

    pub fn tooltip_text(&self) -> String {
        render::format_value(self.value)
    }

    /// Accessibility record: raw configured bounds, current value, focus.
    pub fn semantics(&self) -> Semantics {
        Semantics {
            focused: self.is_focused(),
            enabled: !self.config.disabled,
            ..Semantics::new(Role::Slider).range(self.config.min, self.config.max, self.value)
        }
    }

    /// Tick and label layout for the current bounds and track width,
    /// recomputed on first read after a change.
    pub fn layout(&self) -> &TickLayout {
        self.layout.get_or_compute(|| {
            TickLayout::compute(
                &self.bounds,
                self.config.label_interval,
                self.track.w,
                &self.config.label_metrics,
            )
        })
    }

    pub fn labels(&self) -> &[Label] {
        &self.layout().labels
    }

    pub fn labels_overlapping(&self) -> bool {
        self.layout().labels_overlapping
    }

    pub fn hidden_tickmarks(&self) -> bool {
        self.layout().hidden_tickmarks
    }

    /// How many times the layout has been computed.
    pub fn layout_computations(&self) -> u64 {
        self.layout.computations()
    }

    // Property writes

    pub fn set_config(&mut self, config: SliderConfig) {
        self.config = config;
        self.recompute();
    }

    pub fn set_min(&mut self, min: f64) {
        self.config.min = min;
        self.recompute();
    }

    pub fn set_max(&mut self, max: f64) {
        self.config.max = max;
        self.recompute();
    }

    pub fn set_step(&mut self, step: f64) {
        self.config.step = step;
        self.recompute();
    }

    pub fn set_label_interval(&mut self, n: i64) {
        self.config.label_interval = n;
        self.recompute();
    }

    pub fn set_show_tickmarks(&mut self, on: bool) {
        self.config.show_tickmarks = on;
    }

    pub fn set_show_tooltip(&mut self, on: bool) {
        self.config.show_tooltip = on;
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.config.direction = direction;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.recompute();
    }

    /// Programmatic value write: clamped, never stepified, no notifications.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.bounds.clamp(value);
    }

    /// New measured track rectangle in window pixels.
    pub fn set_track(&mut self, track: Rect) {
        if track != self.track {
            self.track = track;
            self.layout.invalidate();
        }
    }

    pub fn set_attribute(&mut self, name: &str, text: &str) -> Result<(), PropertyError> {
        let write = self.config.set_attribute(name, text)?;
        self.apply_attribute_write(write);
        Ok(())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Result<(), PropertyError> {
        let write = self.config.remove_attribute(name)?;
        self.apply_attribute_write(write);
        Ok(())
    }

    fn apply_attribute_write(&mut self, write: AttributeWrite) {
        match write {
            AttributeWrite::Config => self.recompute(),
            AttributeWrite::Value(v) => self.set_value(v),
        }
    }

    fn recompute(&mut self) {
        self.bounds = EffectiveBounds::compute(self.config.min, self.config.max, self.config.step);
        self.value = self.bounds.clamp(self.value);
        self.layout.invalidate();

        if self.pointer.is_some() && !self.config.is_interactive() {
            log::debug!("slider became non-interactive; dropping the active gesture");
            self.pointer = None;
            self.gesture.reset();
        }
    }

    // Input

    /// Routes one host event. Returns `true` when the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Pointer(pe) => self.handle_pointer(pe),
            InputEvent::Key(ke) => self.handle_key(ke),
            InputEvent::Focus => {
                self.focus();
                true
            }
            InputEvent::Blur => {
                self.blur();
                true
            }
            InputEvent::Resize(rect) => {
                self.set_track(*rect);
                true
            }
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.event {
            PointerEventKind::Enter => {
                self.tooltip.mouse_enter();
                return true;
            }
            PointerEventKind::Leave => {
                self.tooltip.mouse_leave();
                return true;
            }
            _ => {}
        }

        let track = self.track;
        match self.gesture.handle_pointer(event, &track) {
            Some(TrackStep::Press { offset_px }) => {
                let started = self.begin_interaction(offset_px);
                if !started {
                    self.gesture.reset();
                }
                started
            }
            Some(TrackStep::Drag { offset_px, .. }) => self.update_interaction(offset_px),
            Some(TrackStep::Release { inside }) => {
                if !inside {
                    log::trace!("pointer released outside the track");
                }
                self.end_interaction()
            }
            None => false,
        }
    }

    /// Opens a pointer gesture at `offset_px` from the track's left edge.
    /// Returns `false` if the slider is not interactive or a gesture is
    /// already open.
    pub fn begin_interaction(&mut self, offset_px: f64) -> bool {
        if !self.config.is_interactive() {
            if !self.config.disabled {
                log::warn!("slider step must be a nonzero number; ignoring interaction");
            }
            return false;
        }
        if self.pointer.is_some() {
            log::debug!("slider gesture already open; ignoring press");
            return false;
        }

        let mut session = InteractionSession::open(SessionOrigin::Pointer, self.value);
        let raw = session::value_from_offset(
            offset_px,
            self.track.w,
            &self.bounds,
            self.config.direction,
        );
        self.value = self.bounds.stepify(raw);
        log::debug!(
            "slider gesture started: {} -> {}",
            session.value_at_start,
            self.value
        );

        let emit = session.mark_emitted(self.value);
        self.pointer = Some(session);
        if emit {
            self.events.emit(&SliderEvent::Input { value: self.value });
        }
        true
    }

    /// Moves an open gesture. Intermediate values are clamped but not
    /// stepified so the handle tracks the pointer smoothly.
    pub fn update_interaction(&mut self, offset_px: f64) -> bool {
        let Some(active) = self.pointer.as_mut() else {
            return false;
        };
        let raw = session::value_from_offset(
            offset_px,
            self.track.w,
            &self.bounds,
            self.config.direction,
        );
        self.value = self.bounds.clamp(raw);
        if active.mark_emitted(self.value) {
            log::trace!("slider drag: {}", self.value);
            self.events.emit(&SliderEvent::Input { value: self.value });
        }
        true
    }

    /// Closes the open gesture: snaps the value and fires `change` if it
    /// differs from the value the gesture started with.
    pub fn end_interaction(&mut self) -> bool {
        let Some(mut session) = self.pointer.take() else {
            return false;
        };
        self.gesture.reset();
        self.value = self.bounds.stepify(self.value);
        if session.mark_emitted(self.value) {
            self.events.emit(&SliderEvent::Input { value: self.value });
        }
        log::debug!(
            "slider gesture ended: {} -> {}",
            session.value_at_start,
            self.value
        );
        if session.changed(self.value) {
            self.events.emit(&SliderEvent::Change { value: self.value });
        }
        true
    }

    /// Applies a key press. Returns `true` when the slider consumed the key.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let Some(action) = keyboard::action_for(event, self.config.direction) else {
            return false;
        };
        if !self.config.is_interactive() {
            return false;
        }

        let next = match keyboard::apply(
            action,
            self.value,
            &self.bounds,
            self.config.large_step_multiplier,
        ) {
            Some(v) => v,
            None => match self.focus {
                Some(origin) => self.bounds.clamp(origin.value_at_start),
                None => return false,
            },
        };
        log::debug!("slider key {:?} ({action:?}): {} -> {next}", event.key, self.value);

        if next != self.value {
            self.value = next;
            self.events.emit(&SliderEvent::Input { value: next });
            self.events.emit(&SliderEvent::Change { value: next });
        }
        true
    }

    pub fn focus(&mut self) {
        self.tooltip.focus();
        if self.focus.is_none() {
            self.focus = Some(InteractionSession::open(SessionOrigin::Focus, self.value));
        }
    }

    pub fn blur(&mut self) {
        self.tooltip.blur();
        self.focus = None;
    }

    pub fn mouse_enter(&mut self) {
        self.tooltip.mouse_enter();
    }

    pub fn mouse_leave(&mut self) {
        self.tooltip.mouse_leave();
    }

    pub fn render(&self) -> SliderView {
        SliderView::from_slider(self)
    }
}
