//! Key to value mapping.

use notch_core::{Key, KeyEvent, TextDirection};

use super::normalize::EffectiveBounds;

pub const DEFAULT_LARGE_STEP_MULTIPLIER: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSize {
    Small,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Increase(StepSize),
    Decrease(StepSize),
    ToMin,
    ToMax,
    /// Restore the value recorded when focus arrived.
    Revert,
}

/// Resolves a key press, or `None` if the slider does not handle it.
pub fn action_for(event: &KeyEvent, direction: TextDirection) -> Option<KeyAction> {
    let arrow_size = if event.ctrl() {
        StepSize::Large
    } else {
        StepSize::Small
    };
    let (forward, backward) = match direction {
        TextDirection::Ltr => (Key::ArrowRight, Key::ArrowLeft),
        TextDirection::Rtl => (Key::ArrowLeft, Key::ArrowRight),
    };

    let action = match &event.key {
        Key::ArrowUp => KeyAction::Increase(arrow_size),
        Key::ArrowDown => KeyAction::Decrease(arrow_size),
        k if *k == forward => KeyAction::Increase(arrow_size),
        k if *k == backward => KeyAction::Decrease(arrow_size),
        Key::PageUp | Key::Character('+') => KeyAction::Increase(StepSize::Large),
        Key::PageDown | Key::Character('-') => KeyAction::Decrease(StepSize::Large),
        Key::Home => KeyAction::ToMin,
        Key::End => KeyAction::ToMax,
        Key::Escape => KeyAction::Revert,
        _ => return None,
    };
    Some(action)
}

/// New value for every action except [`KeyAction::Revert`], which depends on
/// session state and yields `None`.
pub fn apply(
    action: KeyAction,
    value: f64,
    bounds: &EffectiveBounds,
    large_step_multiplier: f64,
) -> Option<f64> {
    let delta = |size: StepSize| match size {
        StepSize::Small => bounds.step,
        StepSize::Large => bounds.step * effective_multiplier(large_step_multiplier),
    };
    let next = match action {
        // snapping near an off-grid bound may land behind the current value
        KeyAction::Increase(size) => bounds.stepify(bounds.clamp(value + delta(size))).max(value),
        KeyAction::Decrease(size) => bounds.stepify(bounds.clamp(value - delta(size))).min(value),
        KeyAction::ToMin => bounds.min,
        KeyAction::ToMax => bounds.max,
        KeyAction::Revert => return None,
    };
    Some(next)
}

fn effective_multiplier(m: f64) -> f64 {
    if m.is_finite() && m >= 1.0 {
        m
    } else {
        DEFAULT_LARGE_STEP_MULTIPLIER
    }
}
