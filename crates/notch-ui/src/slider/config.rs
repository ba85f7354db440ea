//! Host-owned slider properties and HTML attribute reflection.

use notch_core::{PropertyError, TextDirection};

use super::keyboard::DEFAULT_LARGE_STEP_MULTIPLIER;
use super::normalize::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP};
use crate::text::LabelMetrics;

/// Raw, host-owned slider properties. The engine reads these but never
/// rewrites them; see [`super::EffectiveBounds`] for the normalized view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Label every Nth tick; `0` or less disables labels.
    pub label_interval: i64,
    pub show_tickmarks: bool,
    pub show_tooltip: bool,
    pub direction: TextDirection,
    pub disabled: bool,
    /// Ctrl+arrow, PageUp/PageDown and `+`/`-` move this many steps.
    pub large_step_multiplier: f64,
    pub label_metrics: LabelMetrics,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            label_interval: 0,
            show_tickmarks: false,
            show_tooltip: false,
            direction: TextDirection::Ltr,
            disabled: false,
            large_step_multiplier: DEFAULT_LARGE_STEP_MULTIPLIER,
            label_metrics: LabelMetrics::default(),
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn label_interval(mut self, n: i64) -> Self {
        self.label_interval = n;
        self
    }

    pub fn show_tickmarks(mut self, on: bool) -> Self {
        self.show_tickmarks = on;
        self
    }

    pub fn show_tooltip(mut self, on: bool) -> Self {
        self.show_tooltip = on;
        self
    }

    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn large_step_multiplier(mut self, m: f64) -> Self {
        self.large_step_multiplier = m;
        self
    }

    pub fn label_metrics(mut self, metrics: LabelMetrics) -> Self {
        self.label_metrics = metrics;
        self
    }

    /// Pointer and keyboard input are ignored when disabled or when the raw
    /// step is zero.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.step != 0.0
    }

    /// Applies an HTML-style attribute write. `value` is widget state, not
    /// config, and comes back as [`AttributeWrite::Value`] for the caller to
    /// apply; every other name updates `self`.
    pub fn set_attribute(&mut self, name: &str, text: &str) -> Result<AttributeWrite, PropertyError> {
        match name {
            "min" => self.min = parse_number(text, DEFAULT_MIN),
            "max" => self.max = parse_number(text, DEFAULT_MAX),
            "step" => self.step = parse_number(text, DEFAULT_STEP),
            "value" => return Ok(AttributeWrite::Value(parse_number(text, 0.0))),
            "label-interval" => self.label_interval = text.trim().parse().unwrap_or(0),
            "show-tickmarks" => self.show_tickmarks = true,
            "show-tooltip" => self.show_tooltip = true,
            "disabled" => self.disabled = true,
            "dir" => {
                self.direction =
                    TextDirection::parse(text).ok_or_else(|| PropertyError::InvalidValue {
                        name: name.to_string(),
                        value: text.to_string(),
                    })?
            }
            _ => return Err(PropertyError::UnknownAttribute(name.to_string())),
        }
        Ok(AttributeWrite::Config)
    }

    /// Resets an attribute to its default, as removing it from the element
    /// would.
    pub fn remove_attribute(&mut self, name: &str) -> Result<AttributeWrite, PropertyError> {
        let defaults = SliderConfig::default();
        match name {
            "min" => self.min = defaults.min,
            "max" => self.max = defaults.max,
            "step" => self.step = defaults.step,
            "value" => return Ok(AttributeWrite::Value(0.0)),
            "label-interval" => self.label_interval = defaults.label_interval,
            "show-tickmarks" => self.show_tickmarks = defaults.show_tickmarks,
            "show-tooltip" => self.show_tooltip = defaults.show_tooltip,
            "disabled" => self.disabled = defaults.disabled,
            "dir" => self.direction = defaults.direction,
            _ => return Err(PropertyError::UnknownAttribute(name.to_string())),
        }
        Ok(AttributeWrite::Config)
    }
}

/// What an attribute write touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeWrite {
    Config,
    Value(f64),
}

fn parse_number(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::debug!("attribute value {text:?} is not a number; using {fallback}");
            fallback
        }
    }
}
