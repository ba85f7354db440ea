//! Read-only snapshot handed to the host's painter.

use std::fmt;

use notch_core::{Semantics, TextDirection};

use super::Slider;
use super::layout::Label;
use super::normalize::{EffectiveBounds, round_to};
use super::tooltip::TooltipVisibility;

/// Percentages are rounded to this many decimals before they reach styles.
const PERCENT_PLACES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleEdge {
    Left,
    Right,
}

/// Handle placement as an inline style: `left` for LTR, `right` for RTL.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleStyle {
    pub edge: HandleEdge,
    pub percent: f64,
}

impl fmt::Display for HandleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            HandleEdge::Left => "left",
            HandleEdge::Right => "right",
        };
        write!(f, "{edge}: {}%;", self.percent)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipView {
    pub text: String,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderView {
    pub handle: HandleStyle,
    /// Width of the filled part of the track, from the start edge.
    pub progress_percent: f64,
    /// Tick offsets from the start edge; empty when tick marks are off or
    /// too dense to draw.
    pub ticks: Vec<f64>,
    pub labels: Vec<Label>,
    pub labels_overlapping: bool,
    pub hidden_tickmarks: bool,
    /// `None` unless the tooltip is enabled.
    pub tooltip: Option<TooltipView>,
    pub semantics: Semantics,
}

impl SliderView {
    pub fn from_slider(slider: &Slider) -> Self {
        let config = slider.config();
        let layout = slider.layout();
        let percent = value_percent(slider.bounds(), slider.value());

        let ticks = if config.show_tickmarks && !layout.hidden_tickmarks {
            layout
                .tick_positions()
                .map(|p| round_to(p, PERCENT_PLACES))
                .collect()
        } else {
            Vec::new()
        };

        let tooltip = config.show_tooltip.then(|| TooltipView {
            text: slider.tooltip_text(),
            visible: slider.tooltip_visibility() == TooltipVisibility::Visible,
        });

        Self {
            handle: HandleStyle {
                edge: match config.direction {
                    TextDirection::Ltr => HandleEdge::Left,
                    TextDirection::Rtl => HandleEdge::Right,
                },
                percent,
            },
            progress_percent: percent,
            ticks,
            labels: layout.labels.clone(),
            labels_overlapping: layout.labels_overlapping,
            hidden_tickmarks: layout.hidden_tickmarks,
            tooltip,
            semantics: slider.semantics(),
        }
    }
}

/// `value`'s distance from the minimum in percent of the range.
pub fn value_percent(bounds: &EffectiveBounds, value: f64) -> f64 {
    round_to(bounds.ratio_of(value) * 100.0, PERCENT_PLACES) + 0.0
}

/// Tooltip/value text; never prints `-0`.
pub fn format_value(value: f64) -> String {
    format!("{}", value + 0.0)
}
