//! Tick marks and labels derived from the bounds and the measured track.

use super::normalize::{EffectiveBounds, round_to};
use crate::text::{LabelMetrics, estimate_width};

/// Below this spacing tick marks are not drawn.
pub const MIN_TICK_SPACING_PX: f64 = 8.0;
/// Beyond this many labels only the first and last are kept.
pub const MAX_LABELS: usize = 1000;
/// Beyond this many ticks the marks are hidden whatever the track width.
pub const MAX_TICKS: usize = 10_000;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    /// Offset from the start edge, in percent of the track.
    pub position: f64,
    pub value: f64,
    pub text: String,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TickLayout {
    pub bounds: EffectiveBounds,
    pub track_px: f64,
    pub tick_count: usize,
    pub labels: Vec<Label>,
    pub labels_overlapping: bool,
    pub hidden_tickmarks: bool,
}

impl TickLayout {
    pub fn compute(
        bounds: &EffectiveBounds,
        label_interval: i64,
        track_px: f64,
        metrics: &LabelMetrics,
    ) -> Self {
        let tick_count = bounds.tick_count();
        let measured = track_px.is_finite() && track_px > 0.0;

        let hidden_tickmarks = tick_count > MAX_TICKS
            || (measured
                && tick_spacing(bounds, tick_count, track_px)
                    .is_some_and(|spacing| spacing < MIN_TICK_SPACING_PX));

        let (mut labels, capped) = build_labels(bounds, tick_count, label_interval);

        let labels_overlapping = labels.len() >= 2
            && (capped
                || hidden_tickmarks
                || (measured && any_overlap(&labels, track_px, metrics)));

        if labels_overlapping {
            let last = labels.len().saturating_sub(1);
            for (i, label) in labels.iter_mut().enumerate() {
                label.visible = i == 0 || i == last;
            }
        }

        Self {
            bounds: *bounds,
            track_px,
            tick_count,
            labels,
            labels_overlapping,
            hidden_tickmarks,
        }
    }

    /// Tick offsets from the start edge, in percent. Empty when the marks
    /// are hidden.
    pub fn tick_positions(&self) -> impl Iterator<Item = f64> + '_ {
        let count = if self.hidden_tickmarks { 0 } else { self.tick_count };
        (0..count).map(|i| position_of(&self.bounds, i as f64))
    }

    pub fn visible_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|l| l.visible)
    }
}

fn tick_spacing(bounds: &EffectiveBounds, tick_count: usize, track_px: f64) -> Option<f64> {
    if tick_count < 2 || bounds.span() <= 0.0 {
        return None;
    }
    Some(track_px * bounds.step / bounds.span())
}

fn position_of(bounds: &EffectiveBounds, index: f64) -> f64 {
    let span = bounds.span();
    if span > 0.0 {
        // f64::min drops the NaN of an infinite index over an infinite span
        (index * bounds.step * 100.0 / span).min(100.0)
    } else {
        0.0
    }
}

/// Every `interval`-th tick plus the last one. The flag reports whether the
/// set was cut down to its ends.
fn build_labels(bounds: &EffectiveBounds, tick_count: usize, interval: i64) -> (Vec<Label>, bool) {
    if interval <= 0 || tick_count == 0 {
        return (Vec::new(), false);
    }
    let last = tick_count - 1;
    // exact even when `tick_count` saturated
    let last_index = bounds.last_step_index();
    let interval = usize::try_from(interval).unwrap_or(usize::MAX);

    let mut indices: Vec<f64> = Vec::new();
    let wanted = (last / interval)
        .saturating_add(1)
        .saturating_add(usize::from(last % interval != 0));
    let capped = wanted > MAX_LABELS;
    if capped {
        log::debug!("{wanted} labels exceed the cap; keeping the ends");
        indices.push(0.0);
    } else {
        indices.extend((0..=last).step_by(interval).map(|i| i as f64));
    }
    if indices.last() != Some(&last_index) {
        indices.push(last_index);
    }

    let precision = bounds.precision();
    let text_precision = bounds.step_precision();
    let labels = indices
        .into_iter()
        .map(|i| {
            // + 0.0 folds -0.0 into 0.0
            let value = bounds.clamp(round_to(bounds.min + i * bounds.step, precision)) + 0.0;
            Label {
                position: position_of(bounds, i),
                value,
                text: format!("{value:.text_precision$}"),
                visible: true,
            }
        })
        .collect();
    (labels, capped)
}

fn any_overlap(labels: &[Label], track_px: f64, metrics: &LabelMetrics) -> bool {
    labels.windows(2).any(|pair| {
        let gap = (pair[1].position - pair[0].position) / 100.0 * track_px;
        let half_widths =
            (estimate_width(&pair[0].text, metrics) + estimate_width(&pair[1].text, metrics)) / 2.0;
        half_widths > gap
    })
}
