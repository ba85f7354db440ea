//! Range input widgets.
//!
//! The slider engine lives in [`slider`]; [`gestures`] and [`text`] are the
//! pointer and label-measuring helpers it is built from.

pub mod gestures;
pub mod slider;
pub mod text;

pub use slider::{
    EffectiveBounds, HandleEdge, HandleStyle, Label, Slider, SliderConfig, SliderEvent,
    SliderView, TickLayout, TooltipView, TooltipVisibility,
};
pub use text::LabelMetrics;
