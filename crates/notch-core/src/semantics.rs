/// High‑level semantic role of a node, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Slider,
}

/// Semantics exposed for a node, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Semantics {
    pub role: Role,
    pub focused: bool,
    /// Disabled nodes remain in the tree but are marked not enabled.
    pub enabled: bool,
    /// `aria-valuemin`; the raw configured minimum.
    pub value_min: Option<f64>,
    /// `aria-valuemax`; the raw configured maximum.
    pub value_max: Option<f64>,
    /// `aria-valuenow`.
    pub value_now: Option<f64>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            focused: false,
            enabled: true,
            value_min: None,
            value_max: None,
            value_now: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64, now: f64) -> Self {
        self.value_min = Some(min);
        self.value_max = Some(max);
        self.value_now = Some(now);
        self
    }
}
