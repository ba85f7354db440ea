//! Tooltip visibility driven by hover and focus.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TooltipVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Hover/focus driven tooltip state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    hovered: bool,
    focused: bool,
    visibility: TooltipVisibility,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_enter(&mut self) {
        self.hovered = true;
        self.visibility = TooltipVisibility::Visible;
    }

    pub fn mouse_leave(&mut self) {
        self.hovered = false;
        self.visibility = if self.focused {
            TooltipVisibility::Visible
        } else {
            TooltipVisibility::Hidden
        };
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.visibility = TooltipVisibility::Visible;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        if !self.hovered {
            self.visibility = TooltipVisibility::Hidden;
        }
    }

    pub fn visibility(&self) -> TooltipVisibility {
        self.visibility
    }

}
