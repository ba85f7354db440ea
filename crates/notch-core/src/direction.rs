/// Reading direction of a widget. Horizontal controls anchor their start
/// edge on the left for `Ltr` and on the right for `Rtl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Maps a left-to-right fraction of a track to a fraction measured from
    /// the start edge.
    pub fn from_start(self, ratio: f64) -> f64 {
        match self {
            TextDirection::Ltr => ratio,
            TextDirection::Rtl => 1.0 - ratio,
        }
    }

    /// Parses the HTML `dir` attribute values this crate understands.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Some(TextDirection::Ltr),
            "rtl" => Some(TextDirection::Rtl),
            _ => None,
        }
    }
}
