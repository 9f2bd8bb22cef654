use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "21:9")]
    Ultrawide,
    #[serde(rename = "2:3")]
    Portrait2x3,
    #[serde(rename = "3:2")]
    Landscape3x2,
    #[serde(rename = "4:5")]
    Portrait4x5,
    #[serde(rename = "5:4")]
    Landscape5x4,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "9:21")]
    UltraVertical,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 9] = [
        Self::Square,
        Self::Widescreen,
        Self::Ultrawide,
        Self::Portrait2x3,
        Self::Landscape3x2,
        Self::Portrait4x5,
        Self::Landscape5x4,
        Self::Vertical,
        Self::UltraVertical,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Square => "1:1",
            Self::Widescreen => "16:9",
            Self::Ultrawide => "21:9",
            Self::Portrait2x3 => "2:3",
            Self::Landscape3x2 => "3:2",
            Self::Portrait4x5 => "4:5",
            Self::Landscape5x4 => "5:4",
            Self::Vertical => "9:16",
            Self::UltraVertical => "9:21",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ratio| ratio.value() == value)
    }
}
