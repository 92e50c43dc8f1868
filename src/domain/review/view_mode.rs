use crate::domain::review::ReviewError;
use std::fmt::Display;
use std::str::FromStr;

const VIEW_MODE_ALIASES: phf::Map<&'static str, ViewMode> = phf::phf_map! {
    "unified" => ViewMode::Unified,
    "inline" => ViewMode::Unified,
    "split" => ViewMode::Split,
    "side-by-side" => ViewMode::Split,
    "sbs" => ViewMode::Split,
};

/// Which of the two renderings is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Unified,
    Split,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Unified => ViewMode::Split,
            ViewMode::Split => ViewMode::Unified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Unified => "unified",
            ViewMode::Split => "split",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VIEW_MODE_ALIASES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ReviewError::UnknownViewMode(s.to_string()))
    }
}
