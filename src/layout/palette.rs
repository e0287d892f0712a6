use crate::{foundation::core::Rgb8, request::Theme};

/// Highlight for the current day, shared by both themes.
pub const ACTIVE: Rgb8 = Rgb8::from_u32(0xEF4444);

/// Where a day sits relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DotState {
    Passed,
    Active,
    Pending,
}

impl DotState {
    pub fn classify(day: u32, day_of_year: u32) -> Self {
        match day.cmp(&day_of_year) {
            std::cmp::Ordering::Less => DotState::Passed,
            std::cmp::Ordering::Equal => DotState::Active,
            std::cmp::Ordering::Greater => DotState::Pending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    pub background: Rgb8,
    pub passed: Rgb8,
    pub pending: Rgb8,
    pub active: Rgb8,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Rgb8::from_u32(0x000000),
        passed: Rgb8::from_u32(0xFFFFFF),
        pending: Rgb8::from_u32(0x222222),
        active: ACTIVE,
    };

    pub const LIGHT: Palette = Palette {
        background: Rgb8::from_u32(0xFFFFFF),
        passed: Rgb8::from_u32(0x000000),
        pending: Rgb8::from_u32(0xDDDDDD),
        active: ACTIVE,
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    pub fn fill(&self, state: DotState) -> Rgb8 {
        match state {
            DotState::Passed => self.passed,
            DotState::Active => self.active,
            DotState::Pending => self.pending,
        }
    }
}
