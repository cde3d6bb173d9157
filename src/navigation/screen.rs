//! Viewport classification

use serde::{Deserialize, Serialize};

/// Widths below this are mobile
pub const TABLET_MIN_WIDTH_PX: u32 = 640;
/// Widths below this are tablet
pub const DESKTOP_MIN_WIDTH_PX: u32 = 1024;
/// Widths at or above this are huge
pub const HUGE_MIN_WIDTH_PX: u32 = 1920;

/// Viewport size flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Screen {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_huge: bool,
}

impl Screen {
    /// Classify a viewport width in CSS pixels
    pub fn from_width(width: u32) -> Self {
        Self {
            is_mobile: width < TABLET_MIN_WIDTH_PX,
            is_tablet: (TABLET_MIN_WIDTH_PX..DESKTOP_MIN_WIDTH_PX).contains(&width),
            is_desktop: width >= DESKTOP_MIN_WIDTH_PX,
            is_huge: width >= HUGE_MIN_WIDTH_PX,
        }
    }

    /// Whether the side menu collapses into a toggle at this size
    pub fn is_compact(&self) -> bool {
        self.is_mobile || self.is_tablet
    }
}
