//! Shared formatting constants.
//!
//! One [`Palette`] is created per build and handed to every sheet step by
//! reference, so the header blue or the warning red cannot drift between
//! sheets.

use crate::model::{CellStyle, Highlight};

/// Header fill blue.
pub const HEADER_FILL: u32 = 0x0036_6092;
/// Warning red used for negative figures and warning text.
pub const WARNING_RED: u32 = 0x00FF_0000;
/// Alert pink used for low cash balances.
pub const ALERT_PINK: u32 = 0x00FF_C7CE;
/// Amber fill behind the dashboard warning caption.
pub const NOTICE_AMBER: u32 = 0x00FF_E699;
const WHITE: u32 = 0x00FF_FFFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Table header: blue fill, bold white text, centred, thin border.
    pub header: CellStyle,
    /// Sheet title.
    pub title: CellStyle,
    /// Dashboard title, one size up from other titles.
    pub dashboard_title: CellStyle,
    /// Section caption.
    pub subtitle: CellStyle,
    /// Emphasised row label.
    pub label: CellStyle,
    /// Red bold text for dashboard messages.
    pub warning_text: CellStyle,
    /// Caption above the dashboard messages.
    pub notice_banner: CellStyle,
    /// Conditional effect for negative amounts.
    pub negative: Highlight,
    /// Conditional effect for balances under the alert threshold.
    pub alert: Highlight,
}

impl Palette {
    #[must_use]
    pub const fn standard() -> Self {
        let mut header = CellStyle::bold()
            .with_fill(HEADER_FILL)
            .with_font_color(WHITE)
            .with_font_size(11);
        header.border = true;
        header.centered = true;

        let subtitle = CellStyle::bold().with_font_size(12);

        Self {
            header,
            title: CellStyle::bold().with_font_size(14),
            dashboard_title: CellStyle::bold().with_font_size(16),
            subtitle,
            label: CellStyle::bold(),
            warning_text: CellStyle::bold().with_font_color(WARNING_RED),
            notice_banner: subtitle.with_fill(NOTICE_AMBER),
            negative: Highlight::FontColor(WARNING_RED),
            alert: Highlight::Fill(ALERT_PINK),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
