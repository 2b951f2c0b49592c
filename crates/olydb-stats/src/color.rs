//! Correlation heatmap colors.
//!
//! A coefficient in `[-1, 1]` maps to a translucent green (positive) or red
//! (negative) whose opacity grows with `|r|`. Dark and light color schemes use
//! separate palettes so the cells keep enough contrast against the page
//! background.

use serde::Serialize;

/// Fill color for a single heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::Display)]
#[serde(into = "String")]
pub enum CellColor {
    /// No fill; used for coefficients that could not be computed.
    #[display("transparent")]
    Transparent,
    /// Translucent RGB fill.
    #[display("rgba({r}, {g}, {b}, {a:.2})")]
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl From<CellColor> for String {
    fn from(color: CellColor) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    positive: (u8, u8, u8),
    negative: (u8, u8, u8),
}

const DARK_PALETTE: Palette = Palette {
    positive: (81, 207, 102),
    negative: (255, 107, 107),
};

const LIGHT_PALETTE: Palette = Palette {
    positive: (47, 158, 68),
    negative: (224, 49, 49),
};

/// Maps a correlation coefficient to a heatmap cell color.
///
/// `NaN` yields [`CellColor::Transparent`]. Otherwise the hue is chosen by the
/// sign of `value` (zero counts as positive) and the alpha channel equals
/// `|value|`, clamped to `1.0`.
///
/// # Examples
///
/// ```
/// # use olydb_stats::color::correlation_color;
/// assert_eq!(correlation_color(1.0, false).to_string(), "rgba(47, 158, 68, 1.00)");
/// assert_eq!(correlation_color(-0.5, true).to_string(), "rgba(255, 107, 107, 0.50)");
/// ```
#[must_use]
pub fn correlation_color(value: f64, is_dark: bool) -> CellColor {
    if value.is_nan() {
        return CellColor::Transparent;
    }

    let palette = if is_dark { DARK_PALETTE } else { LIGHT_PALETTE };
    let (r, g, b) = if value >= 0.0 {
        palette.positive
    } else {
        palette.negative
    };
    CellColor::Rgba {
        r,
        g,
        b,
        a: value.abs().min(1.0),
    }
}
