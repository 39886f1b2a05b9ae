//! To maintain a theme of colors, the colors live here as constants so
//! the UI does not look bad at any point.
//!
//! - TABULA_TEAL: Main Color
//! - TABULA_AMBER: Failures

use colored::Color;

pub(crate) const TABULA_TEAL: Color = Color::TrueColor {
    r: 38,
    g: 166,
    b: 154,
};

pub(crate) const TABULA_AMBER: Color = Color::TrueColor {
    r: 255,
    g: 179,
    b: 0,
};
