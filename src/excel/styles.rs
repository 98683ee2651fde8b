//! Cell fill colors
//!
//! A fill's foreground color is stored either as a direct ARGB value or as an
//! index into the legacy 64-color palette (theme colors are looked up in the
//! same table). Every representation resolves to a canonical `#RRGGBB`.

use crate::error::{ReconError, ReconResult};
use umya_spreadsheet::{Color, Style};

/// Legacy indexed palette, ARGB. 64 and 65 are the system foreground/background.
const INDEXED_PALETTE: [&str; 66] = [
    "00000000", "00FFFFFF", "00FF0000", "0000FF00", "000000FF", "00FFFF00", "00FF00FF", "0000FFFF",
    "00000000", "00FFFFFF", "00FF0000", "0000FF00", "000000FF", "00FFFF00", "00FF00FF", "0000FFFF",
    "00800000", "00008000", "00000080", "00808000", "00800080", "00008080", "00C0C0C0", "00808080",
    "009999FF", "00993366", "00FFFFCC", "00CCFFFF", "00660066", "00FF8080", "000066CC", "00CCCCFF",
    "00000080", "00FF00FF", "00FFFF00", "0000FFFF", "00800080", "00800000", "00008080", "000000FF",
    "0000CCFF", "00CCFFFF", "00CCFFCC", "00FFFF99", "0099CCFF", "00FF99CC", "00CC99FF", "00FFCC99",
    "003366FF", "0033CCCC", "0099CC00", "00FFCC00", "00FF9900", "00FF6600", "00666699", "00969696",
    "00003366", "00339966", "00003300", "00333300", "00993300", "00993366", "00333399", "00333333",
    "00000000", "00FFFFFF",
];

/// Foreground color of a cell fill, as stored in the workbook
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FillColor {
    /// No pattern color set; reads as black like an unset color
    #[default]
    Unset,
    /// ARGB hex, e.g. `FFFFFF00`
    Rgb(String),
    Indexed(u32),
    Theme(u32),
    /// Gradient fills have no single foreground color
    Gradient,
}

impl FillColor {
    /// Resolve to `#RRGGBB`
    pub fn resolve(&self) -> ReconResult<String> {
        match self {
            FillColor::Unset => Ok("#000000".to_string()),
            FillColor::Rgb(argb) => strip_alpha(argb),
            FillColor::Indexed(index) | FillColor::Theme(index) => INDEXED_PALETTE
                .get(*index as usize)
                .ok_or_else(|| {
                    ReconError::UnresolvedColor(format!("palette index {} out of range", index))
                })
                .and_then(|argb| strip_alpha(argb)),
            FillColor::Gradient => Err(ReconError::UnresolvedColor(
                "gradient fill has no foreground color".to_string(),
            )),
        }
    }

    /// Pattern-fill foreground color of a cell style
    pub fn from_style(style: &Style) -> Self {
        let Some(fill) = style.get_fill() else {
            return FillColor::Unset;
        };

        match fill.get_pattern_fill() {
            Some(pattern) => pattern
                .get_foreground_color()
                .map_or(FillColor::Unset, FillColor::from_color),
            None if fill.get_gradient_fill().is_some() => FillColor::Gradient,
            None => FillColor::Unset,
        }
    }

    fn from_color(color: &Color) -> Self {
        FillColor::from_parts(
            color.get_argb(),
            *color.get_indexed(),
            *color.get_theme_index(),
        )
    }

    /// An ARGB value wins over an index; index 0 means "not set"
    pub fn from_parts(argb: &str, indexed: u32, theme: u32) -> Self {
        if !argb.is_empty() {
            FillColor::Rgb(argb.to_string())
        } else if indexed != 0 {
            FillColor::Indexed(indexed)
        } else if theme != 0 {
            FillColor::Theme(theme)
        } else {
            FillColor::Unset
        }
    }
}

fn strip_alpha(argb: &str) -> ReconResult<String> {
    let rgb = match argb.len() {
        8 => &argb[2..],
        6 => argb,
        _ => {
            return Err(ReconError::UnresolvedColor(format!(
                "malformed ARGB value {:?}",
                argb
            )))
        }
    };

    if !rgb.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ReconError::UnresolvedColor(format!(
            "malformed ARGB value {:?}",
            argb
        )));
    }

    Ok(format!("#{}", rgb.to_ascii_uppercase()))
}
