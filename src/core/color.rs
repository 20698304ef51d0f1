//! Sticker colors.
//!
//! A finalized cube only ever holds [`Color`]. The scanner may report a cell
//! it could not classify, which is what [`Sticker::Unknown`] is for; it never
//! makes it past scan assembly.

use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six concrete sticker colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// Palette order, used wherever colors are listed.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }

    /// Single uppercase letter, handy for compact debug output.
    pub fn letter(self) -> char {
        match self {
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Red => 'R',
            Self::Orange => 'O',
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownColor(s.to_string()))
    }
}

/// A scanned cell: either a classified color or a placeholder awaiting
/// manual correction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Sticker {
    Known(Color),
    #[default]
    Unknown,
}

impl Sticker {
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Known(color) => Some(color),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Color> for Sticker {
    fn from(color: Color) -> Self {
        Self::Known(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_parse_back() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
        assert_eq!(" Orange ".parse::<Color>().unwrap(), Color::Orange);
    }

    #[test]
    fn unknown_color_name_is_rejected() {
        let err = "gray".parse::<Color>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownColor(name) if name == "gray"));
    }

    #[test]
    fn color_serializes_lowercase() {
        let json = serde_json::to_string(&Color::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(back, Color::Red);
    }

    #[test]
    fn palette_indices_are_dense() {
        for (i, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn sticker_defaults_to_unknown() {
        assert_eq!(Sticker::default(), Sticker::Unknown);
        assert!(!Sticker::Unknown.is_known());
        assert_eq!(Sticker::from(Color::Blue).color(), Some(Color::Blue));
    }
}
