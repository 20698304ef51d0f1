//! Face identifiers and their fixed conventions.

use super::color::Color;
use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six sides of the cube, named in Singmaster style.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "B")]
    Back,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

/// Order in which the scanner walks the faces.
pub const SCAN_ORDER: [Face; 6] = [
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Left,
    Face::Up,
    Face::Down,
];

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Conventional color of this face on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Self::Up => Color::White,
            Self::Down => Color::Yellow,
            Self::Front => Color::Green,
            Self::Back => Color::Blue,
            Self::Left => Color::Orange,
            Self::Right => Color::Red,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.letter() == letter)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some(face) = Face::from_letter(letter.to_ascii_uppercase()) {
                return Ok(face);
            }
        }
        Face::ALL
            .into_iter()
            .find(|f| format!("{f:?}").eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownFace(s.to_string()))
    }
}

/// An edge of a face grid, in that face's own viewing coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Clockwise walk around a face, starting at the top edge.
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
