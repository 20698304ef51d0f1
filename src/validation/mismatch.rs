//! Per-color count mismatches.

use crate::core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color whose total sticker count differs from `size * size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMismatch {
    pub color: Color,
    pub expected: usize,
    pub actual: usize,
}

impl ColorMismatch {
    /// Signed difference `actual - expected`; positive means too many.
    pub fn delta(&self) -> i64 {
        self.actual as i64 - self.expected as i64
    }

    /// Human-readable fix, e.g. `need 2 fewer red`.
    pub fn describe(&self) -> String {
        let delta = self.delta();
        if delta > 0 {
            format!("need {} fewer {}", delta, self.color)
        } else {
            format!("need {} more {}", -delta, self.color)
        }
    }
}

impl fmt::Display for ColorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.color, self.delta())
    }
}

/// Join mismatches as `white (-1), red (+1)`.
pub fn summarize(mismatches: &[ColorMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
