//! State validation.
//!
//! [`validate`] is the plain inspection the rest of the crate relies on: it
//! returns a list of per-color mismatches and never fails. Scan assembly
//! wraps the same check in Stillwater's `Validation` so that count problems
//! are reported together with missing faces and unclassified stickers
//! instead of one at a time.
//!
//! # Example
//!
//! ```rust
//! use cubist::core::CubeState;
//! use cubist::validation::{summarize, validate};
//!
//! let mismatches = validate(&CubeState::initial(3));
//! assert_eq!(summarize(&mismatches), "");
//! ```

pub mod mismatch;
pub mod rules;
pub mod violations;

pub use mismatch::{summarize, ColorMismatch};
pub use rules::{check_counts, validate};
pub use violations::ScanViolation;
