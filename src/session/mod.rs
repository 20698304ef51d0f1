//! Stateful shell around the pure engine.
//!
//! The engine in [`crate::turn`] only maps one cube value to the next. A
//! [`Session`] is what an application holds: the current cube, the history
//! of applied moves, a pending move awaiting confirmation, and helpers to
//! replay or step through a solver's answer.
//!
//! # Key Concepts
//!
//! - **Confirm-before-commit**: pressing a move arms it, pressing it again applies it
//! - **Swipes**: gestures map to top and right layer turns and apply at once
//! - **Replay**: solver steps are applied in order, `FIX` steps are reported
//! - **Guide**: a cursor over solver steps that can move forwards and back

mod error;
mod guide;
mod machine;

pub use error::SessionError;
pub use guide::Guide;
pub use machine::{PressResult, ReplayReport, Session, Swipe};
