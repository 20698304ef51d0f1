//! Cubist: a pure functional N×N cube model and face-turn engine
//!
//! Cubist keeps a "pure core, imperative shell" split. The core is a cube
//! value and a turn function that maps one value to the next; the shell
//! holds a current cube, records history and talks to scanners and solvers.
//!
//! # Core Concepts
//!
//! - **State**: six face grids of sticker colors plus the cube size
//! - **Turns**: quarter turns of a face (optionally wide) driven by a static adjacency table
//! - **Validation**: per-color sticker counts, reported as signed mismatches
//! - **Scan assembly**: accumulate every problem in scanner output before building a cube
//! - **Exchange**: versioned solver request and response payloads
//!
//! # Example
//!
//! ```rust
//! use cubist::core::{Color, CubeState, Face};
//! use cubist::turn::turn;
//! use cubist::validation::validate;
//!
//! let cube = CubeState::initial(3);
//! let turned = turn(&cube, Face::Right, true);
//!
//! // The right column of Front now shows what was on Down.
//! assert_eq!(turned.face(Face::Front).column(2), Some(vec![Color::Yellow; 3]));
//! assert_eq!(turned.face(Face::Up).column(2), Some(vec![Color::Green; 3]));
//!
//! // Turning never creates or destroys stickers.
//! assert!(validate(&turned).is_empty());
//!
//! // And a quarter turn is undone by its inverse.
//! assert_eq!(turn(&turned, Face::Right, false), cube);
//! ```

pub mod builder;
pub mod core;
pub mod exchange;
pub mod notation;
pub mod session;
pub mod turn;
pub mod validation;

// Re-export commonly used types
pub use core::{Color, CubeState, Face, FaceGrid, ModelError, Sticker};
pub use session::Session;
pub use turn::{apply_move, turn, turn_layers, Move};
pub use validation::{validate, ColorMismatch};
