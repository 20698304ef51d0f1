//! Scan and Solve
//!
//! This example walks a cube through the whole pipeline.
//!
//! Key concepts:
//! - Assembling a cube from scanned faces, with every problem reported at once
//! - Sending the cube to a solver as JSON or plain text
//! - Replaying the solver's answer on a session
//!
//! Run with: cargo run --example scan_and_solve

use cubist::builder::ScanBuilder;
use cubist::core::{Color, CubeState, Face, Sticker, SCAN_ORDER};
use cubist::exchange::{SolveStep, SolverRequest, SolverResponse};
use cubist::notation::expand;
use cubist::session::{Session, Swipe};
use cubist::turn::{apply_moves, invert_sequence};

fn main() {
    env_logger::init();
    println!("=== Scan and Solve Example ===\n");

    let scramble = "R U R' F2 D' L";
    let moves = expand(scramble, 3).unwrap();
    let physical = apply_moves(&CubeState::initial(3), &moves).unwrap();

    // Example 1: Scanning with an unreadable sticker
    println!("Example 1: Scanning faces in order");
    let mut builder = ScanBuilder::new(3).unwrap();
    for face in SCAN_ORDER {
        let mut stickers: Vec<Sticker> = physical
            .face(face)
            .cells()
            .iter()
            .map(|&c| Sticker::Known(c))
            .collect();
        if face == Face::Back {
            stickers[4] = Sticker::Unknown;
        }
        builder = builder.capture(stickers).unwrap();
        println!("  Captured face {face}");
    }

    match builder.clone().build() {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(e) => {
            println!("  {e}");
            for violation in e.violations() {
                println!("    - {violation}");
            }
        }
    }

    let center: Color = physical.face(Face::Back).center().unwrap();
    let cube = builder.paint(Face::Back, 1, 1, center).unwrap().build().unwrap();
    println!("  Corrected the back center to {center}, scan accepted\n");

    // Example 2: Building the solver request
    println!("Example 2: Solver request");
    let request = SolverRequest::from_state(&cube);
    println!("  Request {} ({}x{})", request.id, request.size, request.size);
    print!("{}", request.describe());
    println!();

    // Example 3: Replaying an answer
    println!("Example 3: Replaying the solution");
    let steps: Vec<SolveStep> = invert_sequence(&moves)
        .iter()
        .map(|mv| SolveStep::new(mv.to_string(), format!("Turn the {:?} face", mv.face)))
        .collect();
    let response = SolverResponse::from_json(&SolverResponse { steps }.to_json().unwrap()).unwrap();

    let mut session = Session::from_state(cube);
    let report = session.replay(&response.steps).unwrap();
    println!("  Applied {} turn(s), solved: {}", report.applied, session.state().is_solved());

    // Example 4: Swipes
    println!("\nExample 4: Swipe gestures");
    for swipe in [Swipe::Up, Swipe::Left] {
        let mv = session.swipe(swipe).unwrap();
        println!("  {swipe:?} -> {mv}");
    }
    println!("  History holds {} move(s)", session.history().len());

    println!("\n=== Example Complete ===");
}
