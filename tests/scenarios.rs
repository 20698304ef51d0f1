//! End-to-end scenarios: scan a cube, hand it to a solver, play the answer.

use cubist::builder::{BuildError, ScanBuilder};
use cubist::core::{Color, CubeState, Face, Sticker, SCAN_ORDER};
use cubist::exchange::{ExchangeError, SolveStep, SolverRequest, SolverResponse};
use cubist::notation::expand;
use cubist::session::{Guide, Session};
use cubist::turn::{apply_moves, invert_sequence};
use cubist::validation::{summarize, validate, ScanViolation};

fn scan(state: &CubeState) -> ScanBuilder {
    let mut builder = ScanBuilder::new(state.size()).unwrap();
    for face in SCAN_ORDER {
        let stickers = state
            .face(face)
            .cells()
            .iter()
            .map(|&c| Sticker::Known(c))
            .collect();
        builder = builder.capture(stickers).unwrap();
    }
    builder
}

/// Stand-in solver that knows the scramble and answers with its inverse.
fn solve(request_json: &str, scramble: &str) -> String {
    let request = SolverRequest::from_json(request_json).unwrap();
    let moves = expand(scramble, request.size).unwrap();
    let steps: Vec<SolveStep> = invert_sequence(&moves)
        .iter()
        .map(|mv| SolveStep::new(mv.to_string(), format!("Turn {}", mv.face)))
        .collect();
    SolverResponse { steps }.to_json().unwrap()
}

#[test_log::test]
fn scan_solve_and_replay() {
    let scramble = "R U F' L2 D B' R' U2";
    let scrambled = apply_moves(&CubeState::initial(3), &expand(scramble, 3).unwrap()).unwrap();

    let cube = scan(&scrambled).build().unwrap();
    let request_json = SolverRequest::from_state(&cube).to_json().unwrap();

    let response = SolverResponse::from_json(&solve(&request_json, scramble)).unwrap();
    let mut session = Session::from_state(cube);
    let report = session.replay(&response.steps).unwrap();

    assert!(!report.needs_fix());
    assert!(session.state().is_solved());
}

#[test]
fn guided_walkthrough_on_a_4x4() {
    let scramble = "Rw U' 3Fw L";
    let scrambled = apply_moves(&CubeState::initial(4), &expand(scramble, 4).unwrap()).unwrap();
    let request_json = SolverRequest::from_state(&scrambled).to_json().unwrap();
    let response = SolverResponse::from_json(&solve(&request_json, scramble)).unwrap();

    let mut session = Session::from_state(scrambled);
    let mut guide = Guide::from_response(response, 4).unwrap();
    while !guide.is_finished() {
        guide.advance(&mut session).unwrap();
    }
    assert!(session.state().is_solved());

    guide.back(&mut session).unwrap();
    assert!(!session.state().is_solved());
}

#[test]
fn miscolored_scan_is_explained_to_the_user() {
    let solved = CubeState::initial(3);
    let err = scan(&solved)
        .paint(Face::Up, 0, 0, Color::Red)
        .unwrap()
        .paint(Face::Up, 0, 1, Color::Red)
        .unwrap()
        .build()
        .unwrap_err();

    let BuildError::Rejected(violations) = err else {
        panic!("expected rejection");
    };
    let mismatches: Vec<_> = violations
        .iter()
        .filter_map(|v| match v {
            ScanViolation::ColorCount(m) => Some(*m),
            _ => None,
        })
        .collect();
    assert_eq!(summarize(&mismatches), "white (-2), red (+2)");
    assert_eq!(mismatches[1].describe(), "need 2 fewer red");
}

#[test]
fn solver_failure_is_surfaced() {
    let answer = r#"[{"move": "ERROR", "description": "Colors do not form a valid cube."}]"#;
    let err = SolverResponse::from_json(answer).unwrap_err();
    assert!(matches!(err, ExchangeError::SolverFailed(_)));
    assert_eq!(err.to_string(), "Solver failed: Colors do not form a valid cube.");
}

#[test]
fn solver_fix_step_is_reported_but_play_continues() {
    let answer = r#"[
        {"move": "R", "description": "Right up"},
        {"move": "FIX", "description": "Twist the corner by hand"},
        {"move": "R'", "description": "Right down"}
    ]"#;
    let response = SolverResponse::from_json(answer).unwrap();
    let mut session = Session::new(3).unwrap();
    let report = session.replay(&response.steps).unwrap();

    assert_eq!(report.fixes, vec![1]);
    assert_eq!(report.applied, 2);
    assert!(session.state().is_solved());
    assert!(validate(session.state()).is_empty());
}
