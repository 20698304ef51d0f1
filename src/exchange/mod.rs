//! Payloads exchanged with an external solver.
//!
//! The solver receives the six face grids and the cube size, and answers
//! with an ordered list of `(move, description)` steps. Both directions are
//! plain serde types; JSON is the wire format and bincode is available for
//! compact local snapshots.

use crate::core::{Color, CubeState, Face, FaceGrid, SCAN_ORDER};
use crate::notation::{parse_token, Token};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ExchangeError;

/// Version identifier for the request format
pub const SOLVER_FORMAT_VERSION: u32 = 1;

/// Sentinel move a solver uses to report that it gave up.
pub const ERROR_SENTINEL: &str = "ERROR";

/// One face, as sent to the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacePayload {
    pub face: Face,
    /// Row-major colors
    pub colors: Vec<Color>,
}

/// Serializable description of a cube for the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverRequest {
    /// Request format version
    pub version: u32,

    /// Unique request identifier
    pub id: Uuid,

    /// When the request was created
    pub created_at: DateTime<Utc>,

    /// Cube size N
    pub size: usize,

    /// Faces in scan order
    pub faces: Vec<FacePayload>,
}

impl SolverRequest {
    pub fn from_state(state: &CubeState) -> Self {
        let faces = SCAN_ORDER
            .iter()
            .map(|&face| FacePayload {
                face,
                colors: state.face(face).cells().to_vec(),
            })
            .collect();

        Self {
            version: SOLVER_FORMAT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            size: state.size(),
            faces,
        }
    }

    /// Rebuild the cube this request describes.
    pub fn into_state(self) -> Result<CubeState, ExchangeError> {
        self.check_version()?;
        let mut state = CubeState::try_initial(self.size)?;
        let mut seen = [false; 6];

        for payload in self.faces {
            let slot = &mut seen[payload.face.index()];
            if *slot {
                return Err(ExchangeError::ValidationFailed(format!(
                    "face {} appears more than once",
                    payload.face
                )));
            }
            *slot = true;
            let grid = FaceGrid::new(self.size, payload.colors)?;
            state = state.with_face(payload.face, grid)?;
        }

        if let Some(face) = Face::ALL.into_iter().find(|f| !seen[f.index()]) {
            return Err(ExchangeError::ValidationFailed(format!(
                "face {face} is missing"
            )));
        }
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, ExchangeError> {
        serde_json::to_string(self).map_err(|e| ExchangeError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, ExchangeError> {
        let request: Self = serde_json::from_str(text)
            .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))?;
        request.check_version()?;
        Ok(request)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ExchangeError> {
        bincode::serialize(self).map_err(|e| ExchangeError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExchangeError> {
        let request: Self = bincode::deserialize(bytes)
            .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))?;
        request.check_version()?;
        Ok(request)
    }

    /// Plain-text rendering used when the solver takes free-form prompts.
    ///
    /// ```text
    /// Cube Configuration:
    /// [Face F]: green, green, ...
    /// ```
    pub fn describe(&self) -> String {
        let mut text = String::from("Cube Configuration:\n");
        for payload in &self.faces {
            let colors: Vec<&str> = payload.colors.iter().map(|c| c.name()).collect();
            text.push_str(&format!("[Face {}]: {}\n", payload.face, colors.join(", ")));
        }
        text
    }

    fn check_version(&self) -> Result<(), ExchangeError> {
        if self.version != SOLVER_FORMAT_VERSION {
            return Err(ExchangeError::UnsupportedVersion {
                found: self.version,
                supported: SOLVER_FORMAT_VERSION,
            });
        }
        Ok(())
    }
}

/// One step of a solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStep {
    /// Singmaster token, e.g. `R`, `U'`, `F2` or `FIX`
    #[serde(rename = "move")]
    pub notation: String,

    /// Short explanation for the user
    pub description: String,
}

impl SolveStep {
    pub fn new(notation: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            description: description.into(),
        }
    }

    pub fn token(&self) -> Result<Token, ExchangeError> {
        Ok(parse_token(&self.notation)?)
    }
}

/// Ordered steps returned by the solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolverResponse {
    pub steps: Vec<SolveStep>,
}

impl SolverResponse {
    /// Parse a JSON array of `{ "move": .., "description": .. }` objects.
    ///
    /// A solver that fails reports a single `ERROR` step; that and an empty
    /// list are turned into errors here.
    pub fn from_json(text: &str) -> Result<Self, ExchangeError> {
        let response: Self = serde_json::from_str(text)
            .map_err(|e| ExchangeError::DeserializationFailed(e.to_string()))?;

        let first = response.steps.first().ok_or(ExchangeError::EmptySolution)?;
        if first.notation.trim().eq_ignore_ascii_case(ERROR_SENTINEL) {
            warn!("solver reported failure: {}", first.description);
            return Err(ExchangeError::SolverFailed(first.description.clone()));
        }

        debug!("solver returned {} step(s)", response.steps.len());
        Ok(response)
    }

    pub fn to_json(&self) -> Result<String, ExchangeError> {
        serde_json::to_string(self).map_err(|e| ExchangeError::SerializationFailed(e.to_string()))
    }

    /// Parse every step, failing on the first malformed token.
    pub fn tokens(&self) -> Result<Vec<Token>, ExchangeError> {
        self.steps.iter().map(SolveStep::token).collect()
    }

    /// Number of manual-fix steps in the solution.
    pub fn fix_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.token(), Ok(Token::Fix)))
            .count()
    }
}
