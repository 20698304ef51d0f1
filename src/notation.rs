//! Singmaster notation adapter.
//!
//! Solver output comes back as tokens such as `R`, `U'`, `F2`, `Rw`, `3Fw'`
//! or the `FIX` sentinel. This module turns those tokens into engine
//! [`Move`]s; double turns become two identical quarter turns.

use crate::core::Face;
use crate::turn::Move;
use std::fmt;
use thiserror::Error;

/// Errors produced while reading move notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move token")]
    Empty,

    #[error("Unknown face in move '{0}'")]
    UnknownFace(String),

    #[error("Unrecognised suffix in move '{0}'")]
    BadSuffix(String),

    #[error("Invalid layer count in move '{0}'")]
    BadWidth(String),

    #[error("Move '{token}' needs more layers than a {size}x{size} cube has")]
    WideOnSmallCube { token: String, size: usize },
}

/// One parsed notation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A quarter or half turn.
    Turn { mv: Move, double: bool },
    /// The solver is asking for a manual fix of an impossible state.
    Fix,
}

impl Token {
    /// Expand into engine moves for a cube of `size`.
    ///
    /// `FIX` expands to no moves; the caller decides how to surface it.
    pub fn moves(&self, size: usize) -> Result<Vec<Move>, NotationError> {
        match *self {
            Token::Fix => Ok(Vec::new()),
            Token::Turn { mv, double } => {
                if mv.is_wide() && mv.layers >= size {
                    return Err(NotationError::WideOnSmallCube {
                        token: self.to_string(),
                        size,
                    });
                }
                Ok(if double { vec![mv, mv] } else { vec![mv] })
            }
        }
    }

    pub fn is_fix(&self) -> bool {
        matches!(self, Token::Fix)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Fix => f.write_str("FIX"),
            Token::Turn { mv, double: false } => write!(f, "{mv}"),
            Token::Turn { mv, double: true } => {
                write!(f, "{}2", Move { clockwise: true, ..*mv })
            }
        }
    }
}

/// Parse a single token.
///
/// # Example
///
/// ```rust
/// use cubist::core::Face;
/// use cubist::notation::{parse_token, Token};
/// use cubist::turn::Move;
///
/// assert_eq!(
///     parse_token("U'").unwrap(),
///     Token::Turn { mv: Move::new(Face::Up, false), double: false }
/// );
/// assert_eq!(parse_token("fix").unwrap(), Token::Fix);
/// assert_eq!(parse_token("Rw2").unwrap().moves(4).unwrap().len(), 2);
/// ```
pub fn parse_token(token: &str) -> Result<Token, NotationError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(NotationError::Empty);
    }
    if token.eq_ignore_ascii_case("FIX") {
        return Ok(Token::Fix);
    }

    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    let mut rest = token[digits.len()..].chars().peekable();

    let letter = rest
        .next()
        .ok_or_else(|| NotationError::UnknownFace(token.to_string()))?;
    let face = Face::from_letter(letter.to_ascii_uppercase())
        .ok_or_else(|| NotationError::UnknownFace(token.to_string()))?;

    // Lowercase letters are wide on their own; a trailing `w` is also
    // accepted after them, as in `3rw`.
    let mut wide = letter.is_ascii_lowercase();
    if rest.peek() == Some(&'w') {
        rest.next();
        wide = true;
    }

    let layers = match (digits.is_empty(), wide) {
        (true, false) => 1,
        (true, true) => 2,
        (false, true) => match digits.parse::<usize>() {
            Ok(n) if n >= 2 => n,
            _ => return Err(NotationError::BadWidth(token.to_string())),
        },
        (false, false) => return Err(NotationError::BadWidth(token.to_string())),
    };

    let suffix: String = rest.map(|c| if c == '’' { '\'' } else { c }).collect();
    let (clockwise, double) = match suffix.as_str() {
        "" => (true, false),
        "'" => (false, false),
        "2" | "2'" | "'2" => (true, true),
        _ => return Err(NotationError::BadSuffix(token.to_string())),
    };

    Ok(Token::Turn {
        mv: Move::wide(face, clockwise, layers),
        double,
    })
}

/// Parse a whitespace-separated sequence of tokens.
pub fn parse_sequence(text: &str) -> Result<Vec<Token>, NotationError> {
    text.split_whitespace().map(parse_token).collect()
}

/// Parse a sequence and expand it straight into moves for a cube of `size`.
/// `FIX` tokens contribute nothing.
pub fn expand(text: &str, size: usize) -> Result<Vec<Move>, NotationError> {
    let mut moves = Vec::new();
    for token in parse_sequence(text)? {
        moves.extend(token.moves(size)?);
    }
    Ok(moves)
}
