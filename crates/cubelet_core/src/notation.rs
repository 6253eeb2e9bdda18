//! Standard cube notation for single-layer moves.
//!
//! A token is a face letter (`U`, `D`, `L`, `R`, `F`, `B`) or a middle-slice
//! letter (`M`, `E`, `S`), optionally followed by `'` (inverse) or `2` (double
//! turn). `2'` is accepted as an alias of `2`.
//!
//! Letters on the positive side of an axis (`R`, `U`, `F`) and `S` map to
//! positive quarter turns; the others map to negative quarter turns.

use std::fmt;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::one_of,
    combinator::{all_consuming, opt, value},
};
use thiserror::Error;

use crate::{Axis, Layer, Move, Sign};

/// Letters that may begin a move token.
pub const MOVE_LETTERS: &str = "UDLRFBMES";

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty token.
    #[error("empty move token")]
    Empty,
    /// The first character is not a face or slice letter.
    #[error("unknown face or slice {0:?}")]
    UnknownLetter(char),
    /// The letter is valid but is followed by something other than `'`, `2`,
    /// or `2'`.
    #[error("invalid suffix in move {0:?}")]
    InvalidSuffix(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Suffix {
    Prime,
    Double,
}

/// Returns the axis, layer, and direction of the clockwise move for a letter.
fn letter_info(letter: char) -> Option<(Axis, Layer, Sign)> {
    use Sign::{Neg, Pos};

    Some(match letter {
        'R' => (Axis::X, Layer::POS, Pos),
        'L' => (Axis::X, Layer::NEG, Neg),
        'M' => (Axis::X, Layer::MID, Neg),
        'U' => (Axis::Y, Layer::POS, Pos),
        'D' => (Axis::Y, Layer::NEG, Neg),
        'E' => (Axis::Y, Layer::MID, Neg),
        'F' => (Axis::Z, Layer::POS, Pos),
        'B' => (Axis::Z, Layer::NEG, Neg),
        'S' => (Axis::Z, Layer::MID, Pos),
        _ => return None,
    })
}

/// Inverse of [`letter_info()`].
fn letter_for_layer(axis: Axis, layer: Layer) -> (char, Sign) {
    MOVE_LETTERS
        .chars()
        .find_map(|c| {
            let (a, l, sign) = letter_info(c)?;
            (a == axis && l == layer).then_some((c, sign))
        })
        .unwrap_or_else(|| unreachable!("every layer has a letter"))
}

fn move_token(s: &str) -> IResult<&str, (char, Option<Suffix>)> {
    (
        one_of(MOVE_LETTERS),
        opt(alt((
            value(Suffix::Double, alt((tag("2'"), tag("2")))),
            value(Suffix::Prime, tag("'")),
        ))),
    )
        .parse(s)
}

/// Parses a single move token such as `R`, `U'`, or `F2`.
pub fn parse_move(token: &str) -> Result<Move, NotationError> {
    let token = token.trim();
    let first = token.chars().next().ok_or(NotationError::Empty)?;
    let (_, (letter, suffix)) = all_consuming(move_token)
        .parse_complete(token)
        .map_err(|_| match letter_info(first) {
            Some(_) => NotationError::InvalidSuffix(token.to_owned()),
            None => NotationError::UnknownLetter(first),
        })?;
    let (axis, layer, sign) =
        letter_info(letter).ok_or(NotationError::UnknownLetter(letter))?;
    let base = i32::from(sign.int());
    let turns = match suffix {
        None => base,
        Some(Suffix::Prime) => -base,
        Some(Suffix::Double) => 2 * base,
    };
    Move::new(axis, layer, turns).ok_or_else(|| NotationError::InvalidSuffix(token.to_owned()))
}

/// Parses a whitespace-separated sequence of move tokens, failing on the first
/// invalid token.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, NotationError> {
    s.split_whitespace().map(parse_move).collect()
}

/// Parses a whitespace-separated sequence of move tokens, skipping (and
/// logging) invalid tokens.
pub fn parse_moves_lossy(s: &str) -> Vec<Move> {
    s.split_whitespace()
        .filter_map(|token| match parse_move(token) {
            Ok(mv) => Some(mv),
            Err(e) => {
                log::warn!("ignoring move {token:?}: {e}");
                None
            }
        })
        .collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    itertools::join(moves, " ")
}

pub(crate) fn fmt_move(mv: Move, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (letter, sign) = letter_for_layer(mv.axis(), mv.layer());
    let suffix = match (i32::from(mv.turns()) * i32::from(sign.int())).rem_euclid(4) {
        1 => "",
        2 => "2",
        _ => "'",
    };
    write!(f, "{letter}{suffix}")
}
