//! Error types for the two fallible input surfaces: FEN strings and
//! long-algebraic move strings. Internal invariant violations are not
//! errors; they are debug assertions.

use thiserror::Error;

/// Failure while parsing a FEN string. The position under construction is
/// discarded; no partially-parsed state escapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN ended before all fields were read")]
    UnexpectedEnd,
    #[error("invalid piece character '{0}' in placement field")]
    InvalidPiece(char),
    #[error("rank {0} of the placement field does not describe 8 files")]
    BadRankWidth(u8),
    #[error("placement field must describe 8 ranks")]
    BadRankCount,
    #[error("invalid side-to-move field '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en-passant field '{0}', expected '-' or a rank-3/6 square")]
    InvalidEnPassant(String),
    #[error("invalid clock field '{0}'")]
    InvalidClock(String),
    #[error("placement field must contain exactly one king per side")]
    BadKingCount,
}

/// Failure while interpreting a driver move string against a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move string must be 4 or 5 characters, got {0}")]
    BadLength(usize),
    #[error("invalid square in move string '{0}'")]
    InvalidSquare(String),
    #[error("invalid promotion letter '{0}'")]
    InvalidPromotion(char),
    #[error("illegal move '{0}'")]
    IllegalMove(String),
}
