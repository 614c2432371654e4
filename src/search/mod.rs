pub mod eval;
pub mod search;
pub mod tt;

pub use search::{
    BLACK_CHECKMATE, CHECKMATE, DEFAULT_MAX_DEPTH, DRAW, FIFTY_MOVE_RULE_DRAW, MAX_SCORE,
    STALEMATE, SearchResult, WHITE_CHECKMATE, search,
};
