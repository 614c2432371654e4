use outpost::board::Position;
use outpost::moves::execute::make_move;
use outpost::status::{GameStatus, position_status};

fn status_of(fen: &str) -> GameStatus {
    position_status(&Position::from_fen(fen).expect("valid FEN"))
}

#[test]
fn fresh_games_are_in_play() {
    assert_eq!(status_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), GameStatus::InPlay);
}

#[test]
fn back_rank_mate_is_checkmate() {
    assert_eq!(status_of("6k1/8/8/8/8/8/5PPP/r5K1 w - - 0 1"), GameStatus::Checkmate);
    // the classic ladder mate on the eighth rank
    assert_eq!(status_of("k6R/8/K7/8/8/8/8/8 b - - 0 1"), GameStatus::Checkmate);
}

#[test]
fn no_moves_without_check_is_stalemate() {
    assert_eq!(status_of("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    assert_eq!(status_of("K7/2q5/1k6/8/8/8/8/8 w - - 0 1"), GameStatus::Stalemate);
}

#[test]
fn the_clock_draws_at_one_hundred_plies() {
    assert_eq!(status_of("4k3/8/8/8/8/8/3R4/4K3 w - - 99 80"), GameStatus::InPlay);
    assert_eq!(status_of("4k3/8/8/8/8/8/3R4/4K3 w - - 100 80"), GameStatus::DrawFiftyMove);
}

#[test]
fn mate_beats_the_fifty_move_clock() {
    // mate on the board wins even with the clock at 100
    assert_eq!(status_of("k6R/8/K7/8/8/8/8/8 b - - 100 90"), GameStatus::Checkmate);
}

#[test]
fn delivering_mate_flips_the_status_for_the_opponent() {
    let mut pos = Position::from_fen("k7/8/K6R/8/8/8/8/8 w - - 0 1").unwrap();
    assert_eq!(position_status(&pos), GameStatus::InPlay);
    let mv = pos.move_from_lan("h6h8").unwrap();
    make_move(&mut pos, mv);
    assert_eq!(position_status(&pos), GameStatus::Checkmate);
}
