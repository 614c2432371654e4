//! The cases where pseudo-legality and legality part ways: pins,
//! en-passant discoveries, castling through attacks, and check evasions.

use outpost::board::{Color, Position};
use outpost::moves::movegen::{checkers, generate_legal, in_check, pinned_pieces};
use outpost::moves::types::MoveList;
use outpost::square::Square;

fn legal_strings(fen: &str) -> Vec<String> {
    let pos = Position::from_fen(fen).expect("valid FEN");
    let mut moves = MoveList::new();
    generate_legal(&pos, &mut moves);
    moves.iter().map(|m| m.to_string()).collect()
}

fn contains(moves: &[String], lan: &str) -> bool {
    moves.iter().any(|m| m == lan)
}

#[test]
fn absolutely_pinned_piece_stays_put() {
    // the d2 bishop shields the e1 king from the b4 bishop's diagonal
    let fen = "4k3/8/8/8/1b6/8/3B4/4K3 w - - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    let pinned = pinned_pieces(&pos, Color::White, Color::White);
    assert_eq!(pinned, Square::parse("d2").unwrap().mask());

    let moves = legal_strings(fen);
    // sliding along the pin ray is fine, leaving it is not
    assert!(contains(&moves, "d2c3"));
    assert!(contains(&moves, "d2b4"));
    assert!(!contains(&moves, "d2e3"));
    assert!(!contains(&moves, "d2c1"));
}

#[test]
fn enpassant_is_refused_when_it_uncovers_a_rook() {
    // both pawns sit between the h5 rook and the a5 king; taking en
    // passant would remove them and expose the king along the rank
    let fen = "8/8/8/KpP4r/8/8/8/4k3 w - b6 0 1";
    let moves = legal_strings(fen);
    assert!(!contains(&moves, "c5b6"), "exd6-style ep must be vetoed");
    assert!(contains(&moves, "c5c6"), "the plain push stays available");
}

#[test]
fn enpassant_is_allowed_when_no_slider_lurks() {
    let fen = "4k3/8/8/1pP5/8/8/8/4K3 w - b6 0 1";
    let moves = legal_strings(fen);
    assert!(contains(&moves, "c5b6"));
}

#[test]
fn king_cannot_step_onto_an_attacked_square() {
    // the h2 rook covers the whole second rank
    let fen = "4k3/8/8/8/8/8/7r/4K3 w - - 0 1";
    let moves = legal_strings(fen);
    assert!(!contains(&moves, "e1e2"));
    assert!(!contains(&moves, "e1d2"));
    assert!(!contains(&moves, "e1f2"));
    assert!(contains(&moves, "e1d1"));
    assert!(contains(&moves, "e1f1"));
}

#[test]
fn king_cannot_retreat_along_the_checking_ray() {
    // rook checks along the e-file; e1 would still be on the ray
    let fen = "4r3/8/8/8/4K3/8/8/7k w - - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert!(in_check(&pos, Color::White));
    let moves = legal_strings(fen);
    assert!(!contains(&moves, "e4e3"), "retreating on the ray stays in check");
    assert!(contains(&moves, "e4d3"));
    assert!(contains(&moves, "e4f5"));
}

#[test]
fn castling_is_vetoed_through_and_out_of_check() {
    // rook on f8 covers f1: white may not castle short, long is fine
    let through = legal_strings("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!contains(&through, "e1g1"));
    assert!(contains(&through, "e1c1"));

    // rook on e8 gives check: neither castle is an evasion
    let out_of = legal_strings("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!contains(&out_of, "e1g1"));
    assert!(!contains(&out_of, "e1c1"));

    // rook on b8 attacks only b1, which the king never crosses: long
    // castling stays legal
    let b_file = legal_strings("1r5k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(contains(&b_file, "e1c1"));
}

#[test]
fn castling_needs_an_empty_path() {
    let blocked = legal_strings("4k3/8/8/8/8/8/8/R2QK2R w KQ - 0 1");
    assert!(contains(&blocked, "e1g1"));
    assert!(!contains(&blocked, "e1c1"), "the d1 queen is in the way");
}

#[test]
fn single_checker_allows_capture_block_or_flight() {
    // the e8 rook checks; capture it from h8, block on the e-file with
    // the d2 rook, or step the king aside
    let fen = "4r2R/6k1/8/8/8/8/3R4/4K3 w - - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(checkers(&pos, Color::White).count_ones(), 1);

    let moves = legal_strings(fen);
    assert!(contains(&moves, "h8e8"), "capturing the checker");
    assert!(contains(&moves, "d2e2"), "blocking the ray");
    assert!(contains(&moves, "e1d1"), "stepping off the ray");
    assert!(!contains(&moves, "e1e2"), "staying on the ray is no evasion");
    assert!(!contains(&moves, "d2a2"), "unrelated rook moves do not evade");
}

#[test]
fn blocking_with_a_promotion_is_found() {
    // rook checks along the eighth rank; the pawn promotes onto the gap
    let fen = "r3K3/2P5/8/8/8/8/8/7k w - - 0 1";
    let moves = legal_strings(fen);
    assert!(contains(&moves, "c7c8q"), "promotion block must be generated");
    assert!(contains(&moves, "c7c8n"));
}

#[test]
fn enpassant_evasion_captures_a_checking_pawn() {
    // the freshly double-pushed d5 pawn checks the e4 king; the e5 pawn
    // may remove it en passant
    let fen = "4k3/8/8/3pP3/4K3/8/8/8 w - d6 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert!(in_check(&pos, Color::White));
    let moves = legal_strings(fen);
    assert!(contains(&moves, "e5d6"), "ep capture of the checker");
}

#[test]
fn no_generated_move_ever_leaves_the_mover_in_check() {
    // soundness over a deterministic walk: make every legal move at every
    // visited node and verify the mover's king is safe afterwards
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ];
    use outpost::moves::execute::{make_move, undo_move};

    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut walk = 0usize;
        loop {
            let mover = pos.side_to_move();
            let mut moves = MoveList::new();
            if generate_legal(&pos, &mut moves) == 0 || walk >= 40 {
                break;
            }
            for &mv in moves.iter() {
                let sp = make_move(&mut pos, mv);
                assert!(
                    !in_check(&pos, mover),
                    "{mv} leaves the mover in check after {fen}"
                );
                undo_move(&mut pos, &sp, mv);
            }
            let mv = moves[walk % moves.len()];
            make_move(&mut pos, mv);
            walk += 1;
        }
    }
}

#[test]
fn double_check_forces_the_king_out() {
    let fen = "4r3/8/8/8/8/5n2/8/4K2k w - - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(checkers(&pos, Color::White).count_ones(), 2);
    let moves = legal_strings(fen);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(mv.starts_with("e1"), "only king moves evade double check: {mv}");
    }
}
