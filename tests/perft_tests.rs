//! The canonical perft positions. Counts must match to the last digit;
//! the deep nodes are `#[ignore]`d and run on demand.

use outpost::board::Position;
use outpost::moves::perft::{perft, perft_divide};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION4_FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const PROMOTIONS_FEN: &str = "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1";

fn run(fen: &str, depth: u32, expected: u64) {
    let mut pos = Position::from_fen(fen).expect("valid FEN");
    let nodes = perft(&mut pos, depth);
    assert_eq!(
        nodes, expected,
        "perft mismatch at depth {depth} for {fen}: got {nodes}, expected {expected}"
    );
}

#[test]
fn startpos_d1() {
    run(START_FEN, 1, 20);
}
#[test]
fn startpos_d2() {
    run(START_FEN, 2, 400);
}
#[test]
fn startpos_d3() {
    run(START_FEN, 3, 8_902);
}
#[test]
fn startpos_d4() {
    run(START_FEN, 4, 197_281);
}
#[test]
#[ignore]
fn startpos_d5() {
    run(START_FEN, 5, 4_865_609);
}
#[test]
#[ignore]
fn startpos_d6() {
    run(START_FEN, 6, 119_060_324);
}

#[test]
fn kiwipete_d1() {
    run(KIWIPETE_FEN, 1, 48);
}
#[test]
fn kiwipete_d2() {
    run(KIWIPETE_FEN, 2, 2_039);
}
#[test]
fn kiwipete_d3() {
    run(KIWIPETE_FEN, 3, 97_862);
}
#[test]
#[ignore]
fn kiwipete_d4() {
    run(KIWIPETE_FEN, 4, 4_085_603);
}
#[test]
#[ignore]
fn kiwipete_d5() {
    run(KIWIPETE_FEN, 5, 193_690_690);
}

#[test]
fn endgame_d1() {
    run(ENDGAME_FEN, 1, 14);
}
#[test]
fn endgame_d2() {
    run(ENDGAME_FEN, 2, 191);
}
#[test]
fn endgame_d3() {
    run(ENDGAME_FEN, 3, 2_812);
}
#[test]
fn endgame_d4() {
    run(ENDGAME_FEN, 4, 43_238);
}
#[test]
fn endgame_d5() {
    run(ENDGAME_FEN, 5, 674_624);
}
#[test]
#[ignore]
fn endgame_d6() {
    run(ENDGAME_FEN, 6, 11_030_083);
}
#[test]
#[ignore]
fn endgame_d7() {
    run(ENDGAME_FEN, 7, 178_633_661);
}

#[test]
fn position4_d1() {
    run(POSITION4_FEN, 1, 6);
}
#[test]
fn position4_d2() {
    run(POSITION4_FEN, 2, 264);
}
#[test]
fn position4_d3() {
    run(POSITION4_FEN, 3, 9_467);
}
#[test]
fn position4_d4() {
    run(POSITION4_FEN, 4, 422_333);
}
#[test]
#[ignore]
fn position4_d5() {
    run(POSITION4_FEN, 5, 15_833_292);
}
#[test]
#[ignore]
fn position4_d6() {
    run(POSITION4_FEN, 6, 706_045_033);
}

#[test]
fn promotions_d1() {
    run(PROMOTIONS_FEN, 1, 24);
}
#[test]
fn promotions_d2() {
    run(PROMOTIONS_FEN, 2, 496);
}
#[test]
fn promotions_d3() {
    run(PROMOTIONS_FEN, 3, 9_483);
}
#[test]
fn promotions_d4() {
    run(PROMOTIONS_FEN, 4, 182_838);
}
#[test]
#[ignore]
fn promotions_d5() {
    run(PROMOTIONS_FEN, 5, 3_605_103);
}
#[test]
#[ignore]
fn promotions_d6() {
    run(PROMOTIONS_FEN, 6, 71_179_139);
}

#[test]
fn kiwipete_divide_sums_to_the_depth_total() {
    let mut pos = Position::from_fen(KIWIPETE_FEN).unwrap();
    let rows = perft_divide(&mut pos, 2);
    assert_eq!(rows.len(), 48);
    let total: u64 = rows.iter().map(|(_, c)| c.nodes).sum();
    assert_eq!(total, 2_039);
}

#[test]
fn perft_restores_every_position() {
    for fen in [START_FEN, KIWIPETE_FEN, ENDGAME_FEN, POSITION4_FEN, PROMOTIONS_FEN] {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.clone();
        perft(&mut pos, 3);
        assert_eq!(pos, before, "perft must leave the position untouched: {fen}");
    }
}
