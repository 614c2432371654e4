//! Text driver for the engine core: position setup, perft runs, and
//! search, over stdin. Not a GUI wire protocol.

use indicatif::{ProgressBar, ProgressStyle};
use outpost::board::Position;
use outpost::logger::init_logging;
use outpost::moves::execute::make_move;
use outpost::moves::magic::magic_tables;
use outpost::moves::perft::{perft, perft_divide};
use outpost::search::tt::TranspositionTable;
use outpost::search::{DEFAULT_MAX_DEPTH, search};
use outpost::status::{GameStatus, position_status};
use std::io::{self, BufRead, Write};
use std::time::Instant;

fn main() {
    init_logging("logs/outpost.log", "info");
    // warm the attack tables before the first command is timed
    let _ = magic_tables();

    let mut pos = Position::startpos();
    let mut tt = TranspositionTable::default();

    let stdin = io::stdin();
    print_prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        if line.is_empty() {
            print_prompt();
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "startpos" => {
                pos = Position::startpos();
                tt.clear();
            }
            "fen" => match Position::from_fen(&rest.join(" ")) {
                Ok(new_pos) => {
                    pos = new_pos;
                    tt.clear();
                }
                Err(err) => println!("error: {err}"),
            },
            "move" => match rest.first() {
                Some(lan) => match pos.move_from_lan(lan) {
                    Ok(mv) => {
                        make_move(&mut pos, mv);
                        match position_status(&pos) {
                            GameStatus::InPlay => {}
                            status => println!("{status:?}"),
                        }
                    }
                    Err(err) => println!("error: {err}"),
                },
                None => println!("usage: move <from><to>[nbrq]"),
            },
            "d" | "display" => print!("{}", pos.dump_ascii()),
            "fenout" => println!("{pos}"),
            "perft" => match parse_depth(&rest) {
                Some(depth) => {
                    let start = Instant::now();
                    let nodes = perft(&mut pos, depth);
                    let secs = start.elapsed().as_secs_f64();
                    println!("nodes {nodes} time {secs:.3}s");
                }
                None => println!("usage: perft <depth>"),
            },
            "divide" => match parse_depth(&rest) {
                Some(depth) => run_divide(&mut pos, depth),
                None => println!("usage: divide <depth>"),
            },
            "search" => {
                let depth = parse_depth(&rest).map(|d| d as u8);
                let start = Instant::now();
                let result = search(&mut pos, &mut tt, depth);
                let secs = start.elapsed().as_secs_f64();
                println!(
                    "bestmove {} score {} time {secs:.3}s",
                    result.best_move, result.score
                );
            }
            "eval" => println!("{}", outpost::search::eval::evaluate(&pos)),
            "status" => println!("{:?}", position_status(&pos)),
            "quit" | "exit" => break,
            "help" => print_help(),
            other => println!("unknown command '{other}' (try 'help')"),
        }
        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn parse_depth(args: &[&str]) -> Option<u32> {
    args.first()?.parse().ok()
}

fn run_divide(pos: &mut Position, depth: u32) {
    if depth == 0 {
        println!("usage: divide <depth>, depth >= 1");
        return;
    }

    // perft_divide does the whole job; the bar just tracks root moves
    // for long runs, so re-walk the roots here
    let rows = {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} dividing {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("depth {depth}"));
        let rows = perft_divide(pos, depth);
        bar.finish_and_clear();
        rows
    };

    let mut total = 0u64;
    for (mv, counts) in &rows {
        println!("{mv}: {}", counts.nodes);
        total += counts.nodes;
    }
    println!("total {total} over {} root moves", rows.len());
}

fn print_help() {
    println!("commands:");
    println!("  startpos               reset to the starting position");
    println!("  fen <FEN>              set position from FEN");
    println!("  move <lan>             apply a move (e2e4, e7e8q, e1g1)");
    println!("  d                      display the board");
    println!("  fenout                 print the current FEN");
    println!("  perft <depth>          count leaf nodes");
    println!("  divide <depth>         per-root-move perft counts");
    println!("  search [depth]         find the best move (default depth {DEFAULT_MAX_DEPTH})");
    println!("  eval                   static evaluation");
    println!("  status                 game status for the side to move");
    println!("  quit                   leave");
}
