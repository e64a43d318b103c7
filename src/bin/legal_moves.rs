use std::env;

use hotseat_chess::board::{Board, Coord};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: legal_moves <square> <square> ...");
        return;
    }

    let board = Board::new();
    for arg in &args {
        match Coord::parse(arg) {
            Ok(coord) => {
                let index = coord.index();
                println!(
                    "{coord} {}: [{}]",
                    board.kind_at(index),
                    board.legal_destinations(index)
                );
            }
            Err(e) => eprintln!("{arg}: {e}"),
        }
    }
}
