/// Walk through the first few moves of a game and print the board after each
use othello_core::{Game, Move, Player};

fn main() {
    println!("=== Othello Walkthrough ===\n");

    let mut game = Game::new();

    println!("Opening position");
    print_game(&game);
    let valid: Vec<String> = game.get_valid_moves().iter().map(Move::to_string).collect();
    println!("Valid moves for {}: {}\n", game.get_current_player(), valid.join(" "));

    for (row, col) in [(2, 3), (2, 2), (2, 1)] {
        let player = game.get_current_player();
        match game.apply_move(row, col) {
            Ok(outcome) => {
                println!(
                    "{} plays {} and flips {} piece(s)",
                    player,
                    outcome.placed,
                    outcome.flipped.len()
                );
                print_game(&game);
            }
            Err(err) => println!("{} cannot play ({}, {}): {}", player, row, col, err),
        }
    }

    println!("Trying an illegal move at (0, 0)");
    if let Err(err) = game.apply_move(0, 0) {
        println!("Rejected: {}", err);
    }
}

fn print_game(game: &Game) {
    let board = game.get_board();
    println!("  a b c d e f g h");
    for (row, cells) in board.rows().iter().enumerate() {
        print!("{} ", row + 1);
        for cell in cells {
            let symbol = match cell {
                None => "·",
                Some(Player::Black) => "●",
                Some(Player::White) => "○",
            };
            print!("{} ", symbol);
        }
        println!();
    }
    let (black, white) = game.get_piece_counts();
    println!("Black: {}, White: {}, to move: {}\n", black, white, game.get_current_player());
}
