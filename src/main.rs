use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use connect4_engine::*;

// searches beyond this get impractically slow without caching
const MAX_DEPTH: usize = 12;

/// Asks for an AI strength: a named level or a raw search depth
fn read_difficulty(player: usize) -> Result<usize> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!(
            "Choose a difficulty for player {} (easy/medium/hard, or a search depth 1-{}): ",
            player, MAX_DEPTH
        );
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        let input = buffer.trim().to_lowercase();
        match input.as_str() {
            "easy" => return Ok(2),
            "medium" => return Ok(5),
            "hard" => return Ok(8),
            _ => match input.parse::<usize>() {
                Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => return Ok(depth),
                _ => println!("Unknown difficulty: {}", input),
            },
        }
    }
}

/// Asks whether to start another game
fn play_again() -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("Play again? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);
    let mut ai_depths = (5, 5);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                ai_depths.0 = read_difficulty(1)?;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                ai_depths.1 = read_difficulty(2)?;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let player_one_to_move = game.to_move == Cell::PlayerOne;
                let next_move =
                    // AI player
                    if (player_one_to_move && ai_players.0) || (!player_one_to_move && ai_players.1) {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let depth = if player_one_to_move {
                            ai_depths.0
                        } else {
                            ai_depths.1
                        };
                        // the engine always searches for player 2, so player 1
                        // turns search a board with the pieces relabelled
                        let board = if player_one_to_move {
                            game.board.swapped()
                        } else {
                            game.board
                        };

                        let mut searcher = Searcher::new(board);
                        let start = Instant::now();
                        let (best_move, score) = searcher.search(depth);

                        println!(
                            "Searched {} nodes in {:.2}s",
                            searcher.node_count,
                            start.elapsed().as_secs_f64()
                        );
                        if score == WIN_SCORE {
                            let player = if player_one_to_move { 1 } else { 2 };
                            println!("Player {} can force a win.", player);
                        } else if score == -WIN_SCORE {
                            let player = if player_one_to_move { 2 } else { 1 };
                            println!("Player {} can force a win.", player);
                        }

                        let column = best_move
                            .ok_or_else(|| anyhow!("no move found for an in-play position"))?;
                        println!("Best move: {}", column);
                        column

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                if !play_again()? {
                    break;
                }
                game.reset();
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                if !play_again()? {
                    break;
                }
                game.reset();
            }
            GameState::Draw => {
                println!("Draw!");
                if !play_again()? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}
