//! Plays engine-vs-engine matchups between two search depths
//!
//! One game is played per two-move opening, so the deterministic engines
//! still produce a spread of distinct games.

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::time::Instant;

use connect4_engine::*;

/// Plays a single game from a fixed two-move opening, both sides using the
/// engine at their given depth
fn play_game(
    first: usize,
    second: usize,
    depth_one: usize,
    depth_two: usize,
) -> Result<(GameState, usize)> {
    let mut game = Game::new();
    game.play_checked(first)?;
    game.play_checked(second)?;
    let mut moves = 2;

    while game.state == GameState::Playing {
        let column = if game.to_move == Cell::PlayerOne {
            // the engine always searches for player 2, so player 1 turns
            // search a board with the pieces relabelled
            choose_move(&game.board.swapped(), depth_one)
        } else {
            choose_move(&game.board, depth_two)
        };
        let column = column.ok_or_else(|| anyhow!("no move found for an in-play position"))?;
        game.play_checked(column)?;
        moves += 1;
    }

    Ok((game.state, moves))
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let usage = "usage: simulate <player 1 depth> <player 2 depth>";
    let depth_one: usize = args.next().ok_or_else(|| anyhow!(usage))?.parse()?;
    let depth_two: usize = args.next().ok_or_else(|| anyhow!(usage))?.parse()?;
    if depth_one == 0 || depth_two == 0 {
        return Err(anyhow!("search depths must be at least 1"));
    }

    let openings: Vec<(usize, usize)> = (0..WIDTH)
        .flat_map(|first| (0..WIDTH).map(move |second| (first, second)))
        .collect();

    let progress = ProgressBar::new(openings.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = Instant::now();

    let results: Result<Vec<(GameState, usize)>> = openings
        .par_iter()
        .map(|&(first, second)| {
            let result = play_game(first, second, depth_one, depth_two);
            progress.inc(1);
            result
        })
        .collect();
    let results = results?;

    progress.finish();

    let mut player_one_wins = 0;
    let mut player_two_wins = 0;
    let mut draws = 0;
    let mut total_moves = 0;
    for &(state, moves) in results.iter() {
        match state {
            GameState::PlayerOneWin => player_one_wins += 1,
            GameState::PlayerTwoWin => player_two_wins += 1,
            _ => draws += 1,
        }
        total_moves += moves;
    }

    let games = results.len();
    println!(
        "Depth {} vs depth {} over {} games:",
        depth_one, depth_two, games
    );
    println!(
        "Player 1 wins: {} ({:.1}%)",
        player_one_wins,
        100.0 * player_one_wins as f64 / games as f64
    );
    println!(
        "Player 2 wins: {} ({:.1}%)",
        player_two_wins,
        100.0 * player_two_wins as f64 / games as f64
    );
    println!(
        "Draws: {} ({:.1}%)",
        draws,
        100.0 * draws as f64 / games as f64
    );
    println!(
        "Average game length: {:.1} moves",
        total_moves as f64 / games as f64
    );
    println!("Matchup completed in {}", HumanDuration(start.elapsed()));

    Ok(())
}
