#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};

    use crate::{
        choose_move, evaluate_window, has_win, is_terminal, score_position, winning_line, Board,
        Cell, Game, GameState, Searcher, HEIGHT, WIDTH,
    };

    fn drop_into(board: &mut Board, column: usize, piece: Cell) {
        let row = board.next_open_row(column).unwrap();
        board.drop_piece(row, column, piece);
    }

    // a full board with vertically alternating pieces and no four anywhere
    fn drawn_board() -> Board {
        let mut board = Board::new();
        let bottom = [
            Cell::PlayerOne,
            Cell::PlayerOne,
            Cell::PlayerTwo,
            Cell::PlayerTwo,
            Cell::PlayerOne,
            Cell::PlayerOne,
            Cell::PlayerTwo,
        ];
        for (column, first) in bottom.iter().enumerate() {
            let mut piece = *first;
            for _ in 0..HEIGHT {
                drop_into(&mut board, column, piece);
                piece = piece.opponent();
            }
        }
        board
    }

    #[test]
    pub fn empty_board() {
        let board = Board::new();

        for column in 0..WIDTH {
            assert!(board.is_valid_move(column));
            assert_eq!(board.next_open_row(column), Some(HEIGHT - 1));
            for row in 0..HEIGHT {
                assert_eq!(board.get(row, column), Cell::Empty);
            }
        }
        assert!(!board.is_valid_move(WIDTH));
        assert!(!board.is_full());
        assert!(!is_terminal(&board));
        assert_eq!(
            board.valid_moves().collect::<Vec<_>>(),
            (0..WIDTH).collect::<Vec<_>>()
        );
    }

    #[test]
    pub fn pieces_stack_from_the_bottom() {
        let mut board = Board::new();

        drop_into(&mut board, 4, Cell::PlayerOne);
        drop_into(&mut board, 4, Cell::PlayerTwo);

        assert_eq!(board.get(HEIGHT - 1, 4), Cell::PlayerOne);
        assert_eq!(board.get(HEIGHT - 2, 4), Cell::PlayerTwo);
        assert_eq!(board.get(HEIGHT - 3, 4), Cell::Empty);
    }

    #[test]
    pub fn column_fill_round_trip() {
        let mut board = Board::new();

        for count in 0..HEIGHT {
            let row = board.next_open_row(2);
            assert_eq!(row, Some(HEIGHT - 1 - count));

            let piece = if count % 2 == 0 {
                Cell::PlayerOne
            } else {
                Cell::PlayerTwo
            };
            board.drop_piece(row.unwrap(), 2, piece);
        }

        assert_eq!(board.next_open_row(2), None);
        assert!(!board.is_valid_move(2));
        assert!(board.is_valid_move(1));
    }

    #[test]
    pub fn horizontal_win() -> Result<()> {
        let game = Game::from_moves("0415263")?;

        let line = [(5, 0), (5, 1), (5, 2), (5, 3)];
        assert_eq!(game.state, GameState::PlayerOneWin);
        assert_eq!(game.winning_cells, Some(line));
        assert_eq!(winning_line(&game.board, Cell::PlayerOne), Some(line));
        assert!(!has_win(&game.board, Cell::PlayerTwo));
        assert!(is_terminal(&game.board));
        Ok(())
    }

    #[test]
    pub fn vertical_win() -> Result<()> {
        let game = Game::from_moves("0101010")?;

        assert_eq!(game.state, GameState::PlayerOneWin);
        assert_eq!(game.winning_cells, Some([(2, 0), (3, 0), (4, 0), (5, 0)]));
        Ok(())
    }

    #[test]
    pub fn diagonal_win() -> Result<()> {
        let game = Game::from_moves("01123223363")?;

        assert_eq!(game.state, GameState::PlayerOneWin);
        assert_eq!(game.winning_cells, Some([(5, 0), (4, 1), (3, 2), (2, 3)]));
        Ok(())
    }

    #[test]
    pub fn winning_line_scan_order() {
        // player 1 holds both a vertical in column 0 and a horizontal along
        // the bottom row, horizontals are scanned first
        let mut board = Board::new();
        for _ in 0..4 {
            drop_into(&mut board, 0, Cell::PlayerOne);
        }
        for column in 1..4 {
            drop_into(&mut board, column, Cell::PlayerOne);
        }
        assert_eq!(
            winning_line(&board, Cell::PlayerOne),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );

        // two stacked horizontals, rows are scanned from the top down
        let mut board = Board::new();
        for column in 0..4 {
            drop_into(&mut board, column, Cell::PlayerTwo);
            drop_into(&mut board, column, Cell::PlayerTwo);
        }
        assert_eq!(
            winning_line(&board, Cell::PlayerTwo),
            Some([(4, 0), (4, 1), (4, 2), (4, 3)])
        );
    }

    #[test]
    pub fn window_scores() {
        use Cell::*;

        assert_eq!(evaluate_window([PlayerTwo; 4], PlayerTwo), 100);
        assert_eq!(
            evaluate_window([PlayerTwo, PlayerTwo, PlayerTwo, Empty], PlayerTwo),
            5
        );
        assert_eq!(
            evaluate_window([PlayerTwo, Empty, PlayerTwo, Empty], PlayerTwo),
            2
        );
        assert_eq!(
            evaluate_window([PlayerOne, PlayerOne, PlayerOne, Empty], PlayerTwo),
            -50
        );
        assert_eq!(
            evaluate_window([PlayerOne, PlayerTwo, Empty, Empty], PlayerTwo),
            0
        );
        assert_eq!(evaluate_window([Empty; 4], PlayerTwo), 0);

        // the table is symmetric between the players
        assert_eq!(
            evaluate_window([PlayerOne, PlayerOne, PlayerOne, Empty], PlayerOne),
            5
        );
        // a completed opposing four scores nothing here, terminal detection
        // is the tree search's concern
        assert_eq!(evaluate_window([PlayerTwo; 4], PlayerOne), 0);
    }

    #[test]
    pub fn center_column_bonus() {
        let mut board = Board::new();
        drop_into(&mut board, WIDTH / 2, Cell::PlayerTwo);

        assert_eq!(score_position(&board, Cell::PlayerTwo), 6);
        assert_eq!(score_position(&board, Cell::PlayerOne), 0);
    }

    #[test]
    pub fn position_scoring() {
        let mut board = Board::new();
        for column in 2..5 {
            drop_into(&mut board, column, Cell::PlayerTwo);
        }

        // center bonus 6, two open twos and two open threes along the bottom
        assert_eq!(score_position(&board, Cell::PlayerTwo), 20);
        // the same open threes count against player 1
        assert_eq!(score_position(&board, Cell::PlayerOne), -100);
    }

    #[test]
    pub fn first_move_takes_the_center() {
        let mut searcher = Searcher::new(Board::new());
        let (column, score) = searcher.search(1);

        // only the center drop earns the center column bonus
        assert_eq!(column, Some(3));
        assert_eq!(score, 6);
        // the root and its seven children
        assert_eq!(searcher.node_count, 8);
    }

    #[test]
    pub fn takes_an_immediate_win() -> Result<()> {
        // player 2 has three stacked in column 3
        let game = Game::from_moves("0313031")?;

        for depth in 1..=5 {
            assert_eq!(choose_move(&game.board, depth), Some(3));
        }
        Ok(())
    }

    #[test]
    pub fn blocks_an_immediate_loss() -> Result<()> {
        // player 1 threatens to complete the bottom row at column 3
        let game = Game::from_moves("05152")?;

        for depth in 2..=5 {
            assert_eq!(choose_move(&game.board, depth), Some(3));
        }
        Ok(())
    }

    #[test]
    pub fn equal_wins_keep_the_lowest_column() {
        // player 2 holds (5,2)..(5,4), so either end completes a four
        let mut board = Board::new();
        for column in 2..5 {
            drop_into(&mut board, column, Cell::PlayerTwo);
        }

        // columns 1 and 5 both win immediately, the lower one is tried first
        assert_eq!(choose_move(&board, 1), Some(1));
        assert_eq!(choose_move(&board, 2), Some(1));
        // one ply deeper every column forces a win, so the first keeps the tie
        assert_eq!(choose_move(&board, 3), Some(0));
    }

    #[test]
    pub fn no_move_from_a_dead_position() {
        let board = drawn_board();

        assert!(board.is_full());
        assert_eq!(board.valid_moves().count(), 0);
        assert!(!has_win(&board, Cell::PlayerOne));
        assert!(!has_win(&board, Cell::PlayerTwo));
        assert!(is_terminal(&board));
        assert_eq!(choose_move(&board, 5), None);

        // a zero-depth search never yields a column
        assert_eq!(choose_move(&Board::new(), 0), None);
    }

    #[test]
    pub fn search_is_deterministic_and_pure() -> Result<()> {
        let game = Game::from_moves("33240")?;
        let before = game.board;

        let first = choose_move(&game.board, 4);
        let second = choose_move(&game.board, 4);

        assert_eq!(first, second);
        assert!(first.is_some());
        assert_eq!(game.board, before);
        Ok(())
    }

    #[test]
    pub fn session_rejects_bad_moves() -> Result<()> {
        let mut game = Game::new();

        assert!(game.play_checked(WIDTH).is_err());

        for _ in 0..HEIGHT {
            game.play_checked(0)?;
        }
        assert_eq!(game.state, GameState::Playing);
        assert!(game.play_checked(0).is_err());
        Ok(())
    }

    #[test]
    pub fn session_ends_and_resets() -> Result<()> {
        let mut game = Game::from_moves("0101010")?;

        assert_eq!(game.state, GameState::PlayerOneWin);
        assert!(game.play_checked(3).is_err());

        game.reset();
        assert_eq!(game.state, GameState::Playing);
        assert_eq!(game.to_move, Cell::PlayerOne);
        assert_eq!(game.winning_cells, None);
        assert_eq!(game.board, Board::new());
        Ok(())
    }

    #[test]
    pub fn bad_move_strings_are_rejected() {
        assert!(Game::from_moves("012x").is_err());
        assert!(Game::from_moves("7").is_err());
        assert!(Game::from_moves("0000000").is_err());
    }

    #[test]
    pub fn swapped_boards_relabel_the_players() -> Result<()> {
        let game = Game::from_moves("05152")?;
        let swapped = game.board.swapped();

        assert_eq!(game.board.get(5, 0), Cell::PlayerOne);
        assert_eq!(swapped.get(5, 0), Cell::PlayerTwo);
        assert_eq!(swapped.get(4, 5), Cell::PlayerOne);
        assert_eq!(swapped.get(0, 0), Cell::Empty);

        // the engine picks up player 1's bottom row threat once the board
        // is relabelled
        for depth in 1..=3 {
            assert_eq!(choose_move(&swapped, depth), Some(3));
        }
        Ok(())
    }

    #[test]
    pub fn engine_self_play_reaches_a_result() -> Result<()> {
        let mut game = Game::new();

        while game.state == GameState::Playing {
            let column = if game.to_move == Cell::PlayerOne {
                choose_move(&game.board.swapped(), 3)
            } else {
                choose_move(&game.board, 3)
            };
            let column = column.ok_or_else(|| anyhow!("no move in an in-play position"))?;
            game.play_checked(column)?;
        }

        if game.state == GameState::Draw {
            assert!(game.board.is_full());
        } else {
            assert!(game.winning_cells.is_some());
        }
        Ok(())
    }
}
