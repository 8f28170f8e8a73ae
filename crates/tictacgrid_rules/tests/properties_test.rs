//! Property tests for turn alternation and refusal of illegal moves.

use proptest::prelude::*;
use tictacgrid_rules::{BoardSize, GameState, MoveError, Outcome, Player};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// A board size with a batch of candidate moves, possibly off the board.
fn game_input() -> impl Strategy<Value = (usize, Player, Vec<(isize, isize)>)> {
    (3usize..=5, player()).prop_flat_map(|(size, starting)| {
        let side = size as isize;
        (
            Just(size),
            Just(starting),
            prop::collection::vec((-1..=side, -1..=side), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn turns_alternate_while_in_progress((size, starting, moves) in game_input()) {
        let mut game = GameState::new(BoardSize::new(size).unwrap(), starting);
        let mut expected = starting;

        for (row, col) in moves {
            match game.apply_move(row, col) {
                Ok(Outcome::InProgress) => {
                    expected = expected.opponent();
                    prop_assert_eq!(game.current_player(), expected);
                }
                Ok(Outcome::Win(winner)) => {
                    prop_assert_eq!(winner, expected);
                    prop_assert_eq!(game.current_player(), expected);
                }
                Ok(Outcome::Draw) => prop_assert_eq!(game.current_player(), expected),
                Err(_) => prop_assert_eq!(game.current_player(), expected),
            }
        }
    }

    #[test]
    fn refused_moves_change_nothing((size, starting, moves) in game_input()) {
        let mut game = GameState::new(BoardSize::new(size).unwrap(), starting);

        for (row, col) in moves {
            let before = game.clone();
            match game.apply_move(row, col) {
                Ok(_) => {
                    let marked = |g: &GameState| g.board().cells().iter().filter(|c| !c.is_empty()).count();
                    prop_assert_eq!(marked(&game), marked(&before) + 1);
                }
                Err(error) => {
                    prop_assert_eq!(&game, &before);
                    match error {
                        MoveError::GameAlreadyOver => prop_assert!(before.outcome().is_terminal()),
                        MoveError::OutOfBounds { .. } => {
                            let side = size as isize;
                            prop_assert!(row < 0 || col < 0 || row >= side || col >= side);
                        }
                        MoveError::CellOccupied { row: r, col: c } => {
                            prop_assert!(!before.board().is_empty(r, c));
                        }
                    }
                }
            }
        }
    }
}
