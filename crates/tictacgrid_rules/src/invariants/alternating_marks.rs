//! Alternating marks invariant: turns alternate from the starting player.

use super::Invariant;
use crate::{GameState, Outcome};

/// Invariant: mark counts are consistent with alternating turns.
///
/// The starting player has either as many marks as the opponent or
/// exactly one more. While the round runs, the player to move is the
/// starting player when the counts are level and the opponent otherwise.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let first = game.starting_player();
        let first_marks = game.board().count(first);
        let second_marks = game.board().count(first.opponent());

        if first_marks != second_marks && first_marks != second_marks + 1 {
            return false;
        }

        match game.outcome() {
            Outcome::InProgress => {
                let expected = if first_marks == second_marks {
                    first
                } else {
                    first.opponent()
                };
                game.current_player() == expected
            }
            Outcome::Win(_) | Outcome::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns from the starting player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Cell, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new(BoardSize::CLASSIC, Player::O);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(
            BoardSize::new(5).unwrap(),
            Player::O,
            &[(0, 0), (4, 4), (2, 2), (1, 3), (3, 0)],
        )
        .unwrap();
        assert!(AlternatingMarksInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new(BoardSize::CLASSIC, Player::X);
        game.apply_move(0, 0).unwrap();
        game.board.set(1, 1, Cell::Marked(Player::X));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::new(BoardSize::CLASSIC, Player::X);
        game.apply_move(0, 0).unwrap();
        game.current_player = Player::X;
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
