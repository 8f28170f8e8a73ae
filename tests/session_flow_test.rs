//! Tests for a full match driven through the public session API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tictacgrid::{GameConfig, RESET_DELAY, RoundSession};
use tictacgrid_rules::{MoveError, Outcome, Player};

fn session(size: usize) -> RoundSession<StdRng> {
    let config = GameConfig::new("Ana", "Luis", size).unwrap();
    RoundSession::with_rng(config, StdRng::seed_from_u64(42))
}

#[test]
fn test_anti_diagonal_win_on_five_by_five() {
    let mut session = session(5);
    let now = Instant::now();

    // X: (1,4) (2,3) (3,2). O fills elsewhere.
    for (row, col) in [(1, 4), (0, 0), (2, 3), (0, 1), (3, 2)] {
        session.play(row, col, now).unwrap();
    }

    assert_eq!(session.game().outcome(), Outcome::Win(Player::X));
    assert_eq!(session.status_line(), "Winner: Ana");
    let line = session.game().winning_line().unwrap();
    assert!(line.contains(2, 3));
}

#[test]
fn test_full_round_cycle() {
    let mut session = session(3);
    let start = Instant::now();

    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(row, col, start).unwrap();
    }
    assert_eq!(session.play(2, 2, start), Err(MoveError::GameAlreadyOver));

    assert!(!session.tick(start + RESET_DELAY / 4));
    assert!(session.tick(start + RESET_DELAY));

    let game = session.game();
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.current_player(), game.starting_player());
    assert_eq!(game.board().count(Player::X) + game.board().count(Player::O), 0);
}

#[test]
fn test_out_of_bounds_leaves_round_untouched() {
    let mut session = session(4);
    let now = Instant::now();
    session.play(0, 0, now).unwrap();

    let before = session.game().clone();
    assert!(matches!(
        session.play(4, 0, now),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert!(matches!(
        session.play(0, -1, now),
        Err(MoveError::OutOfBounds { .. })
    ));
    assert_eq!(session.game(), &before);
    assert!(!session.reset_pending());
}
