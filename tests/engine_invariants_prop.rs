//! Property tests for board and engine invariants

use proptest::prelude::*;

use tui_blockfall::core::{base_shape, rotated_clockwise, Board, GameEngine};
use tui_blockfall::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::SoftDrop),
        Just(GameAction::Rotate),
    ]
}

/// Random occupancy (bit per cell) plus a set of rows forced full.
fn board_strategy() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (
        prop::collection::vec(any::<bool>(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize),
        prop::collection::vec(any::<bool>(), BOARD_HEIGHT as usize),
    )
}

fn build_board(cells: &[bool], full_rows: &[bool]) -> Board {
    let w = BOARD_WIDTH as usize;
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as usize {
        for x in 0..w {
            // Keep column 0 empty on non-forced rows so only forced rows are full.
            let filled = full_rows[y] || (x != 0 && cells[y * w + x]);
            if filled {
                board.set(x as i8, y as i8, Some(PieceKind::T));
            }
        }
    }
    board
}

proptest! {
    #[test]
    fn is_free_matches_cell_state(x in -3i8..13, y in -5i8..23, (cells, full) in board_strategy()) {
        let board = build_board(&cells, &full);
        let in_cols = (0..BOARD_WIDTH as i8).contains(&x);
        let expected = if !in_cols {
            false
        } else if y < 0 {
            true
        } else if y >= BOARD_HEIGHT as i8 {
            false
        } else {
            !board.is_occupied(x, y)
        };
        prop_assert_eq!(board.is_free(x, y), expected);
    }

    #[test]
    fn four_rotations_are_identity(kind in kind_strategy(), turns in 0usize..4) {
        let mut shape = base_shape(kind);
        for _ in 0..turns {
            shape = rotated_clockwise(&shape);
        }
        let start = shape;
        for _ in 0..4 {
            shape = rotated_clockwise(&shape);
        }
        prop_assert_eq!(shape, start);
        prop_assert_eq!(shape.filled_count(), 4);
    }

    #[test]
    fn clear_full_rows_removes_exactly_full_rows((cells, full) in board_strategy()) {
        let mut board = build_board(&cells, &full);
        let k = full.iter().filter(|&&f| f).count();
        let survivors: Vec<Vec<_>> = board
            .rows()
            .enumerate()
            .filter(|(y, _)| !full[*y])
            .map(|(_, row)| row.to_vec())
            .collect();

        let cleared = board.clear_full_rows();
        prop_assert_eq!(cleared.len(), k);

        let rows: Vec<Vec<_>> = board.rows().map(|r| r.to_vec()).collect();
        prop_assert_eq!(rows.len(), BOARD_HEIGHT as usize);
        for row in &rows[..k] {
            prop_assert!(row.iter().all(|c| c.is_none()));
        }
        prop_assert_eq!(&rows[k..], &survivors[..]);
    }

    #[test]
    fn score_is_monotonic_and_counts_rows(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..400),
    ) {
        let mut engine = GameEngine::new(seed);
        engine.start();
        let mut last_score = 0;
        for action in actions {
            engine.apply_action(action);
            if let Some(ev) = engine.take_last_event() {
                prop_assert_eq!(ev.points, ev.rows_cleared * 10);
            }
            prop_assert!(engine.score() >= last_score);
            prop_assert_eq!(engine.score(), engine.lines() * 10);
            last_score = engine.score();

            if let Some(piece) = engine.active() {
                prop_assert!(piece.fits(engine.board()));
            }
            if !engine.game_active() {
                break;
            }
        }
    }
}
