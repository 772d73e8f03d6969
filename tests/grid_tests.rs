//! Grid tests - gravity placement and column-fill checks

use connect_four::core::{Grid, PlaceError};
use connect_four::types::{Coord, Token, DEFAULT_LENGTH, DEFAULT_WIDTH};

use proptest::prelude::*;

fn assert_gravity(grid: &Grid) {
    for col in 0..grid.width() {
        let mut seen_token = false;
        for row in 0..grid.length() {
            let occupied = grid.get(row, col).unwrap().is_some();
            if seen_token {
                assert!(occupied, "gap under a token at ({}, {})", row, col);
            }
            seen_token |= occupied;
        }
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(DEFAULT_WIDTH, DEFAULT_LENGTH);
    assert_eq!(grid.width(), 7);
    assert_eq!(grid.length(), 6);
    assert_eq!(grid.token_count(), 0);

    for row in 0..grid.length() {
        for col in 0..grid.width() {
            assert_eq!(grid.get(row, col), Some(None));
        }
    }
    for col in 0..grid.width() {
        assert!(!grid.is_column_full(col));
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(7, 6);
    assert_eq!(grid.get(6, 0), None);
    assert_eq!(grid.get(0, 7), None);
    assert_eq!(grid.token_at(Coord::new(9, 9)), None);
}

#[test]
fn test_place_fills_lane_bottom_up() {
    let mut grid = Grid::new(7, 6);
    let red = Token::player_one();

    for expected_row in (0..6).rev() {
        assert_eq!(grid.place(red, 3), Ok(Coord::new(expected_row, 2)));
    }
    for row in 0..6 {
        assert_eq!(grid.get(row, 2), Some(Some(red)));
    }
    assert!(grid.is_column_full(2));
    assert_gravity(&grid);
}

#[test]
fn test_place_stacks_on_other_tokens() {
    let mut grid = Grid::new(7, 6);
    assert_eq!(grid.place(Token::player_one(), 1), Ok(Coord::new(5, 0)));
    assert_eq!(grid.place(Token::player_two(), 1), Ok(Coord::new(4, 0)));
    assert_eq!(grid.place(Token::player_one(), 2), Ok(Coord::new(5, 1)));
}

#[test]
fn test_place_on_full_column_fails_without_mutation() {
    let mut grid = Grid::new(7, 6);
    for _ in 0..6 {
        grid.place(Token::player_one(), 4).unwrap();
    }
    let before = grid.clone();

    assert_eq!(
        grid.place(Token::player_two(), 4),
        Err(PlaceError::ColumnFull { lane: 4 })
    );
    assert_eq!(grid, before);
}

#[test]
fn test_place_rejects_invalid_lanes() {
    let mut grid = Grid::new(7, 6);
    let before = grid.clone();

    assert_eq!(
        grid.place(Token::player_one(), 0),
        Err(PlaceError::InvalidLane { lane: 0, width: 7 })
    );
    assert_eq!(
        grid.place(Token::player_one(), 8),
        Err(PlaceError::InvalidLane { lane: 8, width: 7 })
    );
    assert_eq!(
        grid.place(Token::player_one(), usize::MAX),
        Err(PlaceError::InvalidLane {
            lane: usize::MAX,
            width: 7
        })
    );
    assert_eq!(grid, before);
}

#[test]
fn test_is_column_full_only_looks_at_top_row() {
    let mut grid = Grid::new(3, 2);
    grid.place(Token::player_one(), 2).unwrap();
    assert!(!grid.is_column_full(1));
    grid.place(Token::player_two(), 2).unwrap();
    assert!(grid.is_column_full(1));
    assert!(!grid.is_column_full(0));
    assert!(!grid.is_column_full(2));
}

#[test]
fn test_is_column_full_out_of_range() {
    let grid = Grid::new(7, 6);
    assert!(grid.is_column_full(7));
}

#[test]
fn test_is_full_and_clear() {
    let mut grid = Grid::new(2, 2);
    for lane in [1, 1, 2, 2] {
        grid.place(Token::player_one(), lane).unwrap();
    }
    assert!(grid.is_full());
    assert_eq!(grid.token_count(), 4);

    grid.clear();
    assert!(!grid.is_full());
    assert_eq!(grid.token_count(), 0);
}

proptest! {
    #[test]
    fn random_placements_keep_gravity_and_top_row_invariants(
        width in 1usize..10,
        length in 1usize..10,
        lanes in proptest::collection::vec(0usize..12, 0..120),
    ) {
        let mut grid = Grid::new(width, length);
        let tokens = [Token::player_one(), Token::player_two()];

        for (i, lane) in lanes.into_iter().enumerate() {
            let before = grid.clone();
            let result = grid.place(tokens[i % 2], lane);

            match result {
                Ok(at) => {
                    prop_assert_eq!(at.col, lane - 1);
                    prop_assert_eq!(grid.token_count(), before.token_count() + 1);
                    // Landed on the floor or on another token.
                    let below = grid.get(at.row + 1, at.col);
                    prop_assert!(at.row + 1 == length || below.unwrap().is_some());
                }
                Err(PlaceError::InvalidLane { .. }) => {
                    prop_assert!(lane == 0 || lane > width);
                    prop_assert_eq!(&grid, &before);
                }
                Err(PlaceError::ColumnFull { .. }) => {
                    prop_assert!(before.is_column_full(lane - 1));
                    prop_assert_eq!(&grid, &before);
                }
            }

            assert_gravity(&grid);
            for col in 0..width {
                prop_assert_eq!(
                    grid.is_column_full(col),
                    grid.get(0, col).unwrap().is_some()
                );
            }
        }
    }
}
