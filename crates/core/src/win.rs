//! Win detection - run-length scan through the last placed token
//!
//! After a placement at `(row, col)` each axis is scanned over a window of up to
//! `2k - 1` cells centered on the placed cell. The window is clamped to the grid
//! independently on each side, so near an edge it is shorter on the clamped side
//! and still reaches `k - 1` cells on the open side.
//!
//! Axes are scanned in a fixed order: [`Axis::Horizontal`], [`Axis::Vertical`],
//! [`Axis::DiagonalUp`] (`/`), [`Axis::DiagonalDown`] (`\`). The first axis that
//! yields `k` consecutive same-colored tokens is reported, together with the
//! coordinates of that run in walk order.

use crate::grid::Grid;
use crate::types::{Coord, Token};

/// Line through the placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Walked left to right
    Horizontal,
    /// Walked bottom to top
    Vertical,
    /// `/`, walked from bottom-left to top-right
    DiagonalUp,
    /// `\`, walked from top-left to bottom-right
    DiagonalDown,
}

impl Axis {
    /// Order in which [`check_win`] scans the axes.
    pub const SCAN_ORDER: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// Unit step `(d_row, d_col)` in walk direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (-1, 0),
            Axis::DiagonalUp => (-1, 1),
            Axis::DiagonalDown => (1, 1),
        }
    }
}

/// Outcome of a win check.
///
/// When [`won`](WinResult::won) is true, `tiles` holds exactly `run_length`
/// coordinates on one line, all holding tokens of the placed token's color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinResult {
    axis: Option<Axis>,
    tiles: Vec<Coord>,
}

impl WinResult {
    /// No win, no tiles.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn won(&self) -> bool {
        self.axis.is_some()
    }

    /// Axis of the winning run
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Winning tiles in walk order (empty when there is no win)
    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.tiles.contains(&at)
    }
}

/// Clamped scan window along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Coord,
    pub end: Coord,
    step: (isize, isize),
    len: usize,
}

impl Window {
    /// Number of cells in the window, endpoints included.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Cells from `start` to `end`, one step at a time.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len).map(move |i| offset(self.start, self.step, i))
    }
}

/// Compute the window of up to `2 * run_length - 1` cells through `at` along `axis`.
///
/// Each side is clamped on its own: a side stops at the grid edge or after
/// `run_length - 1` steps, whichever comes first.
pub fn window(grid: &Grid, at: Coord, axis: Axis, run_length: usize) -> Window {
    let cap = run_length.saturating_sub(1);
    let (dr, dc) = axis.step();

    let back = reach(at.row, -dr, grid.length(), cap).min(reach(at.col, -dc, grid.width(), cap));
    let ahead = reach(at.row, dr, grid.length(), cap).min(reach(at.col, dc, grid.width(), cap));

    let start = offset(at, (-dr, -dc), back);
    let end = offset(at, (dr, dc), ahead);
    Window {
        start,
        end,
        step: (dr, dc),
        len: back + ahead + 1,
    }
}

/// Determine whether the token at `at` completes a run of `run_length`.
///
/// Returns no win if the cell at `at` is empty.
///
/// # Panics
///
/// Panics if `at` lies outside the grid or `run_length` is zero.
pub fn check_win(grid: &Grid, at: Coord, run_length: usize) -> WinResult {
    assert!(run_length >= 1, "run length must be at least 1");
    assert!(
        grid.in_bounds(at),
        "coordinate {at} outside {}x{} grid",
        grid.length(),
        grid.width()
    );

    let Some(token) = grid.token_at(at) else {
        return WinResult::none();
    };

    for axis in Axis::SCAN_ORDER {
        let win = window(grid, at, axis, run_length);
        if let Some(tiles) = scan(grid, token, &win, run_length) {
            return WinResult {
                axis: Some(axis),
                tiles,
            };
        }
    }

    WinResult::none()
}

fn scan(grid: &Grid, token: Token, win: &Window, run_length: usize) -> Option<Vec<Coord>> {
    // Clamped too short to ever hold a run.
    if win.len() < run_length {
        return None;
    }

    let mut run = Vec::with_capacity(run_length);
    for at in win.coords() {
        match grid.token_at(at) {
            Some(other) if other.same_color(&token) => {
                run.push(at);
                if run.len() == run_length {
                    return Some(run);
                }
            }
            _ => run.clear(),
        }
    }
    None
}

/// Steps available from `pos` moving by `delta` in a dimension of `extent` cells, capped at `cap`.
#[inline(always)]
fn reach(pos: usize, delta: isize, extent: usize, cap: usize) -> usize {
    match delta.signum() {
        0 => cap,
        1 => (extent - 1 - pos).min(cap),
        _ => pos.min(cap),
    }
}

#[inline(always)]
fn offset(at: Coord, (dr, dc): (isize, isize), n: usize) -> Coord {
    let n = n as isize;
    Coord::new(
        at.row.wrapping_add_signed(dr * n),
        at.col.wrapping_add_signed(dc * n),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_clamps_to_edges() {
        assert_eq!(reach(0, -1, 7, 3), 0);
        assert_eq!(reach(2, -1, 7, 3), 2);
        assert_eq!(reach(2, 1, 7, 3), 3);
        assert_eq!(reach(5, 1, 7, 3), 1);
        assert_eq!(reach(4, 0, 7, 3), 3);
    }

    #[test]
    fn test_window_is_full_in_the_middle() {
        let grid = Grid::new(9, 9);
        let w = window(&grid, Coord::new(4, 4), Axis::Horizontal, 4);
        assert_eq!(w.start, Coord::new(4, 1));
        assert_eq!(w.end, Coord::new(4, 7));
        assert_eq!(w.len(), 7);
    }

    #[test]
    fn test_window_is_asymmetric_at_left_edge() {
        let grid = Grid::new(7, 6);
        let w = window(&grid, Coord::new(5, 1), Axis::Horizontal, 4);
        assert_eq!(w.start, Coord::new(5, 0));
        assert_eq!(w.end, Coord::new(5, 4));
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn test_vertical_window_walks_upwards() {
        let grid = Grid::new(7, 6);
        let w = window(&grid, Coord::new(2, 0), Axis::Vertical, 4);
        assert_eq!(w.start, Coord::new(5, 0));
        assert_eq!(w.end, Coord::new(0, 0));
        let coords: Vec<_> = w.coords().collect();
        assert_eq!(coords.first(), Some(&Coord::new(5, 0)));
        assert_eq!(coords.last(), Some(&Coord::new(0, 0)));
    }

    #[test]
    fn test_diagonal_window_uses_tighter_dimension() {
        let grid = Grid::new(7, 6);
        // Bottom-left corner: "/" can only go up and right.
        let w = window(&grid, Coord::new(5, 0), Axis::DiagonalUp, 4);
        assert_eq!(w.start, Coord::new(5, 0));
        assert_eq!(w.end, Coord::new(2, 3));

        // Top-right corner: "/" can only go down and left.
        let w = window(&grid, Coord::new(0, 6), Axis::DiagonalUp, 4);
        assert_eq!(w.start, Coord::new(3, 3));
        assert_eq!(w.end, Coord::new(0, 6));

        // "\" from (1, 5): one step up-left before row 0, one step down-right before the last lane.
        let w = window(&grid, Coord::new(1, 5), Axis::DiagonalDown, 4);
        assert_eq!(w.start, Coord::new(0, 4));
        assert_eq!(w.end, Coord::new(2, 6));
    }

    #[test]
    fn test_run_length_one_wins_immediately() {
        let mut grid = Grid::new(3, 3);
        let at = grid.place(Token::player_one(), 2).unwrap();
        let result = check_win(&grid, at, 1);
        assert!(result.won());
        assert_eq!(result.axis(), Some(Axis::Horizontal));
        assert_eq!(result.tiles(), &[at]);
        assert!(result.contains(at));
        assert!(!result.contains(Coord::new(2, 0)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let grid = Grid::new(7, 6);
        let result = check_win(&grid, Coord::new(3, 3), 4);
        assert_eq!(result, WinResult::none());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_coordinate_panics() {
        let grid = Grid::new(7, 6);
        let _ = check_win(&grid, Coord::new(6, 0), 4);
    }
}
