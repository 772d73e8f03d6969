/// Errors returned by [`Grid::place`](crate::Grid::place).
///
/// A failed placement never mutates the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("select an existing lane (1-{width}), got {lane}")]
    InvalidLane { lane: usize, width: usize },

    #[error("lane {lane} is filled, try another lane")]
    ColumnFull { lane: usize },
}

impl PlaceError {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::InvalidLane { .. } => "invalid_lane",
            PlaceError::ColumnFull { .. } => "column_full",
        }
    }

    /// 1-based lane the caller asked for.
    pub fn lane(self) -> usize {
        match self {
            PlaceError::InvalidLane { lane, .. } | PlaceError::ColumnFull { lane } => lane,
        }
    }
}
