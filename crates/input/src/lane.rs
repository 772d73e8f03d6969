//! Line-mode lane parsing.

/// Why a typed lane was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaneParseError {
    #[error("{0:?} is not a lane number")]
    NotANumber(String),

    #[error("select an existing lane (1-{width}), got {lane}")]
    OutOfRange { lane: usize, width: usize },
}

/// Parse a 1-based lane from a line of user input and check it against `width`.
pub fn parse_lane(text: &str, width: usize) -> Result<usize, LaneParseError> {
    let text = text.trim();
    let lane: usize = text
        .parse()
        .map_err(|_| LaneParseError::NotANumber(text.to_string()))?;
    if lane == 0 || lane > width {
        return Err(LaneParseError::OutOfRange { lane, width });
    }
    Ok(lane)
}

/// True if a line-mode answer after a finished game asks for another round.
///
/// Accepts `y`/`yes` and also `r`, the restart key from key mode.
pub fn wants_rematch(answer: &str) -> bool {
    let answer = answer.trim();
    ["y", "yes", "r"]
        .iter()
        .any(|ok| answer.eq_ignore_ascii_case(ok))
}
