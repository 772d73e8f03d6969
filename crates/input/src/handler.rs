//! Lane selection for keyboard play.
//!
//! The selector keeps a cursor over the lanes and a short buffer of typed
//! digits. A drop request resolves to the typed lane if any digits were
//! entered, otherwise to the cursor lane. Typed lanes are passed through
//! unchecked so the grid can report `InvalidLane` itself.

use arrayvec::ArrayVec;

use crate::types::InputAction;

/// Longest typed lane number (lanes go up to 64).
const MAX_TYPED_DIGITS: usize = 3;

#[derive(Debug, Clone)]
pub struct LaneSelector {
    width: usize,
    /// 1-based cursor lane
    cursor: usize,
    typed: ArrayVec<u8, MAX_TYPED_DIGITS>,
}

impl LaneSelector {
    /// Create a selector for `width` lanes with the cursor on the middle lane.
    pub fn new(width: usize) -> Self {
        let width = width.max(1);
        Self {
            width,
            cursor: (width + 1) / 2,
            typed: ArrayVec::new(),
        }
    }

    /// Current 1-based cursor lane.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lane number typed so far, if any.
    pub fn typed(&self) -> Option<usize> {
        if self.typed.is_empty() {
            return None;
        }
        Some(
            self.typed
                .iter()
                .fold(0usize, |acc, &d| acc * 10 + d as usize),
        )
    }

    pub fn set_cursor(&mut self, lane: usize) {
        self.cursor = lane.clamp(1, self.width);
    }

    /// Apply an input action. Returns the lane to drop into on `Drop`.
    pub fn apply(&mut self, action: InputAction) -> Option<usize> {
        match action {
            InputAction::CursorLeft => {
                self.typed.clear();
                self.set_cursor(self.cursor.saturating_sub(1));
                None
            }
            InputAction::CursorRight => {
                self.typed.clear();
                self.set_cursor(self.cursor + 1);
                None
            }
            InputAction::Digit(d) => {
                // A full buffer starts over with the new digit.
                if self.typed.is_full() {
                    self.typed.clear();
                }
                self.typed.push(d.min(9));
                None
            }
            InputAction::Backspace => {
                self.typed.pop();
                None
            }
            InputAction::Drop => {
                let lane = self.typed().unwrap_or(self.cursor);
                self.typed.clear();
                if (1..=self.width).contains(&lane) {
                    self.cursor = lane;
                }
                Some(lane)
            }
            InputAction::Restart => {
                self.typed.clear();
                None
            }
        }
    }
}
