//! GameView: maps an engine `Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom (for a 4-lane grid):
//!
//! ```text
//!    ▼
//! ╔═══════╗
//! ║●║●║●║●║
//! ║●║●║◉║●║
//! ╚═══════╝
//!  1 2 3 4
//!
//! Player 1 (P1)'s turn
//! <message>
//! <help>
//! ```
//!
//! Each grid cell takes two columns: a `║` separator and one glyph.

use crate::engine::{Game, GameStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Coord;

const EMPTY: char = '●';
const TOKEN: char = '●';
const CONNECTED: char = '◉';
const CURSOR: char = '▼';

const HELP: &str = "←/→ move  Enter drop  digits pick lane  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Prompt state drawn around the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptView<'a> {
    /// 1-based lane under the cursor marker
    pub cursor: Option<usize>,
    /// Lane number typed so far
    pub typed: Option<usize>,
    /// Feedback for the last input, e.g. a rejected move
    pub message: Option<&'a str>,
    pub show_help: bool,
    /// Answers are typed on stdin instead of read as keys.
    pub line_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the board and status lines.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size needed for a `width x length` grid, status lines excluded.
    pub fn board_size(width: usize, length: usize) -> (u16, u16) {
        // Cursor row, top border, rows, bottom border, lane numbers.
        ((2 * width + 1) as u16, (length + 4) as u16)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        game: &Game,
        prompt: &PromptView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let grid = game.grid();
        let (board_w, board_h) = Self::board_size(grid.width(), grid.length());
        let total_h = board_h + 4;

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let frame = CellStyle::fg(Rgb::FRAME);
        let empty = CellStyle::fg(Rgb::MUTED).dim();

        // Cursor marker in the current player's color.
        if let (Some(lane), false) = (prompt.cursor, game.is_over()) {
            if (1..=grid.width()).contains(&lane) {
                let style = CellStyle::fg(game.current_player().token().color().into()).bold();
                fb.put_char(cell_x(start_x, lane - 1), start_y, CURSOR, style);
            }
        }

        // Borders.
        let top = start_y + 1;
        let bottom = top + grid.length() as u16 + 1;
        fb.put_char(start_x, top, '╔', frame);
        fb.put_char(start_x, bottom, '╚', frame);
        for dx in 1..board_w - 1 {
            fb.put_char(start_x + dx, top, '═', frame);
            fb.put_char(start_x + dx, bottom, '═', frame);
        }
        fb.put_char(start_x + board_w - 1, top, '╗', frame);
        fb.put_char(start_x + board_w - 1, bottom, '╝', frame);

        // Cells.
        let winning = match game.status() {
            GameStatus::Won { result, .. } => Some(result),
            _ => None,
        };
        for (row, cells) in grid.rows().enumerate() {
            let y = top + 1 + row as u16;
            for (col, cell) in cells.iter().enumerate() {
                let x = start_x + 2 * col as u16;
                fb.put_char(x, y, '║', frame);
                match cell {
                    None => fb.put_char(x + 1, y, EMPTY, empty),
                    Some(token) => {
                        let style = CellStyle::fg(token.color().into());
                        if winning.map_or(false, |w| w.contains(Coord::new(row, col))) {
                            fb.put_char(x + 1, y, CONNECTED, style.bold());
                        } else {
                            fb.put_char(x + 1, y, TOKEN, style);
                        }
                    }
                }
            }
            fb.put_char(start_x + board_w - 1, y, '║', frame);
        }

        // Lane numbers; lanes past 9 show their last digit to keep the columns aligned.
        let numbers = bottom + 1;
        for lane in 1..=grid.width() {
            let digit = char::from_digit((lane % 10) as u32, 10).unwrap_or('?');
            fb.put_char(cell_x(start_x, lane - 1), numbers, digit, frame);
        }

        self.draw_status(fb, game, prompt, viewport, numbers + 2);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, prompt: &PromptView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, prompt, viewport, &mut fb);
        fb
    }

    /// Render sized to fit the content exactly, for line-mode output.
    pub fn render_compact(&self, game: &Game, prompt: &PromptView<'_>) -> FrameBuffer {
        let grid = game.grid();
        let (board_w, board_h) = Self::board_size(grid.width(), grid.length());
        let text_w = status_line(game).chars().count() + 2;
        let mut width = (board_w as usize).max(text_w);
        if let Some(msg) = prompt.message {
            width = width.max(msg.chars().count());
        }
        if prompt.show_help {
            width = width.max(HELP.chars().count());
        }
        if game.is_over() {
            width = width.max(game_over_hint(prompt).chars().count());
        }
        let viewport = Viewport::new(width as u16, board_h + 4);
        let view = GameView::new().with_anchor_y(AnchorY::Top);
        view.render(game, prompt, viewport)
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        prompt: &PromptView<'_>,
        viewport: Viewport,
        y: u16,
    ) {
        let text = CellStyle::default();
        let strong = CellStyle::default().bold();

        // "● <status>" with the dot in the relevant player's color.
        let line = status_line(game);
        let w = line.chars().count() as u16 + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let dot_color = match game.status() {
            GameStatus::Draw => None,
            _ => Some(game.current_player().token().color()),
        };
        match dot_color {
            Some(color) => fb.put_char(x, y, TOKEN, CellStyle::fg(color.into()).bold()),
            None => fb.put_char(x, y, EMPTY, CellStyle::fg(Rgb::MUTED)),
        }
        fb.put_str(x + 2, y, &line, strong);

        let mut y = y + 1;
        let second = match (prompt.typed, prompt.message) {
            (Some(lane), _) => Some(format!("lane: {lane}_")),
            (None, Some(msg)) => Some(msg.to_string()),
            (None, None) if game.is_over() => Some(game_over_hint(prompt).to_string()),
            _ => None,
        };
        if let Some(s) = second {
            fb.put_centered(y, &s, text);
        }

        y += 1;
        if prompt.show_help {
            fb.put_centered(y, HELP, text.dim());
        }
    }
}

/// Headline for the current game status.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            let p = game.current_player();
            format!("{} ({})'s turn", p.name(), p.tag())
        }
        GameStatus::Won { .. } => {
            let p = game.current_player();
            format!("{} ({}) wins!", p.name(), p.tag())
        }
        GameStatus::Draw => "Draw, the grid is full".to_string(),
    }
}

/// What to do once the game has ended, worded for the input mode.
pub fn game_over_hint(prompt: &PromptView<'_>) -> &'static str {
    if prompt.line_mode {
        "type y to play again"
    } else {
        "press r to play again"
    }
}

/// Terminal column of the glyph for 0-based grid column `col`.
#[inline(always)]
fn cell_x(start_x: u16, col: usize) -> u16 {
    start_x + 1 + 2 * col as u16
}
