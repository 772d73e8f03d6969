//! Terminal Connect Four runner (default binary).
//!
//! Key mode (default) draws the board on the alternate screen and reads
//! crossterm key events. `--plain` prints the board as ordinary output and
//! reads one lane number per line from stdin.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, terminal, QueueableCommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::engine::{ConfigOverrides, Game, GameConfig, PlayError};
use connect_four::input::{map_key, parse_lane, should_quit, wants_rematch, LaneSelector};
use connect_four::term::{encode_lines_into, GameView, PromptView, TerminalRenderer, Viewport};
use connect_four::types::InputAction;

#[derive(Parser, Debug)]
#[command(name = "connect-four", about = "Connect Four in the terminal")]
struct Args {
    /// Number of lanes (default 7, env CONNECT_FOUR_WIDTH).
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows (default 6, env CONNECT_FOUR_LENGTH).
    #[arg(long)]
    length: Option<usize>,

    /// Tokens in a row needed to win (default 4, env CONNECT_FOUR_RUN_LENGTH).
    #[arg(long)]
    run_length: Option<usize>,

    /// First player's name (env CONNECT_FOUR_PLAYER1).
    #[arg(long)]
    player1: Option<String>,

    /// Second player's name (env CONNECT_FOUR_PLAYER2).
    #[arg(long)]
    player2: Option<String>,

    /// Line mode: print the board and read lane numbers from stdin.
    #[arg(long)]
    plain: bool,

    /// Write tracing output to this file (env CONNECT_FOUR_LOG_PATH).
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            length: self.length,
            run_length: self.run_length,
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            log_path: self.log.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig::from_env().with_overrides(args.overrides());
    config.validate()?;

    init_logging(config.log_path.as_deref())?;
    let mut game = Game::new(&config)?;

    if args.plain {
        return run_plain(&mut game);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file logger. Without a path nothing is installed, since stdout
/// belongs to the board.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    info!(path = %path.display(), "logging started");
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut selector = LaneSelector::new(game.grid().width());
    let mut message: Option<String> = None;

    loop {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let prompt = PromptView {
            cursor: Some(selector.cursor()),
            typed: selector.typed(),
            message: message.as_deref(),
            show_help: true,
            line_mode: false,
        };
        let fb = view.render(game, &prompt, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Resize(_, _) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = map_key(key) else {
                    continue;
                };

                if action == InputAction::Restart {
                    selector.apply(action);
                    game.restart();
                    message = None;
                    continue;
                }

                if let Some(lane) = selector.apply(action) {
                    message = match game.play(lane) {
                        Ok(_) => None,
                        Err(err) => Some(err.to_string()),
                    };
                }
            }
            _ => {}
        }
    }
}

fn run_plain(game: &mut Game) -> Result<()> {
    let view = GameView::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut message: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        let prompt = PromptView {
            message: message.as_deref(),
            line_mode: true,
            ..PromptView::default()
        };
        let fb = view.render_compact(game, &prompt);

        buf.clear();
        buf.queue(terminal::Clear(terminal::ClearType::All))?;
        buf.queue(cursor::MoveTo(0, 0))?;
        encode_lines_into(&fb, &mut buf)?;
        stdout.write_all(&buf)?;

        if game.is_over() {
            write!(stdout, "Play again? [y/N] ")?;
            stdout.flush()?;
            match lines.next().transpose()? {
                Some(answer) if wants_rematch(&answer) => {
                    game.restart();
                    message = None;
                    continue;
                }
                _ => return Ok(()),
            }
        }

        let width = game.grid().width();
        write!(
            stdout,
            "{}, choose a lane (1-{width}, q to quit): ",
            game.current_player().name()
        )?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }

        message = match parse_lane(&line, width) {
            Ok(lane) => match game.play(lane) {
                Ok(_) => None,
                Err(PlayError::GameOver) => None,
                Err(err) => Some(err.to_string()),
            },
            Err(err) => Some(err.to_string()),
        };
    }
}
