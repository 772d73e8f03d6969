//! Game module - turn sequencing around the grid
//!
//! [`Game`] owns the grid and the players. Each [`Game::play`] call places the
//! current player's token, checks for a win at the landing cell, and either ends
//! the game or hands the turn to the next player. Rejected moves leave both the
//! grid and the turn untouched.

use tracing::{debug, info, warn};

use crate::config::{ConfigError, GameConfig};
use crate::core::{Grid, PlaceError, Player, WinResult};
use crate::types::{Coord, Token};

/// Errors returned by [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error("the game is over, restart to play again")]
    GameOver,
}

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: usize, result: WinResult },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Index of the player who moved
    pub player: usize,
    /// Cell the token landed in
    pub at: Coord,
    /// Status after the move
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    players: Vec<Player>,
    run_length: usize,
    current: usize,
    opener: usize,
    status: GameStatus,
    last_move: Option<Coord>,
    move_count: u32,
}

impl Game {
    /// Build a two-player game with the default red and yellow tokens.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let tokens = [Token::player_one(), Token::player_two()];
        let players = config
            .player_names
            .iter()
            .zip(tokens)
            .map(|(name, token)| Player::new(name.clone(), token.label(), token))
            .collect();
        Self::with_players(config, players)
    }

    /// Build a game with an explicit player list, in turn order.
    pub fn with_players(config: &GameConfig, players: Vec<Player>) -> Result<Self, ConfigError> {
        config.validate()?;
        if players.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "at least 2 players are required, got {}",
                players.len()
            )));
        }
        for (i, a) in players.iter().enumerate() {
            if players[..i].iter().any(|b| b.token().same_color(&a.token())) {
                return Err(ConfigError::Validation(format!(
                    "player {} shares a token color with another player",
                    i + 1
                )));
            }
        }

        info!(
            width = config.width,
            length = config.length,
            run_length = config.run_length,
            players = players.len(),
            "game created"
        );

        Ok(Self {
            grid: Grid::new(config.width, config.length),
            players,
            run_length: config.run_length,
            current: 0,
            opener: 0,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        })
    }

    /// Drop the current player's token into the 1-based `lane`.
    pub fn play(&mut self, lane: usize) -> Result<Placement, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver);
        }

        let player = self.current;
        let token = self.players[player].token();
        let at = self.grid.place(token, lane).map_err(|err| {
            warn!(player, lane, code = err.code(), "move rejected");
            err
        })?;

        self.last_move = Some(at);
        self.move_count += 1;

        let result = self.grid.check_win(at, self.run_length);
        if result.won() {
            info!(
                player,
                name = self.players[player].name(),
                moves = self.move_count,
                axis = ?result.axis(),
                "game won"
            );
            self.status = GameStatus::Won {
                winner: player,
                result,
            };
        } else if self.grid.is_full() {
            info!(moves = self.move_count, "game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current = (self.current + 1) % self.players.len();
            debug!(next = self.current, "turn passed");
        }

        Ok(Placement {
            player,
            at,
            status: self.status.clone(),
        })
    }

    /// Start over on an empty grid. The player after the previous opener moves first.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.opener = (self.opener + 1) % self.players.len();
        self.current = self.opener;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_count = 0;
        info!(opener = self.opener, "game restarted");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player whose turn it is (or who made the final move once the game is over).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Winning tiles, empty unless the game was won.
    pub fn winning_tiles(&self) -> &[Coord] {
        match &self.status {
            GameStatus::Won { result, .. } => result.tiles(),
            _ => &[],
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match &self.status {
            GameStatus::Won { winner, .. } => self.players.get(*winner),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenColor;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        assert_eq!(game.current_index(), 0);
        game.play(1).unwrap();
        assert_eq!(game.current_index(), 1);
        game.play(1).unwrap();
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_rejects_duplicate_colors() {
        let players = vec![
            Player::new("a", "A", Token::new("A", TokenColor::RED)),
            Player::new("b", "B", Token::new("B", TokenColor::RED)),
        ];
        assert!(Game::with_players(&GameConfig::default(), players).is_err());
    }

    #[test]
    fn test_rejects_single_player() {
        let players = vec![Player::new("a", "A", Token::player_one())];
        assert!(Game::with_players(&GameConfig::default(), players).is_err());
    }

    #[test]
    fn test_three_players_rotate() {
        let players = vec![
            Player::new("a", "P1", Token::player_one()),
            Player::new("b", "P2", Token::player_two()),
            Player::new("c", "P3", Token::new("P3", TokenColor::new(80, 200, 120))),
        ];
        let mut game = Game::with_players(&GameConfig::default(), players).unwrap();
        for expected in [1, 2, 0] {
            game.play(1).unwrap();
            assert_eq!(game.current_index(), expected);
        }
    }
}
