use crate::types::Token;

/// A participant: display name, short tag, and the token they drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    tag: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            token,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn token(&self) -> Token {
        self.token
    }
}
