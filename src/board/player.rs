//! Players and their tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Identity of one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the opposing player.
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns 1 or 2.
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Parses a player from its number.
    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Row this player's token starts on.
    pub const fn start_row(self) -> i32 {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 8,
        }
    }

    /// Row this player must reach to win.
    pub const fn goal_row(self) -> i32 {
        match self {
            PlayerId::One => 8,
            PlayerId::Two => 0,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// A player's piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    position: Coord,
}

impl Token {
    pub fn new(position: Coord) -> Self {
        Token { position }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }
}

/// Per-side record: identity, remaining barriers, and the owned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    barriers_remaining: u8,
    token: Token,
}

impl Player {
    /// Creates a player with its token on the starting square.
    pub fn new(id: PlayerId, barriers: u8, start: Coord) -> Self {
        Player {
            id,
            barriers_remaining: barriers,
            token: Token::new(start),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn barriers_remaining(&self) -> u8 {
        self.barriers_remaining
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub(crate) fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }

    /// Spends one barrier. Returns false if none were left.
    pub(crate) fn spend_barrier(&mut self) -> bool {
        match self.barriers_remaining.checked_sub(1) {
            Some(n) => {
                self.barriers_remaining = n;
                true
            }
            None => false,
        }
    }
}
