use std::{fmt, sync::Arc};

use log::warn;
use uuid::Uuid;

use crate::{DomainError, DomainResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Standard { rating: u32 },
    Training,
}

/// A finished match as seen from one account. Immutable once built.
#[derive(Clone, Debug)]
pub struct Game {
    id: GameId,
    opponent_name: String,
    is_win: bool,
    kind: GameKind,
}

impl Game {
    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn opponent_name(&self) -> &str {
        &self.opponent_name
    }

    pub fn is_win(&self) -> bool {
        self.is_win
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Rating at stake: the stored rating for standard games, zero for training.
    pub fn calculate_rating(&self) -> i32 {
        match self.kind {
            GameKind::Standard { rating } => rating as i32,
            GameKind::Training => 0,
        }
    }

    pub fn result_label(&self) -> &'static str {
        if self.is_win { "Win" } else { "Lose" }
    }
}

pub type ArcGameFactory = Arc<Box<dyn GameFactory + Send + Sync>>;

pub trait GameFactory {
    fn create_standard(&self, opponent_name: &str, rating: i32, is_win: bool)
    -> DomainResult<Game>;
    fn create_training(&self, opponent_name: &str) -> Game;
}

pub struct GameFactoryImpl;

impl GameFactoryImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameFactory for GameFactoryImpl {
    fn create_standard(
        &self,
        opponent_name: &str,
        rating: i32,
        is_win: bool,
    ) -> DomainResult<Game> {
        if rating <= 0 {
            warn!("Rejected standard game against {opponent_name} with rating {rating}");
            return DomainError::invalid_argument("rating must be greater than 0");
        }
        Ok(Game {
            id: GameId::new(),
            opponent_name: opponent_name.to_string(),
            is_win,
            kind: GameKind::Standard {
                rating: rating as u32,
            },
        })
    }

    fn create_training(&self, opponent_name: &str) -> Game {
        Game {
            id: GameId::new(),
            opponent_name: opponent_name.to_string(),
            is_win: false,
            kind: GameKind::Training,
        }
    }
}
