use std::fmt;

use log::{debug, info, warn};

use crate::{
    DomainError, DomainResult,
    game::{ArcGameFactory, Game, GameFactory, GameId},
    notification::{AccountEvent, ArcResultNotifier, ResultNotifier},
};

const MIN_RATING: i32 = 1;

const TABLE_RULE: &str = "-------------------------------------------------";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountPolicy {
    Standard,
    PayToWin,
}

impl AccountPolicy {
    fn initial_rating(&self, base_rating: i32) -> Option<i32> {
        match self {
            AccountPolicy::Standard => Some(base_rating),
            AccountPolicy::PayToWin => base_rating.checked_mul(2),
        }
    }

    fn loss_deduction(&self, game_rating: i32) -> i32 {
        match self {
            AccountPolicy::Standard => game_rating,
            AccountPolicy::PayToWin => game_rating / 2,
        }
    }
}

pub struct Account {
    username: String,
    current_rating: i32,
    game_count: u32,
    history: Vec<Game>,
    policy: AccountPolicy,
    game_factory: ArcGameFactory,
    notifier: ArcResultNotifier,
}

impl Account {
    pub fn new(
        username: &str,
        base_rating: i32,
        policy: AccountPolicy,
        game_factory: ArcGameFactory,
        notifier: ArcResultNotifier,
    ) -> DomainResult<Self> {
        if username.is_empty() {
            warn!("Rejected account with empty username");
            return DomainError::invalid_argument("username must not be empty");
        }
        if base_rating < MIN_RATING {
            warn!("Rejected account {username} with base rating {base_rating}");
            return DomainError::invalid_argument(format!(
                "rating must be at least {MIN_RATING}"
            ));
        }
        let Some(current_rating) = policy.initial_rating(base_rating) else {
            warn!("Rejected account {username}: base rating {base_rating} out of range");
            return DomainError::invalid_argument("rating out of range");
        };
        info!("Created {policy:?} account {username} with rating {current_rating}");
        Ok(Self {
            username: username.to_string(),
            current_rating,
            game_count: 0,
            history: Vec::new(),
            policy,
            game_factory,
            notifier,
        })
    }

    pub fn standard(
        username: &str,
        base_rating: i32,
        game_factory: ArcGameFactory,
        notifier: ArcResultNotifier,
    ) -> DomainResult<Self> {
        Self::new(
            username,
            base_rating,
            AccountPolicy::Standard,
            game_factory,
            notifier,
        )
    }

    pub fn pay_to_win(
        username: &str,
        base_rating: i32,
        game_factory: ArcGameFactory,
        notifier: ArcResultNotifier,
    ) -> DomainResult<Self> {
        Self::new(
            username,
            base_rating,
            AccountPolicy::PayToWin,
            game_factory,
            notifier,
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_rating(&self) -> i32 {
        self.current_rating
    }

    /// Number of won games. Losses and training games only extend the history.
    pub fn game_count(&self) -> u32 {
        self.game_count
    }

    pub fn history(&self) -> &[Game] {
        &self.history
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    /// Returns the rating gained.
    pub fn win_game(&mut self, game: Game) -> i32 {
        let rating = game.calculate_rating();
        self.current_rating = self.current_rating.saturating_add(rating);
        self.game_count += 1;
        debug!(
            "{} won against {} (+{rating}, now {})",
            self.username,
            game.opponent_name(),
            self.current_rating
        );
        self.notify(AccountEvent::Won {
            opponent: game.opponent_name().to_string(),
            rating,
            current_rating: self.current_rating,
        });
        self.history.push(game);
        rating
    }

    /// Returns the rating actually deducted, zero when the floor guard kicked in.
    pub fn lose_game(&mut self, game: Game) -> i32 {
        let mut deduction = self.policy.loss_deduction(game.calculate_rating());
        if self.current_rating - deduction < MIN_RATING {
            warn!(
                "{} would drop to {}, keeping rating at {}",
                self.username,
                self.current_rating - deduction,
                self.current_rating
            );
            self.notify(AccountEvent::RatingFloorReached);
            deduction = 0;
        } else {
            self.current_rating -= deduction;
        }
        debug!(
            "{} lost against {} (-{deduction}, now {})",
            self.username,
            game.opponent_name(),
            self.current_rating
        );
        self.notify(AccountEvent::Lost {
            opponent: game.opponent_name().to_string(),
            rating: deduction,
            current_rating: self.current_rating,
        });
        self.history.push(game);
        deduction
    }

    pub fn play_training(&mut self, opponent_name: &str) {
        let game = self.game_factory.create_training(opponent_name);
        debug!("{} trained against {opponent_name}", self.username);
        self.notify(AccountEvent::TrainingPlayed {
            opponent: opponent_name.to_string(),
        });
        self.history.push(game);
    }

    pub fn get_stats(&self) -> StatsReport {
        StatsReport {
            username: self.username.clone(),
            rows: self
                .history
                .iter()
                .map(|game| StatsRow {
                    opponent: game.opponent_name().to_string(),
                    result: game.result_label(),
                    rating: game.calculate_rating(),
                    id: game.id(),
                })
                .collect(),
        }
    }

    fn notify(&self, event: AccountEvent) {
        self.notifier.notify(&self.username, &event);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsRow {
    pub opponent: String,
    pub result: &'static str,
    pub rating: i32,
    pub id: GameId,
}

/// Play-ordered history table of one account.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsReport {
    pub username: String,
    pub rows: Vec<StatsRow>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Game statistics for player {}:", self.username)?;
        writeln!(f, "{TABLE_RULE}")?;
        writeln!(f, "| Opponent     | Result  | Rating | Game ID |")?;
        writeln!(f, "{TABLE_RULE}")?;
        for row in &self.rows {
            writeln!(
                f,
                "| {:<12} | {:<7} | {:<6} | {} |",
                row.opponent, row.result, row.rating, row.id
            )?;
        }
        writeln!(f, "{TABLE_RULE}")
    }
}
