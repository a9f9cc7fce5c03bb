use std::{
    fmt,
    sync::{Arc, Mutex},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountEvent {
    Won {
        opponent: String,
        rating: i32,
        current_rating: i32,
    },
    Lost {
        opponent: String,
        rating: i32,
        current_rating: i32,
    },
    RatingFloorReached,
    TrainingPlayed {
        opponent: String,
    },
}

impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEvent::Won {
                opponent,
                rating,
                current_rating,
            } => write!(
                f,
                "Win against {opponent} with {rating}. Current rating: {current_rating}"
            ),
            AccountEvent::Lost {
                opponent,
                rating,
                current_rating,
            } => write!(
                f,
                "Lose against {opponent} with {rating}. Current rating: {current_rating}"
            ),
            AccountEvent::RatingFloorReached => write!(
                f,
                "Rating cannot drop below 1, your rating stays unchanged."
            ),
            AccountEvent::TrainingPlayed { opponent } => {
                write!(f, "Training game against {opponent}. No rating change.")
            }
        }
    }
}

pub type ArcResultNotifier = Arc<Box<dyn ResultNotifier + Send + Sync>>;

/// Sink for the result lines an account emits while games are recorded.
pub trait ResultNotifier {
    fn notify(&self, username: &str, event: &AccountEvent);
}

#[derive(Clone, Default)]
pub struct MockResultNotifier {
    pub sent_events: Arc<Mutex<Vec<(String, AccountEvent)>>>,
}

#[allow(unused)]
impl MockResultNotifier {
    pub fn get_events(&self) -> Vec<(String, AccountEvent)> {
        self.sent_events.lock().unwrap().clone()
    }

    pub fn get_events_for(&self, username: &str) -> Vec<AccountEvent> {
        self.get_events()
            .into_iter()
            .filter(|(u, _)| u == username)
            .map(|(_, e)| e)
            .collect()
    }
}

impl ResultNotifier for MockResultNotifier {
    fn notify(&self, username: &str, event: &AccountEvent) {
        self.sent_events
            .lock()
            .unwrap()
            .push((username.to_string(), event.clone()));
    }
}
