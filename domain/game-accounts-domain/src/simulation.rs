use std::sync::Arc;

use log::info;

use crate::{
    DomainResult,
    account::Account,
    game::{ArcGameFactory, GameFactory, GameFactoryImpl},
    notification::ArcResultNotifier,
};

const BASE_RATING: i32 = 100;
const STAKE: i32 = 25;

/// Plays the fixed demo script and hands back the accounts in creation order.
pub fn run_simulation(notifier: ArcResultNotifier) -> DomainResult<Vec<Account>> {
    let factory: ArcGameFactory = Arc::new(Box::new(GameFactoryImpl::new()));

    let mut player1 =
        Account::standard("Player1", BASE_RATING, factory.clone(), notifier.clone())?;
    let mut player2 =
        Account::pay_to_win("Player2", BASE_RATING, factory.clone(), notifier.clone())?;
    let mut player3 = Account::standard("Player3", BASE_RATING, factory.clone(), notifier)?;

    let training = factory.create_training(player2.username());
    player1.play_training(training.opponent_name());

    player1.lose_game(factory.create_standard("Player3", STAKE, false)?);
    player2.lose_game(factory.create_standard("Player1", STAKE, false)?);
    player2.win_game(factory.create_standard("Player3", STAKE, true)?);
    player3.lose_game(factory.create_standard("Player1", STAKE, false)?);
    player3.lose_game(factory.create_standard("Player2", STAKE, false)?);

    info!("Simulation finished");
    Ok(vec![player1, player2, player3])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        account::AccountPolicy,
        notification::{AccountEvent, MockResultNotifier},
    };

    use super::*;

    #[test]
    fn test_simulation_end_state() {
        let mock = MockResultNotifier::default();
        let accounts = run_simulation(Arc::new(Box::new(mock.clone()))).unwrap();
        assert_eq!(accounts.len(), 3);

        let summary: Vec<(&str, AccountPolicy, i32, u32, usize)> = accounts
            .iter()
            .map(|a| {
                (
                    a.username(),
                    a.policy(),
                    a.current_rating(),
                    a.game_count(),
                    a.history().len(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Player1", AccountPolicy::Standard, 75, 0, 2),
                ("Player2", AccountPolicy::PayToWin, 213, 1, 2),
                ("Player3", AccountPolicy::Standard, 50, 0, 2),
            ]
        );
    }

    #[test]
    fn test_simulation_events() {
        let mock = MockResultNotifier::default();
        run_simulation(Arc::new(Box::new(mock.clone()))).unwrap();

        let lines: Vec<String> = mock
            .get_events()
            .iter()
            .map(|(_, e)| e.to_string())
            .collect();
        assert_eq!(
            lines,
            vec![
                "Training game against Player2. No rating change.",
                "Lose against Player3 with 25. Current rating: 75",
                "Lose against Player1 with 12. Current rating: 188",
                "Win against Player3 with 25. Current rating: 213",
                "Lose against Player1 with 25. Current rating: 75",
                "Lose against Player2 with 25. Current rating: 50",
            ]
        );
        assert!(
            !mock
                .get_events()
                .iter()
                .any(|(_, e)| *e == AccountEvent::RatingFloorReached)
        );
    }

    #[test]
    fn test_simulation_ids_unique_across_accounts() {
        let mock = MockResultNotifier::default();
        let accounts = run_simulation(Arc::new(Box::new(mock))).unwrap();
        let ids: HashSet<_> = accounts
            .iter()
            .flat_map(|a| a.history().iter().map(|g| g.id()))
            .collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_simulation_reports() {
        let mock = MockResultNotifier::default();
        let accounts = run_simulation(Arc::new(Box::new(mock))).unwrap();
        let player1 = accounts[0].get_stats();
        assert_eq!(
            player1
                .rows
                .iter()
                .map(|r| (r.opponent.as_str(), r.result, r.rating))
                .collect::<Vec<_>>(),
            vec![("Player2", "Lose", 0), ("Player3", "Lose", 25)]
        );
        let player2 = accounts[1].get_stats();
        assert_eq!(player2.rows[1].result, "Win");
    }
}
