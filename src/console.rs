use game_accounts_domain::notification::{AccountEvent, ResultNotifier};

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl ResultNotifier for ConsoleNotifier {
    fn notify(&self, _username: &str, event: &AccountEvent) {
        println!("{event}");
    }
}
