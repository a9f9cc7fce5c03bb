use std::sync::Arc;

use game_accounts_domain::simulation::run_simulation;
use log::{error, info};

use crate::{console::ConsoleNotifier, logs::LogSettings};

mod console;
mod logs;

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logs::init_logger(&LogSettings::from_env()) {
        eprintln!("{e}");
    }

    info!("Starting simulation");

    let accounts = match run_simulation(Arc::new(Box::new(ConsoleNotifier::new()))) {
        Ok(accounts) => accounts,
        Err(e) => {
            error!("Simulation aborted: {e}");
            std::process::exit(1);
        }
    };

    for account in &accounts {
        print!("{}", account.get_stats());
    }
}
