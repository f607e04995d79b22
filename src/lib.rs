pub mod catalog;
pub mod commands;
pub mod console;
pub mod desk;
pub mod error;
pub mod ledger;
pub mod models;
pub mod settings;
pub mod store;
mod utils;

use std::io;
use std::path::PathBuf;

use console::Console;
use desk::{FrontDesk, LoadOutcome};
use log::warn;
use settings::{SettingsStore, SETTINGS_FILE};

pub use catalog::RoomCatalog;
pub use error::{DeskError, DeskResult};
pub use ledger::{ReservationId, ReservationLedger};

pub fn run() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::info!("Hotel desk starting up...");

    let settings = SettingsStore::new(PathBuf::from(SETTINGS_FILE));
    let (mut desk, loaded) = FrontDesk::open(settings.data_store());
    match loaded {
        Ok(LoadOutcome::Restored) => log::info!(
            "Restored state from {}",
            desk.store().rooms_path().display()
        ),
        Ok(LoadOutcome::Seeded) => log::info!("Starting with the default rooms"),
        Err(err) => warn!("Could not load saved data ({err}); starting with the default rooms"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), settings.settings());
    console.run(&mut desk)?;

    log::info!("Hotel desk shutting down");
    Ok(())
}
