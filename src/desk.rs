use crate::catalog::RoomCatalog;
use crate::error::DeskResult;
use crate::ledger::{ReservationId, ReservationLedger};
use crate::models::{BookingInput, Reservation};
use crate::store::{DataStore, StoredState};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// How a successful `FrontDesk::load` arrived at its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored,
    Seeded,
}

/// Owns the catalog, the ledger and where they are persisted. Every command
/// runs against one of these.
#[derive(Debug)]
pub struct FrontDesk {
    catalog: RoomCatalog,
    ledger: ReservationLedger,
    store: DataStore,
}

impl FrontDesk {
    /// A desk with the default rooms and no reservations. Nothing is read
    /// from disk until `load` is called.
    pub fn new(store: DataStore) -> Self {
        Self {
            catalog: RoomCatalog::with_default_rooms(),
            ledger: ReservationLedger::new(),
            store,
        }
    }

    /// Build a desk and load whatever was last saved. A failed load still
    /// yields a usable, default-seeded desk alongside the error.
    pub fn open(store: DataStore) -> (Self, DeskResult<LoadOutcome>) {
        let mut desk = Self::new(store);
        let outcome = desk.load();
        (desk, outcome)
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn book(&mut self, input: &BookingInput) -> DeskResult<ReservationId> {
        self.ledger.book(&mut self.catalog, input)
    }

    pub fn record_payment(&mut self, id: ReservationId) -> DeskResult<()> {
        self.ledger.record_payment(id)
    }

    pub fn cancel(&mut self, id: ReservationId) -> DeskResult<Reservation> {
        self.ledger.cancel(&mut self.catalog, id)
    }

    pub fn save(&self) -> DeskResult<()> {
        self.store.save(&self.catalog, &self.ledger)
    }

    /// Replace in-memory state with what is on disk.
    ///
    /// Missing files reset to the default seed and count as success. Corrupt
    /// files also reset to the default seed, but the error is returned.
    pub fn load(&mut self) -> DeskResult<LoadOutcome> {
        match self.store.load() {
            Ok(StoredState::Restored { catalog, ledger }) => {
                self.catalog = catalog;
                self.ledger = ledger;
                Ok(LoadOutcome::Restored)
            }
            Ok(StoredState::Missing) => {
                log_info!("No saved data found; starting from the default rooms");
                self.reset();
                Ok(LoadOutcome::Seeded)
            }
            Err(err) => {
                log_warn!("Falling back to the default rooms after a failed load");
                self.reset();
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.catalog = RoomCatalog::with_default_rooms();
        self.ledger = ReservationLedger::new();
    }
}
