//! Flat-file persistence for the catalog and the ledger.
//!
//! Each collection lives in its own JSON document wrapped in a small
//! versioned envelope. Both are written by `save` and read by `load`.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::RoomCatalog;
use crate::error::{DeskError, DeskResult};
use crate::ledger::ReservationLedger;
use crate::models::{Reservation, Room};
use crate::{log_error, log_info};

const ENABLE_LOGS: bool = true;

const CURRENT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomsDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    rooms: Vec<Room>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReservationsDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    reservations: Vec<Reservation>,
}

/// What `DataStore::load` found on disk.
#[derive(Debug)]
pub enum StoredState {
    /// Both documents were present and valid.
    Restored {
        catalog: RoomCatalog,
        ledger: ReservationLedger,
    },
    /// At least one document does not exist yet.
    Missing,
}

#[derive(Debug, Clone)]
pub struct DataStore {
    rooms_path: PathBuf,
    reservations_path: PathBuf,
}

impl DataStore {
    pub fn new(rooms_path: PathBuf, reservations_path: PathBuf) -> Self {
        Self {
            rooms_path,
            reservations_path,
        }
    }

    pub fn rooms_path(&self) -> &Path {
        &self.rooms_path
    }

    pub fn reservations_path(&self) -> &Path {
        &self.reservations_path
    }

    /// Write both documents. In-memory state is never touched, so a failed
    /// save can simply be retried.
    pub fn save(&self, catalog: &RoomCatalog, ledger: &ReservationLedger) -> DeskResult<()> {
        match self.write_documents(catalog, ledger) {
            Ok(()) => {
                log_info!(
                    "Saved {} rooms and {} reservations",
                    catalog.rooms().len(),
                    ledger.list_all().len()
                );
                Ok(())
            }
            Err(err) => {
                log_error!("Failed to save data: {err:#}");
                Err(DeskError::io(format!("{err:#}")))
            }
        }
    }

    /// Read both documents back. Corrupt or inconsistent data is an error;
    /// the caller decides what state to fall back to.
    pub fn load(&self) -> DeskResult<StoredState> {
        if !self.rooms_path.exists() || !self.reservations_path.exists() {
            return Ok(StoredState::Missing);
        }

        self.read_documents().map_err(|err| {
            log_error!("Failed to load data: {err:#}");
            DeskError::io(format!("{err:#}"))
        })
    }

    fn write_documents(&self, catalog: &RoomCatalog, ledger: &ReservationLedger) -> Result<()> {
        let saved_at = Utc::now();
        write_json(
            &self.rooms_path,
            &RoomsDocument {
                version: CURRENT_FORMAT_VERSION,
                saved_at,
                rooms: catalog.rooms().to_vec(),
            },
        )?;
        write_json(
            &self.reservations_path,
            &ReservationsDocument {
                version: CURRENT_FORMAT_VERSION,
                saved_at,
                reservations: ledger.list_all().to_vec(),
            },
        )
    }

    fn read_documents(&self) -> Result<StoredState> {
        let rooms: RoomsDocument = read_json(&self.rooms_path)?;
        check_version(rooms.version, &self.rooms_path)?;
        let reservations: ReservationsDocument = read_json(&self.reservations_path)?;
        check_version(reservations.version, &self.reservations_path)?;

        let catalog = RoomCatalog::from_rooms(rooms.rooms)
            .with_context(|| format!("invalid room data in {}", self.rooms_path.display()))?;
        let ledger = ReservationLedger::restore(reservations.reservations, &catalog)
            .with_context(|| {
                format!(
                    "invalid reservation data in {}",
                    self.reservations_path.display()
                )
            })?;

        log_info!(
            "Loaded {} rooms and {} reservations",
            catalog.rooms().len(),
            ledger.list_all().len()
        );
        Ok(StoredState::Restored { catalog, ledger })
    }
}

fn check_version(version: u32, path: &Path) -> Result<()> {
    if version > CURRENT_FORMAT_VERSION {
        bail!(
            "{} has format version {} but only {} is supported",
            path.display(),
            version,
            CURRENT_FORMAT_VERSION
        );
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data directory {}", parent.display()))?;
        }
    }
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingInput, RoomCategory};
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> DataStore {
        DataStore::new(dir.join("rooms.json"), dir.join("reservations.json"))
    }

    #[test]
    fn load_without_files_is_missing() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(matches!(store.load(), Ok(StoredState::Missing)));

        fs::write(store.rooms_path(), "{}").unwrap();
        assert!(matches!(store.load(), Ok(StoredState::Missing)));
    }

    #[test]
    fn single_room_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let catalog =
            RoomCatalog::from_rooms(vec![Room::new(101, RoomCategory::Standard, 100.0)]).unwrap();
        let ledger = ReservationLedger::new();

        store.save(&catalog, &ledger).unwrap();
        match store.load().unwrap() {
            StoredState::Restored {
                catalog: loaded_catalog,
                ledger: loaded_ledger,
            } => {
                assert_eq!(loaded_catalog, catalog);
                assert!(loaded_ledger.is_empty());
                assert_eq!(loaded_ledger.next_id(), 1);
            }
            StoredState::Missing => panic!("expected restored state"),
        }
    }

    #[test]
    fn round_trip_with_reservations() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path().join("nested").as_path());
        let mut catalog = RoomCatalog::with_default_rooms();
        let mut ledger = ReservationLedger::new();
        for (name, room) in [("Alice", "101"), ("Bob", "301"), ("Carol", "202")] {
            let input = BookingInput {
                customer_name: name.into(),
                room_number: room.into(),
                check_in: "2025-07-01".into(),
                check_out: "2025-07-03".into(),
            };
            ledger.book(&mut catalog, &input).unwrap();
        }
        ledger.record_payment(2).unwrap();
        ledger.cancel(&mut catalog, 1).unwrap();

        store.save(&catalog, &ledger).unwrap();
        let StoredState::Restored {
            catalog: loaded_catalog,
            ledger: loaded_ledger,
        } = store.load().unwrap()
        else {
            panic!("expected restored state");
        };
        assert_eq!(loaded_catalog, catalog);
        assert_eq!(loaded_ledger, ledger);
        assert_eq!(loaded_ledger.next_id(), 4);
    }

    #[test]
    fn corrupt_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store
            .save(&RoomCatalog::default(), &ReservationLedger::new())
            .unwrap();
        fs::write(store.reservations_path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(DeskError::Io(_))));
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store
            .save(&RoomCatalog::default(), &ReservationLedger::new())
            .unwrap();
        fs::write(
            store.rooms_path(),
            r#"{"version": 99, "savedAt": "2025-07-01T00:00:00Z", "rooms": []}"#,
        )
        .unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn save_into_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let store = store_in(&blocker);

        assert!(matches!(
            store.save(&RoomCatalog::default(), &ReservationLedger::new()),
            Err(DeskError::Io(_))
        ));
    }
}
