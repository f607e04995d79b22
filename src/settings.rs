use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::log_warn;
use crate::store::DataStore;

const ENABLE_LOGS: bool = true;

pub const SETTINGS_FILE: &str = "hotel-desk.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeskSettings {
    pub data_dir: PathBuf,
    pub rooms_file: String,
    pub reservations_file: String,
    pub default_check_in: String,
    pub default_check_out: String,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            rooms_file: "rooms.json".into(),
            reservations_file: "reservations.json".into(),
            default_check_in: "2025-07-01".into(),
            default_check_out: "2025-07-02".into(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: DeskSettings,
}

impl SettingsStore {
    /// Read settings from `path`. A missing file means defaults; a file that
    /// cannot be read or parsed is reported and also yields defaults.
    pub fn new(path: PathBuf) -> Self {
        let data = if path.exists() {
            match read_settings(&path) {
                Ok(data) => data,
                Err(err) => {
                    log_warn!("Ignoring settings file: {err:#}");
                    DeskSettings::default()
                }
            }
        } else {
            DeskSettings::default()
        };

        Self { path, data }
    }

    pub fn settings(&self) -> &DeskSettings {
        &self.data
    }

    /// Where the catalog and the ledger are persisted. A relative `dataDir`
    /// is resolved against the directory holding the settings file.
    pub fn data_store(&self) -> DataStore {
        let base = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let dir = base.join(&self.data.data_dir);
        DataStore::new(
            dir.join(&self.data.rooms_file),
            dir.join(&self.data.reservations_file),
        )
    }
}

fn read_settings(path: &Path) -> Result<DeskSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))
}
