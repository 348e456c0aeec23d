//! Snapshot persistence
//!
//! The registries serialize to a single versioned JSON record with
//! explicit field names. Round-tripping within the same build is the
//! only format guarantee.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use renta_domain::model::{Customer, Vehicle};
use renta_types::{Result, SnapshotError};

use crate::{AccountDirectory, VehicleCatalog};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time dump of the catalog and the directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub vehicles: Vec<Vehicle>,
    pub customers: Vec<Customer>,
}

impl Snapshot {
    /// Capture the current state of both registries.
    pub fn capture(catalog: &VehicleCatalog, directory: &AccountDirectory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            vehicles: catalog.list().to_vec(),
            customers: directory.customers().cloned().collect(),
        }
    }

    /// Rebuild both registries from this snapshot.
    pub fn restore(self) -> Result<(VehicleCatalog, AccountDirectory)> {
        let catalog = VehicleCatalog::from_vehicles(self.vehicles)?;
        let directory = AccountDirectory::from_customers(self.customers)?;
        Ok((catalog, directory))
    }
}

/// File-backed snapshot location.
pub struct SnapshotStore {
    store_path: PathBuf,
}

impl SnapshotStore {
    /// Create or reuse a store directory; the snapshot lives at
    /// `<dir>/snapshot.json`.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("snapshot.json"),
        })
    }

    /// Point the store at an exact file path (export/import).
    pub fn at_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    pub fn exists(&self) -> bool {
        self.store_path.exists()
    }

    /// Load and version-check a snapshot.
    pub fn load(&self) -> Result<Snapshot> {
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)
            .map_err(|e| SnapshotError::Corrupted(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version).into());
        }
        Ok(snapshot)
    }

    /// Write a snapshot to disk.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, snapshot)
            .map_err(|e| SnapshotError::IoError(e.to_string()))?;
        Ok(())
    }
}
