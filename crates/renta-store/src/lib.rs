//! In-memory registries and snapshot persistence for the rental desk

mod catalog;
mod directory;
mod snapshot;

pub use catalog::VehicleCatalog;
pub use directory::AccountDirectory;
pub use snapshot::{Snapshot, SnapshotStore, SNAPSHOT_VERSION};
