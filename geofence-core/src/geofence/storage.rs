//! `SQLite` storage for the edited geofence.
//!
//! Keeps a small key/value table of preferences: the last geofence the user
//! edited (as JSON) and whether it has been registered with the platform
//! service. Everything stays on the device.

// SQLite operations need to hold the lock for the duration of the operation.
#![allow(clippy::significant_drop_tightening)]

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::data::GeofenceData;
use super::error::{GeofenceError, Result};

/// Preference key for the last edited geofence.
const GEOFENCE_DATA_KEY: &str = "geofence_data";

/// Preference key for the "geofences added" flag.
const GEOFENCES_ADDED_KEY: &str = "geofences_added";

/// `SQLite`-based storage for geofence preferences.
///
/// Thread-safe wrapper around a `SQLite` connection.
pub struct GeofenceStorage {
    conn: Mutex<Connection>,
}

impl GeofenceStorage {
    /// Creates a new storage instance at the given path.
    ///
    /// Creates the database file and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or initialized.
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Creates an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.initialize_schema()?;
        Ok(storage)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| GeofenceError::Storage(format!("Failed to acquire database lock: {e}")))
    }

    fn initialize_schema(&self) -> Result<()> {
        let conn = self.lock()?;

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;

        conn.execute(
            r"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
            params![key, value, Utc::now().timestamp()],
        )?;

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;

        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ==================== Geofence Data ====================

    /// Saves the last edited geofence, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails.
    pub fn save_geofence(&self, data: &GeofenceData) -> Result<()> {
        let json = data.to_json()?;
        self.put(GEOFENCE_DATA_KEY, &json)?;
        debug!("Saved geofence with radius {} m", data.radius);
        Ok(())
    }

    /// Loads the last edited geofence, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored JSON
    /// is corrupted.
    pub fn load_geofence(&self) -> Result<Option<GeofenceData>> {
        self.get(GEOFENCE_DATA_KEY)?
            .map(|json| GeofenceData::from_json(&json))
            .transpose()
    }

    /// Removes the saved geofence.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear_geofence(&self) -> Result<()> {
        self.delete(GEOFENCE_DATA_KEY)
    }

    // ==================== Registration Flag ====================

    /// Records whether the geofence is registered with the platform service.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set_geofences_added(&self, added: bool) -> Result<()> {
        self.put(GEOFENCES_ADDED_KEY, if added { "1" } else { "0" })
    }

    /// Whether the geofence was registered; `false` if never recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn geofences_added(&self) -> Result<bool> {
        Ok(self.get(GEOFENCES_ADDED_KEY)?.as_deref() == Some("1"))
    }
}

impl std::fmt::Debug for GeofenceStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeofenceStorage").finish_non_exhaustive()
    }
}
