use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod contacts;
mod error;
mod schema;
mod shared;

pub use error::{StoreError, StoreResult};
pub use schema::SCHEMA_VERSION;
pub use shared::SharedStore;

/// Fixed file name of the contacts database.
pub const DATABASE_FILE_NAME: &str = "ContactManager.db";

/// Owns the SQLite connection holding the `contacts` table.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Open the database at `path`, creating the file, its parent directories
    /// and the schema if needed. Safe to call on every start.
    pub fn open_at(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let init_err = |source| StoreError::Initialization {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(init_err)?;
        let store = Self { conn };
        store.migrate().map_err(init_err)?;

        info!(path = %path.display(), "contact database ready");
        Ok(store)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> StoreResult<Self> {
        let init_err = |source| StoreError::Initialization {
            path: PathBuf::from(":memory:"),
            source,
        };

        let conn = Connection::open_in_memory().map_err(init_err)?;
        let store = Self { conn };
        store.migrate().map_err(init_err)?;
        Ok(store)
    }

    fn migrate(&self) -> rusqlite::Result<()> {
        let version = self.get_schema_version()?;

        if version == 0 {
            self.conn
                .execute_batch(&format!("BEGIN TRANSACTION; {} COMMIT;", schema::SCHEMA_V1))?;
            self.set_schema_version(SCHEMA_VERSION)?;
            debug!(version = SCHEMA_VERSION, "applied schema");
        }

        Ok(())
    }

    fn get_schema_version(&self) -> rusqlite::Result<i32> {
        let result: rusqlite::Result<i32> =
            self.conn
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(rusqlite::Error::SqliteFailure(err, msg)) => {
                // "no such table" is error code 1 (SQLITE_ERROR)
                if err.code == rusqlite::ErrorCode::Unknown
                    && msg.as_ref().is_some_and(|m| m.contains("no such table"))
                {
                    Ok(0)
                } else {
                    Err(rusqlite::Error::SqliteFailure(err, msg))
                }
            }
            Err(e) => Err(e),
        }
    }

    fn set_schema_version(&self, version: i32) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
            [version],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let store = ContactStore::open_memory().unwrap();
        assert_eq!(store.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_contacts_table_exists() {
        let store = ContactStore::open_memory().unwrap();

        let tables: Vec<String> = store
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"contacts".to_string()));
        assert!(tables.contains(&"schema_version".to_string()));
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let store = ContactStore::open_memory().unwrap();
        store.migrate().unwrap();
        store.migrate().unwrap();
        assert_eq!(store.get_schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_open_at_unopenable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file
        let result = ContactStore::open_at(dir.path());
        assert!(matches!(result, Err(StoreError::Initialization { .. })));
    }
}
