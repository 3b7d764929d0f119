pub mod migrations;
pub mod models;
pub mod reports;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

/// Document store for report records.
///
/// Callers never touch the connection directly. Writes and deletes are
/// best-effort (boolean results, failures logged and absorbed); reads raise,
/// so "no such report" stays distinguishable from "retrieved". Constructed
/// once by the application and passed in wherever reports are handled.
pub struct ReportStore {
    conn: Mutex<Connection>,
}

impl ReportStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_run() {
        let store = ReportStore::open_in_memory().unwrap();
        let conn = store.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert!(count >= 1);
    }

    #[test]
    fn test_collections_exist() {
        let store = ReportStore::open_in_memory().unwrap();
        let conn = store.conn.lock().unwrap();
        for table in ["reports", "admin_reports"] {
            let n: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(n, 1, "missing table {table}");
        }
    }
}
