use rusqlite::params;

use super::ReportStore;
use super::models::{NewReport, Report};
use crate::error::AppError;

impl ReportStore {
    /// Store a report. Best-effort: returns `true` iff the store assigned a
    /// document id; any failure is logged and absorbed into `false`.
    pub fn create_report(&self, report: &NewReport) -> bool {
        match self.insert_into("reports", report) {
            Ok(id) => {
                tracing::debug!("Stored report {id}");
                true
            }
            Err(e) => {
                tracing::error!("Failed to store report: {e}");
                false
            }
        }
    }

    /// Same contract as `create_report`, targeting the `admin_reports`
    /// collection. Administrative reports must never be reachable through
    /// the regular collection.
    pub fn create_admin_report(&self, report: &NewReport) -> bool {
        match self.insert_into("admin_reports", report) {
            Ok(id) => {
                tracing::debug!("Stored admin report {id}");
                true
            }
            Err(e) => {
                tracing::error!("Failed to store admin report: {e}");
                false
            }
        }
    }

    fn insert_into(&self, collection: &str, report: &NewReport) -> rusqlite::Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            &format!("INSERT INTO {collection} (id, date, title, content) VALUES (?1, ?2, ?3, ?4)"),
            params![id, report.date, report.title, report.content],
        )?;
        Ok(id)
    }

    /// Fetch a report by id. Unlike the write paths this raises: callers
    /// need to tell "no such report" apart from "retrieved".
    pub fn get_report(&self, id: &str) -> Result<Report, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, date, title, content, created_at FROM reports WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], |row| {
            Ok(Report {
                id: row.get(0)?,
                date: row.get(1)?,
                title: row.get(2)?,
                content: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(AppError::ReportNotFound(id.to_string())),
        }
    }

    /// Delete a report by id. Returns `true` unless the delete statement
    /// itself fails. A `false` does not prove the row still exists; the
    /// delete may have applied before the failure was observed.
    pub fn delete_report(&self, id: &str) -> bool {
        let conn = self.conn.lock().unwrap();
        match conn.execute("DELETE FROM reports WHERE id = ?1", params![id]) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Failed to delete report {id}: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> ReportStore {
        ReportStore::open_in_memory().expect("Failed to create test store")
    }

    fn sample_report() -> NewReport {
        NewReport {
            date: "2024-03-01T09:00:00Z".into(),
            title: "Monthly sample intake".into(),
            content: "412 samples processed".into(),
        }
    }

    /// Drops the collection so the next statement against it fails.
    fn break_collection(store: &ReportStore, collection: &str) {
        let conn = store.conn.lock().unwrap();
        conn.execute_batch(&format!("DROP TABLE {collection}"))
            .unwrap();
    }

    #[test]
    fn test_create_then_get_roundtrip() {
        let store = test_store();
        assert!(store.create_report(&sample_report()));

        let conn = store.conn.lock().unwrap();
        let id: String = conn
            .query_row("SELECT id FROM reports", [], |row| row.get(0))
            .unwrap();
        drop(conn);

        let fetched = store.get_report(&id).unwrap();
        assert_eq!(fetched.title, "Monthly sample intake");
        assert_eq!(fetched.content, "412 samples processed");
        assert_eq!(fetched.date, "2024-03-01T09:00:00Z");
        assert!(!fetched.created_at.is_empty());
    }

    #[test]
    fn test_create_swallows_store_failure() {
        let store = test_store();
        break_collection(&store, "reports");
        assert!(!store.create_report(&sample_report()));
    }

    #[test]
    fn test_admin_reports_are_isolated() {
        let store = test_store();
        assert!(store.create_admin_report(&sample_report()));

        let conn = store.conn.lock().unwrap();
        let admin_id: String = conn
            .query_row("SELECT id FROM admin_reports", [], |row| row.get(0))
            .unwrap();
        let regular: i64 = conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .unwrap();
        drop(conn);

        assert_eq!(regular, 0);
        // Not reachable through the regular collection either.
        assert!(matches!(
            store.get_report(&admin_id),
            Err(AppError::ReportNotFound(_))
        ));
    }

    #[test]
    fn test_admin_create_swallows_store_failure() {
        let store = test_store();
        break_collection(&store, "admin_reports");
        assert!(!store.create_admin_report(&sample_report()));
    }

    #[test]
    fn test_get_missing_report_raises_not_found() {
        let store = test_store();
        match store.get_report("missing") {
            Err(AppError::ReportNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_existing_returns_true() {
        let store = test_store();
        assert!(store.create_report(&sample_report()));
        let conn = store.conn.lock().unwrap();
        let id: String = conn
            .query_row("SELECT id FROM reports", [], |row| row.get(0))
            .unwrap();
        drop(conn);

        assert!(store.delete_report(&id));
        assert!(matches!(
            store.get_report(&id),
            Err(AppError::ReportNotFound(_))
        ));
    }

    #[test]
    fn test_delete_is_best_effort() {
        let store = test_store();
        // No matching row still counts as success.
        assert!(store.delete_report("missing"));

        break_collection(&store, "reports");
        assert!(!store.delete_report("missing"));
    }
}
