use serde::{Deserialize, Serialize};

/// A persisted operational or administrative report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub date: String,
    pub title: String,
    pub content: String,
    /// Assigned by the store at insert time.
    pub created_at: String,
}

/// Caller-supplied fields for a new report; id and created_at are assigned
/// by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub date: String,
    pub title: String,
    pub content: String,
}
