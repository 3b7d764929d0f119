use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a non-success HTTP status.
    #[error("Upstream returned HTTP {0}")]
    Transport(u16),

    /// HTTP succeeded but the payload-level status code signalled failure.
    #[error("LIMS API error: {0}")]
    Api(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
