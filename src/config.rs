use std::path::PathBuf;

use directories::ProjectDirs;

use crate::lims::TokenProvider;

/// Production LIMS upstream. The browser build reached this host through a
/// dev-server reverse proxy; here it is a plain base URL, overridable with
/// `LABDESK_API_URL`.
pub const DEFAULT_API_BASE_URL: &str = "https://lims.cclabs.example.com/api";

/// Watermark sent on every referral-center request. The upstream expects a
/// "changed since" timestamp; a fixed value is sent so each call returns the
/// full center list rather than an incremental delta.
pub const REFERRAL_WATERMARK: &str = "2020-01-01 00:00:00";

pub fn api_base_url() -> String {
    std::env::var("LABDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "labdesk", "labdesk")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn store_path() -> anyhow::Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("labdesk.db"))
}

/// Token provider backed by the `LABDESK_REFERRAL_TOKEN` environment variable.
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn referral_api_token(&self) -> Option<String> {
        std::env::var("LABDESK_REFERRAL_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
    }
}
