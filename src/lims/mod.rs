pub mod catalog;
pub mod centers;

use reqwest::Client;

use crate::error::AppError;

/// Supplies the referral-API token. The token is issued out of band by the
/// upstream operator; callers decide where it lives (env var, keychain, test
/// fixture).
pub trait TokenProvider {
    fn referral_api_token(&self) -> Option<String>;
}

/// Async client for the third-party laboratory-information system.
///
/// One request/response round trip per call: no retries, no caching, no
/// ordering between concurrent calls. The upstream's response conventions are
/// inconsistent (payload-level status codes, success sometimes signalled only
/// by the presence of a result field); each operation normalizes its own.
pub struct LimsClient {
    client: Client,
    base_url: String,
}

impl LimsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("labdesk")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
