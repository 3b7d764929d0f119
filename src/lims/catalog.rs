use serde::Deserialize;
use serde_json::Value;

use super::LimsClient;
use crate::error::AppError;

/// Catalog payload. The upstream embeds its own status code in the body,
/// distinct from the HTTP status. All fields lenient; absent lists default
/// to empty.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CatalogResponse {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    test_list: Vec<Value>,
    #[serde(default)]
    profile_test_list: Vec<Value>,
}

impl LimsClient {
    /// Fetch the test/profile catalog.
    ///
    /// Returns standalone tests followed by bundled profiles, as one
    /// sequence. Entries are kept opaque: this layer does no validation or
    /// reshaping beyond the concatenation.
    pub async fn fetch_catalog(&self, token: &str) -> Result<Vec<Value>, AppError> {
        let url = self.endpoint("getAllTestsAndProfiles");
        let resp = self
            .client
            .get(&url)
            .query(&[("token", token)])
            .send()
            .await
            .inspect_err(|e| tracing::error!("Catalog request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Catalog fetch failed: HTTP {status}");
            return Err(AppError::Transport(status.as_u16()));
        }

        let payload: CatalogResponse = resp
            .json()
            .await
            .inspect_err(|e| tracing::error!("Catalog response was not valid JSON: {e}"))?;

        if payload.code != Some(200) {
            let detail = payload
                .message
                .unwrap_or_else(|| format!("upstream code {:?}", payload.code));
            tracing::error!("Catalog fetch rejected by upstream: {detail}");
            return Err(AppError::Api(detail));
        }

        let mut entries = payload.test_list;
        entries.extend(payload.profile_test_list);
        tracing::debug!("Catalog fetch returned {} entries", entries.len());
        Ok(entries)
    }
}
