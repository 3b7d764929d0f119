use serde::Deserialize;
use serde_json::Value;

use super::{LimsClient, TokenProvider};
use crate::config::REFERRAL_WATERMARK;
use crate::error::AppError;

/// Centers payload. Some upstream revisions omit the status code entirely and
/// signal success only by including `referralList`, so both fields are
/// optional and success is checked permissively.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CentersResponse {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    referral_list: Option<Vec<Value>>,
}

impl LimsClient {
    /// Fetch the referral center list.
    ///
    /// The token comes from the provider; without one this fails with a
    /// configuration error before any request is issued. The watermark is a
    /// fixed constant, so every call retrieves the full list.
    pub async fn fetch_referral_centers(
        &self,
        provider: &dyn TokenProvider,
    ) -> Result<Vec<Value>, AppError> {
        let token = provider.referral_api_token().ok_or_else(|| {
            tracing::error!("No referral API token configured");
            AppError::Config("no referral API token available".into())
        })?;

        let token_obj = serde_json::json!({
            "token": token,
            "lastUpdatedDateTime": REFERRAL_WATERMARK,
        });
        let form = reqwest::multipart::Form::new().text("tokenObj", token_obj.to_string());

        let url = self.endpoint("androidReferralListForCC");
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Centers request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Centers fetch failed: HTTP {status}");
            return Err(AppError::Transport(status.as_u16()));
        }

        let payload: CentersResponse = resp
            .json()
            .await
            .inspect_err(|e| tracing::error!("Centers response was not valid JSON: {e}"))?;

        if payload.code == Some(200) || payload.referral_list.is_some() {
            let centers = payload.referral_list.unwrap_or_default();
            tracing::debug!("Centers fetch returned {} centers", centers.len());
            Ok(centers)
        } else {
            let detail = payload
                .message
                .unwrap_or_else(|| format!("upstream code {:?}", payload.code));
            tracing::error!("Centers fetch rejected by upstream: {detail}");
            Err(AppError::Api(detail))
        }
    }
}
