use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use crate::config::constants::{
    SIGN_IN_FLAG_FIELD, SIGN_IN_LOG_OUT_COMPETITOR_FIELD, SIGN_IN_PASSWORD_FIELD, SIGN_IN_PATH, SIGN_IN_USERNAME_FIELD,
};
use crate::errors::{GateError, GateResult};
use crate::traits::http_transport::HttpTransport;

/// reqwest-backed transport. The client keeps a cookie store, which is where
/// the hub session lives after sign-in.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> GateResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(request_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> GateResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GateError::auth_error(&format!("hub rejected the request to {} (HTTP {})", url, status.as_u16()))
                }
                _ => GateError::network_error("GET", Some(url), Some(status.as_u16()), reason),
            });
        }

        Ok(response.text().await?)
    }

    async fn post_form(&self, url: &str, form: Vec<(String, String)>) -> GateResult<u16> {
        let response = self.client.post(url).form(&form).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Authenticated access to one hub. Create one per evaluation; the session
/// is not meant to be shared between builds.
pub struct HubClient {
    transport: Arc<dyn HttpTransport>,
}

impl HubClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub fn with_timeout(request_timeout: Duration) -> GateResult<Self> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(request_timeout)?)))
    }

    pub async fn fetch_text(&self, url: &str) -> GateResult<String> {
        log::debug!("Request sent to {}", url);
        self.transport.get_text(url).await.map_err(|e| {
            log::error!("[CodeSonar] Error on url: {}", url);
            e
        })
    }

    /// Signs in; on success the transport's session is authenticated for
    /// every later request to the same host.
    pub async fn authenticate(&self, base_url: &Url, username: &str, password: &str) -> GateResult<()> {
        let sign_in_url = base_url
            .join(SIGN_IN_PATH)
            .map_err(|e| GateError::config_error("hub.address", &e.to_string()))?;

        let form = vec![
            (SIGN_IN_USERNAME_FIELD.to_string(), username.to_string()),
            (SIGN_IN_PASSWORD_FIELD.to_string(), password.to_string()),
            (SIGN_IN_FLAG_FIELD.to_string(), "yes".to_string()),
            (SIGN_IN_LOG_OUT_COMPETITOR_FIELD.to_string(), "yes".to_string()),
        ];

        log::debug!("Signing in to {} as {}", sign_in_url, username);
        let status = self.transport.post_form(sign_in_url.as_str(), form).await?;

        if !(200..300).contains(&status) {
            return Err(GateError::auth_error(&format!("sign-in returned HTTP {}", status)));
        }

        log::info!("🔐 Authenticated against {} as {}", base_url, username);
        Ok(())
    }
}
