use std::fmt;
use std::time::Duration;
use reqwest::Url;

/// Validated, placeholder-free connection settings for one evaluation.
#[derive(Debug, Clone)]
pub struct HubSettings {
    pub base_url: Url,
    pub project_name: String,
    pub credentials: Option<Credentials>,
    pub request_timeout: Duration,
    pub active_filter: String,
    pub new_filter: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
