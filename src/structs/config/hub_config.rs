use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HubConfig {
    #[serde(default)]
    pub address: String,

    /// Kept as text so it can carry `${VAR}` placeholders.
    #[serde(default)]
    pub port: String,

    #[serde(default = "ConfigHelper::default_protocol")]
    pub protocol: String,

    #[serde(default)]
    pub project_name: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_visibility_filter")]
    pub visibility_filter: String,

    #[serde(default = "ConfigHelper::default_new_visibility_filter")]
    pub new_visibility_filter: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            port: String::new(),
            protocol: ConfigHelper::default_protocol(),
            project_name: String::new(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            visibility_filter: ConfigHelper::default_visibility_filter(),
            new_visibility_filter: ConfigHelper::default_new_visibility_filter(),
        }
    }
}
