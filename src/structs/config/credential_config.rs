use serde::{Deserialize, Serialize};

/// Hub login. The password itself never lives in the config file, only the
/// name of the environment variable holding it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CredentialConfig {
    pub username: String,

    pub password_env: String,
}
