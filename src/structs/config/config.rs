use serde::{Deserialize, Serialize};
use crate::enums::condition::Condition;
use crate::helpers::env_expander::EnvExpander;
use crate::structs::config::credential_config::CredentialConfig;
use crate::structs::config::hub_config::HubConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub hub: HubConfig,

    #[serde(default)]
    pub credential: Option<CredentialConfig>,

    /// Evaluated and reported in this order.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Config {
    /// Resolves `${VAR}` placeholders in every string field.
    pub fn expand_env(&mut self) {
        self.expand_with(&|name| std::env::var(name).ok());
    }

    pub fn expand_with(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        let expand = |value: &mut String| *value = EnvExpander::expand_with(value, lookup);

        expand(&mut self.hub.address);
        expand(&mut self.hub.port);
        expand(&mut self.hub.protocol);
        expand(&mut self.hub.project_name);
        expand(&mut self.hub.visibility_filter);
        expand(&mut self.hub.new_visibility_filter);

        if let Some(credential) = self.credential.as_mut() {
            expand(&mut credential.username);
            expand(&mut credential.password_env);
        }
    }
}
