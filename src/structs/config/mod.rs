pub mod config;
pub mod credential_config;
pub mod hub_config;
