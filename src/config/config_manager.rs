use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{timeout_duration, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{GateError, GateResult};
use crate::structs::config::config::Config;
use crate::structs::field_error::FieldError;
use crate::structs::hub_settings::{Credentials, HubSettings};
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `path` is `None`, and
    /// expands environment placeholders. A missing default file yields an
    /// empty config, which validation then reports on.
    pub fn load(path: Option<&Path>) -> GateResult<Config> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !config_path.exists() {
            if explicit {
                return Err(GateError::io_error(
                    &format!("reading {}", config_path.display()),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "configuration file not found"),
                ));
            }
            log::warn!("⚠️ No configuration at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| GateError::io_error(&format!("reading {}", config_path.display()), e))?;
        let mut config: Config = toml::from_str(&content)?;
        config.expand_env();
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> GateResult<PathBuf> {
        let sample_config = r#"# CodeSonar Gate Configuration
#
# String values may reference environment variables as ${NAME}.

[hub]
address = "codesonar.example.com"
port = "7340"
# "http" or "https"
protocol = "http"
project_name = "${JOB_NAME}"
request_timeout_secs = 60
# Hub visibility filters used for the active and new warning sets
visibility_filter = "active"
new_visibility_filter = "new"

# Leave this section out for anonymous access
[credential]
username = "ci-bot"
password_env = "CODESONAR_PASSWORD"

# Conditions run in the order listed. Each one sets the build to
# warranted_result (SUCCESS, UNSTABLE or FAILURE) when its threshold is exceeded.
[[conditions]]
type = "red_alerts"
alert_limit = 1
warranted_result = "FAILURE"

[[conditions]]
type = "yellow_alerts"
alert_limit = 1
warranted_result = "UNSTABLE"

[[conditions]]
type = "warning_count_increase_new_only"
percentage = 5.0
warranted_result = "UNSTABLE"

[[conditions]]
type = "warning_count_increase_specified_score_and_higher"
rank_of_warnings = 30
warning_percentage = 5.0
warranted_result = "UNSTABLE"

[[conditions]]
type = "warning_count_absolute_specified_score_and_higher"
rank_of_warnings = 30
warning_count_threshold = 20
warranted_result = "UNSTABLE"

[[conditions]]
type = "warning_count_increase_overall"
percentage = 5.0
warranted_result = "UNSTABLE"

[[conditions]]
type = "cyclomatic_complexity"
max_cyclomatic_complexity = 30
warranted_result = "UNSTABLE"
"#;
        let config_file_path = path.map_or_else(Self::default_config_path, Path::to_path_buf);
        if let Some(dir) = config_file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| GateError::io_error(&format!("creating {}", dir.display()), e))?;
        }
        fs::write(&config_file_path, sample_config)
            .map_err(|e| GateError::io_error(&format!("writing {}", config_file_path.display()), e))?;
        println!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let hub = &config.hub;

        if hub.address.trim().is_empty() {
            errors.push(FieldError::new("hub.address", "Hub address cannot be empty."));
        }

        if hub.port.trim().is_empty() {
            errors.push(FieldError::new("hub.port", "Hub port cannot be empty."));
        } else if !matches!(hub.port.trim().parse::<u16>(), Ok(p) if p > 0) {
            errors.push(FieldError::new("hub.port", "Hub port must be a number between 1 and 65535."));
        }

        if hub.project_name.trim().is_empty() {
            errors.push(FieldError::new("hub.project_name", "Project name cannot be empty."));
        }

        if !matches!(hub.protocol.trim(), "http" | "https") {
            errors.push(FieldError::new("hub.protocol", "Protocol must be either http or https."));
        }

        if hub.request_timeout_secs == 0 {
            errors.push(FieldError::new("hub.request_timeout_secs", "Request timeout must be greater than zero."));
        }

        if hub.visibility_filter.trim().is_empty() {
            errors.push(FieldError::new("hub.visibility_filter", "Visibility filter cannot be empty."));
        }

        if hub.new_visibility_filter.trim().is_empty() {
            errors.push(FieldError::new("hub.new_visibility_filter", "New visibility filter cannot be empty."));
        }

        if let Some(credential) = &config.credential {
            if credential.username.trim().is_empty() {
                errors.push(FieldError::new("credential.username", "Username cannot be empty."));
            }
            if credential.password_env.trim().is_empty() {
                errors.push(FieldError::new("credential.password_env", "Password environment variable cannot be empty."));
            }
        }

        if config.conditions.is_empty() {
            warnings.push("No conditions configured; the build result will not be changed".to_string());
        }

        for (index, condition) in config.conditions.iter().enumerate() {
            errors.extend(condition.validate(index));
        }

        ValidationResult::from_parts(errors, warnings)
    }

    pub fn resolve_settings(config: &Config) -> GateResult<HubSettings> {
        Self::resolve_settings_with(config, &|name| std::env::var(name).ok())
    }

    /// Validates and turns the config into connection settings, failing with
    /// the first configuration error before any network access.
    pub fn resolve_settings_with(config: &Config, lookup: &dyn Fn(&str) -> Option<String>) -> GateResult<HubSettings> {
        let validation = Self::validate_config(config);
        if let Some(error) = validation.errors.first() {
            return Err(GateError::config_error(&error.field, &error.message));
        }

        let hub = &config.hub;
        let base_url = Url::parse(&format!("{}://{}:{}", hub.protocol.trim(), hub.address.trim(), hub.port.trim()))
            .map_err(|e| GateError::config_error("hub.address", &e.to_string()))?;

        let credentials = match &config.credential {
            Some(credential) => {
                let password = lookup(credential.password_env.trim()).ok_or_else(|| {
                    GateError::config_error(
                        "credential.password_env",
                        &format!("environment variable '{}' is not set", credential.password_env.trim()),
                    )
                })?;
                Some(Credentials {
                    username: credential.username.trim().to_string(),
                    password,
                })
            }
            None => None,
        };

        Ok(HubSettings {
            base_url,
            project_name: hub.project_name.trim().to_string(),
            credentials,
            request_timeout: timeout_duration(hub.request_timeout_secs),
            active_filter: hub.visibility_filter.trim().to_string(),
            new_filter: hub.new_visibility_filter.trim().to_string(),
        })
    }

}
