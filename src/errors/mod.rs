use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error for '{field}': {message}")]
    Config {
        field: String,
        message: String,
    },

    // Hub session errors
    #[error("Authentication against the hub failed: {reason}")]
    Auth {
        reason: String,
    },

    // Network/API errors
    #[error("Network error during {operation}{}: {reason}", fmt_url_status(.url, .status_code))]
    Network {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Resolution errors
    #[error("No analysis found for project '{project}': {reason}")]
    AnalysisNotFound {
        project: String,
        reason: String,
    },

    // Payload errors
    #[error("{what} is unavailable: {reason}")]
    DataUnavailable {
        what: String,
        reason: String,
    },

    // Local file parsing errors
    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        reason: String,
    },

    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

fn fmt_url_status(url: &Option<String>, status_code: &Option<u16>) -> String {
    let mut out = String::new();
    if let Some(url) = url {
        out.push_str(&format!(" (URL: {})", url));
    }
    if let Some(code) = status_code {
        out.push_str(&format!(" (Status: {})", code));
    }
    out
}

impl GateError {
    pub fn config_error(field: &str, message: &str) -> Self {
        Self::Config {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn auth_error(reason: &str) -> Self {
        Self::Auth {
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::Network {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn analysis_not_found(project: &str, reason: &str) -> Self {
        Self::AnalysisNotFound {
            project: project.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn data_unavailable(what: &str, reason: &str) -> Self {
        Self::DataUnavailable {
            what: what.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io_error(operation: &str, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Auth { .. } => ErrorSeverity::Critical,
            Self::Network { .. } => ErrorSeverity::High,
            Self::AnalysisNotFound { .. } => ErrorSeverity::High,
            Self::DataUnavailable { .. } => ErrorSeverity::High,
            Self::Io { .. } => ErrorSeverity::Medium,
            Self::Parse { .. } => ErrorSeverity::Medium,
            Self::Config { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        let hint = match self {
            Self::Config { .. } => "Check the configuration file and run 'codesonar-gate validate'",
            Self::Auth { .. } => "Check the hub username and the password environment variable",
            Self::Network { .. } => "Check that the hub is reachable from the build agent",
            Self::AnalysisNotFound { .. } => "Make sure the analysis step ran and the project name matches the hub",
            Self::DataUnavailable { .. } => "The hub returned an empty or malformed response",
            Self::Parse { .. } => "Check the format and syntax of the input",
            Self::Io { .. } => "Check file permissions and path",
        };
        format!("[CodeSonar] {}\n💡 {}", self, hint)
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result type alias for gate operations
pub type GateResult<T> = Result<T, GateError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &GateError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<reqwest::Error> for GateError {
    fn from(error: reqwest::Error) -> Self {
        let reason = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else {
            error.to_string()
        };
        GateError::Network {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason,
        }
    }
}

impl From<quick_xml::DeError> for GateError {
    fn from(error: quick_xml::DeError) -> Self {
        GateError::DataUnavailable {
            what: "Hub response".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GateError {
    fn from(error: serde_json::Error) -> Self {
        GateError::Parse {
            content_type: "JSON".to_string(),
            reason: format!("{} (line {})", error, error.line()),
        }
    }
}

impl From<toml::de::Error> for GateError {
    fn from(error: toml::de::Error) -> Self {
        GateError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<std::io::Error> for GateError {
    fn from(error: std::io::Error) -> Self {
        GateError::Io {
            operation: "I/O operation".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_message_includes_url_and_status() {
        let error = GateError::network_error("GET analysis", Some("http://hub:7340/analysis/1.xml"), Some(503), "Service Unavailable");
        let message = error.to_string();
        assert!(message.contains("(URL: http://hub:7340/analysis/1.xml)"));
        assert!(message.contains("(Status: 503)"));
        assert!(message.contains("Service Unavailable"));
    }

    #[test]
    fn auth_errors_are_most_severe() {
        assert_eq!(GateError::auth_error("rejected").severity(), ErrorSeverity::Critical);
        assert!(GateError::config_error("hub.address", "cannot be empty").severity() < ErrorSeverity::High);
    }

    #[test]
    fn user_message_is_prefixed() {
        let error = GateError::analysis_not_found("demo", "project has no analyses");
        assert!(error.user_message().starts_with("[CodeSonar] No analysis found for project 'demo'"));
    }
}
