use std::time::Duration;

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_ACTIVE_FILTER: &str = "active";
pub const DEFAULT_NEW_FILTER: &str = "new";

pub const CONFIG_DIR_NAME: &str = ".codesonar-gate";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_OUTCOME_FILE: &str = "codesonar-outcome.json";

pub const SIGN_IN_PATH: &str = "/sign_in.html";
pub const SIGN_IN_USERNAME_FIELD: &str = "sif_username";
pub const SIGN_IN_PASSWORD_FIELD: &str = "sif_password";
pub const SIGN_IN_FLAG_FIELD: &str = "sif_sign_in";
pub const SIGN_IN_LOG_OUT_COMPETITOR_FIELD: &str = "sif_log_out_competitor";

pub const PROJECT_SEARCH_PATH: &str = "/project_search.xml";
pub const FILTER_QUERY_PARAMETER: &str = "filter";
pub const CYCLOMATIC_COMPLEXITY_METRIC: &str = "Cyclomatic Complexity";

pub const DEFAULT_ALERT_LIMIT: i64 = 1;
pub const DEFAULT_WARNING_PERCENTAGE: f64 = 5.0;
pub const DEFAULT_RANK_OF_WARNINGS: i64 = 30;
pub const DEFAULT_WARNING_COUNT_THRESHOLD: i64 = 20;
pub const DEFAULT_MAX_CYCLOMATIC_COMPLEXITY: i64 = 30;

pub const EXIT_CODE_FATAL: i32 = 1;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
