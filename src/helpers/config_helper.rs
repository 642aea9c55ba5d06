use crate::config::constants::{
    DEFAULT_ACTIVE_FILTER, DEFAULT_ALERT_LIMIT, DEFAULT_MAX_CYCLOMATIC_COMPLEXITY, DEFAULT_NEW_FILTER,
    DEFAULT_PROTOCOL, DEFAULT_RANK_OF_WARNINGS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WARNING_COUNT_THRESHOLD,
    DEFAULT_WARNING_PERCENTAGE,
};
use crate::enums::build_result::BuildResult;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_protocol() -> String {
        DEFAULT_PROTOCOL.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_visibility_filter() -> String {
        DEFAULT_ACTIVE_FILTER.to_string()
    }

    pub fn default_new_visibility_filter() -> String {
        DEFAULT_NEW_FILTER.to_string()
    }

    pub fn default_alert_limit() -> i64 {
        DEFAULT_ALERT_LIMIT
    }

    pub fn default_percentage() -> f64 {
        DEFAULT_WARNING_PERCENTAGE
    }

    pub fn default_rank_of_warnings() -> i64 {
        DEFAULT_RANK_OF_WARNINGS
    }

    pub fn default_warning_count_threshold() -> i64 {
        DEFAULT_WARNING_COUNT_THRESHOLD
    }

    pub fn default_max_cyclomatic_complexity() -> i64 {
        DEFAULT_MAX_CYCLOMATIC_COMPLEXITY
    }

    pub fn default_warranted_result() -> BuildResult {
        BuildResult::Unstable
    }
}
