use serde::{Deserialize, Serialize};
use crate::enums::alert_color::AlertColor;
use crate::enums::build_result::BuildResult;
use crate::errors::{GateError, GateResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::analysis::analysis_data::AnalysisData;
use crate::structs::condition_evaluation::ConditionEvaluation;
use crate::structs::field_error::FieldError;

pub const CURRENT_BUILD_DATA_NOT_AVAILABLE: &str = "Current build data not available";
pub const PREVIOUS_BUILD_DATA_NOT_AVAILABLE: &str = "Previous build data not available, nothing to compare against";

/// A pass/fail rule over the fetched analysis data.
///
/// Every variant reads the immutable [`AnalysisData`] of the current build (and,
/// for `WarningCountIncreaseOverall`, the previous build) and returns its
/// `warranted_result` when the observed value is strictly above the configured
/// threshold, `SUCCESS` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    RedAlerts {
        #[serde(default = "ConfigHelper::default_alert_limit")]
        alert_limit: i64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    YellowAlerts {
        #[serde(default = "ConfigHelper::default_alert_limit")]
        alert_limit: i64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    WarningCountIncreaseNewOnly {
        #[serde(default = "ConfigHelper::default_percentage")]
        percentage: f64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    WarningCountIncreaseSpecifiedScoreAndHigher {
        #[serde(default = "ConfigHelper::default_rank_of_warnings")]
        rank_of_warnings: i64,
        #[serde(default = "ConfigHelper::default_percentage")]
        warning_percentage: f64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    WarningCountAbsoluteSpecifiedScoreAndHigher {
        #[serde(default = "ConfigHelper::default_rank_of_warnings")]
        rank_of_warnings: i64,
        #[serde(default = "ConfigHelper::default_warning_count_threshold")]
        warning_count_threshold: i64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    WarningCountIncreaseOverall {
        #[serde(default = "ConfigHelper::default_percentage")]
        percentage: f64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
    CyclomaticComplexity {
        #[serde(default = "ConfigHelper::default_max_cyclomatic_complexity")]
        max_cyclomatic_complexity: i64,
        #[serde(default = "ConfigHelper::default_warranted_result")]
        warranted_result: BuildResult,
    },
}

impl Condition {
    pub fn name(&self) -> &'static str {
        match self {
            Condition::RedAlerts { .. } => "Red alerts",
            Condition::YellowAlerts { .. } => "Yellow alerts",
            Condition::WarningCountIncreaseNewOnly { .. } => "Warning count increase: new only",
            Condition::WarningCountIncreaseSpecifiedScoreAndHigher { .. } => "Warning count increase: specified score and higher",
            Condition::WarningCountAbsoluteSpecifiedScoreAndHigher { .. } => "Warning count absolute: specified score and higher",
            Condition::WarningCountIncreaseOverall { .. } => "Warning count increase: overall",
            Condition::CyclomaticComplexity { .. } => "Cyclomatic complexity",
        }
    }

    /// Evaluates the rule. Missing current data is not an error and yields
    /// `SUCCESS`; an `Err` means the data that is present is inconsistent.
    pub fn evaluate(&self, current: Option<&AnalysisData>, previous: Option<&AnalysisData>) -> GateResult<ConditionEvaluation> {
        let Some(current) = current else {
            return Ok(ConditionEvaluation::success(CURRENT_BUILD_DATA_NOT_AVAILABLE));
        };

        let evaluation = match self {
            Condition::RedAlerts { alert_limit, warranted_result } => {
                Self::evaluate_alert_limit(current, AlertColor::Red, *alert_limit, *warranted_result)
            }
            Condition::YellowAlerts { alert_limit, warranted_result } => {
                Self::evaluate_alert_limit(current, AlertColor::Yellow, *alert_limit, *warranted_result)
            }
            Condition::WarningCountIncreaseNewOnly { percentage, warranted_result } => {
                let active = current.analysis_active_warnings.warning_count();
                let new = current.analysis_new_warnings.warning_count();
                let observed = percentage_of(new, active);
                let description = format!(
                    "{} {:.2}% new warnings ({:.2}%, {} out of {})",
                    comparison_word(observed, *percentage), percentage, observed, new, active
                );
                Self::verdict(observed > *percentage, *warranted_result, description)
            }
            Condition::WarningCountIncreaseSpecifiedScoreAndHigher { rank_of_warnings, warning_percentage, warranted_result } => {
                let analysis = &current.analysis_active_warnings;
                let total = analysis.warning_count();
                let severe = analysis.count_warnings_with_score_above(*rank_of_warnings);
                let observed = percentage_of(severe, total);
                let description = format!(
                    "{} {:.2}% warnings with score more than {} ({:.2}%, {} out of {})",
                    comparison_word(observed, *warning_percentage), warning_percentage, rank_of_warnings, observed, severe, total
                );
                Self::verdict(observed > *warning_percentage, *warranted_result, description)
            }
            Condition::WarningCountAbsoluteSpecifiedScoreAndHigher { rank_of_warnings, warning_count_threshold, warranted_result } => {
                let count = current.analysis_active_warnings.count_warnings_with_score_at_least(*rank_of_warnings);
                let exceeded = as_i64(count) > *warning_count_threshold;
                let description = format!(
                    "{} {} warnings with score {} and higher (count={})",
                    if exceeded { "More than" } else { "At most" }, warning_count_threshold, rank_of_warnings, count
                );
                Self::verdict(exceeded, *warranted_result, description)
            }
            Condition::WarningCountIncreaseOverall { percentage, warranted_result } => {
                let Some(previous) = previous else {
                    return Ok(ConditionEvaluation::success(PREVIOUS_BUILD_DATA_NOT_AVAILABLE));
                };
                let now = current.analysis_active_warnings.warning_count();
                let before = previous.analysis_active_warnings.warning_count();
                let observed = if before == 0 {
                    0.0
                } else {
                    (now as f64 - before as f64) * 100.0 / before as f64
                };
                let description = format!(
                    "{} {:.2}% increase in warnings ({:.2}%, {} now, {} before)",
                    comparison_word(observed, *percentage), percentage, observed, now, before
                );
                Self::verdict(observed > *percentage, *warranted_result, description)
            }
            Condition::CyclomaticComplexity { max_cyclomatic_complexity, warranted_result } => {
                let procedure = current.procedures
                    .procedure_with_max_cyclomatic_complexity()
                    .ok_or_else(|| GateError::data_unavailable(
                        "Procedure with max cyclomatic complexity",
                        "the hub returned no procedure metrics for this analysis",
                    ))?;
                let complexity = i64::from(procedure.cyclomatic_complexity);
                let description = format!(
                    "threshold={}, complexity={} (procedure: '{}')",
                    max_cyclomatic_complexity, complexity, procedure.procedure
                );
                Self::verdict(complexity > *max_cyclomatic_complexity, *warranted_result, description)
            }
        };

        Ok(evaluation)
    }

    /// Field-level validation; `index` is the condition's position in the config.
    pub fn validate(&self, index: usize) -> Vec<FieldError> {
        let field = |name: &str| format!("conditions[{}].{}", index, name);
        let mut errors = Vec::new();

        match self {
            Condition::RedAlerts { alert_limit, .. } | Condition::YellowAlerts { alert_limit, .. } => {
                check_non_negative(&mut errors, &field("alert_limit"), *alert_limit);
            }
            Condition::WarningCountIncreaseNewOnly { percentage, .. }
            | Condition::WarningCountIncreaseOverall { percentage, .. } => {
                check_percentage(&mut errors, &field("percentage"), *percentage);
            }
            Condition::WarningCountIncreaseSpecifiedScoreAndHigher { rank_of_warnings, warning_percentage, .. } => {
                check_non_negative(&mut errors, &field("rank_of_warnings"), *rank_of_warnings);
                check_percentage(&mut errors, &field("warning_percentage"), *warning_percentage);
            }
            Condition::WarningCountAbsoluteSpecifiedScoreAndHigher { rank_of_warnings, warning_count_threshold, .. } => {
                check_non_negative(&mut errors, &field("rank_of_warnings"), *rank_of_warnings);
                check_non_negative(&mut errors, &field("warning_count_threshold"), *warning_count_threshold);
            }
            Condition::CyclomaticComplexity { max_cyclomatic_complexity, .. } => {
                check_non_negative(&mut errors, &field("max_cyclomatic_complexity"), *max_cyclomatic_complexity);
            }
        }

        errors
    }

    fn evaluate_alert_limit(current: &AnalysisData, color: AlertColor, alert_limit: i64, warranted_result: BuildResult) -> ConditionEvaluation {
        let count = current.analysis_active_warnings.number_of_alerts(color);
        let description = format!("threshold={}, count={}", alert_limit, count);
        Self::verdict(as_i64(count) > alert_limit, warranted_result, description)
    }

    fn verdict(triggered: bool, warranted_result: BuildResult, description: String) -> ConditionEvaluation {
        if triggered {
            ConditionEvaluation::new(warranted_result, description)
        } else {
            ConditionEvaluation::new(BuildResult::Success, description)
        }
    }
}

/// `part * 100 / whole`, with an empty whole counting as 0%.
pub fn percentage_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

fn comparison_word(observed: f64, threshold: f64) -> &'static str {
    if observed > threshold { "More than" } else { "At most" }
}

fn as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn check_non_negative(errors: &mut Vec<FieldError>, field: &str, value: i64) {
    if value < 0 {
        errors.push(FieldError::new(field, "Cannot be a negative number"));
    }
}

fn check_percentage(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if !value.is_finite() {
        errors.push(FieldError::new(field, "Not a valid decimal number"));
    } else if value < 0.0 {
        errors.push(FieldError::new(field, "The provided value must be zero or greater"));
    }
}
