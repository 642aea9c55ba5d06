use crate::enums::build_result::BuildResult;
use crate::enums::condition::Condition;
use crate::errors::GateError;
use crate::structs::analysis::analysis_data::AnalysisData;
use crate::structs::build_outcome::BuildOutcome;
use crate::structs::condition_verdict::ConditionVerdict;

/// Runs the configured conditions in order. A condition error never aborts
/// the evaluation: missing derived data fails that condition, anything else
/// is reported as `SUCCESS` with the error text.
pub struct ConditionEvaluator<'a> {
    conditions: &'a [Condition],
}

impl<'a> ConditionEvaluator<'a> {
    pub fn new(conditions: &'a [Condition]) -> Self {
        Self { conditions }
    }

    pub fn evaluate_condition(condition: &Condition, current: Option<&AnalysisData>, previous: Option<&AnalysisData>) -> ConditionVerdict {
        match condition.evaluate(current, previous) {
            Ok(evaluation) => ConditionVerdict::new(condition.name(), evaluation.result, evaluation.description),
            Err(e) => Self::error_verdict(condition.name(), &e),
        }
    }

    fn error_verdict(condition_name: &str, error: &GateError) -> ConditionVerdict {
        log::warn!("⚠️ Condition '{}' could not be evaluated: {}", condition_name, error);
        let result = match error {
            GateError::DataUnavailable { .. } => BuildResult::Failure,
            _ => BuildResult::Success,
        };
        ConditionVerdict::new(condition_name, result, format!("Condition could not be evaluated: {}", error))
    }

    pub fn evaluate(&self, current: Option<&AnalysisData>, previous: Option<&AnalysisData>) -> Vec<ConditionVerdict> {
        self.conditions
            .iter()
            .map(|condition| Self::evaluate_condition(condition, current, previous))
            .collect()
    }

    /// Most severe verdict; `SUCCESS` when there are none.
    pub fn aggregate(verdicts: &[ConditionVerdict]) -> BuildResult {
        verdicts
            .iter()
            .map(|v| v.result)
            .max()
            .unwrap_or(BuildResult::Success)
    }

    /// Evaluates against `outcome.data` and records each verdict on the outcome.
    pub fn apply(&self, outcome: &mut BuildOutcome, previous: Option<&BuildOutcome>) {
        let verdicts = self.evaluate(Some(&outcome.data), previous.map(|p| &p.data));
        for verdict in verdicts {
            outcome.record(verdict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::analysis::analysis_snapshot::AnalysisSnapshot;
    use crate::structs::analysis::metrics_snapshot::MetricsSnapshot;
    use crate::structs::analysis::procedures_snapshot::ProceduresSnapshot;
    use crate::structs::analysis::warning::Warning;

    fn data(active: usize, new: usize) -> AnalysisData {
        let warnings = |n: usize| -> Vec<Warning> { (0..n).map(|i| Warning::new(&i.to_string(), 40)).collect() };
        AnalysisData {
            analysis_active_warnings: AnalysisSnapshot::new("9", warnings(active)),
            analysis_new_warnings: AnalysisSnapshot::new("9", warnings(new)),
            metrics: MetricsSnapshot::default(),
            procedures: ProceduresSnapshot::default(),
        }
    }

    #[test]
    fn missing_procedures_fail_only_that_condition() {
        let conditions = vec![
            Condition::CyclomaticComplexity { max_cyclomatic_complexity: 10, warranted_result: BuildResult::Failure },
            Condition::WarningCountIncreaseNewOnly { percentage: 5.0, warranted_result: BuildResult::Unstable },
        ];
        let current = data(40, 4);
        let verdicts = ConditionEvaluator::new(&conditions).evaluate(Some(&current), None);

        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].condition_name, "Cyclomatic complexity");
        assert_eq!(verdicts[0].result, BuildResult::Failure);
        assert!(verdicts[0].description.starts_with("Condition could not be evaluated"));
        assert_eq!(verdicts[1].result, BuildResult::Unstable);
        assert_eq!(ConditionEvaluator::aggregate(&verdicts), BuildResult::Failure);
    }

    #[test]
    fn other_condition_errors_degrade_to_success() {
        let error = GateError::network_error("GET", None, Some(502), "Bad Gateway");
        let verdict = ConditionEvaluator::error_verdict("Red alerts", &error);

        assert_eq!(verdict.result, BuildResult::Success);
        assert!(verdict.description.contains("Bad Gateway"));
    }

    #[test]
    fn empty_condition_list_aggregates_to_success() {
        let verdicts = ConditionEvaluator::new(&[]).evaluate(Some(&data(3, 3)), None);
        assert!(verdicts.is_empty());
        assert_eq!(ConditionEvaluator::aggregate(&verdicts), BuildResult::Success);
    }

    #[test]
    fn apply_records_verdicts_in_configured_order() {
        let conditions = vec![
            Condition::RedAlerts { alert_limit: 0, warranted_result: BuildResult::Failure },
            Condition::WarningCountIncreaseNewOnly { percentage: 1.0, warranted_result: BuildResult::Failure },
            Condition::YellowAlerts { alert_limit: 0, warranted_result: BuildResult::Unstable },
        ];
        let mut outcome = BuildOutcome::new("http://hub.local:7340/", "http://hub.local:7340/analysis/9.xml", data(10, 5));
        ConditionEvaluator::new(&conditions).apply(&mut outcome, None);

        let names: Vec<String> = outcome.condition_names_and_results().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Red alerts", "Warning count increase: new only", "Yellow alerts"]);
        assert_eq!(outcome.result, BuildResult::Failure);
    }
}
