use codesonar_gate::enums::build_result::BuildResult;
use codesonar_gate::enums::condition::Condition;
use codesonar_gate::services::condition_evaluator::ConditionEvaluator;
use codesonar_gate::structs::analysis::analysis_data::AnalysisData;
use codesonar_gate::structs::analysis::analysis_snapshot::AnalysisSnapshot;
use codesonar_gate::structs::analysis::metrics_snapshot::MetricsSnapshot;
use codesonar_gate::structs::analysis::procedure_metric::ProcedureMetric;
use codesonar_gate::structs::analysis::procedures_snapshot::ProceduresSnapshot;
use codesonar_gate::structs::analysis::warning::Warning;
use codesonar_gate::structs::condition_verdict::ConditionVerdict;
use proptest::prelude::*;

fn warnings(scores: &[u32]) -> Vec<Warning> {
    scores.iter().enumerate().map(|(i, s)| Warning::new(&i.to_string(), *s)).collect()
}

fn data(active_scores: &[u32], new_count: usize, complexities: &[u32]) -> AnalysisData {
    let procedures = complexities
        .iter()
        .enumerate()
        .map(|(i, c)| ProcedureMetric::new(&format!("proc_{}", i), *c))
        .collect();
    AnalysisData {
        analysis_active_warnings: AnalysisSnapshot::new("1", warnings(active_scores)),
        analysis_new_warnings: AnalysisSnapshot::new("1", warnings(&active_scores[..new_count])),
        metrics: MetricsSnapshot::default(),
        procedures: ProceduresSnapshot::new("1", procedures),
    }
}

fn build_result() -> impl Strategy<Value = BuildResult> {
    prop_oneof![
        Just(BuildResult::Success),
        Just(BuildResult::Unstable),
        Just(BuildResult::Failure),
    ]
}

proptest! {
    #[test]
    fn new_only_triggers_exactly_above_threshold(
        active in 0usize..200,
        new_fraction in 0.0f64..=1.0,
        threshold in 0u32..100,
    ) {
        let new = ((active as f64) * new_fraction).floor() as usize;
        let scores = vec![10u32; active];
        let condition = Condition::WarningCountIncreaseNewOnly {
            percentage: f64::from(threshold),
            warranted_result: BuildResult::Unstable,
        };

        let verdict = ConditionEvaluator::evaluate_condition(&condition, Some(&data(&scores, new, &[1])), None);

        let triggered = active > 0 && (new as f64) * 100.0 / (active as f64) > f64::from(threshold);
        let expected = if triggered { BuildResult::Unstable } else { BuildResult::Success };
        prop_assert_eq!(verdict.result, expected);
    }

    #[test]
    fn score_percentage_triggers_exactly_above_threshold(
        scores in prop::collection::vec(0u32..100, 0..80),
        rank in 0i64..100,
        threshold in 0u32..100,
    ) {
        let condition = Condition::WarningCountIncreaseSpecifiedScoreAndHigher {
            rank_of_warnings: rank,
            warning_percentage: f64::from(threshold),
            warranted_result: BuildResult::Unstable,
        };

        let verdict = ConditionEvaluator::evaluate_condition(&condition, Some(&data(&scores, 0, &[1])), None);

        let total = scores.len();
        let above = scores.iter().filter(|s| i64::from(**s) > rank).count();
        let triggered = total > 0 && (above as f64) * 100.0 / (total as f64) > f64::from(threshold);
        let expected = if triggered { BuildResult::Unstable } else { BuildResult::Success };
        prop_assert_eq!(verdict.result, expected);
    }

    #[test]
    fn absolute_score_count_includes_the_rank(
        scores in prop::collection::vec(0u32..100, 0..60),
        rank in 0i64..100,
        threshold in 0i64..30,
    ) {
        let condition = Condition::WarningCountAbsoluteSpecifiedScoreAndHigher {
            rank_of_warnings: rank,
            warning_count_threshold: threshold,
            warranted_result: BuildResult::Failure,
        };

        let verdict = ConditionEvaluator::evaluate_condition(&condition, Some(&data(&scores, 0, &[1])), None);

        let count = scores.iter().filter(|s| i64::from(**s) >= rank).count() as i64;
        let expected = if count > threshold { BuildResult::Failure } else { BuildResult::Success };
        prop_assert_eq!(verdict.result, expected);
    }

    #[test]
    fn cyclomatic_complexity_compares_the_maximum(
        complexities in prop::collection::vec(0u32..80, 1..40),
        limit in 0i64..80,
    ) {
        let condition = Condition::CyclomaticComplexity {
            max_cyclomatic_complexity: limit,
            warranted_result: BuildResult::Unstable,
        };

        let verdict = ConditionEvaluator::evaluate_condition(&condition, Some(&data(&[], 0, &complexities)), None);

        let max = complexities.iter().copied().max().map(i64::from).unwrap_or(0);
        let expected = if max > limit { BuildResult::Unstable } else { BuildResult::Success };
        prop_assert_eq!(verdict.result, expected);
    }

    #[test]
    fn aggregate_is_the_most_severe_verdict(results in prop::collection::vec(build_result(), 0..10)) {
        let verdicts: Vec<ConditionVerdict> = results
            .iter()
            .map(|r| ConditionVerdict::new("any", *r, String::new()))
            .collect();

        let expected = results.iter().copied().max().unwrap_or(BuildResult::Success);
        prop_assert_eq!(ConditionEvaluator::aggregate(&verdicts), expected);
    }

    #[test]
    fn verdicts_never_exceed_the_warranted_result(
        scores in prop::collection::vec(0u32..100, 0..40),
        warranted in build_result(),
    ) {
        let conditions = vec![
            Condition::RedAlerts { alert_limit: 0, warranted_result: warranted },
            Condition::WarningCountIncreaseSpecifiedScoreAndHigher {
                rank_of_warnings: 50,
                warning_percentage: 0.0,
                warranted_result: warranted,
            },
        ];
        let new_count = scores.len() / 2;

        let verdicts = ConditionEvaluator::new(&conditions).evaluate(Some(&data(&scores, new_count, &[1])), None);

        prop_assert_eq!(verdicts.len(), 2);
        for verdict in verdicts {
            prop_assert!(verdict.result == BuildResult::Success || verdict.result == warranted);
        }
    }
}
