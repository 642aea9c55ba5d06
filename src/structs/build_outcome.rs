use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::build_result::BuildResult;
use crate::structs::analysis::analysis_data::AnalysisData;
use crate::structs::condition_verdict::ConditionVerdict;

/// Everything one evaluation produced. Saved next to the build and read back
/// as the baseline for the following build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub hub_base_url: String,
    pub analysis_url: String,
    pub data: AnalysisData,
    pub verdicts: Vec<ConditionVerdict>,
    pub result: BuildResult,
}

impl BuildOutcome {
    pub fn new(hub_base_url: &str, analysis_url: &str, data: AnalysisData) -> Self {
        Self {
            evaluation_id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            hub_base_url: hub_base_url.to_string(),
            analysis_url: analysis_url.to_string(),
            data,
            verdicts: Vec::new(),
            result: BuildResult::Success,
        }
    }

    /// Appends a verdict and folds its result into the aggregate.
    pub fn record(&mut self, verdict: ConditionVerdict) {
        self.result = self.result.combine(verdict.result);
        self.verdicts.push(verdict);
    }

    pub fn condition_names_and_results(&self) -> Vec<(String, BuildResult)> {
        self.verdicts
            .iter()
            .map(|v| (v.condition_name.clone(), v.result))
            .collect()
    }
}
