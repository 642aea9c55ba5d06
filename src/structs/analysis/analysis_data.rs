use serde::{Deserialize, Serialize};
use crate::structs::analysis::analysis_snapshot::AnalysisSnapshot;
use crate::structs::analysis::metrics_snapshot::MetricsSnapshot;
use crate::structs::analysis::procedures_snapshot::ProceduresSnapshot;

/// Everything fetched from the hub for one build. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub analysis_active_warnings: AnalysisSnapshot,
    pub analysis_new_warnings: AnalysisSnapshot,
    pub metrics: MetricsSnapshot,
    pub procedures: ProceduresSnapshot,
}

impl AnalysisData {
    pub fn analysis_id(&self) -> &str {
        &self.analysis_active_warnings.analysis_id
    }
}
