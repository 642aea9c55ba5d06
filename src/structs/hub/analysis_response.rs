use serde::Deserialize;
use crate::structs::analysis::alert::Alert;
use crate::structs::analysis::analysis_snapshot::AnalysisSnapshot;
use crate::structs::analysis::warning::Warning;

/// `<analysis>` response for one visibility filter.
#[derive(Debug, Deserialize, Default)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analysis_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "alert", default)]
    pub alerts: Vec<Alert>,

    #[serde(rename = "warning", default)]
    pub warnings: Vec<WarningRow>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarningRow {
    pub id: String,

    pub score: u32,

    #[serde(rename = "class", default)]
    pub warning_class: String,

    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub procedure: String,
}

impl From<WarningRow> for Warning {
    fn from(row: WarningRow) -> Self {
        Self {
            id: row.id,
            score: row.score,
            warning_class: row.warning_class,
            file: row.file,
            procedure: row.procedure,
        }
    }
}

impl AnalysisResponse {
    pub fn into_snapshot(self) -> AnalysisSnapshot {
        let warnings = self.warnings.into_iter().map(Warning::from).collect();
        let mut snapshot = AnalysisSnapshot::new(&self.analysis_id, warnings).with_alerts(self.alerts);
        snapshot.name = self.name;
        snapshot
    }
}
