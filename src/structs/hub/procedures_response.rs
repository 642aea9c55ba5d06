use serde::Deserialize;
use crate::config::constants::CYCLOMATIC_COMPLEXITY_METRIC;
use crate::structs::analysis::procedure_metric::ProcedureMetric;
use crate::structs::analysis::procedures_snapshot::ProceduresSnapshot;
use crate::structs::hub::metric_value::MetricValue;

/// `analysis/<id>-procedures.xml` response.
#[derive(Debug, Deserialize, Default)]
pub struct ProceduresResponse {
    #[serde(rename = "procedure_row", default)]
    pub rows: Vec<ProcedureRow>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProcedureRow {
    pub procedure: String,

    #[serde(rename = "metric", default)]
    pub metrics: Vec<MetricValue>,
}

impl ProcedureRow {
    fn cyclomatic_complexity(&self) -> Option<u32> {
        self.metrics
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(CYCLOMATIC_COMPLEXITY_METRIC))
            .map(|m| m.value.max(0.0).round() as u32)
    }
}

impl ProceduresResponse {
    pub fn into_snapshot(self, analysis_id: &str) -> ProceduresSnapshot {
        let procedures = self.rows
            .into_iter()
            .filter_map(|row| match row.cyclomatic_complexity() {
                Some(complexity) => Some(ProcedureMetric::new(&row.procedure, complexity)),
                None => {
                    log::debug!("Procedure '{}' has no cyclomatic complexity metric, skipping", row.procedure);
                    None
                }
            })
            .collect();
        ProceduresSnapshot::new(analysis_id, procedures)
    }
}
