use serde::{Deserialize, Serialize};
use crate::structs::analysis::procedure_metric::ProcedureMetric;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceduresSnapshot {
    pub analysis_id: String,
    pub procedures: Vec<ProcedureMetric>,
}

impl ProceduresSnapshot {
    pub fn new(analysis_id: &str, procedures: Vec<ProcedureMetric>) -> Self {
        Self {
            analysis_id: analysis_id.to_string(),
            procedures,
        }
    }

    /// `None` only when there are no procedures. Ties keep the first procedure.
    pub fn procedure_with_max_cyclomatic_complexity(&self) -> Option<&ProcedureMetric> {
        self.procedures
            .iter()
            .reduce(|best, p| if p.cyclomatic_complexity > best.cyclomatic_complexity { p } else { best })
    }
}
