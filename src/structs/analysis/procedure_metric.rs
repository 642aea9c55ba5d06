use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureMetric {
    pub procedure: String,
    pub cyclomatic_complexity: u32,
}

impl ProcedureMetric {
    pub fn new(procedure: &str, cyclomatic_complexity: u32) -> Self {
        Self {
            procedure: procedure.to_string(),
            cyclomatic_complexity,
        }
    }
}
