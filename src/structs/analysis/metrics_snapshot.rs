use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Named analysis-level metrics, keyed by metric name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub analysis_id: String,
    pub metrics: BTreeMap<String, f64>,
}

impl MetricsSnapshot {
    pub fn new(analysis_id: &str, metrics: BTreeMap<String, f64>) -> Self {
        Self {
            analysis_id: analysis_id.to_string(),
            metrics,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}
