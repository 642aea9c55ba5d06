use std::collections::BTreeMap;
use serde::Deserialize;
use crate::structs::analysis::metrics_snapshot::MetricsSnapshot;
use crate::structs::hub::metric_value::MetricValue;

/// `metrics/<id>.xml` response.
#[derive(Debug, Deserialize, Default)]
pub struct MetricsResponse {
    #[serde(rename = "metric", default)]
    pub metrics: Vec<MetricValue>,
}

impl MetricsResponse {
    pub fn into_snapshot(self, analysis_id: &str) -> MetricsSnapshot {
        let metrics: BTreeMap<String, f64> = self.metrics
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        MetricsSnapshot::new(analysis_id, metrics)
    }
}
