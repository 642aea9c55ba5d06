use serde::Deserialize;

/// `<metric name="...">value</metric>`
#[derive(Debug, Deserialize, Clone)]
pub struct MetricValue {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "$text")]
    pub value: f64,
}
