pub mod analysis_response;
pub mod metric_value;
pub mod metrics_response;
pub mod procedures_response;
pub mod projects;
