pub mod alert;
pub mod analysis_data;
pub mod analysis_snapshot;
pub mod metrics_snapshot;
pub mod procedure_metric;
pub mod procedures_snapshot;
pub mod warning;
