pub mod alert_color;
pub mod build_result;
pub mod commands;
pub mod condition;
pub mod pipeline_stage;
pub mod visibility_filter;
