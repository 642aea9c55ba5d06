pub mod analysis;
pub mod build_outcome;
pub mod cli;
pub mod condition_evaluation;
pub mod condition_verdict;
pub mod config;
pub mod field_error;
pub mod hub;
pub mod hub_settings;
pub mod validation_result;
