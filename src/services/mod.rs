pub mod analysis_data_service;
pub mod analysis_locator;
pub mod condition_evaluator;
pub mod evaluation_pipeline;
pub mod http_service;
pub mod outcome_store;
pub mod xml_serialization_service;
