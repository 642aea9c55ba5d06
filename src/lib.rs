//! Folds CodeSonar hub analysis results into a CI build status.
//!
//! A build evaluation locates the hub analysis for the build, fetches its
//! warnings, metrics and procedures, runs the configured [`enums::condition::Condition`]s
//! over that data and reports the most severe verdict.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
