use serde::{Deserialize, Serialize};
use crate::enums::build_result::BuildResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionVerdict {
    pub condition_name: String,
    pub result: BuildResult,
    pub description: String,
}

impl ConditionVerdict {
    pub fn new(condition_name: &str, result: BuildResult, description: String) -> Self {
        Self {
            condition_name: condition_name.to_string(),
            result,
            description,
        }
    }
}
